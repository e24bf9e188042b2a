//! Use-Case: fertigen Strich klassifizieren und als Event verpacken.

use glam::Vec3;

use crate::app::SketchState;
use crate::core::classifier::ClassifyPolicy;
use crate::core::{is_stroke_closed, RectFitStrategy, ShapeClassifier, ShapeEvent, ShapeKind};

/// Führt Closure-Erkennung, Klassifikation und Rechteck-Fitting aus.
///
/// Der Closure-Status wird genau einmal hier berechnet und danach nie
/// neu ausgewertet. `None` bedeutet: die Policy hat den Strich verworfen
/// (offene Form bei verbotenen offenen Formen) — es entsteht kein Event.
pub fn run(
    state: &SketchState,
    stroke_id: u64,
    points: Vec<Vec3>,
    fitter: &dyn RectFitStrategy,
) -> Option<ShapeEvent> {
    let options = &state.options;
    let is_closed = is_stroke_closed(&points, options.closure_threshold);

    let classifier = ShapeClassifier::from_options(options);
    let policy = ClassifyPolicy {
        allow_open_shapes: options.allow_open_shapes,
        prefer_straight: state.straight_strokes,
    };
    let Some(kind) = classifier.classify(&points, is_closed, policy) else {
        log::debug!("Strich {} verworfen (offene Form nicht erlaubt)", stroke_id);
        return None;
    };

    let idealized_corners = (kind == ShapeKind::Rectangle).then(|| fitter.fit(&points));

    log::info!(
        "Strich {}: {:?} ({} Punkte, geschlossen: {})",
        stroke_id,
        kind,
        points.len(),
        is_closed
    );

    Some(ShapeEvent {
        stroke_id,
        points,
        kind,
        is_closed,
        idealized_corners,
        suggested_height: options.suggested_mountain_height,
    })
}
