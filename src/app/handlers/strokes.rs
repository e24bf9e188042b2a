//! Handler für den Strich-Lebenszyklus (Start / Anhängen / Abschluss).

use glam::Vec3;

use crate::app::SketchState;
use crate::core::{StrokeBuilder, MIN_PUBLISH_POINTS};

/// Beginnt einen neuen Strich, gesät mit der aktuellen Position.
/// No-op wenn bereits ein Strich offen ist.
pub fn start_stroke(state: &mut SketchState, entity_id: u64, position: Vec3) {
    let min_spacing = state.options.min_spacing;
    let Some(slot) = state.slots.get_mut(&entity_id) else {
        log::warn!("StartStroke für unbekanntes Werkzeug {} verworfen", entity_id);
        return;
    };
    if slot.open.is_some() {
        return; // idempotent: offener Strich läuft weiter
    }
    slot.open = Some(StrokeBuilder::new(position, min_spacing));
    log::debug!("Werkzeug {}: neuer Strich begonnen", entity_id);
}

/// Hängt einen Punkt an den offenen Strich an.
///
/// Gibt bei Aufnahme das neue Segment `(vorher, neu)` zurück — der
/// Lösch-Pfad leitet es direkt weiter.
pub fn append_point(state: &mut SketchState, entity_id: u64, position: Vec3) -> Option<(Vec3, Vec3)> {
    let slot = state.slots.get_mut(&entity_id)?;
    slot.open.as_mut()?.append(position)
}

/// Schließt den offenen Strich ab und friert die Punktfolge ein.
///
/// Striche mit weniger als 2 Punkten werden stillschweigend verworfen
/// (`None`) — das Werkzeug wurde innerhalb eines Ticks an- und wieder
/// abgeschaltet.
pub fn finish_stroke(state: &mut SketchState, entity_id: u64) -> Option<(u64, Vec<Vec3>)> {
    let slot = state.slots.get_mut(&entity_id)?;
    let builder = slot.open.take()?;
    let points = builder.finish();
    if points.len() < MIN_PUBLISH_POINTS {
        log::debug!(
            "Werkzeug {}: Strich mit {} Punkt(en) verworfen",
            entity_id,
            points.len()
        );
        return None;
    }
    let stroke_id = state.allocate_stroke_id();
    Some((stroke_id, points))
}

/// Verwirft den offenen Strich ohne Event (Lösch-Pfad).
pub fn discard_stroke(state: &mut SketchState, entity_id: u64) {
    if let Some(slot) = state.slots.get_mut(&entity_id) {
        slot.open = None;
    }
}
