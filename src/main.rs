//! AirSketch Demo-Runner.
//!
//! Replayt einen aufgezeichneten Stift-Trace (JSON, erstes CLI-Argument)
//! durch die komplette Pipeline und protokolliert die erkannten Formen.
//! Ohne Argument läuft eine eingebaute Beispiel-Sitzung.

use std::sync::{Arc, Mutex};

use air_sketch::{
    load_sketch_trace, DebugCaptureProcessor, DoorProcessor, GeneratorMode, MountainProcessor,
    ProcessorRegistry, SketchController, SketchIntent, SketchOptions, SketchState,
    SpatialDeleteQueue, TreeProcessor, ViewBasis, ViewPlaneFitter, WallProcessor,
};
use anyhow::Result;
use glam::Vec3;

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("AirSketch v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = SketchOptions::load_from_file(&SketchOptions::config_path());
    let delete_corridor_radius = options.delete_corridor_radius;
    let smoothing_factor = options.smoothing_factor;

    let mut state = SketchState::new(options)?;

    // Prozessoren explizit registrieren — die Reihenfolge ist die
    // Auslieferungs-Reihenfolge, der Mitschnitt läuft als letzter.
    let tree_placements = Arc::new(Mutex::new(Vec::new()));
    let wall_plans = Arc::new(Mutex::new(Vec::new()));
    let mountain_plans = Arc::new(Mutex::new(Vec::new()));
    let door_plans = Arc::new(Mutex::new(Vec::new()));
    let view = ViewBasis {
        position: Vec3::new(0.0, 1.7, 5.0),
        up: Vec3::Y,
        right: Vec3::X,
    };

    let mut registry = ProcessorRegistry::new();
    registry.register(Box::new(TreeProcessor::new(Arc::clone(&tree_placements))));
    registry.register(Box::new(WallProcessor::new(
        Arc::clone(&wall_plans),
        smoothing_factor,
    )));
    registry.register(Box::new(MountainProcessor::new(Arc::clone(
        &mountain_plans,
    ))));
    registry.register(Box::new(DoorProcessor::new(Arc::clone(&door_plans), view)));
    let (capture, captured_events) = DebugCaptureProcessor::new();
    registry.register(Box::new(capture));

    let delete_queue = SpatialDeleteQueue::new(delete_corridor_radius);
    // Kamera-zugewandte Striche: Rechtecke in der Ansichts-Ebene einpassen
    let fitter = ViewPlaneFitter::new(Vec3::NEG_Z, view.up, view.right);
    let mut controller =
        SketchController::new(registry, Box::new(delete_queue), Box::new(fitter));

    match std::env::args().nth(1) {
        Some(path) => {
            let trace = load_sketch_trace(std::path::Path::new(&path))?;
            log::info!(
                "Replaye Trace mit {} Werkzeug(en) und {} Tick(s)",
                trace.entities.len(),
                trace.samples.len()
            );
            for entity_id in &trace.entities {
                state.register_entity(*entity_id)?;
            }
            for sample in &trace.samples {
                controller.handle_tick(&mut state, sample.entity_id, sample.active, sample.position)?;
            }
        }
        None => run_builtin_demo(&mut controller, &mut state)?,
    }

    let events = captured_events
        .lock()
        .map_err(|_| anyhow::anyhow!("Mitschnitt-Puffer vergiftet"))?;
    log::info!("Sitzung beendet: {} Event(s) ausgeliefert", events.len());
    for event in events.iter() {
        log::info!(
            "  Strich {}: {:?} ({} Punkte, geschlossen: {})",
            event.stroke_id,
            event.kind,
            event.points.len(),
            event.is_closed
        );
    }
    log::info!(
        "Pläne: {} Baum / {} Wand / {} Berg / {} Tür",
        tree_placements.lock().map(|p| p.len()).unwrap_or(0),
        wall_plans.lock().map(|p| p.len()).unwrap_or(0),
        mountain_plans.lock().map(|p| p.len()).unwrap_or(0),
        door_plans.lock().map(|p| p.len()).unwrap_or(0)
    );

    Ok(())
}

/// Eingebaute Beispiel-Sitzung: Quadrat, Dreieck (Baum-Modus) und
/// eine offene Linie (Berg-Modus).
fn run_builtin_demo(controller: &mut SketchController, state: &mut SketchState) -> Result<()> {
    const PEN: u64 = 1;
    state.register_entity(PEN)?;

    // Kamera-zugewandtes Quadrat
    draw_stroke(controller, state, PEN, &square_positions(40))?;

    // Dreieck im Baum-Modus
    controller.handle_intent(
        state,
        SketchIntent::GeneratorModeChangeRequested {
            mode: GeneratorMode::Tree,
        },
    )?;
    draw_stroke(controller, state, PEN, &triangle_positions(30))?;

    // Offene Linie im Berg-Modus
    controller.handle_intent(
        state,
        SketchIntent::GeneratorModeChangeRequested {
            mode: GeneratorMode::Mountain,
        },
    )?;
    let ridge: Vec<Vec3> = (0..12)
        .map(|i| Vec3::new(i as f32, (i as f32 * 0.8).sin() * 0.5, 0.0))
        .collect();
    draw_stroke(controller, state, PEN, &ridge)?;

    Ok(())
}

/// Spielt eine Punktfolge als Tick-Serie ein und deaktiviert das
/// Werkzeug am Ende.
fn draw_stroke(
    controller: &mut SketchController,
    state: &mut SketchState,
    entity_id: u64,
    positions: &[Vec3],
) -> Result<()> {
    for position in positions {
        controller.handle_tick(state, entity_id, true, *position)?;
    }
    let rest = positions.last().copied().unwrap_or(Vec3::ZERO);
    controller.handle_tick(state, entity_id, false, rest)
}

/// Quadrat mit Seitenlänge 2 in der XY-Ebene, Umlauf endet im Startpunkt.
fn square_positions(count: usize) -> Vec<Vec3> {
    let corners = [
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(-1.0, 1.0, 0.0),
    ];
    (0..count)
        .map(|k| {
            let s = k as f32 / (count - 1) as f32 * 8.0;
            let side = ((s / 2.0).floor() as usize).min(3);
            let t = (s - side as f32 * 2.0) / 2.0;
            corners[side].lerp(corners[(side + 1) % 4], t)
        })
        .collect()
}

/// Annähernd gleichseitiges Dreieck, Umlauf endet im Startpunkt.
fn triangle_positions(count: usize) -> Vec<Vec3> {
    let verts = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(2.0, 3.4, 0.0),
    ];
    let lens = [
        verts[0].distance(verts[1]),
        verts[1].distance(verts[2]),
        verts[2].distance(verts[0]),
    ];
    let perimeter: f32 = lens.iter().sum();
    (0..count)
        .map(|k| {
            let mut s = k as f32 / (count - 1) as f32 * perimeter;
            let mut side = 0;
            while side < 2 && s > lens[side] {
                s -= lens[side];
                side += 1;
            }
            verts[side].lerp(verts[(side + 1) % 3], (s / lens[side]).min(1.0))
        })
        .collect()
}
