//! Handler für Modus-Wechsel (Mode Gate und Generator-Auswahl).

use crate::app::state::{GeneratorMode, SketchMode};
use crate::app::SketchState;

/// Setzt den Pipeline-Modus und protokolliert den Wechsel.
pub fn set_mode(state: &mut SketchState, mode: SketchMode) {
    if state.mode != mode {
        log::info!("Pipeline-Modus: {:?} nach {:?}", state.mode, mode);
    }
    state.mode = mode;
}

/// Setzt den aktiven Generator (genau einer, nie mehrere).
pub fn set_generator_mode(state: &mut SketchState, mode: GeneratorMode) {
    if state.generator_mode != mode {
        log::info!("Generator-Modus: {:?} nach {:?}", state.generator_mode, mode);
    }
    state.generator_mode = mode;
}

/// Schaltet die Gerade-Striche-Präferenz.
pub fn set_straight_strokes(state: &mut SketchState, enabled: bool) {
    state.straight_strokes = enabled;
    log::info!("Gerade-Striche-Präferenz: {}", enabled);
}
