//! Mapping von Host-Intents auf mutierende Pipeline-Commands.
//!
//! Hier sitzt das Mode Gate: abhängig vom aktiven Modus wird ein Tick
//! entweder auf den Klassifikations- oder den Lösch-Pfad gelenkt.
//! Ticks für unbekannte Werkzeuge werden pro Aufruf verworfen und
//! geloggt; der Pipeline-Zustand bleibt unberührt.

use super::state::SketchMode;
use super::{SketchCommand, SketchIntent, SketchState};

/// Übersetzt einen `SketchIntent` in eine Sequenz ausführbarer Commands.
pub fn map_intent_to_commands(state: &SketchState, intent: SketchIntent) -> Vec<SketchCommand> {
    match intent {
        SketchIntent::TickReported {
            entity_id,
            active,
            position,
        } => {
            let Some(slot) = state.slots.get(&entity_id) else {
                log::warn!("Tick für unbekanntes Werkzeug {} verworfen", entity_id);
                return Vec::new();
            };

            match (state.mode, active, slot.is_drawing()) {
                // Aktivierung: neuen Strich mit der aktuellen Position säen
                (_, true, false) => vec![SketchCommand::StartStroke {
                    entity_id,
                    position,
                }],
                (SketchMode::Normal, true, true) => vec![SketchCommand::AppendStrokePoint {
                    entity_id,
                    position,
                }],
                (SketchMode::Normal, false, true) => {
                    vec![SketchCommand::FinishStroke { entity_id }]
                }
                (SketchMode::Delete, true, true) => vec![SketchCommand::AppendDeleteSegment {
                    entity_id,
                    position,
                }],
                (SketchMode::Delete, false, true) => {
                    vec![SketchCommand::FinalizeDeleteArea { entity_id }]
                }
                // Inaktiv ohne offenen Strich: nichts zu tun
                (_, false, false) => Vec::new(),
            }
        }
        SketchIntent::ModeChangeRequested { mode } => vec![SketchCommand::SetMode { mode }],
        SketchIntent::GeneratorModeChangeRequested { mode } => {
            vec![SketchCommand::SetGeneratorMode { mode }]
        }
        SketchIntent::StraightStrokesToggled { enabled } => {
            vec![SketchCommand::SetStraightStrokes { enabled }]
        }
        SketchIntent::TwoHandStrokeFinished { left, right, style } => {
            vec![SketchCommand::BuildTwoHandRectangle { left, right, style }]
        }
    }
}
