use glam::Vec3;

use crate::app::state::{GeneratorMode, SketchMode};
use crate::app::use_cases::two_hand::RectangleStyle;

/// Intents sind Eingaben aus Host/System ohne direkte Mutationslogik.
///
/// Der Host ruft die Pipeline pro Tick kooperativ auf; es gibt keine
/// interne Zeitsteuerung und keine Annahme über die Tick-Rate.
#[derive(Debug, Clone)]
pub enum SketchIntent {
    /// Pro Tick gemeldeter Zustand eines getrackten Eingabe-Werkzeugs
    TickReported {
        entity_id: u64,
        active: bool,
        position: Vec3,
    },
    /// Pipeline-Modus wechseln (Zeichnen / Löschen)
    ModeChangeRequested { mode: SketchMode },
    /// Aktiven Generator wechseln (Baum / Wand / Berg)
    GeneratorModeChangeRequested { mode: GeneratorMode },
    /// Gerade-Striche-Präferenz umschalten (Bergrücken/Wand-Workflow)
    StraightStrokesToggled { enabled: bool },
    /// Beidhändiger Rechteck-Zug wurde abgeschlossen
    TwoHandStrokeFinished {
        left: Vec<Vec3>,
        right: Vec<Vec3>,
        style: RectangleStyle,
    },
}
