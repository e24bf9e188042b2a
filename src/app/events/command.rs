use glam::Vec3;

use crate::app::state::{GeneratorMode, SketchMode};
use crate::app::use_cases::two_hand::RectangleStyle;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum SketchCommand {
    /// Neuen Strich beginnen (idempotent, wenn bereits einer offen ist)
    StartStroke { entity_id: u64, position: Vec3 },
    /// Punkt an den offenen Strich anhängen (Mindestabstand-Dezimierung)
    AppendStrokePoint { entity_id: u64, position: Vec3 },
    /// Strich abschließen und durch die Klassifikations-Pipeline schicken
    FinishStroke { entity_id: u64 },
    /// Punkt anhängen und neues Segment an den Lösch-Kollaborateur leiten
    AppendDeleteSegment { entity_id: u64, position: Vec3 },
    /// Lösch-Bereich abschließen und den offenen Strich verwerfen
    FinalizeDeleteArea { entity_id: u64 },
    /// Pipeline-Modus setzen
    SetMode { mode: SketchMode },
    /// Generator-Modus setzen (genau einer, nie mehrere)
    SetGeneratorMode { mode: GeneratorMode },
    /// Gerade-Striche-Präferenz setzen
    SetStraightStrokes { enabled: bool },
    /// Beidhändigen Rechteck-Zug kombinieren und als Event verteilen
    BuildTwoHandRectangle {
        left: Vec<Vec3>,
        right: Vec<Vec3>,
        style: RectangleStyle,
    },
}
