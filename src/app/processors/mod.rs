//! Polymorphe Shape-Prozessoren und ihre Registry.
//!
//! Prozessoren werden einmalig von der Composition Root registriert
//! und filtern selbst nach Formklasse und aktivem Generator-Modus —
//! der Dispatcher kennt ihre Identität nicht und erzwingt keine
//! Exklusivität: mehrere Prozessoren dürfen auf dasselbe Event
//! reagieren.

mod debug_capture;
mod door;
mod mountain;
mod tree;
mod wall;

pub use debug_capture::DebugCaptureProcessor;
pub use door::{DoorPlan, DoorProcessor, ViewBasis};
pub use mountain::{MountainPlan, MountainProcessor};
pub use tree::{TreePlacement, TreeProcessor};
pub use wall::{WallPlan, WallProcessor};

use crate::app::state::{GeneratorMode, SketchMode};
use crate::core::ShapeEvent;

/// Kontext eines Dispatch-Laufs: aktive Modi zur Selbst-Filterung.
#[derive(Debug, Clone, Copy)]
pub struct ProcessContext {
    /// Aktiver Pipeline-Modus
    pub mode: SketchMode,
    /// Aktiver Generator-Modus
    pub generator_mode: GeneratorMode,
    /// Externes Signal: gerade Striche bevorzugen
    pub straight_strokes: bool,
}

/// Kontrakt aller Shape-Prozessoren.
///
/// `process` erhält das Event nur als Referenz und darf es nicht
/// mutieren. Prozessoren müssen idempotent gegenüber Events sein, die
/// sie nicht betreffen (Selbst-Filterung nach Klasse und Modus).
pub trait ShapeProcessor {
    /// Anzeigename für Logging und Fehlerisolation.
    fn name(&self) -> &str;
    /// Verarbeitet ein Event; Fehler werden vom Dispatcher isoliert.
    fn process(&mut self, event: &ShapeEvent, ctx: &ProcessContext) -> anyhow::Result<()>;
}

/// Registry der Prozessoren in Registrierungs-Reihenfolge.
///
/// Die Mitgliedschaft ändert sich während einer Zeichen-Sitzung nicht.
#[derive(Default)]
pub struct ProcessorRegistry {
    processors: Vec<Box<dyn ShapeProcessor>>,
}

impl ProcessorRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self {
            processors: Vec::new(),
        }
    }

    /// Registriert einen Prozessor am Ende der Auslieferungs-Reihenfolge.
    pub fn register(&mut self, processor: Box<dyn ShapeProcessor>) {
        log::info!("Prozessor '{}' registriert", processor.name());
        self.processors.push(processor);
    }

    /// Anzahl registrierter Prozessoren.
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// `true` wenn keine Prozessoren registriert sind.
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn ShapeProcessor>> {
        self.processors.iter_mut()
    }
}

/// Direkt abonnierter Beobachter — wird nach allen Prozessoren bedient.
pub trait ShapeEventListener {
    /// Wird für jedes ausgelieferte Event genau einmal aufgerufen.
    fn on_shape_drawn(&mut self, event: &ShapeEvent);
}
