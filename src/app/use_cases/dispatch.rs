//! Use-Case: Shape-Events an Prozessoren und Beobachter verteilen.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::app::processors::{ProcessContext, ProcessorRegistry, ShapeEventListener};
use crate::core::ShapeEvent;

/// Verteilt ein Event synchron in Registrierungs-Reihenfolge: erst an
/// alle Prozessoren, danach an die direkt abonnierten Beobachter.
///
/// Fire-and-forget: Ergebnisse werden weder gesammelt noch bewertet.
/// Fehler und Panics einzelner Prozessoren werden isoliert und geloggt,
/// die Auslieferung an die restlichen Empfänger läuft immer weiter.
pub fn dispatch(
    registry: &mut ProcessorRegistry,
    listeners: &mut [Box<dyn ShapeEventListener>],
    event: &ShapeEvent,
    ctx: &ProcessContext,
) {
    for processor in registry.iter_mut() {
        let name = processor.name().to_string();
        match catch_unwind(AssertUnwindSafe(|| processor.process(event, ctx))) {
            Ok(Ok(())) => {}
            Ok(Err(err)) => log::warn!("Prozessor '{}' meldet Fehler: {:#}", name, err),
            Err(_) => log::error!("Prozessor '{}' ist abgestürzt, Dispatch läuft weiter", name),
        }
    }
    for listener in listeners.iter_mut() {
        listener.on_shape_drawn(event);
    }
}
