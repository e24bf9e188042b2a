//! Debug-Capture: zeichnet jedes ausgelieferte Event auf.
//!
//! Läuft unabhängig vom Generator-Modus immer mit und wird von der
//! Composition Root üblicherweise als letzter Prozessor registriert.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;

use super::{ProcessContext, ShapeProcessor};
use crate::core::ShapeEvent;

/// Standard-Kapazität des Ringpuffers.
const DEFAULT_CAPACITY: usize = 32;

/// Ringpuffer-Mitschnitt aller Events.
pub struct DebugCaptureProcessor {
    events: Arc<Mutex<VecDeque<ShapeEvent>>>,
    capacity: usize,
}

impl DebugCaptureProcessor {
    /// Erstellt den Prozessor und gibt den geteilten Puffer zurück,
    /// über den der Aufrufer den Mitschnitt ausliest.
    pub fn new() -> (Self, Arc<Mutex<VecDeque<ShapeEvent>>>) {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Wie `new`, mit expliziter Ringpuffer-Kapazität.
    pub fn with_capacity(capacity: usize) -> (Self, Arc<Mutex<VecDeque<ShapeEvent>>>) {
        let events = Arc::new(Mutex::new(VecDeque::new()));
        (
            Self {
                events: Arc::clone(&events),
                capacity,
            },
            events,
        )
    }
}

impl ShapeProcessor for DebugCaptureProcessor {
    fn name(&self) -> &str {
        "debug-capture"
    }

    fn process(&mut self, event: &ShapeEvent, _ctx: &ProcessContext) -> anyhow::Result<()> {
        let mut events = self
            .events
            .lock()
            .map_err(|_| anyhow!("Mitschnitt-Puffer vergiftet"))?;
        if events.len() >= self.capacity {
            events.pop_front();
        }
        events.push_back(event.clone());
        Ok(())
    }
}
