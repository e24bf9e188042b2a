//! Baum-Prozessor: reagiert auf Dreiecke im Baum-Modus.

use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use glam::Vec3;

use super::{ProcessContext, ShapeProcessor};
use crate::app::state::GeneratorMode;
use crate::core::{ShapeEvent, ShapeKind};
use crate::shared::geometry::centroid;

/// Platzierungs-Auftrag für einen prozeduralen Baum.
#[derive(Debug, Clone, PartialEq)]
pub struct TreePlacement {
    /// Fußpunkt (Schwerpunkt des gezeichneten Dreiecks)
    pub base: Vec3,
    /// Zielhöhe aus der vertikalen Ausdehnung des Strichs
    pub height: f32,
}

/// Leitet aus Dreieck-Strichen Platzierungs-Aufträge ab und legt sie
/// in der injizierten Senke ab (die Mesh-Erzeugung selbst liegt beim
/// externen Generator).
pub struct TreeProcessor {
    placements: Arc<Mutex<Vec<TreePlacement>>>,
}

impl TreeProcessor {
    pub fn new(placements: Arc<Mutex<Vec<TreePlacement>>>) -> Self {
        Self { placements }
    }
}

impl ShapeProcessor for TreeProcessor {
    fn name(&self) -> &str {
        "tree"
    }

    fn process(&mut self, event: &ShapeEvent, ctx: &ProcessContext) -> anyhow::Result<()> {
        if ctx.generator_mode != GeneratorMode::Tree || event.kind != ShapeKind::Triangle {
            return Ok(());
        }

        let base = centroid(&event.points);
        let min_y = event.points.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        let max_y = event.points.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        let placement = TreePlacement {
            base,
            height: (max_y - min_y).max(0.0),
        };
        log::info!(
            "Baum geplant bei {:?} (Höhe {:.2})",
            placement.base,
            placement.height
        );
        self.placements
            .lock()
            .map_err(|_| anyhow!("Platzierungs-Senke vergiftet"))?
            .push(placement);
        Ok(())
    }
}
