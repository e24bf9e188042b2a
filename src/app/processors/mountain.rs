//! Berg-Prozessor: Linien-Striche werden zu Bergrücken.

use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use glam::Vec3;

use super::{ProcessContext, ShapeProcessor};
use crate::app::state::GeneratorMode;
use crate::core::{ShapeEvent, ShapeKind};
use crate::shared::geometry::polyline_length;

/// Bau-Auftrag für einen Bergrücken.
#[derive(Debug, Clone, PartialEq)]
pub struct MountainPlan {
    /// Kammlinie (die gezeichnete Linie)
    pub ridge: Vec<Vec3>,
    /// Zielhöhe aus den Event-Metadaten
    pub height: f32,
}

/// Erzeugt Bergrücken-Pläne aus Linien-Strichen im Berg-Modus.
pub struct MountainProcessor {
    plans: Arc<Mutex<Vec<MountainPlan>>>,
}

impl MountainProcessor {
    pub fn new(plans: Arc<Mutex<Vec<MountainPlan>>>) -> Self {
        Self { plans }
    }
}

impl ShapeProcessor for MountainProcessor {
    fn name(&self) -> &str {
        "mountain"
    }

    fn process(&mut self, event: &ShapeEvent, ctx: &ProcessContext) -> anyhow::Result<()> {
        if ctx.generator_mode != GeneratorMode::Mountain || event.kind != ShapeKind::Line {
            return Ok(());
        }

        let plan = MountainPlan {
            ridge: event.points.clone(),
            height: event.suggested_height,
        };
        log::info!(
            "Bergrücken geplant aus Strich {} (Länge {:.1}, Höhe {:.1})",
            event.stroke_id,
            polyline_length(&plan.ridge),
            plan.height
        );
        self.plans
            .lock()
            .map_err(|_| anyhow!("Berg-Senke vergiftet"))?
            .push(plan);
        Ok(())
    }
}
