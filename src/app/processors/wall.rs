//! Wand-Prozessor: baut Wand-Pläne aus beliebigen Strichen im Wand-Modus.

use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use glam::Vec3;

use super::{ProcessContext, ShapeProcessor};
use crate::app::state::GeneratorMode;
use crate::core::ShapeEvent;
use crate::shared::geometry::smooth_neighbor_average;

/// Bau-Auftrag für eine Wand.
#[derive(Debug, Clone, PartialEq)]
pub enum WallPlan {
    /// Gerade Wand zwischen erstem und letztem Punkt (Gerade-Präferenz)
    Straight { start: Vec3, end: Vec3 },
    /// Geschlossene Fläche entlang der Kontur
    Surface { outline: Vec<Vec3> },
    /// Freiform-Wand entlang des geglätteten Pfads
    Freeform { path: Vec<Vec3> },
}

/// Erzeugt Wand-Pläne aus fertigen Strichen.
///
/// Im Gegensatz zu Baum und Berg filtert die Wand nicht nach
/// Formklasse: jeder Strich mit mindestens 2 Punkten wird verbaut.
pub struct WallProcessor {
    plans: Arc<Mutex<Vec<WallPlan>>>,
    smoothing_factor: f32,
}

impl WallProcessor {
    pub fn new(plans: Arc<Mutex<Vec<WallPlan>>>, smoothing_factor: f32) -> Self {
        Self {
            plans,
            smoothing_factor,
        }
    }
}

impl ShapeProcessor for WallProcessor {
    fn name(&self) -> &str {
        "wall"
    }

    fn process(&mut self, event: &ShapeEvent, ctx: &ProcessContext) -> anyhow::Result<()> {
        if ctx.generator_mode != GeneratorMode::Wall {
            return Ok(());
        }
        if event.points.len() < 2 {
            log::debug!("Wand übersprungen: nur {} Punkt(e)", event.points.len());
            return Ok(());
        }

        let plan = if ctx.straight_strokes {
            let (Some(first), Some(last)) = (event.points.first(), event.points.last()) else {
                return Ok(());
            };
            WallPlan::Straight {
                start: *first,
                end: *last,
            }
        } else if event.is_closed {
            WallPlan::Surface {
                outline: event.points.clone(),
            }
        } else {
            WallPlan::Freeform {
                path: smooth_neighbor_average(&event.points, self.smoothing_factor),
            }
        };
        log::info!("Wand geplant aus Strich {}", event.stroke_id);
        self.plans
            .lock()
            .map_err(|_| anyhow!("Wand-Senke vergiftet"))?
            .push(plan);
        Ok(())
    }
}
