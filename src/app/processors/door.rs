//! Tür-Prozessor: prüft Rechteck-Striche auf Tür-Tauglichkeit.
//!
//! Anders als die Generator-Prozessoren hängt die Tür-Erkennung nicht
//! am Generator-Modus: jedes Rechteck wird gegen die Heuristiken
//! geprüft (senkrecht stehende, der Kamera zugewandte Fläche mit
//! plausiblem Seitenverhältnis).

use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use glam::Vec3;

use super::{ProcessContext, ShapeProcessor};
use crate::core::{ShapeEvent, ShapeKind};
use crate::shared::geometry::{centroid, stride_sample};

/// Maximale Abweichung der Flächennormale von der Horizontalen (Grad).
const MAX_DOOR_ANGLE_DEG: f32 = 30.0;
/// Plausibles Seitenverhältnis Höhe/Breite einer Tür.
const MIN_DOOR_ASPECT: f32 = 0.8;
const MAX_DOOR_ASPECT: f32 = 4.0;
/// Mindest-Ausrichtung der Normale zur Blickrichtung.
const MIN_VIEW_ALIGNMENT: f32 = 0.5;

/// Ansichts-Basis der Kamera, bei der Konstruktion injiziert.
#[derive(Debug, Clone, Copy)]
pub struct ViewBasis {
    /// Kamera-Position in Weltkoordinaten
    pub position: Vec3,
    /// Oben-Richtung des Viewports
    pub up: Vec3,
    /// Rechts-Richtung des Viewports
    pub right: Vec3,
}

/// Bau-Auftrag für eine Tür-Fläche.
#[derive(Debug, Clone, PartialEq)]
pub struct DoorPlan {
    /// Eckpunkte der erkannten Tür-Fläche
    pub corners: Vec<Vec3>,
    /// Breite entlang der Viewport-Rechts-Richtung
    pub width: f32,
    /// Höhe entlang der Viewport-Oben-Richtung
    pub height: f32,
}

/// Filtert Rechteck-Events auf Tür-taugliche Flächen.
pub struct DoorProcessor {
    plans: Arc<Mutex<Vec<DoorPlan>>>,
    view: ViewBasis,
}

impl DoorProcessor {
    pub fn new(plans: Arc<Mutex<Vec<DoorPlan>>>, view: ViewBasis) -> Self {
        Self { plans, view }
    }

    /// Mittlere Flächennormale aus den (idealisierten) Ecken,
    /// zur Kamera hin orientiert.
    fn surface_normal(&self, corners: &[Vec3]) -> Option<Vec3> {
        if corners.len() < 3 {
            return None;
        }
        let edge1 = corners[1] - corners[0];
        let edge2 = corners[2] - corners[1];
        let mut normal = edge1.cross(edge2).try_normalize()?;
        let to_camera = (self.view.position - corners[0]).try_normalize()?;
        if normal.dot(to_camera) < 0.0 {
            normal = -normal;
        }
        Some(normal)
    }
}

impl ShapeProcessor for DoorProcessor {
    fn name(&self) -> &str {
        "door"
    }

    fn process(&mut self, event: &ShapeEvent, _ctx: &ProcessContext) -> anyhow::Result<()> {
        if event.kind != ShapeKind::Rectangle {
            return Ok(());
        }

        // Idealisierte Ecken bevorzugen; sonst Stützpunkte des Strichs
        let corners = match &event.idealized_corners {
            Some(corners) => corners.clone(),
            None => stride_sample(&event.points, 4),
        };
        let Some(normal) = self.surface_normal(&corners) else {
            log::debug!("Tür-Prüfung übersprungen: entartete Ecken");
            return Ok(());
        };

        // Senkrecht stehende Fläche: Normale liegt nahe der Horizontalen
        let up_dot = normal.dot(Vec3::Y).abs();
        let is_vertical = up_dot.asin().to_degrees() <= MAX_DOOR_ANGLE_DEG;

        // Der Kamera zugewandt?
        let center = centroid(&corners);
        let view_dir = (center - self.view.position).normalize_or_zero();
        let is_facing = normal.dot(view_dir).abs() > MIN_VIEW_ALIGNMENT;

        // Seitenverhältnis in Viewport-Richtungen
        let width = projection_spread(&corners, self.view.right);
        let height = projection_spread(&corners, self.view.up);
        if width < f32::EPSILON {
            return Ok(());
        }
        let aspect = height / width;
        let has_valid_aspect = (MIN_DOOR_ASPECT..=MAX_DOOR_ASPECT).contains(&aspect);

        log::debug!(
            "Tür-Prüfung: senkrecht={} zugewandt={} Seitenverhältnis={:.2}",
            is_vertical,
            is_facing,
            aspect
        );

        if (is_vertical || is_facing) && has_valid_aspect {
            log::info!("Tür erkannt aus Strich {}", event.stroke_id);
            self.plans
                .lock()
                .map_err(|_| anyhow!("Tür-Senke vergiftet"))?
                .push(DoorPlan {
                    corners,
                    width,
                    height,
                });
        }
        Ok(())
    }
}

/// Spannweite der Punkt-Projektionen entlang einer Richtung.
fn projection_spread(points: &[Vec3], axis: Vec3) -> f32 {
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for point in points {
        let proj = point.dot(axis);
        min = min.min(proj);
        max = max.max(proj);
    }
    if min > max {
        return 0.0;
    }
    max - min
}
