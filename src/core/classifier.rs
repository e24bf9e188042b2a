//! Formklassifikation fertiger Striche.
//!
//! Die geometrischen Tests laufen in fester Prioritäts-Reihenfolge
//! Rechteck, Kreis, Dreieck; der erste Treffer gewinnt und beendet die
//! Auswertung. Offene Striche durchlaufen keine Geometrie-Analyse.

use glam::Vec3;

use super::ShapeKind;
use crate::shared::geometry::{angle_between_deg, centroid, stride_sample};
use crate::shared::SketchOptions;

/// Harte Winkel-Grenzen des Dreieck-Tests (verwirft Splitter-Dreiecke).
const TRIANGLE_ANGLE_MIN_DEG: f32 = 20.0;
const TRIANGLE_ANGLE_MAX_DEG: f32 = 150.0;

/// Richtlinie für offene Striche bei der Klassifikation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifyPolicy {
    /// Offene Striche als `Line` durchlassen statt zu verwerfen
    pub allow_open_shapes: bool,
    /// Externes Signal: gerade Striche bevorzugen (Bergrücken/Wand-Workflow)
    pub prefer_straight: bool,
}

/// Klassifiziert fertige Striche anhand konfigurierbarer Toleranzen.
#[derive(Debug, Clone)]
pub struct ShapeClassifier {
    angle_tolerance_deg: f32,
    distance_tolerance: f32,
    radius_tolerance: f32,
    min_points_for_shape: usize,
}

impl ShapeClassifier {
    /// Übernimmt die Toleranzen aus den validierten Optionen.
    pub fn from_options(options: &SketchOptions) -> Self {
        Self {
            angle_tolerance_deg: options.angle_tolerance_deg,
            distance_tolerance: options.distance_tolerance,
            radius_tolerance: options.radius_tolerance,
            min_points_for_shape: options.min_points_for_shape,
        }
    }

    /// Ordnet einem fertigen Strich eine Formklasse zu.
    ///
    /// `None` bedeutet: kein Event erzeugen (offene Form bei verbotenen
    /// offenen Formen). `Some(ShapeKind::None)` dagegen liefert bewusst
    /// ein Event über einen nicht erkannten Strich — Prozessoren dürfen
    /// auch auf unerkannte Striche reagieren.
    pub fn classify(
        &self,
        points: &[Vec3],
        is_closed: bool,
        policy: ClassifyPolicy,
    ) -> Option<ShapeKind> {
        if !is_closed {
            if policy.prefer_straight || policy.allow_open_shapes {
                return Some(ShapeKind::Line);
            }
            return None;
        }
        if self.is_rectangle(points) {
            return Some(ShapeKind::Rectangle);
        }
        if self.is_circle(points) {
            return Some(ShapeKind::Circle);
        }
        if self.is_triangle(points) {
            return Some(ShapeKind::Triangle);
        }
        Some(ShapeKind::None)
    }

    /// Rechteck-Test: 4 Stützpunkte, rechte Winkel, gleich lange Gegenseiten.
    pub fn is_rectangle(&self, points: &[Vec3]) -> bool {
        let corners = stride_sample(points, 4);
        if corners.len() != 4 {
            return false;
        }

        let mut side_lengths = [0.0f32; 4];
        for i in 0..4 {
            let current = corners[i];
            let next = corners[(i + 1) % 4];
            let prev = corners[(i + 3) % 4];

            // Doppelte Stützpunkte erzeugen Null-Vektoren: keine gültige Ecke
            let Some(angle) = angle_between_deg(next - current, prev - current) else {
                return false;
            };
            if (angle - 90.0).abs() >= self.angle_tolerance_deg {
                return false;
            }
            side_lengths[i] = current.distance(next);
        }

        (side_lengths[0] - side_lengths[2]).abs() < self.distance_tolerance
            && (side_lengths[1] - side_lengths[3]).abs() < self.distance_tolerance
    }

    /// Kreis-Test über die Streuung der Punktradien um den Schwerpunkt.
    ///
    /// Unterhalb von `min_points_for_shape` Punkten ist die Statistik
    /// nicht belastbar — der Test schlägt dann grundsätzlich fehl.
    pub fn is_circle(&self, points: &[Vec3]) -> bool {
        if points.len() < self.min_points_for_shape {
            return false;
        }

        let center = centroid(points);
        let mean_radius =
            points.iter().map(|p| p.distance(center)).sum::<f32>() / points.len() as f32;
        if mean_radius < f32::EPSILON {
            return false; // alle Punkte im Schwerpunkt
        }

        let mut max_deviation = 0.0f32;
        let mut total_deviation = 0.0f32;
        for point in points {
            let deviation = (point.distance(center) - mean_radius).abs() / mean_radius;
            max_deviation = max_deviation.max(deviation);
            total_deviation += deviation;
        }
        let mean_deviation = total_deviation / points.len() as f32;

        max_deviation <= self.radius_tolerance && mean_deviation <= self.radius_tolerance * 0.5
    }

    /// Dreieck-Test: 3 Stützpunkte, plausible Winkel, gültige Seiten.
    pub fn is_triangle(&self, points: &[Vec3]) -> bool {
        let corners = stride_sample(points, 3);
        if corners.len() != 3 {
            return false;
        }

        let mut angles = [0.0f32; 3];
        let mut side_lengths = [0.0f32; 3];
        for i in 0..3 {
            let current = corners[i];
            let next = corners[(i + 1) % 3];
            let prev = corners[(i + 2) % 3];

            let Some(angle) = angle_between_deg(next - current, prev - current) else {
                return false;
            };
            angles[i] = angle;
            side_lengths[i] = current.distance(next);
        }

        let angle_sum: f32 = angles.iter().sum();
        if (angle_sum - 180.0).abs() >= self.angle_tolerance_deg {
            return false;
        }
        // Sehr spitze oder sehr stumpfe Ecken: kein gewolltes Dreieck
        if angles
            .iter()
            .any(|angle| *angle <= TRIANGLE_ANGLE_MIN_DEG || *angle >= TRIANGLE_ANGLE_MAX_DEG)
        {
            return false;
        }
        // Dreiecksungleichung, strikt für alle drei Kombinationen
        for i in 0..3 {
            if side_lengths[(i + 1) % 3] + side_lengths[(i + 2) % 3] <= side_lengths[i] {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests;
