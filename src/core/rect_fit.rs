//! Idealisierte Rechtecke über Hauptachsen-Fitting.
//!
//! Die Hauptachsen werden per Power-Iteration aus der Kovarianzmatrix
//! geschätzt — eine vollständige Eigenzerlegung ist unnötig, weil nur
//! zwei Achsen gebraucht werden. Die Stichprobe ist deterministisch
//! (Stride-Sampling), damit Fits reproduzierbar bleiben und kein
//! geteilter Zufallszustand existiert.

use glam::{Mat3, Vec3};

use crate::shared::geometry::{centroid, stride_sample};

/// Anzahl der Power-Iterationen für die Achsen-Schätzung.
const POWER_ITERATIONS: usize = 20;
/// Unterhalb dieser Länge gilt ein Kreuzprodukt als entartet.
const DEGENERATE_CROSS_LENGTH: f32 = 0.01;

/// Austauschbare Strategie zum Einpassen eines idealisierten Rechtecks.
pub trait RectFitStrategy {
    /// Passt ein Rechteck in die Punktwolke ein.
    ///
    /// Liefert bei mindestens 2 Punkten eine geschlossene 5-Punkt-Schleife
    /// (letzter Punkt = erster Punkt); darunter die Eingabe unverändert.
    fn fit(&self, points: &[Vec3]) -> Vec<Vec3>;
}

/// Rechteck-Fit über die zwei dominanten Hauptachsen der Punktwolke.
#[derive(Debug, Clone)]
pub struct PrincipalAxisFitter {
    /// Stichproben-Obergrenze für die Kovarianz-Schätzung
    pub sample_cap: usize,
    /// Referenz-Oben-Richtung zum Aufspannen der zweiten Achse
    pub up: Vec3,
}

impl PrincipalAxisFitter {
    /// Erstellt einen Fitter mit Welt-Y als Referenz-Oben-Richtung.
    pub fn new(sample_cap: usize) -> Self {
        Self {
            sample_cap,
            up: Vec3::Y,
        }
    }
}

impl RectFitStrategy for PrincipalAxisFitter {
    fn fit(&self, points: &[Vec3]) -> Vec<Vec3> {
        if points.len() < 2 {
            return points.to_vec();
        }

        let sampled = stride_sample(points, self.sample_cap);
        let center = centroid(&sampled);
        let cov = covariance_matrix(&sampled, center);

        let axis1 = dominant_axis(cov);
        let axis2 = orthogonal_axis(cov, axis1, self.up);

        // Extents über ALLE Original-Punkte, nicht nur die Stichprobe
        project_extents(points, center, axis1, axis2)
    }
}

/// Rechteck-Fit in der Ansichts-Ebene (senkrecht zur Blickrichtung).
///
/// Statt der Kovarianz-Hauptachse wird die dominante Streu-Achse unter
/// den Viewport-Richtungen `view_up` und `view_right` gewählt; die
/// zweite Achse steht senkrecht dazu in der Ebene.
#[derive(Debug, Clone)]
pub struct ViewPlaneFitter {
    /// Blickrichtung der Kamera
    pub view_dir: Vec3,
    /// Oben-Richtung des Viewports
    pub view_up: Vec3,
    /// Rechts-Richtung des Viewports
    pub view_right: Vec3,
}

impl ViewPlaneFitter {
    pub fn new(view_dir: Vec3, view_up: Vec3, view_right: Vec3) -> Self {
        Self {
            view_dir,
            view_up,
            view_right,
        }
    }
}

impl RectFitStrategy for ViewPlaneFitter {
    fn fit(&self, points: &[Vec3]) -> Vec<Vec3> {
        if points.len() < 2 {
            return points.to_vec();
        }

        let view_dir = self.view_dir.try_normalize().unwrap_or(Vec3::Z);
        let center = centroid(points);

        // Viewport-Richtungen in die Ansichts-Ebene projizieren
        let up = project_into_plane(self.view_up, view_dir).unwrap_or(Vec3::Y);
        let right = project_into_plane(self.view_right, view_dir)
            .unwrap_or_else(|| view_dir.cross(up).normalize());

        // Dominante Streu-Achse anhand der Welt-Projektionen wählen
        let spread_up = projection_spread(points, center, up);
        let spread_right = projection_spread(points, center, right);
        let (axis1, fallback2) = if spread_up >= spread_right {
            (up, right)
        } else {
            (right, up)
        };
        let axis2 = view_dir.cross(axis1).try_normalize().unwrap_or(fallback2);

        project_extents(points, center, axis1, axis2)
    }
}

/// Projiziert einen Richtungsvektor in die Ebene senkrecht zu `normal`.
fn project_into_plane(direction: Vec3, normal: Vec3) -> Option<Vec3> {
    (direction - normal * direction.dot(normal)).try_normalize()
}

/// 3x3-Kovarianzmatrix der Punkt-Offsets zum Zentrum.
fn covariance_matrix(points: &[Vec3], center: Vec3) -> Mat3 {
    let mut x_axis = Vec3::ZERO;
    let mut y_axis = Vec3::ZERO;
    let mut z_axis = Vec3::ZERO;
    for point in points {
        let d = *point - center;
        x_axis += d * d.x;
        y_axis += d * d.y;
        z_axis += d * d.z;
    }
    let inv = 1.0 / points.len() as f32;
    Mat3::from_cols(x_axis * inv, y_axis * inv, z_axis * inv)
}

/// Dominanter Eigenvektor der Kovarianzmatrix per Power-Iteration.
fn dominant_axis(cov: Mat3) -> Vec3 {
    let mut v = Vec3::ONE.normalize();
    for _ in 0..POWER_ITERATIONS {
        match (cov * v).try_normalize() {
            Some(next) => v = next,
            // Entartete Wolke (alle Punkte im Zentrum): Startvektor behalten
            None => break,
        }
    }
    v
}

/// Zweite Achse: orthogonal zur ersten, per Gram-Schmidt nach jedem
/// Iterationsschritt re-orthogonalisiert.
fn orthogonal_axis(cov: Mat3, first: Vec3, up: Vec3) -> Vec3 {
    let mut seed = first.cross(up);
    if seed.length() < DEGENERATE_CROSS_LENGTH {
        // Erste Achse nahezu parallel zu `up`: andere Referenz verwenden
        seed = first.cross(Vec3::X);
    }
    let mut v = seed.try_normalize().unwrap_or(Vec3::Z);
    for _ in 0..POWER_ITERATIONS {
        let av = cov * v;
        let ortho = av - first * av.dot(first);
        match ortho.try_normalize() {
            Some(next) => v = next,
            // Keine Streuung senkrecht zur ersten Achse: Seed behalten
            None => break,
        }
    }
    v
}

/// Spannweite der Punkt-Projektionen entlang einer Achse.
fn projection_spread(points: &[Vec3], center: Vec3, axis: Vec3) -> f32 {
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for point in points {
        let proj = (*point - center).dot(axis);
        min = min.min(proj);
        max = max.max(proj);
    }
    max - min
}

/// Projiziert alle Punkte auf beide Achsen und baut die Ecken aus den
/// Extremal-Projektionen (geschlossene 5-Punkt-Schleife).
fn project_extents(points: &[Vec3], center: Vec3, axis1: Vec3, axis2: Vec3) -> Vec<Vec3> {
    let mut min1 = f32::MAX;
    let mut max1 = f32::MIN;
    let mut min2 = f32::MAX;
    let mut max2 = f32::MIN;
    for point in points {
        let offset = *point - center;
        let p1 = offset.dot(axis1);
        let p2 = offset.dot(axis2);
        min1 = min1.min(p1);
        max1 = max1.max(p1);
        min2 = min2.min(p2);
        max2 = max2.max(p2);
    }

    let corner = |a: f32, b: f32| center + axis1 * a + axis2 * b;
    vec![
        corner(min1, min2),
        corner(max1, min2),
        corner(max1, max2),
        corner(min1, max2),
        corner(min1, min2),
    ]
}
