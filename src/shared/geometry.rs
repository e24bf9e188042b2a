//! Reine Geometrie-Funktionen für Polylines im 3D-Raum.
//!
//! Layer-neutral: kann von `core`, `app` und Tests importiert werden.
//! Alle Funktionen sind gegen degenerierte Eingaben (Null-Vektoren,
//! doppelte Punkte) abgesichert und paniken nie.

use glam::Vec3;

/// Berechnet den Schwerpunkt einer Punktmenge (`Vec3::ZERO` bei leerer Eingabe).
pub fn centroid(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }
    points.iter().copied().sum::<Vec3>() / points.len() as f32
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Winkel zwischen zwei Richtungsvektoren in Grad.
///
/// `None` wenn einer der Vektoren (nahezu) Länge null hat — der Aufrufer
/// behandelt das als nicht-passende Geometrie statt zu paniken.
pub fn angle_between_deg(a: Vec3, b: Vec3) -> Option<f32> {
    let a = a.try_normalize()?;
    let b = b.try_normalize()?;
    let cos = a.dot(b).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Reduziert eine Polyline auf `target` Stützpunkte per Index-Stride-Sampling.
///
/// Stride = `len / target`, Index abgerundet und auf den letzten gültigen
/// Index geklemmt. Kürzere Polylines werden unverändert zurückgegeben.
/// Das Verfahren setzt eine annähernd gleichmäßige Punktdichte entlang
/// des Strichs voraus, wie sie die Mindestabstand-Dezimierung erzeugt.
pub fn stride_sample(points: &[Vec3], target: usize) -> Vec<Vec3> {
    if target == 0 || points.len() < target {
        return points.to_vec();
    }
    let step = points.len() as f32 / target as f32;
    (0..target)
        .map(|i| {
            let index = ((i as f32 * step).floor() as usize).min(points.len() - 1);
            points[index]
        })
        .collect()
}

/// Glättet eine Polyline durch Mittelung mit dem Nachbar-Mittelpunkt.
///
/// Endpunkte bleiben fixiert. `factor` in [0, 1]: 0 = keine Glättung,
/// 1 = Punkt wird vollständig auf den Nachbar-Mittelwert gezogen.
pub fn smooth_neighbor_average(points: &[Vec3], factor: f32) -> Vec<Vec3> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let mut smoothed = Vec::with_capacity(points.len());
    for i in 0..points.len() {
        let mut point = points[i];
        if i > 0 && i + 1 < points.len() {
            let mid = (points[i - 1] + points[i + 1]) / 2.0;
            point = point.lerp(mid, factor);
        }
        smoothed.push(point);
    }
    smoothed
}

/// Glättet eine geschlossene Punktfolge mit einem zirkulären Mittelwert-Fenster.
pub fn smooth_circular_window(points: &[Vec3], window: usize) -> Vec<Vec3> {
    if points.is_empty() || window < 2 {
        return points.to_vec();
    }
    let n = points.len() as isize;
    let half = (window / 2) as isize;
    (0..n)
        .map(|i| {
            let mut sum = Vec3::ZERO;
            let mut count = 0.0;
            for offset in -half..=half {
                let index = (i + offset).rem_euclid(n) as usize;
                sum += points[index];
                count += 1.0;
            }
            sum / count
        })
        .collect()
}

/// Kürzester Abstand eines Punkts zu einem Liniensegment.
pub fn point_segment_distance(point: Vec3, a: Vec3, b: Vec3) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}
