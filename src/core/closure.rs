//! Closure-Erkennung: ist ein fertiger Strich eine geschlossene Schleife?

use glam::Vec3;

/// Unterhalb dieser Punktanzahl gilt ein Strich nie als geschlossen.
const MIN_POINTS_FOR_CLOSURE: usize = 3;

/// Prüft, ob Anfang und Ende eines Strichs innerhalb der Schwelle liegen.
///
/// Reine Funktion: das Ergebnis hängt ausschließlich vom ersten und
/// letzten Punkt sowie der Schwelle ab. Wird genau einmal beim Abschluss
/// eines Strichs ausgewertet und danach nie neu berechnet.
pub fn is_stroke_closed(points: &[Vec3], threshold: f32) -> bool {
    if points.len() < MIN_POINTS_FOR_CLOSURE {
        return false;
    }
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => first.distance(*last) <= threshold,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zu_wenige_punkte_sind_nie_geschlossen() {
        let points = vec![Vec3::ZERO, Vec3::ZERO];
        assert!(!is_stroke_closed(&points, 10.0));
    }

    #[test]
    fn endpunkte_innerhalb_der_schwelle() {
        let points = vec![
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.05, 0.0, 0.0),
        ];
        assert!(is_stroke_closed(&points, 0.1));
        assert!(!is_stroke_closed(&points, 0.01));
    }

    #[test]
    fn innere_punkte_sind_irrelevant() {
        let a = vec![
            Vec3::ZERO,
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(0.0, 7.0, 0.0),
            Vec3::new(0.0, 0.05, 0.0),
        ];
        // Gleiche Endpunkte, innere Punkte vertauscht
        let b = vec![
            Vec3::ZERO,
            Vec3::new(0.0, 7.0, 0.0),
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(0.0, 0.05, 0.0),
        ];
        assert_eq!(is_stroke_closed(&a, 0.1), is_stroke_closed(&b, 0.1));
        assert!(is_stroke_closed(&a, 0.1));
    }
}
