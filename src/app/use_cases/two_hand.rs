//! Use-Case: beidhändig gezogene Rechtecke kombinieren.
//!
//! Beide Hände zeichnen je eine halbe Kontur; die rechte Folge wird
//! umgekehrt angehängt, damit die Schleife durchgängig in einer
//! Richtung läuft, und die Naht mit einem zirkulären Fenster geglättet.

use glam::Vec3;

use crate::shared::geometry::{smooth_circular_window, smooth_neighbor_average};

/// Fenstergröße der zirkulären Glättung nach dem Kombinieren.
const COMBINE_SMOOTHING_WINDOW: usize = 5;

/// Darstellungsvariante des beidhändigen Rechteck-Zugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RectangleStyle {
    /// Kombinierte Punktfolge unverändert
    #[default]
    Raw,
    /// Nachbar-geglättete Punktfolge
    Smoothed,
    /// Idealisiertes Rechteck über Hauptachsen-Fitting
    Perfect,
}

/// Kombiniert die Punktfolgen beider Hände zu einer geschlossenen Schleife.
///
/// Leere Eingaben liefern eine leere Folge (Zug abgebrochen).
pub fn combine_hand_strokes(left: &[Vec3], right: &[Vec3]) -> Vec<Vec3> {
    if left.is_empty() || right.is_empty() {
        return Vec::new();
    }
    let mut combined = Vec::with_capacity(left.len() + right.len() + 1);
    combined.extend_from_slice(left);
    combined.extend(right.iter().rev().copied());
    combined.push(combined[0]); // Schleife schließen
    smooth_circular_window(&combined, COMBINE_SMOOTHING_WINDOW)
}

/// Wählt die endgültige Punktfolge gemäß Stil.
///
/// `idealized` ist der bereits berechnete Hauptachsen-Fit der
/// kombinierten Schleife.
pub fn build_rectangle(
    combined: &[Vec3],
    style: RectangleStyle,
    smoothing_factor: f32,
    idealized: &[Vec3],
) -> Vec<Vec3> {
    match style {
        RectangleStyle::Raw => combined.to_vec(),
        RectangleStyle::Smoothed => smooth_neighbor_average(combined, smoothing_factor),
        RectangleStyle::Perfect => idealized.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kombination_schliesst_die_schleife() {
        let left = vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)];
        let right = vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 0.0)];
        let combined = combine_hand_strokes(&left, &right);
        // links (2) + rechts umgekehrt (2) + Schleifen-Schluss (1)
        assert_eq!(combined.len(), 5);
    }

    #[test]
    fn leere_hand_bricht_den_zug_ab() {
        assert!(combine_hand_strokes(&[], &[Vec3::ZERO]).is_empty());
        assert!(combine_hand_strokes(&[Vec3::ZERO], &[]).is_empty());
    }

    #[test]
    fn rechte_folge_wird_umgekehrt_angehaengt() {
        let left = vec![Vec3::ZERO; 3];
        let right = vec![
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
        ];
        // Ohne Glättung prüfen: Rohfolge vor dem Fenster betrachten
        let mut combined = Vec::new();
        combined.extend_from_slice(&left);
        combined.extend(right.iter().rev().copied());
        assert_eq!(combined[3], Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(combined[5], Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn raw_stil_uebernimmt_die_kombinierte_folge() {
        let combined = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
        let idealized = vec![Vec3::ONE; 5];
        let built = build_rectangle(&combined, RectangleStyle::Raw, 0.5, &idealized);
        assert_eq!(built, combined);
    }

    #[test]
    fn perfect_stil_uebernimmt_den_fit() {
        let combined = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
        let idealized = vec![Vec3::ONE; 5];
        let built = build_rectangle(&combined, RectangleStyle::Perfect, 0.5, &idealized);
        assert_eq!(built, idealized);
    }
}
