//! Unveränderliche Shape-Events als Ergebnis eines abgeschlossenen Strichs.

use glam::Vec3;
use serde::Serialize;

/// Erkannte Grundform eines abgeschlossenen Strichs.
///
/// Pro Strich wird genau eine Klasse vergeben, in fester Prioritäts-
/// Reihenfolge Rechteck vor Kreis vor Dreieck; offene Striche werden
/// direkt als Linie markiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ShapeKind {
    /// Kein bekanntes Muster — das Event wird trotzdem ausgeliefert
    #[default]
    None,
    Line,
    Rectangle,
    Circle,
    Triangle,
}

/// Unveränderliches Event über einen fertig gezeichneten Strich.
///
/// Wird genau einmal pro Strich erzeugt und synchron an alle
/// registrierten Prozessoren in Registrierungs-Reihenfolge verteilt.
/// Prozessoren erhalten nur Referenzen und können das Event nicht
/// mutieren.
#[derive(Debug, Clone, Serialize)]
pub struct ShapeEvent {
    /// Fortlaufende ID des Quell-Strichs
    pub stroke_id: u64,
    /// Eingefrorene Punktfolge des Strichs
    pub points: Vec<Vec3>,
    /// Erkannte Grundform
    pub kind: ShapeKind,
    /// Lagen Anfang und Ende innerhalb der Closure-Schwelle?
    pub is_closed: bool,
    /// Idealisiertes Rechteck als geschlossene 5-Punkt-Schleife
    /// (nur bei `ShapeKind::Rectangle` gesetzt)
    pub idealized_corners: Option<Vec<Vec3>>,
    /// Vorgeschlagene Höhe für Linie-zu-Bergrücken-Workflows
    pub suggested_height: f32,
}
