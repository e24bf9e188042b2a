//! Freihand-Striche: wachsende Punktfolgen pro Eingabe-Werkzeug.

use glam::Vec3;

/// Mindestanzahl Punkte, ab der ein fertiger Strich veröffentlicht wird.
pub const MIN_PUBLISH_POINTS: usize = 2;

/// Ein wachsender Freihand-Strich eines einzelnen Eingabe-Werkzeugs.
///
/// Punkte werden nur aufgenommen, wenn sie weiter als `min_spacing`
/// vom zuletzt gespeicherten Punkt entfernt liegen. Die Dezimierung
/// begrenzt den Speicherbedarf proportional zur Weglänge statt zur
/// Tick-Rate des Hosts.
#[derive(Debug, Clone)]
pub struct StrokeBuilder {
    points: Vec<Vec3>,
    min_spacing: f32,
}

impl StrokeBuilder {
    /// Beginnt einen Strich, gesät mit der aktuellen Werkzeug-Position.
    pub fn new(seed: Vec3, min_spacing: f32) -> Self {
        Self {
            points: vec![seed],
            min_spacing,
        }
    }

    /// Hängt einen Punkt an, wenn der Mindestabstand überschritten ist.
    ///
    /// Gibt bei Aufnahme das neue Segment `(vorheriger, neuer)` zurück,
    /// sonst `None` (Punkt verworfen).
    pub fn append(&mut self, position: Vec3) -> Option<(Vec3, Vec3)> {
        let last = *self.points.last()?;
        if last.distance(position) > self.min_spacing {
            self.points.push(position);
            return Some((last, position));
        }
        None
    }

    /// Anzahl der bisher aufgenommenen Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` wenn noch kein Punkt aufgenommen wurde.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf die bisherige Punktfolge.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Friert den Strich ein und gibt die Punktfolge zurück.
    pub fn finish(self) -> Vec<Vec3> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_wird_uebernommen() {
        let builder = StrokeBuilder::new(Vec3::new(1.0, 2.0, 3.0), 0.01);
        assert_eq!(builder.len(), 1);
        assert_eq!(builder.points()[0], Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn punkte_unter_mindestabstand_werden_verworfen() {
        let mut builder = StrokeBuilder::new(Vec3::ZERO, 0.01);
        // identische Position wie der Seed: kein Duplikat
        assert!(builder.append(Vec3::ZERO).is_none());
        assert!(builder.append(Vec3::new(0.005, 0.0, 0.0)).is_none());
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn append_liefert_das_neue_segment() {
        let mut builder = StrokeBuilder::new(Vec3::ZERO, 0.01);
        let segment = builder.append(Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(segment, Some((Vec3::ZERO, Vec3::new(0.5, 0.0, 0.0))));
        assert_eq!(builder.len(), 2);
    }

    #[test]
    fn abstand_gilt_zum_letzten_gespeicherten_punkt() {
        let mut builder = StrokeBuilder::new(Vec3::ZERO, 0.1);
        // Viele kleine Schritte unterhalb der Schwelle: nur der Seed bleibt,
        // bis die Gesamtdistanz zum letzten gespeicherten Punkt reicht.
        assert!(builder.append(Vec3::new(0.06, 0.0, 0.0)).is_none());
        assert!(builder.append(Vec3::new(0.12, 0.0, 0.0)).is_some());
        assert_eq!(builder.len(), 2);
    }

    #[test]
    fn finish_gibt_alle_punkte_zurueck() {
        let mut builder = StrokeBuilder::new(Vec3::ZERO, 0.01);
        builder.append(Vec3::X);
        builder.append(Vec3::new(2.0, 0.0, 0.0));
        let points = builder.finish();
        assert_eq!(points.len(), 3);
    }
}
