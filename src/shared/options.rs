//! Zentrale Konfiguration für die AirSketch-Pipeline.
//!
//! `SketchOptions` enthält alle bei der Konstruktion festgelegten Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten. Ungültige
//! Kombinationen schlagen über `validate()` sofort fehl — zur Laufzeit
//! werden Optionen nicht mehr neu eingelesen.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

// ── Strich-Aufnahme ─────────────────────────────────────────────────

/// Mindestabstand (Welteinheiten) zwischen zwei aufgenommenen Punkten.
/// Begrenzt die Strichlänge proportional zur Weglänge statt zur Tick-Rate.
pub const MIN_SPACING: f32 = 0.01;
/// Maximaler Abstand zwischen Anfang und Ende einer geschlossenen Schleife.
pub const CLOSURE_THRESHOLD: f32 = 0.1;

// ── Klassifikation ──────────────────────────────────────────────────

/// Winkel-Toleranz (Grad) für Rechteck- und Dreieck-Tests.
pub const ANGLE_TOLERANCE_DEG: f32 = 15.0;
/// Längen-Toleranz (Welteinheiten) für gegenüberliegende Rechteck-Seiten.
pub const DISTANCE_TOLERANCE: f32 = 0.2;
/// Relative Radius-Toleranz für den Kreis-Test.
pub const RADIUS_TOLERANCE: f32 = 0.25;
/// Mindestanzahl Punkte, unter der geometrische Statistik unzuverlässig ist.
pub const MIN_POINTS_FOR_SHAPE: usize = 10;

// ── Rechteck-Fitting ────────────────────────────────────────────────

/// Obergrenze der Stichprobe für die Kovarianz-Schätzung.
pub const RECT_SAMPLE_CAP: usize = 100;

// ── Generatoren ─────────────────────────────────────────────────────

/// Vorgeschlagene Höhe für Linie-zu-Bergrücken-Workflows.
pub const SUGGESTED_MOUNTAIN_HEIGHT: f32 = 50.0;
/// Halbbreite des Lösch-Korridors um rohe Strich-Segmente.
pub const DELETE_CORRIDOR_RADIUS: f32 = 1.0;
/// Glättungsfaktor für Freiform-Pfade (0 = aus, 1 = maximal).
pub const SMOOTHING_FACTOR: f32 = 0.5;

// ── Konstruktions-Optionen (serialisierbar) ─────────────────────────

/// Alle bei der Konstruktion festgelegten Pipeline-Optionen.
/// Wird als `airsketch.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SketchOptions {
    // ── Aufnahme ────────────────────────────────────────────────
    /// Mindestabstand zwischen aufgenommenen Punkten
    pub min_spacing: f32,
    /// Closure-Schwelle (Abstand Anfang/Ende)
    pub closure_threshold: f32,

    // ── Klassifikation ──────────────────────────────────────────
    /// Offene Striche als Linie durchlassen statt zu verwerfen
    pub allow_open_shapes: bool,
    /// Winkel-Toleranz in Grad
    pub angle_tolerance_deg: f32,
    /// Längen-Toleranz für gegenüberliegende Seiten
    pub distance_tolerance: f32,
    /// Relative Radius-Toleranz für den Kreis-Test
    pub radius_tolerance: f32,
    /// Mindestanzahl Punkte für statistische Form-Tests
    pub min_points_for_shape: usize,

    // ── Fitting ─────────────────────────────────────────────────
    /// Stichproben-Obergrenze der Kovarianz-Schätzung
    pub rect_sample_cap: usize,

    // ── Generatoren ─────────────────────────────────────────────
    /// Vorgeschlagene Höhe für Linie-zu-Bergrücken-Workflows
    #[serde(default = "default_suggested_mountain_height")]
    pub suggested_mountain_height: f32,
    /// Halbbreite des Lösch-Korridors
    #[serde(default = "default_delete_corridor_radius")]
    pub delete_corridor_radius: f32,
    /// Glättungsfaktor für Freiform-Pfade
    #[serde(default = "default_smoothing_factor")]
    pub smoothing_factor: f32,
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self {
            min_spacing: MIN_SPACING,
            closure_threshold: CLOSURE_THRESHOLD,
            allow_open_shapes: true,
            angle_tolerance_deg: ANGLE_TOLERANCE_DEG,
            distance_tolerance: DISTANCE_TOLERANCE,
            radius_tolerance: RADIUS_TOLERANCE,
            min_points_for_shape: MIN_POINTS_FOR_SHAPE,
            rect_sample_cap: RECT_SAMPLE_CAP,
            suggested_mountain_height: SUGGESTED_MOUNTAIN_HEIGHT,
            delete_corridor_radius: DELETE_CORRIDOR_RADIUS,
            smoothing_factor: SMOOTHING_FACTOR,
        }
    }
}

/// Serde-Default für `suggested_mountain_height` (Abwärtskompatibilität).
fn default_suggested_mountain_height() -> f32 {
    SUGGESTED_MOUNTAIN_HEIGHT
}

/// Serde-Default für `delete_corridor_radius` (Abwärtskompatibilität).
fn default_delete_corridor_radius() -> f32 {
    DELETE_CORRIDOR_RADIUS
}

/// Serde-Default für `smoothing_factor` (Abwärtskompatibilität).
fn default_smoothing_factor() -> f32 {
    SMOOTHING_FACTOR
}

impl SketchOptions {
    /// Prüft die Konfiguration einmalig bei der Konstruktion.
    ///
    /// Ungültige Toleranzen sind fatal und nicht zur Laufzeit behebbar.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.min_spacing > 0.0, "min_spacing muss positiv sein");
        ensure!(
            self.closure_threshold > 0.0,
            "closure_threshold muss positiv sein"
        );
        ensure!(
            self.angle_tolerance_deg > 0.0 && self.angle_tolerance_deg < 90.0,
            "angle_tolerance_deg muss in (0, 90) liegen"
        );
        ensure!(
            self.distance_tolerance > 0.0,
            "distance_tolerance muss positiv sein"
        );
        ensure!(
            self.radius_tolerance > 0.0,
            "radius_tolerance muss positiv sein"
        );
        ensure!(
            self.min_points_for_shape >= 3,
            "min_points_for_shape muss mindestens 3 sein"
        );
        ensure!(
            self.rect_sample_cap >= 2,
            "rect_sample_cap muss mindestens 2 sein"
        );
        ensure!(
            self.delete_corridor_radius > 0.0,
            "delete_corridor_radius muss positiv sein"
        );
        ensure!(
            (0.0..=1.0).contains(&self.smoothing_factor),
            "smoothing_factor muss in [0, 1] liegen"
        );
        if self.closure_threshold <= self.min_spacing {
            // Kein Fehler: der Aufrufer trägt die Verantwortung für ein
            // konsistentes Paar, aber die Kombination erzeugt praktisch
            // nie geschlossene Striche.
            log::warn!(
                "closure_threshold ({}) liegt unter min_spacing ({}) — Schleifen werden kaum erkannt",
                self.closure_threshold,
                self.min_spacing
            );
        }
        Ok(())
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("airsketch"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("airsketch.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_sind_gueltig() {
        SketchOptions::default().validate().expect("Defaults müssen validieren");
    }

    #[test]
    fn negative_schwelle_schlaegt_fehl() {
        let options = SketchOptions {
            min_spacing: -0.5,
            ..SketchOptions::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn zu_wenige_min_points_schlagen_fehl() {
        let options = SketchOptions {
            min_points_for_shape: 2,
            ..SketchOptions::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn toml_ohne_neue_felder_laedt_mit_defaults() {
        // Abwärtskompatibilität: alte Dateien ohne Generator-Felder
        let content = r#"
min_spacing = 0.02
closure_threshold = 0.15
allow_open_shapes = false
angle_tolerance_deg = 10.0
distance_tolerance = 0.1
radius_tolerance = 0.2
min_points_for_shape = 12
rect_sample_cap = 64
"#;
        let options: SketchOptions = toml::from_str(content).expect("TOML muss parsen");
        assert_eq!(options.min_points_for_shape, 12);
        assert_eq!(options.suggested_mountain_height, SUGGESTED_MOUNTAIN_HEIGHT);
        assert_eq!(options.delete_corridor_radius, DELETE_CORRIDOR_RADIUS);
    }
}
