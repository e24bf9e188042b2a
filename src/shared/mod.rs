//! Geteilte Typen und Funktionen für layer-übergreifende Verträge.
//!
//! Enthält die Konfiguration und reine Geometrie-Helfer, die von
//! `core` und `app` gemeinsam genutzt werden, ohne Zirkel-Abhängigkeiten
//! zu erzeugen.

pub mod geometry;
pub mod options;

pub use options::SketchOptions;
pub use options::{CLOSURE_THRESHOLD, MIN_SPACING};
