//! Laden und Speichern aufgezeichneter Stift-Traces (JSON).
//!
//! Ein Trace ist die Tick-Aufzeichnung einer Zeichen-Sitzung und kann
//! deterministisch durch die Pipeline wiederholt werden.

use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Ein einzelner aufgezeichneter Tick eines Werkzeugs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TraceSample {
    /// Werkzeug-ID
    pub entity_id: u64,
    /// Zeichnet das Werkzeug in diesem Tick?
    pub active: bool,
    /// Weltposition zum Tick-Zeitpunkt
    pub position: Vec3,
}

/// Aufgezeichnete Zeichen-Sitzung in Tick-Reihenfolge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SketchTrace {
    /// Zu registrierende Werkzeuge
    pub entities: Vec<u64>,
    /// Ticks in Aufzeichnungs-Reihenfolge
    pub samples: Vec<TraceSample>,
}

/// Parst einen Trace aus einem JSON-String.
pub fn parse_sketch_trace(content: &str) -> Result<SketchTrace> {
    serde_json::from_str(content).context("Trace-JSON konnte nicht geparst werden")
}

/// Lädt einen Trace von der Platte.
pub fn load_sketch_trace(path: &Path) -> Result<SketchTrace> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Trace-Datei nicht lesbar: {}", path.display()))?;
    parse_sketch_trace(&content)
}

/// Schreibt einen Trace als JSON-Datei.
pub fn write_sketch_trace(trace: &SketchTrace, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(trace)?;
    std::fs::write(path, content)
        .with_context(|| format!("Trace-Datei nicht schreibbar: {}", path.display()))?;
    Ok(())
}
