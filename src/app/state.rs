//! Pipeline-State — zentrale Datenhaltung einer Zeichen-Sitzung.

use anyhow::{ensure, Result};
use indexmap::IndexMap;

use super::CommandLog;
use crate::core::StrokeBuilder;
use crate::shared::SketchOptions;

/// Pipeline-Modus: volle Klassifikation oder roher Lösch-Pfad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SketchMode {
    /// Striche werden klassifiziert und als Shape-Events verteilt
    #[default]
    Normal,
    /// Striche gehen als rohe Segmente an den Lösch-Kollaborateur
    Delete,
}

/// Aktiver Generator — genau ein Wert, von einer Autorität verwaltet.
///
/// Ersetzt unabhängige Bool-Flags pro Generator: zwei gleichzeitig
/// aktive Modi sind per Konstruktion ausgeschlossen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneratorMode {
    #[default]
    Inactive,
    Tree,
    Wall,
    Mountain,
}

/// Zeichen-Slot eines registrierten Eingabe-Werkzeugs.
#[derive(Debug, Default)]
pub struct StrokeSlot {
    /// Offener Strich, solange das Werkzeug aktiv zeichnet
    pub open: Option<StrokeBuilder>,
}

impl StrokeSlot {
    /// `true` solange ein Strich offen ist.
    pub fn is_drawing(&self) -> bool {
        self.open.is_some()
    }
}

/// Zentraler Zustand der Sketch-Pipeline.
///
/// Jedes Werkzeug besitzt genau einen disjunkten Slot; innerhalb eines
/// Ticks werden Werkzeuge in Registrierungs-Reihenfolge verarbeitet.
pub struct SketchState {
    /// Zeichen-Slots in Registrierungs-Reihenfolge
    pub slots: IndexMap<u64, StrokeSlot>,
    /// Aktiver Pipeline-Modus (Mode Gate)
    pub mode: SketchMode,
    /// Aktiver Generator-Modus
    pub generator_mode: GeneratorMode,
    /// Externes Signal: gerade Striche bevorzugen
    pub straight_strokes: bool,
    /// Bei der Konstruktion validierte Optionen
    pub options: SketchOptions,
    /// Log ausgeführter Commands
    pub command_log: CommandLog,
    next_stroke_id: u64,
}

impl SketchState {
    /// Erstellt den Zustand mit validierten Optionen.
    ///
    /// Ungültige Konfiguration schlägt sofort fehl und ist zur Laufzeit
    /// nicht behebbar.
    pub fn new(options: SketchOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            slots: IndexMap::new(),
            mode: SketchMode::Normal,
            generator_mode: GeneratorMode::Inactive,
            straight_strokes: false,
            options,
            command_log: CommandLog::new(),
            next_stroke_id: 1,
        })
    }

    /// Wie `new`, startet aber direkt im angegebenen Modus.
    pub fn with_mode(options: SketchOptions, mode: SketchMode) -> Result<Self> {
        let mut state = Self::new(options)?;
        state.mode = mode;
        Ok(state)
    }

    /// Registriert ein Eingabe-Werkzeug.
    ///
    /// Doppelte IDs sind ein Programmierfehler des Aufrufers und
    /// schlagen sofort fehl.
    pub fn register_entity(&mut self, entity_id: u64) -> Result<()> {
        ensure!(
            !self.slots.contains_key(&entity_id),
            "Werkzeug {} ist bereits registriert",
            entity_id
        );
        self.slots.insert(entity_id, StrokeSlot::default());
        log::info!("Werkzeug {} registriert", entity_id);
        Ok(())
    }

    /// `true` wenn das Werkzeug registriert ist.
    pub fn is_registered(&self, entity_id: u64) -> bool {
        self.slots.contains_key(&entity_id)
    }

    /// Vergibt die nächste fortlaufende Strich-ID.
    pub(crate) fn allocate_stroke_id(&mut self) -> u64 {
        let id = self.next_stroke_id;
        self.next_stroke_id += 1;
        id
    }
}
