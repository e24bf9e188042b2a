//! Pipeline-Controller für zentrale Event-Verarbeitung.

use anyhow::Result;
use glam::Vec3;

use super::delete::DeleteCollaborator;
use super::processors::{ProcessContext, ProcessorRegistry, ShapeEventListener};
use super::use_cases::two_hand::{self, RectangleStyle};
use super::{handlers, intent_mapping, use_cases};
use super::{SketchCommand, SketchIntent, SketchState};
use crate::core::{RectFitStrategy, ShapeEvent, ShapeKind};

/// Orchestriert Host-Events über Intent/Command-Mapping auf den
/// `SketchState` und verteilt fertige Shape-Events.
///
/// Alle Kollaborateure (Prozessoren, Beobachter, Lösch-Kollaborateur,
/// Fitting-Strategie) werden bei der Konstruktion injiziert; es gibt
/// keine globalen Registries und kein Laufzeit-Scanning.
pub struct SketchController {
    registry: ProcessorRegistry,
    listeners: Vec<Box<dyn ShapeEventListener>>,
    delete: Box<dyn DeleteCollaborator>,
    rect_fitter: Box<dyn RectFitStrategy>,
}

impl SketchController {
    /// Erstellt einen Controller mit injizierten Kollaborateuren.
    pub fn new(
        registry: ProcessorRegistry,
        delete: Box<dyn DeleteCollaborator>,
        rect_fitter: Box<dyn RectFitStrategy>,
    ) -> Self {
        Self {
            registry,
            listeners: Vec::new(),
            delete,
            rect_fitter,
        }
    }

    /// Abonniert einen direkten Beobachter (nach den Prozessoren bedient).
    pub fn add_listener(&mut self, listener: Box<dyn ShapeEventListener>) {
        self.listeners.push(listener);
    }

    /// Anzahl registrierter Prozessoren.
    pub fn processor_count(&self) -> usize {
        self.registry.len()
    }

    /// Bequemer Einstieg für Host-Loops: ein Tick für ein Werkzeug.
    pub fn handle_tick(
        &mut self,
        state: &mut SketchState,
        entity_id: u64,
        active: bool,
        position: Vec3,
    ) -> Result<()> {
        self.handle_intent(
            state,
            SketchIntent::TickReported {
                entity_id,
                active,
                position,
            },
        )
    }

    /// Verarbeitet einen Intent über Intent/Command-Mapping.
    pub fn handle_intent(&mut self, state: &mut SketchState, intent: SketchIntent) -> Result<()> {
        let commands = intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }
        Ok(())
    }

    /// Führt mutierende Commands auf dem SketchState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(&mut self, state: &mut SketchState, command: SketchCommand) -> Result<()> {
        state.command_log.record(&command);

        match command {
            // === Strich-Lebenszyklus ===
            SketchCommand::StartStroke {
                entity_id,
                position,
            } => handlers::strokes::start_stroke(state, entity_id, position),
            SketchCommand::AppendStrokePoint {
                entity_id,
                position,
            } => {
                handlers::strokes::append_point(state, entity_id, position);
            }
            SketchCommand::FinishStroke { entity_id } => {
                if let Some((stroke_id, points)) = handlers::strokes::finish_stroke(state, entity_id)
                {
                    let event = use_cases::classify_stroke::run(
                        state,
                        stroke_id,
                        points,
                        self.rect_fitter.as_ref(),
                    );
                    if let Some(event) = event {
                        self.dispatch_event(state, &event);
                    }
                }
            }

            // === Lösch-Pfad ===
            SketchCommand::AppendDeleteSegment {
                entity_id,
                position,
            } => {
                if let Some((start, end)) = handlers::strokes::append_point(state, entity_id, position)
                {
                    self.delete.process_segment(start, end);
                }
            }
            SketchCommand::FinalizeDeleteArea { entity_id } => {
                handlers::strokes::discard_stroke(state, entity_id);
                let deleted = self.delete.finalize_area();
                log::info!(
                    "Werkzeug {}: Lösch-Bereich mit {} Objekt(en) abgeschlossen",
                    entity_id,
                    deleted
                );
            }

            // === Modi ===
            SketchCommand::SetMode { mode } => handlers::mode::set_mode(state, mode),
            SketchCommand::SetGeneratorMode { mode } => {
                handlers::mode::set_generator_mode(state, mode)
            }
            SketchCommand::SetStraightStrokes { enabled } => {
                handlers::mode::set_straight_strokes(state, enabled)
            }

            // === Beidhändiges Rechteck ===
            SketchCommand::BuildTwoHandRectangle { left, right, style } => {
                self.build_two_hand_rectangle(state, &left, &right, style);
            }
        }

        Ok(())
    }

    fn dispatch_event(&mut self, state: &SketchState, event: &ShapeEvent) {
        let ctx = ProcessContext {
            mode: state.mode,
            generator_mode: state.generator_mode,
            straight_strokes: state.straight_strokes,
        };
        use_cases::dispatch::dispatch(&mut self.registry, &mut self.listeners, event, &ctx);
    }

    fn build_two_hand_rectangle(
        &mut self,
        state: &mut SketchState,
        left: &[Vec3],
        right: &[Vec3],
        style: RectangleStyle,
    ) {
        let combined = two_hand::combine_hand_strokes(left, right);
        if combined.len() < 2 {
            log::debug!("Beidhändiger Zug verworfen: zu wenige Punkte");
            return;
        }

        let idealized = self.rect_fitter.fit(&combined);
        let points = two_hand::build_rectangle(
            &combined,
            style,
            state.options.smoothing_factor,
            &idealized,
        );
        let event = ShapeEvent {
            stroke_id: state.allocate_stroke_id(),
            points,
            kind: ShapeKind::Rectangle,
            is_closed: true,
            idealized_corners: Some(idealized),
            suggested_height: state.options.suggested_mountain_height,
        };
        log::info!(
            "Beidhändiges Rechteck erzeugt ({:?}, {} Punkte)",
            style,
            event.points.len()
        );
        self.dispatch_event(state, &event);
    }
}
