//! Application-Layer: Controller, State, Events, Prozessoren und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod delete;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod processors;
/// Pipeline-State und Modi
///
/// Dieses Modul verwaltet den Zustand der Zeichen-Sitzung
/// (Werkzeug-Slots, Modi, Optionen).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::SketchController;
pub use delete::{DeleteCollaborator, SpatialDeleteQueue};
pub use events::{SketchCommand, SketchIntent};
pub use processors::{
    DebugCaptureProcessor, ProcessContext, ProcessorRegistry, ShapeEventListener, ShapeProcessor,
};
pub use state::{GeneratorMode, SketchMode, SketchState, StrokeSlot};
pub use use_cases::two_hand::RectangleStyle;
