//! SketchIntent- und SketchCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::SketchCommand;
pub use intent::SketchIntent;
