//! ViewerIntent- und ViewerCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::ViewerCommand;
pub use intent::ViewerIntent;
