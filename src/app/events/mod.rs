//! CurveIntent- und CurveCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::CurveCommand;
pub use intent::CurveIntent;
