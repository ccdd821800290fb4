//! Eingabe-Intents und mutierende Commands des Editors.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
