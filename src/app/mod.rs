//! Application-Layer: Host, Commands, Snapshot-Historie und Skripte.

pub mod command;
pub mod command_log;
pub mod history;
/// Host einer einzelnen Kurve
///
/// Übersetzt zwischen Welt- und lokalen Koordinaten und nimmt vor jeder
/// Mutation einen Snapshot für Undo auf.
pub mod host;
pub mod script;

pub use command::CurveCommand;
pub use command_log::CommandLog;
pub use history::{CurveSnapshot, EditHistory};
pub use host::CurveHost;
pub use script::{CurveScript, ScriptOutput};
