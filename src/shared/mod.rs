//! Geteilte Typen für layer-übergreifende Verträge.

pub mod options;

pub use options::{CurveMode, CurveOptions};
pub use options::{DEFAULT_RESOLUTION, HISTORY_DEPTH};
