//! Bézier Path Editor Library.
//! Editierbare kubische Bézier-Kurven mit Stetigkeitsregeln und Arc-Length-Resampling.

pub mod app;
pub mod core;
pub mod shared;

pub use crate::core::{eval_cubic, eval_quadratic, is_anchor_index};
pub use crate::core::{
    Curve, CurveError, CurveResult, IndexUnit, PointsOnCurve, END_POINT_TOLERANCE,
};
pub use app::{
    CommandLog, CurveCommand, CurveHost, CurveScript, CurveSnapshot, EditHistory, ScriptOutput,
};
pub use shared::{CurveMode, CurveOptions};
