//! Core-Domänentypen: Bézier-Auswertung, editierbare Kurve, Fehlertypen.

pub mod bezier;
/// Editierbare Kurve
///
/// Flache Punktliste mit Ankern auf jedem dritten Index, Steuerpunkt-Regeln
/// für Stetigkeit und Arc-Length-Resampling.
pub mod curve;
pub mod error;

pub use bezier::{eval_cubic, eval_quadratic};
pub use curve::{is_anchor_index, Curve, PointsOnCurve, END_POINT_TOLERANCE};
pub use error::{CurveError, CurveResult, IndexUnit};
