use crate::core::{Curve, CurveResult};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Mutierende Kurven-Aufrufe als Werte, damit der Host sie protokollieren,
/// per Snapshot rückgängig machen oder aus einem Skript laden kann.
///
/// Von außen kommen Positionen in Weltkoordinaten; der Host rechnet sie vor
/// der Ausführung in den lokalen Raum um und protokolliert die lokale Form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CurveCommand {
    /// Segment mit neuem Endanker anhängen
    AddSegment { anchor: Vec3 },
    /// Segment entfernen
    RemoveSegment { segment: usize },
    /// Punkt über globalen Index verschieben
    MovePoint { index: usize, position: Vec3 },
    /// Punkt über Segment + Index im Segment (0..=3) verschieben
    MoveSegmentPoint {
        segment: usize,
        index_in_segment: usize,
        position: Vec3,
    },
    /// Kurve schließen / öffnen
    SetClosed { closed: bool },
    /// Automatische Steuerpunkte ein-/ausschalten
    SetAutoSetControlPoints { enabled: bool },
}

impl CurveCommand {
    /// Kurzname für Log-Ausgaben.
    pub fn label(&self) -> &'static str {
        match self {
            CurveCommand::AddSegment { .. } => "Segment anhängen",
            CurveCommand::RemoveSegment { .. } => "Segment entfernen",
            CurveCommand::MovePoint { .. } => "Punkt verschieben",
            CurveCommand::MoveSegmentPoint { .. } => "Segmentpunkt verschieben",
            CurveCommand::SetClosed { .. } => "Schließen umschalten",
            CurveCommand::SetAutoSetControlPoints { .. } => "Auto-Steuerpunkte umschalten",
        }
    }

    /// Wendet `f` auf alle enthaltenen Positionen an (Indizes bleiben).
    pub fn map_positions(self, f: impl Fn(Vec3) -> Vec3) -> Self {
        match self {
            CurveCommand::AddSegment { anchor } => CurveCommand::AddSegment { anchor: f(anchor) },
            CurveCommand::MovePoint { index, position } => CurveCommand::MovePoint {
                index,
                position: f(position),
            },
            CurveCommand::MoveSegmentPoint {
                segment,
                index_in_segment,
                position,
            } => CurveCommand::MoveSegmentPoint {
                segment,
                index_in_segment,
                position: f(position),
            },
            other => other,
        }
    }

    /// Führt den Command direkt auf `curve` aus; Positionen gelten als lokal.
    pub fn apply_to(&self, curve: &mut Curve) -> CurveResult<()> {
        match *self {
            CurveCommand::AddSegment { anchor } => {
                curve.add_segment(anchor);
                Ok(())
            }
            CurveCommand::RemoveSegment { segment } => curve.remove_segment(segment),
            CurveCommand::MovePoint { index, position } => curve.move_point(index, position),
            CurveCommand::MoveSegmentPoint {
                segment,
                index_in_segment,
                position,
            } => curve.move_segment_point(segment, index_in_segment, position),
            CurveCommand::SetClosed { closed } => {
                curve.set_closed(closed);
                Ok(())
            }
            CurveCommand::SetAutoSetControlPoints { enabled } => {
                curve.set_auto_set_control_points(enabled);
                Ok(())
            }
        }
    }
}
