//! Automatische Steuerpunkt-Platzierung aus der Lage der Nachbaranker.
//!
//! Zwei Regime: innere Anker erhalten eine Catmull-Rom-ähnliche Tangente aus
//! beiden Nachbarn, die Endanker einer offenen Kurve werden danach separat
//! über die Mittelpunkt-Regel gesetzt.

use super::{is_anchor_index, Curve};
use crate::core::error::{CurveError, CurveResult};
use glam::Vec3;

impl Curve {
    /// Berechnet alle Steuerpunkte aus den Ankern neu (unabhängig vom Modus-Flag).
    pub fn auto_set_control_points(&mut self) {
        for anchor_index in (0..self.points.len()).step_by(3) {
            self.place_anchor_controls(anchor_index);
        }
        self.place_open_end_controls();
    }

    /// Setzt die beiden Steuerpunkte eines einzelnen Ankers.
    ///
    /// Schlägt fehl, wenn `anchor_index` kein Anker ist oder hinter dem Listenende liegt.
    pub fn auto_set_anchor_control_points(&mut self, anchor_index: usize) -> CurveResult<()> {
        if !is_anchor_index(anchor_index) {
            return Err(CurveError::InvalidArgument(format!(
                "Index {} ist kein Anker (kein Vielfaches von 3)",
                anchor_index
            )));
        }
        if anchor_index >= self.points.len() {
            return Err(CurveError::InvalidArgument(format!(
                "Anker {} liegt hinter dem Ende der Kurve ({} Punkte)",
                anchor_index,
                self.points.len()
            )));
        }
        self.place_anchor_controls(anchor_index);
        Ok(())
    }

    /// Tangente = normierte Differenz der Richtungen zu Vorgänger und Nachfolger,
    /// Steuerpunkte im halben Nachbarabstand entlang dieser Tangente.
    fn place_anchor_controls(&mut self, anchor_index: usize) {
        let anchor = self.points[anchor_index];
        let mut direction = Vec3::ZERO;
        // [0] eingehend (positiv), [1] ausgehend (negativ)
        let mut distances = [0.0f32; 2];

        if let Some(previous) = self.neighbour_index(anchor_index, -3) {
            let offset = self.points[previous] - anchor;
            direction += offset.normalize_or_zero();
            distances[0] = offset.length();
        }
        if let Some(next) = self.neighbour_index(anchor_index, 3) {
            let offset = self.points[next] - anchor;
            direction -= offset.normalize_or_zero();
            distances[1] = -offset.length();
        }
        let direction = direction.normalize_or_zero();

        for (offset, distance) in [(-1, distances[0]), (1, distances[1])] {
            if let Some(control) = self.neighbour_index(anchor_index, offset) {
                self.points[control] = anchor + direction * distance * 0.5;
            }
        }
    }

    /// Offene Kurven: erster und letzter Steuerpunkt liegen mittig zwischen
    /// Endanker und dem benachbarten Punkt.
    fn place_open_end_controls(&mut self) {
        if self.is_closed {
            return;
        }
        let len = self.points.len();
        self.points[1] = (self.points[0] + self.points[2]) * 0.5;
        self.points[len - 2] = (self.points[len - 1] + self.points[len - 3]) * 0.5;
    }
}
