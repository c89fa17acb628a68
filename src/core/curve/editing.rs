//! Mutierende Operationen, die die Stetigkeit an den Ankern erhalten.

use super::{is_anchor_index, Curve};
use crate::core::error::{CurveError, CurveResult};
use glam::Vec3;

impl Curve {
    /// Hängt ein Segment mit neuem Endanker an.
    ///
    /// Steuerpunkt 1 spiegelt den vorherigen Steuerpunkt am letzten Anker
    /// (ausgehende Tangente bleibt erhalten), Steuerpunkt 2 liegt mittig zwischen
    /// Steuerpunkt 1 und `new_anchor`. Bei geschlossenen Kurven wird vor den beiden
    /// Schließ-Steuerpunkten eingefügt.
    pub fn add_segment(&mut self, new_anchor: Vec3) {
        let len = self.points.len();
        if len < 2 {
            log::warn!("Segment nicht angehängt: nur {} Punkt(e) vorhanden", len);
            return;
        }

        let insert_at = if self.is_closed { len - 2 } else { len };
        let last = self.points[insert_at - 1];
        let second_last = self.points[insert_at - 2];
        let control1 = last * 2.0 - second_last;
        let control2 = (control1 + new_anchor) * 0.5;
        self.points
            .splice(insert_at..insert_at, [control1, control2, new_anchor]);

        if self.is_auto_set_control_points {
            self.auto_set_control_points();
        }
        log::debug!(
            "Segment angehängt, jetzt {} Segmente",
            self.segments_count()
        );
    }

    /// Entfernt ein Segment samt seiner exklusiven Punkte.
    ///
    /// Offen: Segment 0 verliert seinen Startanker (Punkte 0..3), jedes andere
    /// Segment `k` seinen Endanker samt Steuerpunkten (`3k+1..=3k+3`).
    /// Geschlossen: immer `3k+1`, `3k+2` und der (umlaufende) Endanker.
    pub fn remove_segment(&mut self, segment_index: usize) -> CurveResult<()> {
        let segments = self.segments_count();
        if segment_index >= segments {
            return Err(CurveError::segment_index(segment_index, segments));
        }
        let min_segments = if self.is_closed { 3 } else { 2 };
        if segments < min_segments {
            return Err(CurveError::InvalidArgument(format!(
                "Kurve mit {} Segment(en) kann kein Segment verlieren",
                segments
            )));
        }

        let len = self.points.len();
        if !self.is_closed {
            let start = if segment_index == 0 {
                0
            } else {
                segment_index * 3 + 1
            };
            self.points.drain(start..start + 3);
        } else if segment_index * 3 + 3 < len {
            let start = segment_index * 3 + 1;
            self.points.drain(start..start + 3);
        } else {
            // Schließsegment: Endanker ist Punkt 0 → neu bei Anker 3 beginnen
            self.points.truncate(len - 2);
            self.points.remove(0);
            self.points.rotate_left(2);
        }

        if self.is_auto_set_control_points {
            self.auto_set_control_points();
        }
        log::debug!(
            "Segment {} entfernt, verbleibend: {}",
            segment_index,
            self.segments_count()
        );
        Ok(())
    }

    /// Verschiebt einen Punkt und zieht die betroffenen Nachbarn nach.
    ///
    /// - Anker: beide angrenzenden Steuerpunkte wandern mit demselben Delta.
    /// - Steuerpunkt: der gegenüberliegende Steuerpunkt wird am gemeinsamen
    ///   Anker punktgespiegelt (kolinear, gleicher Abstand).
    ///
    /// Im Auto-Modus werden stattdessen alle Steuerpunkte neu berechnet.
    pub fn move_point(&mut self, point_index: usize, new_position: Vec3) -> CurveResult<()> {
        if point_index >= self.points.len() {
            return Err(CurveError::point_index(point_index, self.points.len()));
        }

        if self.is_auto_set_control_points {
            self.points[point_index] = new_position;
            self.auto_set_control_points();
            return Ok(());
        }

        let delta = new_position - self.points[point_index];
        self.points[point_index] = new_position;

        if is_anchor_index(point_index) {
            for offset in [-1, 1] {
                if let Some(control) = self.neighbour_index(point_index, offset) {
                    self.points[control] += delta;
                }
            }
        } else if point_index % 3 == 1 {
            self.mirror_opposite_control(point_index, -1);
        } else {
            self.mirror_opposite_control(point_index, 1);
        }
        Ok(())
    }

    /// Verschiebt Punkt `point_index_in_segment` (0..=3) von Segment `segment_index`.
    pub fn move_segment_point(
        &mut self,
        segment_index: usize,
        point_index_in_segment: usize,
        new_position: Vec3,
    ) -> CurveResult<()> {
        let segments = self.segments_count();
        if segment_index >= segments {
            return Err(CurveError::segment_index(segment_index, segments));
        }
        if point_index_in_segment > 3 {
            return Err(CurveError::InvalidArgument(format!(
                "Segment hat nur 4 Punkte, Index {} angefragt",
                point_index_in_segment
            )));
        }
        let index = self.loop_index(segment_index * 3 + point_index_in_segment);
        self.move_point(index, new_position)
    }

    /// Schließt oder öffnet die Kurve.
    ///
    /// Schließen hängt zwei Steuerpunkte an: die Spiegelung des vorletzten Punkts
    /// am letzten Anker und die Spiegelung von Punkt 1 an Punkt 0.
    /// Öffnen entfernt genau diese beiden Punkte wieder.
    pub fn set_closed(&mut self, closed: bool) {
        if closed == self.is_closed {
            return;
        }

        let len = self.points.len();
        if closed {
            let closing_out = self.points[len - 1] * 2.0 - self.points[len - 2];
            let closing_in = self.points[0] * 2.0 - self.points[1];
            self.points.push(closing_out);
            self.points.push(closing_in);
        } else {
            self.points.truncate(len - 2);
        }
        self.is_closed = closed;

        if self.is_auto_set_control_points {
            self.auto_set_control_points();
        }
        log::debug!("Kurve {}", if closed { "geschlossen" } else { "geöffnet" });
    }

    /// Schaltet die automatische Steuerpunkt-Platzierung.
    ///
    /// Einschalten berechnet sofort alle Steuerpunkte neu, Ausschalten behält
    /// die aktuellen Positionen als manuelle Ausgangslage.
    pub fn set_auto_set_control_points(&mut self, enabled: bool) {
        let was_enabled = self.is_auto_set_control_points;
        self.is_auto_set_control_points = enabled;
        if enabled && !was_enabled {
            self.auto_set_control_points();
        }
    }

    /// Spiegelt den Steuerpunkt auf der anderen Seite des Ankers.
    ///
    /// `towards_anchor`: -1 wenn der Anker vor dem Steuerpunkt liegt, +1 wenn dahinter.
    fn mirror_opposite_control(&mut self, control_index: usize, towards_anchor: isize) {
        let (Some(anchor), Some(opposite)) = (
            self.neighbour_index(control_index, towards_anchor),
            self.neighbour_index(control_index, 2 * towards_anchor),
        ) else {
            return;
        };
        let anchor_pos = self.points[anchor];
        self.points[opposite] = anchor_pos - (self.points[control_index] - anchor_pos);
    }
}
