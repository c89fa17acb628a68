//! Editierbare Kette kubischer Bézier-Segmente in einer flachen Punktliste.
//!
//! Layout: Punkt 0 ist der erste Anker, danach folgt je Segment ein Tripel
//! `(Steuerpunkt 1, Steuerpunkt 2, Anker)`. Anker liegen auf `0, 3, 6, …`.
//! Geschlossene Kurven tragen zwei zusätzliche Steuerpunkte am Ende, die den
//! letzten Anker mit Punkt 0 verbinden. Nachbarn werden rein über Index-Arithmetik
//! (ggf. modulo `points_count`) gefunden.

mod auto_control;
mod editing;
mod sampling;


pub use sampling::{PointsOnCurve, END_POINT_TOLERANCE};

use super::error::{CurveError, CurveResult};
use glam::Vec3;

/// Ist `index` ein Anker (jeder dritte Punkt)?
pub fn is_anchor_index(index: usize) -> bool {
    index % 3 == 0
}

/// Stückweise kubische Bézier-Kurve mit Ankern und Steuerpunkten.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<Vec3>,
    is_closed: bool,
    is_auto_set_control_points: bool,
}

impl Curve {
    /// Erstellt eine kurze symmetrische S-Kurve (ein Segment) um `center`.
    pub fn new(center: Vec3) -> Self {
        Self {
            points: vec![
                center + Vec3::NEG_X,
                center + (Vec3::NEG_X + Vec3::Y) * 0.5,
                center + (Vec3::X + Vec3::NEG_Y) * 0.5,
                center + Vec3::X,
            ],
            is_closed: false,
            is_auto_set_control_points: false,
        }
    }

    /// Erstellt eine Kurve aus einer vollständigen Punktliste.
    ///
    /// Offen: `len % 3 == 1` und mindestens 4 Punkte.
    /// Geschlossen: `len % 3 == 0` und mindestens 6 Punkte (inkl. Schließ-Steuerpunkten).
    pub fn from_points(points: Vec<Vec3>, closed: bool) -> CurveResult<Self> {
        let len = points.len();
        let valid = if closed {
            len >= 6 && len % 3 == 0
        } else {
            len >= 4 && len % 3 == 1
        };
        if !valid {
            return Err(CurveError::InvalidArgument(format!(
                "{} Punkte ergeben keine {} Kurve aus vollständigen Segmenten",
                len,
                if closed { "geschlossene" } else { "offene" }
            )));
        }
        Ok(Self {
            points,
            is_closed: closed,
            is_auto_set_control_points: false,
        })
    }

    /// Alle Punkte in Speicherreihenfolge.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Anzahl aller Punkte (Anker, Steuerpunkte und ggf. Schließ-Steuerpunkte).
    pub fn points_count(&self) -> usize {
        self.points.len()
    }

    /// Anzahl der kubischen Segmente; geschlossen inkl. Schließsegment.
    pub fn segments_count(&self) -> usize {
        if self.is_closed {
            self.points.len() / 3
        } else {
            self.points.len().saturating_sub(1) / 3
        }
    }

    /// Gibt `true` zurück, wenn der letzte Anker zurück zu Punkt 0 führt.
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Gibt `true` zurück, wenn Steuerpunkte automatisch aus den Ankern abgeleitet werden.
    pub fn is_auto_set_control_points(&self) -> bool {
        self.is_auto_set_control_points
    }

    /// Punkt mit Bereichsprüfung.
    pub fn get(&self, index: usize) -> CurveResult<Vec3> {
        self.points
            .get(index)
            .copied()
            .ok_or_else(|| CurveError::point_index(index, self.points.len()))
    }

    /// Letzter Anker, an dem die Kurve endet (bei geschlossenen Kurven Punkt 0).
    pub fn end_point(&self) -> Vec3 {
        if self.is_closed {
            self.points[0]
        } else {
            self.points[self.points.len() - 1]
        }
    }

    /// Die vier Punkte eines Segments, `p3` bei geschlossenen Kurven umlaufend.
    pub fn points_in_segment(&self, segment_index: usize) -> CurveResult<[Vec3; 4]> {
        let segments = self.segments_count();
        if segment_index >= segments {
            return Err(CurveError::segment_index(segment_index, segments));
        }
        let first = segment_index * 3;
        Ok([
            self.points[first],
            self.points[first + 1],
            self.points[first + 2],
            self.points[self.loop_index(first + 3)],
        ])
    }

    /// Iterator über alle Segmente.
    pub fn segments(&self) -> impl Iterator<Item = [Vec3; 4]> + '_ {
        (0..self.segments_count()).map(move |s| {
            let first = s * 3;
            [
                self.points[first],
                self.points[first + 1],
                self.points[first + 2],
                self.points[self.loop_index(first + 3)],
            ]
        })
    }

    /// Index modulo Punktanzahl (nur für geschlossene Kurven sinnvoll).
    fn loop_index(&self, index: usize) -> usize {
        index % self.points.len()
    }

    /// Nachbar-Index `index + offset` — umlaufend bei geschlossenen Kurven,
    /// `None` jenseits der Enden einer offenen Kurve.
    fn neighbour_index(&self, index: usize, offset: isize) -> Option<usize> {
        let len = self.points.len() as isize;
        let raw = index as isize + offset;
        if self.is_closed {
            Some(raw.rem_euclid(len) as usize)
        } else if (0..len).contains(&raw) {
            Some(raw as usize)
        } else {
            None
        }
    }
}
