//! Arc-Length-Resampling: gleichmäßig verteilte Punkte entlang aller Segmente.
//!
//! Die Gesamtlänge wird pro Segment nur geschätzt (Sehne + halbes Kontrollpolygon),
//! daher ist der Abstand annähernd, nicht exakt konstant.

use super::Curve;
use crate::core::bezier::{estimated_segment_length, eval_segment};
use glam::Vec3;

/// Maximaler Abstand zwischen letztem Ausgabepunkt und Endanker, ab dem der
/// Endanker zusätzlich ausgegeben wird.
pub const END_POINT_TOLERANCE: f32 = 0.01;

impl Curve {
    /// Geschätzte Gesamtlänge (Summe aus Sehne + halbem Kontrollpolygon je Segment).
    pub fn estimated_length(&self) -> f32 {
        self.segments().map(|s| estimated_segment_length(&s)).sum()
    }

    /// Lazy-Sequenz annähernd gleich weit entfernter Punkte entlang der Kurve.
    ///
    /// `resolution` bestimmt sowohl die Zielanzahl der Abstände als auch die
    /// Auswertungsschritte pro Segment. Mindestens ein Abstand je Segment.
    pub fn calculate_points_on_curve(&self, resolution: usize) -> PointsOnCurve<'_> {
        self.calculate_points_on_curve_with_tolerance(resolution, END_POINT_TOLERANCE)
    }

    /// Wie [`Curve::calculate_points_on_curve`], mit eigener End-Toleranz.
    pub fn calculate_points_on_curve_with_tolerance(
        &self,
        resolution: usize,
        end_tolerance: f32,
    ) -> PointsOnCurve<'_> {
        let divisions = resolution.max(self.segments_count()).max(1);
        let spacing = self.estimated_length() / divisions as f32;
        PointsOnCurve {
            curve: self,
            spacing,
            steps_per_segment: resolution.max(1),
            end_tolerance,
            segment: 0,
            step: 0,
            previous: self.points[0],
            current: self.points[0],
            travelled: 0.0,
            pending: false,
            last_emitted: self.points[0],
            stage: Stage::Start,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Start,
    Walk,
    Finish,
    Done,
}

/// Iterator über die resampelten Punkte. Hält die Kurve geborgt;
/// `clone()` startet eine unabhängige Kopie am aktuellen Stand.
#[derive(Debug, Clone)]
pub struct PointsOnCurve<'a> {
    curve: &'a Curve,
    spacing: f32,
    steps_per_segment: usize,
    end_tolerance: f32,
    segment: usize,
    step: usize,
    /// Letzter Stützpunkt (Kurvenauswertung oder ausgegebener Punkt)
    previous: Vec3,
    /// Aktuelle Kurvenauswertung
    current: Vec3,
    /// Seit dem letzten Ausgabepunkt zurückgelegte Strecke
    travelled: f32,
    /// `current` wurde ausgewertet, aber noch nicht vollständig verbraucht
    pending: bool,
    last_emitted: Vec3,
    stage: Stage,
}

impl PointsOnCurve<'_> {
    /// Abstand zwischen zwei Ausgabepunkten.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    fn emit(&mut self, point: Vec3) -> Option<Vec3> {
        self.last_emitted = point;
        Some(point)
    }

    /// Nächster Auswertungsschritt; `false` wenn alle Segmente durchlaufen sind.
    fn advance(&mut self) -> bool {
        if self.segment >= self.curve.segments_count() {
            return false;
        }
        let Ok(segment) = self.curve.points_in_segment(self.segment) else {
            return false;
        };

        self.step += 1;
        let t = self.step as f32 / self.steps_per_segment as f32;
        self.current = eval_segment(&segment, t);
        self.travelled += self.previous.distance(self.current);
        self.pending = true;

        if self.step == self.steps_per_segment {
            self.step = 0;
            self.segment += 1;
        }
        true
    }
}

impl Iterator for PointsOnCurve<'_> {
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        loop {
            match self.stage {
                Stage::Start => {
                    // Jeder endliche positive Abstand läuft, NaN/∞ springen direkt ans Ende
                    self.stage = if self.spacing > 0.0 && self.spacing.is_finite() {
                        Stage::Walk
                    } else {
                        Stage::Finish
                    };
                    let first = self.curve.points[0];
                    return self.emit(first);
                }
                Stage::Walk => {
                    if self.pending {
                        if self.travelled >= self.spacing {
                            // Um den Überschuss entlang der aktuellen Sehne zurück
                            let overshoot = self.travelled - self.spacing;
                            let back = (self.previous - self.current).normalize_or_zero();
                            let point = self.current + back * overshoot;
                            self.travelled = overshoot;
                            self.previous = point;
                            return self.emit(point);
                        }
                        self.previous = self.current;
                        self.pending = false;
                    }
                    if !self.advance() {
                        self.stage = Stage::Finish;
                    }
                }
                Stage::Finish => {
                    self.stage = Stage::Done;
                    let end = self.curve.end_point();
                    if self.last_emitted.distance(end) > self.end_tolerance {
                        return self.emit(end);
                    }
                }
                Stage::Done => return None,
            }
        }
    }
}
