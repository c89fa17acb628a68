//! Zustandslose Bézier-Auswertung per De-Casteljau (wiederholtes lineares Interpolieren).
//!
//! `t` wird bewusst nicht geklemmt: Werte außerhalb von [0, 1] extrapolieren
//! entlang der Lerp-Formel.

use glam::Vec3;

/// Punkt auf einem quadratischen Segment: `lerp(lerp(a, b, t), lerp(b, c, t), t)`.
pub fn eval_quadratic(a: Vec3, b: Vec3, c: Vec3, t: f32) -> Vec3 {
    let p0 = a.lerp(b, t);
    let p1 = b.lerp(c, t);
    p0.lerp(p1, t)
}

/// Punkt auf einem kubischen Segment, aufgebaut aus zwei quadratischen Auswertungen.
pub fn eval_cubic(a: Vec3, b: Vec3, c: Vec3, d: Vec3, t: f32) -> Vec3 {
    let p0 = eval_quadratic(a, b, c, t);
    let p1 = eval_quadratic(b, c, d, t);
    p0.lerp(p1, t)
}

/// Kubische Auswertung für die vier Punkte eines Segments.
pub fn eval_segment(segment: &[Vec3; 4], t: f32) -> Vec3 {
    eval_cubic(segment[0], segment[1], segment[2], segment[3], t)
}

/// Geschätzte Segmentlänge: Sehne plus halbes Kontrollpolygon.
///
/// Liegt zwischen Sehne und Kontrollpolygon; kein exakter Bogenlängenwert.
pub fn estimated_segment_length(segment: &[Vec3; 4]) -> f32 {
    let control_net = segment[0].distance(segment[1])
        + segment[1].distance(segment[2])
        + segment[2].distance(segment[3]);
    segment[0].distance(segment[3]) + control_net * 0.5
}
