//! Integrationstests für die Kurven-Operationen über die öffentliche API:
//! - Anker-/Steuerpunkt-Verschiebung mit Stetigkeit
//! - Segment anhängen/entfernen, Schließen/Öffnen
//! - Auto-Steuerpunkte und Resampling

use approx::assert_relative_eq;
use bezier_path_editor::{Curve, CurveError, IndexUnit, END_POINT_TOLERANCE};
use glam::Vec3;

fn close(a: Vec3, b: Vec3) -> bool {
    a.abs_diff_eq(b, 1e-5)
}

// ─── Szenario: Segment anhängen, geteilten Anker verschieben ─────────────────

#[test]
fn test_add_segment_then_move_shared_anchor() {
    let mut curve = Curve::new(Vec3::ZERO);
    curve.add_segment(Vec3::new(3.0, 0.0, 0.0));

    assert_eq!(curve.points_count(), 7);
    assert_eq!(curve.segments_count(), 2);

    let before: Vec<Vec3> = curve.points().to_vec();
    let target = Vec3::new(1.0, 1.0, 0.0);
    curve.move_point(3, target).expect("Anker 3 existiert");

    let delta = target - before[3];
    assert!(close(curve.points()[2], before[2] + delta));
    assert!(close(curve.points()[4], before[4] + delta));
}

#[test]
fn test_anchor_move_keeps_handle_offsets_for_every_anchor() {
    let mut curve = Curve::new(Vec3::ZERO);
    curve.add_segment(Vec3::new(3.0, 1.0, 0.0));
    curve.add_segment(Vec3::new(5.0, -1.0, 2.0));

    for anchor in (0..curve.points_count()).step_by(3) {
        let before: Vec<Vec3> = curve.points().to_vec();
        let target = before[anchor] + Vec3::new(0.25, -0.5, 1.0);
        curve.move_point(anchor, target).expect("gültiger Anker");

        assert_eq!(curve.points_count(), before.len());
        for neighbour in [anchor.wrapping_sub(1), anchor + 1] {
            if neighbour < before.len() {
                let old_offset = before[neighbour] - before[anchor];
                let new_offset = curve.points()[neighbour] - curve.points()[anchor];
                assert!(close(old_offset, new_offset));
            }
        }
    }
}

#[test]
fn test_control_reflection_makes_anchor_the_midpoint() {
    let mut curve = Curve::new(Vec3::ZERO);
    curve.add_segment(Vec3::new(3.0, 0.0, 0.0));
    curve.add_segment(Vec3::new(6.0, 0.0, 0.0));

    for index in [4, 7] {
        curve
            .move_point(index, Vec3::new(index as f32, 2.0, -1.0))
            .expect("gültiger Index");
        let p = curve.points();
        assert!(close((p[index] + p[index - 2]) * 0.5, p[index - 1]));
    }
    for index in [2, 5] {
        curve
            .move_point(index, Vec3::new(index as f32, -2.0, 1.0))
            .expect("gültiger Index");
        let p = curve.points();
        assert!(close((p[index] + p[index + 2]) * 0.5, p[index + 1]));
    }
}

// ─── Round-Trips ─────────────────────────────────────────────────────────────

#[test]
fn test_add_remove_roundtrip_restores_curve() {
    let mut curve = Curve::new(Vec3::new(2.0, 0.0, 0.0));
    curve.add_segment(Vec3::new(5.0, 1.0, 0.0));
    let before = curve.clone();

    curve.add_segment(Vec3::new(8.0, 0.0, 3.0));
    curve
        .remove_segment(curve.segments_count() - 1)
        .expect("letztes Segment");

    assert_eq!(curve, before);
}

#[test]
fn test_close_open_roundtrip_restores_curve() {
    let mut curve = Curve::new(Vec3::ZERO);
    curve.add_segment(Vec3::new(0.0, 3.0, 0.0));
    let before = curve.clone();

    curve.set_closed(true);
    assert_eq!(curve.points_count() % 3, 0);
    curve.set_closed(false);

    assert_eq!(curve, before);
}

// ─── Auto-Steuerpunkte ───────────────────────────────────────────────────────

#[test]
fn test_auto_set_colinear_anchors() {
    let mut curve = Curve::new(Vec3::ZERO);
    curve.move_point(0, Vec3::ZERO).expect("Anker 0");
    curve.move_point(3, Vec3::new(2.0, 0.0, 0.0)).expect("Anker 3");
    curve.add_segment(Vec3::new(4.0, 0.0, 0.0));
    // Steuerpunkte aus der Achse schieben
    curve.move_point(1, Vec3::new(0.5, 2.0, 1.0)).expect("Steuerpunkt 1");
    curve.move_point(4, Vec3::new(2.5, -1.0, 0.0)).expect("Steuerpunkt 4");

    curve.set_auto_set_control_points(true);

    for point in curve.points() {
        assert_relative_eq!(point.y, 0.0);
        assert_relative_eq!(point.z, 0.0);
    }
    assert!(close(curve.points()[0], Vec3::ZERO));
    assert!(close(curve.points()[3], Vec3::new(2.0, 0.0, 0.0)));
    assert!(close(curve.points()[6], Vec3::new(4.0, 0.0, 0.0)));
}

// ─── Fehlerfälle ─────────────────────────────────────────────────────────────

#[test]
fn test_get_points_count_is_out_of_range() {
    let mut curve = Curve::new(Vec3::ZERO);
    for _ in 0..3 {
        let count = curve.points_count();
        assert!(matches!(
            curve.get(count),
            Err(CurveError::IndexOutOfRange {
                unit: IndexUnit::Point,
                ..
            })
        ));
        curve.add_segment(Vec3::new(count as f32, 1.0, 0.0));
    }
}

#[test]
fn test_error_messages_are_readable() {
    let curve = Curve::new(Vec3::ZERO);
    let err = curve.get(10).unwrap_err();
    assert_eq!(err.to_string(), "Punkt-Index 10 liegt außerhalb von 0..4");
}

// ─── Resampling ──────────────────────────────────────────────────────────────

#[test]
fn test_points_on_curve_start_at_first_point_and_end_at_last_anchor() {
    let mut curve = Curve::new(Vec3::new(0.0, 0.0, 1.0));
    curve.add_segment(Vec3::new(4.0, 2.0, 1.0));
    curve.add_segment(Vec3::new(6.0, -3.0, 0.0));

    let points: Vec<Vec3> = curve.calculate_points_on_curve(25).collect();
    assert_eq!(points[0], curve.points()[0]);
    assert!(points.last().unwrap().distance(Vec3::new(6.0, -3.0, 0.0)) <= END_POINT_TOLERANCE);
}

#[test]
fn test_points_on_curve_spacing_is_roughly_uniform() {
    let mut curve = Curve::new(Vec3::ZERO);
    curve.add_segment(Vec3::new(3.0, 0.0, 0.0));

    let sampler = curve.calculate_points_on_curve(40);
    let spacing = sampler.spacing();
    let points: Vec<Vec3> = sampler.collect();

    // Abstand gemessen entlang der Sehnen; letzter Abschnitt kann kürzer sein
    for pair in points[..points.len() - 1].windows(2) {
        let d = pair[0].distance(pair[1]);
        assert!(d <= spacing + 1e-3, "Abstand {} > {}", d, spacing);
        assert!(d >= spacing * 0.8, "Abstand {} << {}", d, spacing);
    }
}
