#![no_main]

//! Beliebige Command-Folgen dürfen nie paniken und müssen die
//! Punktanzahl-Invariante erhalten.

use bezier_path_editor::Curve;
use glam::Vec3;
use libfuzzer_sys::fuzz_target;

fn coord(byte: u8) -> f32 {
    (byte as f32 - 128.0) / 8.0
}

fuzz_target!(|data: &[u8]| {
    let mut curve = Curve::new(Vec3::ZERO);

    for chunk in data.chunks_exact(5) {
        let position = Vec3::new(coord(chunk[2]), coord(chunk[3]), coord(chunk[4]));
        let index = chunk[1] as usize;
        match chunk[0] % 7 {
            0 => curve.add_segment(position),
            1 => {
                let _ = curve.remove_segment(index % (curve.segments_count() + 1));
            }
            2 => {
                let _ = curve.move_point(index % (curve.points_count() + 1), position);
            }
            3 => {
                let _ = curve.move_segment_point(index % 4, index % 5, position);
            }
            4 => curve.set_closed(!curve.is_closed()),
            5 => curve.set_auto_set_control_points(!curve.is_auto_set_control_points()),
            _ => {
                let _ = curve.calculate_points_on_curve(index % 64).take(10_000).count();
            }
        }

        let remainder = if curve.is_closed() { 0 } else { 1 };
        assert_eq!(curve.points_count() % 3, remainder);
        assert!(curve.segments_count() >= 1);
    }
});
