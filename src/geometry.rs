use egui::{Pos2, Rect};

/// Distance from `point` to the segment `start..end`.
pub fn distance_to_line_segment(point: Pos2, start: Pos2, end: Pos2) -> f32 {
    let line = end - start;
    let len_sq = line.length_sq();
    if len_sq == 0.0 {
        return point.distance(start);
    }

    let t = ((point - start).dot(line) / len_sq).clamp(0.0, 1.0);
    point.distance(start + line * t)
}

/// Bounding box of a set of points, `Rect::NOTHING` when empty.
pub fn calculate_bounds(points: &[Pos2]) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }
    Rect::from_points(points)
}

/// Point at fraction `t` along `a..b`.
pub fn lerp(a: Pos2, b: Pos2, t: f32) -> Pos2 {
    a + (b - a) * t
}

/// Integer pixel containing a canvas-space position.
pub fn pixel_at(pos: Pos2) -> (i64, i64) {
    (pos.x.floor() as i64, pos.y.floor() as i64)
}

/// Sample point (center) of pixel `(x, y)`.
pub fn pixel_center(x: i64, y: i64) -> Pos2 {
    Pos2::new(x as f32 + 0.5, y as f32 + 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn distance_projects_onto_segment_interior() {
        let d = distance_to_line_segment(pos2(5.0, 3.0), pos2(0.0, 0.0), pos2(10.0, 0.0));
        assert!((d - 3.0).abs() < 1e-6);
    }

    #[test]
    fn distance_clamps_to_endpoints() {
        let d = distance_to_line_segment(pos2(13.0, 4.0), pos2(0.0, 0.0), pos2(10.0, 0.0));
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_segment_is_a_point() {
        let d = distance_to_line_segment(pos2(3.0, 4.0), pos2(0.0, 0.0), pos2(0.0, 0.0));
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn bounds_cover_all_points() {
        let rect = calculate_bounds(&[pos2(10.0, 40.0), pos2(50.0, 10.0), pos2(20.0, 20.0)]);
        assert_eq!(rect, Rect::from_min_max(pos2(10.0, 10.0), pos2(50.0, 40.0)));
        assert_eq!(calculate_bounds(&[]), Rect::NOTHING);
    }

    #[test]
    fn pixel_lookup_floors_negative_positions() {
        assert_eq!(pixel_at(pos2(-0.5, 2.9)), (-1, 2));
        assert_eq!(pixel_center(0, 0), pos2(0.5, 0.5));
    }
}
