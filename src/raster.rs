//! Coverage rasterizer used by the stroke renderer and the shape overlay.
//!
//! A pixel is painted when its center lies inside the stroked geometry. Writes are opaque
//! and clip to the surface.

use egui::{Color32, Pos2, Vec2, vec2};

use crate::geometry::{calculate_bounds, distance_to_line_segment, lerp, pixel_center};
use crate::surface::PixelSurface;

/// Joins sharper than this ratio of miter length to line width are beveled.
const MITER_LIMIT: f32 = 10.0;

/// Half-width used for coverage; thin lines still cover one pixel.
fn coverage_radius(width: f32) -> f32 {
    (width / 2.0).max(0.5)
}

/// Inclusive range of pixel indices whose centers fall inside `[lo, hi]`, clipped to `0..limit`.
fn pixel_span(lo: f32, hi: f32, limit: usize) -> Option<(i64, i64)> {
    if !lo.is_finite() || !hi.is_finite() {
        return None;
    }
    let first = ((lo - 0.5).ceil() as i64).max(0);
    let last = ((hi - 0.5).floor() as i64).min(limit as i64 - 1);
    (first <= last).then_some((first, last))
}

/// Paint a round-capped segment of the given width.
pub fn stamp_segment(surface: &mut PixelSurface, a: Pos2, b: Pos2, width: f32, color: Color32) {
    let r = coverage_radius(width);
    let Some((x0, x1)) = pixel_span(a.x.min(b.x) - r, a.x.max(b.x) + r, surface.width()) else {
        return;
    };
    let Some((y0, y1)) = pixel_span(a.y.min(b.y) - r, a.y.max(b.y) + r, surface.height()) else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            if distance_to_line_segment(pixel_center(x, y), a, b) <= r {
                surface.set(x, y, color);
            }
        }
    }
}

/// Paint the on-intervals of a dashed segment.
///
/// `phase` is the path length already travelled before `a`; the returned value is the
/// phase at `b`, so consecutive calls continue the same dash pattern.
pub fn stamp_dashed_segment(
    surface: &mut PixelSurface,
    a: Pos2,
    b: Pos2,
    width: f32,
    dash: f32,
    phase: f32,
    color: Color32,
) -> f32 {
    let len = a.distance(b);
    if len == 0.0 {
        return phase;
    }
    if dash <= 0.0 {
        stamp_segment(surface, a, b, width, color);
        return phase + len;
    }

    let period = dash * 2.0;
    let start = phase;
    let end = phase + len;
    let mut index = (start / period).floor();
    loop {
        let on_lo = index * period;
        if on_lo >= end {
            break;
        }
        let lo = on_lo.max(start);
        let hi = (on_lo + dash).min(end);
        if hi > lo {
            let from = lerp(a, b, (lo - start) / len);
            let to = lerp(a, b, (hi - start) / len);
            stamp_segment(surface, from, to, width, color);
        }
        index += 1.0;
    }
    end
}

fn cross(u: Vec2, v: Vec2) -> f32 {
    u.x * v.y - u.y * v.x
}

/// Paint a segment with flat ends at `a` and `b`.
fn stamp_butt_segment(surface: &mut PixelSurface, a: Pos2, b: Pos2, width: f32, color: Color32) {
    let line = b - a;
    let len_sq = line.length_sq();
    if len_sq == 0.0 {
        return;
    }
    let r = coverage_radius(width);
    let Some((x0, x1)) = pixel_span(a.x.min(b.x) - r, a.x.max(b.x) + r, surface.width()) else {
        return;
    };
    let Some((y0, y1)) = pixel_span(a.y.min(b.y) - r, a.y.max(b.y) + r, surface.height()) else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = pixel_center(x, y);
            let t = (p - a).dot(line) / len_sq;
            if (0.0..=1.0).contains(&t) && p.distance(a + line * t) <= r {
                surface.set(x, y, color);
            }
        }
    }
}

/// Fill a convex polygon given in either winding order.
fn fill_convex(surface: &mut PixelSurface, corners: &[Pos2], color: Color32) {
    let bounds = calculate_bounds(corners);
    let Some((x0, x1)) = pixel_span(bounds.min.x, bounds.max.x, surface.width()) else {
        return;
    };
    let Some((y0, y1)) = pixel_span(bounds.min.y, bounds.max.y, surface.height()) else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = pixel_center(x, y);
            let sides = corners
                .iter()
                .zip(corners.iter().cycle().skip(1))
                .map(|(a, b)| cross(*b - *a, p - *a));
            let (mut left, mut right) = (false, false);
            for side in sides {
                left |= side < 0.0;
                right |= side > 0.0;
            }
            if !(left && right) {
                surface.set(x, y, color);
            }
        }
    }
}

/// Fill the outer corner where the edges `prev..v` and `v..next` meet.
fn stamp_miter_join(surface: &mut PixelSurface, prev: Pos2, v: Pos2, next: Pos2, r: f32, color: Color32) {
    let d1 = (v - prev).normalized();
    let d2 = (next - v).normalized();
    let turn = cross(d1, d2);
    if turn.abs() < 1e-6 {
        return;
    }

    // Unit normals on the outside of the turn.
    let outer = |d: Vec2| if turn > 0.0 { vec2(d.y, -d.x) } else { vec2(-d.y, d.x) };
    let (n1, n2) = (outer(d1), outer(d2));
    let (a, b) = (v + n1 * r, v + n2 * r);

    let spread = 1.0 + n1.dot(n2);
    if spread <= 2.0 / (MITER_LIMIT * MITER_LIMIT) {
        fill_convex(surface, &[v, a, b], color);
        return;
    }
    let tip = v + (n1 + n2) * (r / spread);
    fill_convex(surface, &[v, a, tip, b], color);
}

/// Paint a closed outline with flat edges and miter joins.
fn stroke_closed_path(surface: &mut PixelSurface, points: &[Pos2], width: f32, color: Color32) {
    let mut path: Vec<Pos2> = Vec::with_capacity(points.len());
    for &p in points {
        if path.last() != Some(&p) {
            path.push(p);
        }
    }
    while path.len() > 1 && path.first() == path.last() {
        path.pop();
    }
    if path.len() < 2 {
        return;
    }

    let r = coverage_radius(width);
    let n = path.len();
    for i in 0..n {
        let (prev, v, next) = (path[(i + n - 1) % n], path[i], path[(i + 1) % n]);
        stamp_butt_segment(surface, v, next, width, color);
        stamp_miter_join(surface, prev, v, next, r, color);
    }
}

/// Paint a connected run of segments. Open runs get round caps and joins; closed runs
/// get square-cornered miter joins.
pub fn stroke_polyline(
    surface: &mut PixelSurface,
    points: &[Pos2],
    closed: bool,
    width: f32,
    color: Color32,
) {
    if closed {
        stroke_closed_path(surface, points, width, color);
        return;
    }
    for pair in points.windows(2) {
        stamp_segment(surface, pair[0], pair[1], width, color);
    }
}

/// Paint a circle outline.
pub fn stroke_ring(surface: &mut PixelSurface, center: Pos2, radius: f32, width: f32, color: Color32) {
    let r = coverage_radius(width);
    let radius = radius.abs();
    let reach = radius + r;
    let Some((x0, x1)) = pixel_span(center.x - reach, center.x + reach, surface.width()) else {
        return;
    };
    let Some((y0, y1)) = pixel_span(center.y - reach, center.y + reach, surface.height()) else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            let d = pixel_center(x, y).distance(center);
            if (d - radius).abs() <= r {
                surface.set(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn blank(w: usize, h: usize) -> PixelSurface {
        PixelSurface::new(w, h, Color32::WHITE).unwrap()
    }

    fn painted(surface: &PixelSurface) -> usize {
        surface.image().pixels.iter().filter(|c| **c != Color32::WHITE).count()
    }

    #[test]
    fn segment_respects_width() {
        let mut surface = blank(20, 20);
        stamp_segment(&mut surface, pos2(2.0, 10.0), pos2(18.0, 10.0), 4.0, Color32::RED);

        // Rows 8..=11 have centers within 2.0 of y = 10.
        for y in 8..=11 {
            assert_eq!(surface.get(10, y), Some(Color32::RED), "row {y}");
        }
        assert_eq!(surface.get(10, 7), Some(Color32::WHITE));
        assert_eq!(surface.get(10, 12), Some(Color32::WHITE));
    }

    #[test]
    fn segment_clips_to_surface() {
        let mut surface = blank(5, 5);
        stamp_segment(&mut surface, pos2(-50.0, 2.5), pos2(50.0, 2.5), 1.0, Color32::RED);
        for x in 0..5 {
            assert_eq!(surface.get(x, 2), Some(Color32::RED));
        }
        assert_eq!(painted(&surface), 5);
    }

    #[test]
    fn dashes_alternate_and_carry_phase() {
        let mut surface = blank(40, 3);
        let phase = stamp_dashed_segment(
            &mut surface,
            pos2(0.0, 1.5),
            pos2(20.0, 1.5),
            1.0,
            4.0,
            0.0,
            Color32::RED,
        );
        assert_eq!(phase, 20.0);
        // First dash covers 0..4, gap 4..8, next dash 8..12.
        assert_eq!(surface.get(1, 1), Some(Color32::RED));
        assert_eq!(surface.get(6, 1), Some(Color32::WHITE));
        assert_eq!(surface.get(9, 1), Some(Color32::RED));

        // Continuing from phase 20 starts in a gap: 20..24 off, 24..28 on.
        stamp_dashed_segment(&mut surface, pos2(20.0, 1.5), pos2(30.0, 1.5), 1.0, 4.0, phase, Color32::BLUE);
        assert_eq!(surface.get(22, 1), Some(Color32::WHITE));
        assert_eq!(surface.get(25, 1), Some(Color32::BLUE));
        assert_eq!(surface.get(29, 1), Some(Color32::WHITE));
    }

    #[test]
    fn ring_leaves_center_untouched() {
        let mut surface = blank(30, 30);
        stroke_ring(&mut surface, pos2(15.0, 15.0), 10.0, 2.0, Color32::RED);
        assert_eq!(surface.get(15, 15), Some(Color32::WHITE));
        assert_eq!(surface.get(24, 14), Some(Color32::RED));
        assert_eq!(surface.get(14, 5), Some(Color32::RED));
    }

    #[test]
    fn closed_polyline_draws_closing_edge() {
        let mut surface = blank(20, 20);
        let points = [pos2(2.5, 2.5), pos2(15.5, 2.5), pos2(15.5, 15.5)];
        stroke_polyline(&mut surface, &points, true, 1.0, Color32::RED);
        // The closing diagonal runs back through (9, 9).
        assert_eq!(surface.get(9, 9), Some(Color32::RED));
    }

    #[test]
    fn closed_path_corners_are_square() {
        let mut surface = blank(40, 40);
        let square = [pos2(10.0, 10.0), pos2(30.0, 10.0), pos2(30.0, 30.0), pos2(10.0, 30.0)];
        stroke_polyline(&mut surface, &square, true, 6.0, Color32::RED);

        // The corner block reaches the full half width on both axes.
        assert_eq!(surface.get(7, 7), Some(Color32::RED));
        assert_eq!(surface.get(32, 32), Some(Color32::RED));
        assert_eq!(surface.get(6, 6), Some(Color32::WHITE));
        assert_eq!(surface.get(20, 20), Some(Color32::WHITE));
    }

    #[test]
    fn open_path_keeps_round_ends() {
        let mut surface = blank(40, 40);
        let corner = [pos2(10.0, 30.0), pos2(10.0, 10.0), pos2(30.0, 10.0)];
        stroke_polyline(&mut surface, &corner, false, 6.0, Color32::RED);

        // Round join: the diagonal corner pixel lies beyond the half width.
        assert_eq!(surface.get(7, 7), Some(Color32::WHITE));
        assert_eq!(surface.get(8, 8), Some(Color32::RED));
    }

    #[test]
    fn needle_sharp_join_is_beveled() {
        let mut surface = blank(80, 40);
        // Edges meeting at a very small angle at (70, 20).
        let sliver = [pos2(10.0, 19.0), pos2(70.0, 20.0), pos2(10.0, 21.0)];
        stroke_polyline(&mut surface, &sliver, true, 2.0, Color32::RED);

        assert_eq!(surface.get(69, 20), Some(Color32::RED));
        // An unlimited miter would extend roughly 60px past the tip.
        assert_eq!(surface.get(75, 20), Some(Color32::WHITE));
    }
}
