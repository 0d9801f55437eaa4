use egui::{Color32, Pos2};

use crate::color::parse_hex;
use crate::geometry::pixel_at;
use crate::surface::PixelSurface;

/// Bucket fill: replace the 4-connected region around `seed` that matches the seed's color.
///
/// Returns the number of pixels painted. An unparsable `fill_color` or a seed outside
/// the surface leaves the surface untouched.
pub fn flood_fill(surface: &mut PixelSurface, seed: Pos2, fill_color: &str) -> usize {
    let fill = match parse_hex(fill_color) {
        Ok(color) => color,
        Err(err) => {
            log::debug!("Skipping fill: {err}");
            return 0;
        }
    };
    let (x, y) = pixel_at(seed);
    fill_region(surface, x, y, fill)
}

/// Seed fill on integer pixel coordinates with an already parsed color.
pub fn fill_region(surface: &mut PixelSurface, x: i64, y: i64, fill: Color32) -> usize {
    let Some(target) = surface.get(x, y) else {
        log::debug!("Skipping fill: seed ({x}, {y}) is outside the surface");
        return 0;
    };
    // Re-painting the target color would never leave the target set.
    if target == fill {
        return 0;
    }

    let mut painted = 0;
    let mut stack = vec![(x, y)];
    while let Some((x, y)) = stack.pop() {
        if surface.get(x, y) != Some(target) {
            continue;
        }
        surface.set(x, y, fill);
        painted += 1;
        stack.extend([(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]);
    }

    log::debug!("Filled {painted} pixels from ({x}, {y})");
    painted
}
