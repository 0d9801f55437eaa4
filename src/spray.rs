use egui::Pos2;
use rand::Rng;

use crate::color::parse_hex;
use crate::geometry::pixel_at;
use crate::surface::PixelSurface;

/// Number of samples drawn per spray call.
pub fn dab_attempts(size: u32) -> u32 {
    size * 2
}

/// Sample dab offsets for a spray of radius `size`.
///
/// Makes exactly `2 * size` attempts, each uniform over `[-size, size]²`, and keeps only
/// those inside the circle of radius `size`. The output is random on purpose: repeated
/// calls produce a stipple texture, not the same pattern twice. Pass a seeded generator
/// to reproduce a pattern.
pub fn sample_dabs<R: Rng + ?Sized>(size: u32, rng: &mut R) -> Vec<(i64, i64)> {
    let radius = i64::from(size);
    (0..dab_attempts(size))
        .filter_map(|_| {
            let dx = rng.random_range(-radius..=radius);
            let dy = rng.random_range(-radius..=radius);
            (dx * dx + dy * dy <= radius * radius).then_some((dx, dy))
        })
        .collect()
}

/// Paint one burst of 1x1 dabs around `center`. Returns the number of dabs that landed
/// on the surface.
pub fn spray<R: Rng + ?Sized>(
    surface: &mut PixelSurface,
    center: Pos2,
    color: &str,
    size: u32,
    rng: &mut R,
) -> usize {
    let color = match parse_hex(color) {
        Ok(color) => color,
        Err(err) => {
            log::debug!("Skipping spray: {err}");
            return 0;
        }
    };

    let (cx, cy) = pixel_at(center);
    sample_dabs(size, rng)
        .into_iter()
        .filter(|(dx, dy)| surface.set(cx + dx, cy + dy, color))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Color32, pos2};
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    #[test]
    fn dabs_stay_inside_the_circle() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in [1u32, 5, 17, 50] {
            let dabs = sample_dabs(size, &mut rng);
            let r = i64::from(size);
            assert!(dabs.len() <= 2 * size as usize);
            assert!(dabs.iter().all(|(dx, dy)| dx * dx + dy * dy <= r * r));
        }
    }

    #[test]
    fn seeded_generators_reproduce_the_pattern() {
        let a = sample_dabs(20, &mut StdRng::seed_from_u64(42));
        let b = sample_dabs(20, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn painted_count_is_bounded_by_attempts() {
        let mut surface = PixelSurface::new(64, 64, Color32::WHITE).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let painted = spray(&mut surface, pos2(32.0, 32.0), "#000000", 10, &mut rng);

        assert!(painted <= dab_attempts(10) as usize);
        let black = surface.image().pixels.iter().filter(|c| **c == Color32::BLACK).count();
        assert!(black <= painted);
        assert!(black > 0);
    }

    /// Counts every draw taken from the wrapped generator.
    struct CountingRng {
        inner: StdRng,
        draws: usize,
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            self.draws += 1;
            self.inner.fill_bytes(dst);
        }
    }

    #[test]
    fn each_call_makes_exactly_two_size_attempts() {
        for size in [1u32, 5, 17, 50] {
            let mut rng = CountingRng {
                inner: StdRng::seed_from_u64(u64::from(size)),
                draws: 0,
            };
            sample_dabs(size, &mut rng);
            // One draw per axis per attempt.
            assert_eq!(rng.draws, 2 * dab_attempts(size) as usize, "size {size}");
            assert_eq!(dab_attempts(size), 2 * size);
        }
    }

    #[test]
    fn dabs_off_the_edge_are_clipped() {
        let mut surface = PixelSurface::new(4, 4, Color32::WHITE).unwrap();
        let expected = sample_dabs(50, &mut StdRng::seed_from_u64(3))
            .into_iter()
            .filter(|(dx, dy)| (0..4).contains(dx) && (0..4).contains(dy))
            .count();

        let painted = spray(&mut surface, pos2(0.0, 0.0), "#000000", 50, &mut StdRng::seed_from_u64(3));
        assert_eq!(painted, expected);
    }

    #[test]
    fn invalid_color_paints_nothing() {
        let mut surface = PixelSurface::new(16, 16, Color32::WHITE).unwrap();
        let before = surface.snapshot();
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(spray(&mut surface, pos2(8.0, 8.0), "#12", 5, &mut rng), 0);
        assert_eq!(surface.snapshot(), before);
    }
}
