use egui::{Color32, ColorImage};

use crate::error::{PaintError, PaintResult};

/// Immutable copy of the full pixel grid at a point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    image: ColorImage,
}

impl Snapshot {
    pub fn size(&self) -> [usize; 2] {
        self.image.size
    }

    pub fn pixels(&self) -> &[Color32] {
        &self.image.pixels
    }
}

/// The raster bitmap every freehand tool, fill and spray writes into.
///
/// Width and height are fixed at creation. Every mutation bumps `version` so the
/// renderer knows when to re-upload the texture.
#[derive(Clone, Debug)]
pub struct PixelSurface {
    image: ColorImage,
    version: u64,
}

impl PixelSurface {
    /// Create a surface filled with `fill`.
    pub fn new(width: usize, height: usize, fill: Color32) -> PaintResult<Self> {
        if width == 0 || height == 0 {
            return Err(PaintError::InvalidSurfaceSize { width, height });
        }
        Ok(Self {
            image: ColorImage::new([width, height], fill),
            version: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.image.size[0]
    }

    pub fn height(&self) -> usize {
        self.image.size[1]
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// The backing image, ready to be uploaded as a texture.
    pub fn image(&self) -> &ColorImage {
        &self.image
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(y * self.width() + x)
    }

    /// Read a pixel; `None` outside the surface.
    pub fn get(&self, x: i64, y: i64) -> Option<Color32> {
        self.index(x, y).map(|i| self.image.pixels[i])
    }

    /// Write a pixel. Writes outside the surface are dropped and return `false`.
    pub fn set(&mut self, x: i64, y: i64, color: Color32) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.image.pixels[i] = color;
                self.version = self.version.wrapping_add(1);
                true
            }
            None => false,
        }
    }

    /// Deep copy of the current grid.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            image: self.image.clone(),
        }
    }

    /// Overwrite the whole grid from `snapshot`.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.size() != self.image.size {
            log::warn!(
                "Ignoring restore from a {:?} snapshot onto a {:?} surface",
                snapshot.size(),
                self.image.size
            );
            return;
        }
        self.image.pixels.copy_from_slice(snapshot.pixels());
        self.version = self.version.wrapping_add(1);
    }

    /// Set every pixel to `fill`.
    pub fn clear(&mut self, fill: Color32) {
        self.image.pixels.fill(fill);
        self.version = self.version.wrapping_add(1);
    }

    /// Flatten to straight-alpha RGBA8 bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.image
            .pixels
            .iter()
            .flat_map(|c| c.to_srgba_unmultiplied())
            .collect()
    }
}
