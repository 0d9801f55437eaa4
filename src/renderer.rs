// src/renderer.rs
use eframe::egui::{self, Color32, TextureHandle, TextureOptions};

use crate::surface::PixelSurface;

/// Keeps the canvas texture in sync with the pixel surface.
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    // Surface version the texture was last built from
    uploaded_version: Option<u64>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the next `render` call will re-upload the surface.
    pub fn needs_upload(&self, surface: &PixelSurface) -> bool {
        self.texture.is_none() || self.uploaded_version != Some(surface.version())
    }

    /// Paint the surface into `rect`, uploading it first if it changed.
    ///
    /// Args:
    ///     ctx (egui::Context): The egui context owning the texture
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): Screen rectangle the canvas occupies
    ///     surface (PixelSurface): The raster to show
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: egui::Rect,
        surface: &PixelSurface,
    ) {
        if self.needs_upload(surface) {
            let image = surface.image().clone();
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
                }
            }
            self.uploaded_version = Some(surface.version());
        }

        if let Some(texture) = &self.texture {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
    }
}
