use egui::{Color32, Pos2};

use crate::color::{BACKGROUND, parse_hex};
use crate::error::PaintResult;
use crate::raster::{stamp_dashed_segment, stamp_segment};
use crate::surface::PixelSurface;

/// The tools that draw by dragging an open path across the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreehandTool {
    Pencil,
    Brush,
    Eraser,
}

/// How one freehand segment is composited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Color32,
    pub width: f32,
    /// Dash and gap length, `None` for a solid line.
    pub dash: Option<f32>,
}

impl LineStyle {
    /// Resolve the style a tool uses at the given brush size.
    ///
    /// Pencil: dashed, half width, dash length = size. Brush: solid, full width.
    /// Eraser: solid, full width, background color (the requested color is ignored).
    pub fn for_tool(tool: FreehandTool, color: &str, size: u32) -> PaintResult<Self> {
        let size = size as f32;
        Ok(match tool {
            FreehandTool::Pencil => Self {
                color: parse_hex(color)?,
                width: size / 2.0,
                dash: Some(size),
            },
            FreehandTool::Brush => Self {
                color: parse_hex(color)?,
                width: size,
                dash: None,
            },
            FreehandTool::Eraser => Self {
                color: BACKGROUND,
                width: size,
                dash: None,
            },
        })
    }
}

/// An open freehand path, composited segment by segment as it grows.
#[derive(Debug, Clone)]
pub struct StrokeRenderer {
    points: Vec<Pos2>,
    /// Path length so far; keeps the dash pattern continuous across segments.
    travelled: f32,
}

impl StrokeRenderer {
    /// Start a path at `start`. Nothing is drawn until the path is extended.
    pub fn begin(start: Pos2) -> Self {
        Self {
            points: vec![start],
            travelled: 0.0,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    /// Extend the path to `to` and draw the new segment with `style`.
    ///
    /// A `None` style still extends the path but paints nothing.
    pub fn extend_to(&mut self, surface: &mut PixelSurface, to: Pos2, style: Option<&LineStyle>) {
        let from = *self.points.last().unwrap_or(&to);
        self.points.push(to);

        let Some(style) = style else {
            self.travelled += from.distance(to);
            return;
        };
        match style.dash {
            Some(dash) => {
                self.travelled =
                    stamp_dashed_segment(surface, from, to, style.width, dash, self.travelled, style.color);
            }
            None => {
                stamp_segment(surface, from, to, style.width, style.color);
                self.travelled += from.distance(to);
            }
        }
    }
}
