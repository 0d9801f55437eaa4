//! The drawing engine: owns the raster, its last snapshot, the shape list and the text
//! boxes, and routes pointer events to the renderer for the active tool.

use std::path::Path;

use egui::Pos2;
use image::{ImageFormat, RgbaImage};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::color::BACKGROUND;
use crate::error::{PaintError, PaintResult};
use crate::fill::flood_fill;
use crate::input::InputEvent;
use crate::shape::{Shape, ShapeKind, ShapeOverlay};
use crate::spray::spray;
use crate::stroke::{FreehandTool, LineStyle, StrokeRenderer};
use crate::surface::{PixelSurface, Snapshot};
use crate::text::TextOverlay;
use crate::tools::{ToolKind, ToolSettings};

/// File name the save action writes to.
pub const EXPORT_FILE_NAME: &str = "slipe-creation.png";

/// What the active gesture is doing between press and release.
#[derive(Debug, Clone)]
enum GestureKind {
    Freehand(FreehandTool, StrokeRenderer),
    Spray,
    Shape(ShapeKind),
    /// Bucket and text act on press only.
    Tap,
}

#[derive(Debug, Clone)]
struct Gesture {
    start: Pos2,
    kind: GestureKind,
}

pub struct Canvas {
    surface: PixelSurface,
    snapshot: Snapshot,
    shapes: ShapeOverlay,
    text: TextOverlay,
    gesture: Option<Gesture>,
    rng: StdRng,
}

impl Canvas {
    /// Create a white canvas of the given viewport size.
    pub fn new(width: usize, height: usize) -> PaintResult<Self> {
        Self::with_rng(width, height, StdRng::from_os_rng())
    }

    /// Like [`Canvas::new`] with an explicit random source for the spray tool.
    pub fn with_rng(width: usize, height: usize, rng: StdRng) -> PaintResult<Self> {
        let surface = PixelSurface::new(width, height, BACKGROUND)?;
        let snapshot = surface.snapshot();
        log::info!("Created {width}x{height} canvas");
        Ok(Self {
            surface,
            snapshot,
            shapes: ShapeOverlay::new(),
            text: TextOverlay::new(),
            gesture: None,
            rng,
        })
    }

    /// Convenience for tests and tools that want reproducible spray output.
    pub fn with_seed(width: usize, height: usize, seed: u64) -> PaintResult<Self> {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    /// The raster as of the last completed gesture.
    pub fn last_snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn shapes(&self) -> &[Shape] {
        self.shapes.shapes()
    }

    pub fn text(&self) -> &TextOverlay {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut TextOverlay {
        &mut self.text
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.is_some()
    }

    fn take_snapshot(&mut self) {
        self.snapshot = self.surface.snapshot();
    }

    /// Restore the last snapshot and stroke every shape on top of it.
    fn recompose(&mut self) {
        self.shapes.render(&mut self.surface, &self.snapshot);
    }

    pub fn handle_event(&mut self, event: &InputEvent, settings: &ToolSettings) {
        match *event {
            InputEvent::PointerDown { position } => self.pointer_down(position, settings),
            InputEvent::PointerMove { position } => self.pointer_move(position, settings),
            InputEvent::PointerUp { position } => self.pointer_up(position, settings),
            InputEvent::PointerLeave { last_known_position } => {
                self.pointer_up(last_known_position, settings)
            }
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2, settings: &ToolSettings) {
        if self.gesture.is_some() {
            // A press without a release; finish the old gesture first.
            self.pointer_up(pos, settings);
        }
        log::debug!("{} down at {pos:?}", settings.tool);

        let kind = if let Some(tool) = settings.tool.freehand() {
            GestureKind::Freehand(tool, StrokeRenderer::begin(pos))
        } else {
            match &settings.tool {
                ToolKind::Bucket => {
                    flood_fill(&mut self.surface, pos, &settings.color);
                    GestureKind::Tap
                }
                ToolKind::Spray => {
                    spray(&mut self.surface, pos, &settings.color, settings.size, &mut self.rng);
                    GestureKind::Spray
                }
                ToolKind::Text => {
                    let id = self.text.add(pos);
                    log::debug!("Added text box {id}");
                    GestureKind::Tap
                }
                ToolKind::Shape(kind) => GestureKind::Shape(*kind),
                other => {
                    log::debug!("Ignoring pointer for tool {:?}", other.name());
                    return;
                }
            }
        };

        self.take_snapshot();
        if let GestureKind::Shape(kind) = kind {
            self.shapes
                .begin(Shape::point(kind, pos, settings.color.clone(), settings.size as f32));
            self.recompose();
        }
        self.gesture = Some(Gesture { start: pos, kind });
    }

    pub fn pointer_move(&mut self, pos: Pos2, settings: &ToolSettings) {
        let Some(gesture) = &mut self.gesture else {
            return;
        };

        match &mut gesture.kind {
            GestureKind::Freehand(tool, stroke) => {
                let style = match LineStyle::for_tool(*tool, &settings.color, settings.size) {
                    Ok(style) => Some(style),
                    Err(err) => {
                        log::debug!("Not painting stroke segment: {err}");
                        None
                    }
                };
                stroke.extend_to(&mut self.surface, pos, style.as_ref());
            }
            GestureKind::Spray => {
                spray(&mut self.surface, pos, &settings.color, settings.size, &mut self.rng);
            }
            GestureKind::Shape(kind) => {
                let shape = Shape::new(*kind, gesture.start, pos, settings.color.clone(), settings.size as f32);
                self.shapes.update_live(shape);
                self.shapes.render(&mut self.surface, &self.snapshot);
            }
            GestureKind::Tap => {}
        }
    }

    pub fn pointer_up(&mut self, pos: Pos2, settings: &ToolSettings) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        log::debug!("{} up at {pos:?}", settings.tool);

        match gesture.kind {
            GestureKind::Shape(kind) => {
                let live = self.shapes.live().cloned();
                let (color, width) = live
                    .map(|s| (s.color, s.width))
                    .unwrap_or_else(|| (settings.color.clone(), settings.size as f32));
                self.shapes.finish(Shape::point(kind, gesture.start, color, width));
                self.recompose();
                self.take_snapshot();
            }
            GestureKind::Freehand(..) | GestureKind::Spray => self.take_snapshot(),
            GestureKind::Tap => {}
        }
    }

    /// Wipe the surface to white and drop every shape and text box.
    pub fn clear(&mut self) {
        self.gesture = None;
        self.shapes.clear();
        self.text.clear();
        self.surface.clear(BACKGROUND);
        self.take_snapshot();
        log::info!("Cleared canvas");
    }

    /// Flatten the surface to a PNG at `path`.
    pub fn export(&self, path: impl AsRef<Path>) -> PaintResult<()> {
        let path = path.as_ref();
        let image = RgbaImage::from_raw(
            self.surface.width() as u32,
            self.surface.height() as u32,
            self.surface.to_rgba8(),
        )
        .ok_or(PaintError::BufferSize)?;
        image.save_with_format(path, ImageFormat::Png)?;
        log::info!("Exported canvas to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Color32, pos2};

    fn settings(tool: &str, size: u32) -> ToolSettings {
        ToolSettings::new(ToolKind::parse(tool), "#FF0000", size)
    }

    #[test]
    fn unknown_tool_is_inert() {
        let mut canvas = Canvas::with_seed(20, 20, 0).unwrap();
        let before = canvas.surface().snapshot();
        let tool = settings("image", 5);

        canvas.pointer_down(pos2(5.0, 5.0), &tool);
        canvas.pointer_move(pos2(10.0, 10.0), &tool);
        canvas.pointer_up(pos2(10.0, 10.0), &tool);

        assert!(!canvas.is_drawing());
        assert_eq!(canvas.surface().snapshot(), before);
        assert!(canvas.shapes().is_empty());
    }

    #[test]
    fn freehand_tools_start_a_stroke() {
        for name in ["pencil", "brush", "eraser"] {
            let mut canvas = Canvas::with_seed(20, 20, 0).unwrap();
            canvas.pointer_down(pos2(5.0, 5.0), &settings(name, 4));
            match &canvas.gesture {
                Some(Gesture {
                    kind: GestureKind::Freehand(tool, _),
                    ..
                }) => assert_eq!(Some(*tool), ToolKind::parse(name).freehand()),
                other => panic!("{name} started {other:?}"),
            }
        }
    }

    #[test]
    fn release_without_press_does_nothing() {
        let mut canvas = Canvas::with_seed(20, 20, 0).unwrap();
        canvas.pointer_up(pos2(5.0, 5.0), &settings("rectangle", 2));
        assert!(canvas.shapes().is_empty());
    }

    #[test]
    fn bucket_snapshots_after_fill() {
        let mut canvas = Canvas::with_seed(10, 10, 0).unwrap();
        let tool = settings("bucket", 1);
        canvas.pointer_down(pos2(3.0, 3.0), &tool);
        canvas.pointer_up(pos2(3.0, 3.0), &tool);

        assert_eq!(canvas.last_snapshot().pixels()[0], Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn moves_are_ignored_when_idle() {
        let mut canvas = Canvas::with_seed(10, 10, 0).unwrap();
        let before = canvas.surface().snapshot();
        canvas.pointer_move(pos2(3.0, 3.0), &settings("brush", 4));
        assert_eq!(canvas.surface().snapshot(), before);
    }

    #[test]
    fn leave_event_finishes_like_release() {
        let mut canvas = Canvas::with_seed(50, 50, 0).unwrap();
        let tool = settings("line", 2);
        canvas.handle_event(&InputEvent::PointerDown { position: pos2(5.0, 5.0) }, &tool);
        canvas.handle_event(&InputEvent::PointerMove { position: pos2(40.0, 5.0) }, &tool);
        canvas.handle_event(
            &InputEvent::PointerLeave {
                last_known_position: pos2(60.0, 5.0),
            },
            &tool,
        );

        assert!(!canvas.is_drawing());
        assert_eq!(canvas.shapes().len(), 2);
        assert_eq!(canvas.shapes()[0].end, pos2(40.0, 5.0));
        assert_eq!(canvas.last_snapshot().pixels()[5 * 50 + 20], Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn text_tool_adds_boxes_without_touching_pixels() {
        let mut canvas = Canvas::with_seed(30, 30, 0).unwrap();
        let before = canvas.surface().snapshot();
        let tool = settings("text", 5);

        canvas.pointer_down(pos2(4.0, 6.0), &tool);
        canvas.pointer_up(pos2(4.0, 6.0), &tool);
        canvas.pointer_down(pos2(8.0, 9.0), &tool);
        canvas.pointer_up(pos2(8.0, 9.0), &tool);

        let ids: Vec<u64> = canvas.text().boxes().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(canvas.surface().snapshot(), before);
    }
}
