use std::f32::consts::{PI, TAU};
use std::fmt;

use egui::{Pos2, Rect, pos2, vec2};

use crate::color::parse_hex;
use crate::geometry::calculate_bounds;
use crate::raster::{stroke_polyline, stroke_ring};
use crate::surface::{PixelSurface, Snapshot};

/// Width used when a shape carries no usable stroke width.
pub const DEFAULT_SHAPE_WIDTH: f32 = 2.0;

const STAR_SPIKES: usize = 5;

/// The nine vector shapes the overlay can construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
    Star,
    Hexagon,
    Line,
    Octagon,
    Pentagon,
    Diamond,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 9] = [
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Star,
        ShapeKind::Hexagon,
        ShapeKind::Line,
        ShapeKind::Octagon,
        ShapeKind::Pentagon,
        ShapeKind::Diamond,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Star => "star",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Line => "line",
            ShapeKind::Octagon => "octagon",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Diamond => "diamond",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stroked vector shape defined by two corner points.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub start: Pos2,
    pub end: Pos2,
    /// `#RRGGBB`; shapes with an unparsable color are skipped when rendering.
    pub color: String,
    pub width: f32,
}

/// Constructed outline of a shape, ready to be stroked.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    Polyline { points: Vec<Pos2>, closed: bool },
    Circle { center: Pos2, radius: f32 },
}

impl Outline {
    /// Geometric bounds of the path itself, excluding stroke width.
    pub fn bounds(&self) -> Rect {
        match self {
            Outline::Polyline { points, .. } => calculate_bounds(points),
            Outline::Circle { center, radius } => {
                Rect::from_center_size(*center, vec2(radius.abs(), radius.abs()) * 2.0)
            }
        }
    }

    pub fn stroke(&self, surface: &mut PixelSurface, width: f32, color: egui::Color32) {
        match self {
            Outline::Polyline { points, closed } => stroke_polyline(surface, points, *closed, width, color),
            Outline::Circle { center, radius } => stroke_ring(surface, *center, *radius, width, color),
        }
    }
}

/// Regular polygon centered at `center`, first vertex at angle zero.
fn regular_polygon(center: Pos2, sides: usize, radius: f32) -> Vec<Pos2> {
    (0..sides)
        .map(|i| {
            let angle = i as f32 * TAU / sides as f32;
            pos2(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

/// Star alternating outer and inner radius, first spike pointing straight up.
fn star(center: Pos2, spikes: usize, outer: f32, inner: f32) -> Vec<Pos2> {
    let step = PI / spikes as f32;
    (0..spikes * 2)
        .map(|i| {
            let angle = PI * 1.5 + i as f32 * step;
            let radius = if i % 2 == 0 { outer } else { inner };
            pos2(center.x + angle.cos() * radius, center.y + angle.sin() * radius)
        })
        .collect()
}

impl Shape {
    pub fn new(kind: ShapeKind, start: Pos2, end: Pos2, color: impl Into<String>, width: f32) -> Self {
        Self {
            kind,
            start,
            end,
            color: color.into(),
            width,
        }
    }

    /// Zero-size shape anchored at `at`.
    pub fn point(kind: ShapeKind, at: Pos2, color: impl Into<String>, width: f32) -> Self {
        Self::new(kind, at, at, color, width)
    }

    /// Start and end coincide; such shapes render nothing.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    pub fn stroke_width(&self) -> f32 {
        if self.width > 0.0 { self.width } else { DEFAULT_SHAPE_WIDTH }
    }

    pub fn outline(&self) -> Outline {
        let (s, e) = (self.start, self.end);
        let closed = |points: Vec<Pos2>| Outline::Polyline { points, closed: true };
        match self.kind {
            ShapeKind::Rectangle => closed(vec![s, pos2(e.x, s.y), e, pos2(s.x, e.y)]),
            ShapeKind::Circle => Outline::Circle {
                center: s,
                radius: s.distance(e),
            },
            ShapeKind::Triangle => closed(vec![pos2(s.x, e.y), e, pos2((s.x + e.x) / 2.0, s.y)]),
            ShapeKind::Line => Outline::Polyline {
                points: vec![s, e],
                closed: false,
            },
            ShapeKind::Diamond => {
                let mid = pos2((s.x + e.x) / 2.0, (s.y + e.y) / 2.0);
                closed(vec![pos2(s.x, mid.y), pos2(mid.x, s.y), pos2(e.x, mid.y), pos2(mid.x, e.y)])
            }
            ShapeKind::Star => closed(star(s, STAR_SPIKES, e.x - s.x, e.y - s.y)),
            ShapeKind::Pentagon => closed(regular_polygon(s, 5, e.x - s.x)),
            ShapeKind::Hexagon => closed(regular_polygon(s, 6, e.x - s.x)),
            ShapeKind::Octagon => closed(regular_polygon(s, 8, e.x - s.x)),
        }
    }

    /// Stroke this shape's outline onto `surface`.
    pub fn draw(&self, surface: &mut PixelSurface) {
        if self.is_degenerate() {
            return;
        }
        match parse_hex(&self.color) {
            Ok(color) => self.outline().stroke(surface, self.stroke_width(), color),
            Err(err) => log::debug!("Skipping {} shape: {err}", self.kind),
        }
    }
}

/// Committed shapes plus at most one live shape at the end of the list.
#[derive(Debug, Clone, Default)]
pub struct ShapeOverlay {
    shapes: Vec<Shape>,
    /// The trailing shape is the zero-size placeholder left by the last release.
    placeholder: bool,
}

impl ShapeOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// The shape being drawn, if any.
    pub fn live(&self) -> Option<&Shape> {
        self.shapes.last()
    }

    /// Start a new live shape. The placeholder from the previous release is taken over;
    /// otherwise `shape` is appended. Returns the live shape's index.
    pub fn begin(&mut self, shape: Shape) -> usize {
        match self.shapes.last_mut() {
            Some(last) if self.placeholder => *last = shape,
            _ => self.shapes.push(shape),
        }
        self.placeholder = false;
        self.shapes.len() - 1
    }

    /// Replace the live shape wholesale.
    pub fn update_live(&mut self, shape: Shape) {
        match self.shapes.last_mut() {
            Some(last) => *last = shape,
            None => self.shapes.push(shape),
        }
        self.placeholder = false;
    }

    /// Freeze the live shape and append a zero-size placeholder for the next gesture.
    pub fn finish(&mut self, placeholder: Shape) {
        self.shapes.push(placeholder);
        self.placeholder = true;
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.placeholder = false;
    }

    /// Restore `base` and stroke every shape on top, in list order.
    pub fn render(&self, surface: &mut PixelSurface, base: &Snapshot) {
        surface.restore(base);
        for shape in &self.shapes {
            shape.draw(surface);
        }
    }
}
