use std::fmt;

use egui::CursorIcon;

use crate::shape::ShapeKind;
use crate::stroke::FreehandTool;

pub const MIN_BRUSH_SIZE: u32 = 1;
pub const MAX_BRUSH_SIZE: u32 = 50;

/// Every tool the canvas knows how to interpret, plus a fallback for anything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Pencil,
    Brush,
    Bucket,
    Spray,
    Eraser,
    Text,
    Shape(ShapeKind),
    /// Unrecognized tool name: default cursor, pointer events are ignored.
    Other(String),
}

impl ToolKind {
    /// Non-shape tools in toolbar order.
    pub const DRAWING: [ToolKind; 6] = [
        ToolKind::Pencil,
        ToolKind::Brush,
        ToolKind::Bucket,
        ToolKind::Spray,
        ToolKind::Eraser,
        ToolKind::Text,
    ];

    /// Name of the image upload button. It has no canvas behavior.
    pub const IMAGE: &str = "image";

    /// The toolbar's "Tools" group, in display order.
    pub fn toolbar_tools() -> Vec<ToolKind> {
        let mut tools = Self::DRAWING.to_vec();
        tools.push(ToolKind::Other(Self::IMAGE.to_owned()));
        tools
    }

    /// Map a tool name as supplied by the toolbar.
    pub fn parse(name: &str) -> Self {
        match name {
            "pencil" => ToolKind::Pencil,
            "brush" => ToolKind::Brush,
            "bucket" => ToolKind::Bucket,
            "spray" => ToolKind::Spray,
            "eraser" => ToolKind::Eraser,
            "text" => ToolKind::Text,
            other => match ShapeKind::from_name(other) {
                Some(kind) => ToolKind::Shape(kind),
                None => ToolKind::Other(other.to_owned()),
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ToolKind::Pencil => "pencil",
            ToolKind::Brush => "brush",
            ToolKind::Bucket => "bucket",
            ToolKind::Spray => "spray",
            ToolKind::Eraser => "eraser",
            ToolKind::Text => "text",
            ToolKind::Shape(kind) => kind.name(),
            ToolKind::Other(name) => name,
        }
    }

    /// The freehand line style this tool draws with, if it is a stroke tool.
    pub fn freehand(&self) -> Option<FreehandTool> {
        match self {
            ToolKind::Pencil => Some(FreehandTool::Pencil),
            ToolKind::Brush => Some(FreehandTool::Brush),
            ToolKind::Eraser => Some(FreehandTool::Eraser),
            _ => None,
        }
    }

    pub fn cursor(&self) -> CursorIcon {
        match self {
            ToolKind::Pencil | ToolKind::Brush => CursorIcon::Crosshair,
            ToolKind::Bucket | ToolKind::Spray | ToolKind::Eraser => CursorIcon::Cell,
            ToolKind::Text => CursorIcon::Text,
            ToolKind::Shape(_) | ToolKind::Other(_) => CursorIcon::Default,
        }
    }

    /// Short glyph shown on the toolbar button.
    pub fn icon(&self) -> &'static str {
        match self {
            ToolKind::Pencil => "✏",
            ToolKind::Brush => "🖌",
            ToolKind::Bucket => "💧",
            ToolKind::Spray => "💨",
            ToolKind::Eraser => "⌫",
            ToolKind::Text => "T",
            ToolKind::Shape(ShapeKind::Rectangle) => "⬜",
            ToolKind::Shape(ShapeKind::Circle) => "⭕",
            ToolKind::Shape(ShapeKind::Triangle) => "△",
            ToolKind::Shape(ShapeKind::Star) => "☆",
            ToolKind::Shape(ShapeKind::Hexagon) => "⬡",
            ToolKind::Shape(ShapeKind::Line) => "➖",
            ToolKind::Shape(ShapeKind::Octagon) => "⯃",
            ToolKind::Shape(ShapeKind::Pentagon) => "⬟",
            ToolKind::Shape(ShapeKind::Diamond) => "◇",
            ToolKind::Other(name) if name == Self::IMAGE => "🖼",
            ToolKind::Other(_) => "?",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The primitive values the canvas reads from the toolbar on every pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    pub tool: ToolKind,
    /// `#RRGGBB`; painting with an unparsable color is a no-op.
    pub color: String,
    pub size: u32,
}

impl ToolSettings {
    pub fn new(tool: ToolKind, color: impl Into<String>, size: u32) -> Self {
        Self {
            tool,
            color: color.into(),
            size: size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE),
        }
    }
}
