use crate::color::{ACCENT_PRIMARY, default_palette};
use crate::tools::{ToolKind, ToolSettings};

/// Toolbar state. Lives for one session; nothing is written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintSettings {
    pub tool: String,
    pub color: String,
    pub brush_size: u32,
    pub palette: Vec<String>,
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            tool: "brush".to_owned(),
            color: ACCENT_PRIMARY.to_owned(),
            brush_size: 5,
            palette: default_palette(),
        }
    }
}

impl PaintSettings {
    pub fn active_tool(&self) -> ToolKind {
        ToolKind::parse(&self.tool)
    }

    pub fn select_tool(&mut self, tool: &ToolKind) {
        if self.tool != tool.name() {
            log::info!("Tool changed: {} -> {}", self.tool, tool);
            self.tool = tool.name().to_owned();
        }
    }

    /// Append a color to the palette unless it is already there.
    pub fn add_color(&mut self, color: String) {
        if !self.palette.iter().any(|c| c.eq_ignore_ascii_case(&color)) {
            self.palette.push(color);
        }
    }

    /// The values the canvas reads on each pointer event.
    pub fn tool_settings(&self) -> ToolSettings {
        ToolSettings::new(self.active_tool(), self.color.clone(), self.brush_size)
    }
}
