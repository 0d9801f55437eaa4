use egui::{Pos2, Vec2, vec2};

pub const DEFAULT_TEXT_BOX_SIZE: Vec2 = vec2(200.0, 40.0);
pub const MIN_TEXT_BOX_SIZE: Vec2 = vec2(100.0, 40.0);

/// Text box floating above the raster, positioned in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub id: u64,
    pub text: String,
    pub position: Pos2,
    pub size: Vec2,
}

/// Owns the text boxes layered over the canvas. Independent of the raster and shapes.
#[derive(Debug, Clone)]
pub struct TextOverlay {
    boxes: Vec<TextBox>,
    next_id: u64,
}

impl Default for TextOverlay {
    fn default() -> Self {
        Self {
            boxes: Vec::new(),
            next_id: 1,
        }
    }
}

impl TextOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxes(&self) -> &[TextBox] {
        &self.boxes
    }

    pub fn get(&self, id: u64) -> Option<&TextBox> {
        self.boxes.iter().find(|b| b.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut TextBox> {
        self.boxes.iter_mut().find(|b| b.id == id)
    }

    /// Add an empty box at `position` and return its id.
    pub fn add(&mut self, position: Pos2) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.boxes.push(TextBox {
            id,
            text: String::new(),
            position,
            size: DEFAULT_TEXT_BOX_SIZE,
        });
        id
    }

    /// Replace the text of box `id`. Returns `false` if there is no such box.
    pub fn set_text(&mut self, id: u64, text: impl Into<String>) -> bool {
        self.get_mut(id).map(|b| b.text = text.into()).is_some()
    }

    pub fn move_to(&mut self, id: u64, position: Pos2) -> bool {
        self.get_mut(id).map(|b| b.position = position).is_some()
    }

    /// Resize box `id`, never below the minimum size.
    pub fn resize(&mut self, id: u64, size: Vec2) -> bool {
        self.get_mut(id).map(|b| b.size = size.max(MIN_TEXT_BOX_SIZE)).is_some()
    }

    /// Remove every box. Ids keep counting up.
    pub fn clear(&mut self) {
        self.boxes.clear();
    }
}
