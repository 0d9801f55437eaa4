use eframe::egui;
use crate::tools::ToolKind;

pub struct ToolButton<'a> {
    pub tool: &'a ToolKind,
    pub selected: bool,
    pub accent: egui::Color32,
}

impl<'a> ToolButton<'a> {
    pub fn new(tool: &'a ToolKind, selected: bool, accent: egui::Color32) -> Self {
        Self {
            tool,
            selected,
            accent,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(32.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                egui::Color32::from_gray(235)
            } else {
                egui::Color32::WHITE
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            let icon_color = if self.selected {
                self.accent
            } else {
                egui::Color32::BLACK
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.tool.icon(),
                egui::FontId::proportional(18.0),
                icon_color,
            );

            let border = if self.selected {
                egui::Stroke::new(2.0, self.accent)
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(200))
            };
            ui.painter().rect_stroke(rect, 4.0, border);
        }

        response.on_hover_text(self.tool.name())
    }
}
