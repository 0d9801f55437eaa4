use crate::PaintApp;
use crate::color::{ACCENT_PRIMARY, parse_hex, to_hex};
use crate::components::ToolButton;
use crate::shape::ShapeKind;
use crate::tools::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, ToolKind};

fn tool_group(app: &mut PaintApp, ui: &mut egui::Ui, title: &str, tools: &[ToolKind]) {
    let accent = parse_hex(ACCENT_PRIMARY).unwrap_or(egui::Color32::RED);
    let active = app.settings.active_tool();

    ui.vertical(|ui| {
        ui.label(egui::RichText::new(title).strong());
        egui::Grid::new(title).spacing([4.0, 4.0]).show(ui, |ui| {
            for (i, tool) in tools.iter().enumerate() {
                if ToolButton::new(tool, *tool == active, accent).show(ui).clicked() {
                    app.settings.select_tool(tool);
                }
                if i % 3 == 2 {
                    ui.end_row();
                }
            }
        });
    });
}

fn color_group(app: &mut PaintApp, ui: &mut egui::Ui) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new("Colors").strong());
        ui.horizontal_wrapped(|ui| {
            ui.set_max_width(160.0);
            let mut picked = None;
            for hex in &app.settings.palette {
                let Ok(color) = parse_hex(hex) else {
                    continue;
                };
                let selected = hex.eq_ignore_ascii_case(&app.settings.color);
                let stroke = if selected {
                    egui::Stroke::new(2.0, egui::Color32::DARK_GRAY)
                } else {
                    egui::Stroke::new(1.0, egui::Color32::from_gray(200))
                };
                let swatch = egui::Button::new("")
                    .fill(color)
                    .stroke(stroke)
                    .min_size(egui::vec2(20.0, 20.0));
                if ui.add(swatch).on_hover_text(hex.as_str()).clicked() {
                    picked = Some(hex.clone());
                }
            }
            if let Some(hex) = picked {
                app.settings.color = hex;
            }
        });

        ui.horizontal(|ui| {
            egui::color_picker::color_edit_button_srgba(
                ui,
                &mut app.custom_color,
                egui::color_picker::Alpha::Opaque,
            );
            if ui.button("Add Color").clicked() {
                app.settings.add_color(to_hex(app.custom_color));
                app.custom_color = egui::Color32::BLACK;
            }
        });
    });
}

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Slipe");
            ui.separator();

            tool_group(app, ui, "Tools", &ToolKind::toolbar_tools());
            ui.separator();

            let shapes: Vec<ToolKind> = ShapeKind::ALL.into_iter().map(ToolKind::Shape).collect();
            tool_group(app, ui, "Shapes", &shapes);
            ui.separator();

            color_group(app, ui);
            ui.separator();

            ui.vertical(|ui| {
                ui.label(egui::RichText::new("Brush Size").strong());
                ui.add(egui::Slider::new(
                    &mut app.settings.brush_size,
                    MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE,
                ));
            });
            ui.separator();

            ui.vertical(|ui| {
                if ui.button("🗑 Clear Canvas").clicked() {
                    app.clear_canvas();
                }
                if ui.button("💾 Save Creation").clicked() {
                    app.save_canvas();
                }
                if let Some(status) = &app.status {
                    ui.small(status.as_str());
                }
            });
        });
    });
}
