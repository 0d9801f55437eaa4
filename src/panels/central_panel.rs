use crate::PaintApp;
use crate::canvas::Canvas;
use crate::color::parse_hex;
use crate::input::PointerSample;
use crate::text::{MIN_TEXT_BOX_SIZE, TextBox};

/// Show every text box as a movable, resizable window pinned inside the canvas.
fn text_boxes(app: &mut PaintApp, ctx: &egui::Context, canvas_rect: egui::Rect) {
    let Some(canvas) = app.canvas.as_mut() else {
        return;
    };
    let font = egui::FontId::proportional(app.settings.brush_size as f32 * 1.5);
    let text_color = parse_hex(&app.settings.color).unwrap_or(egui::Color32::BLACK);

    let boxes: Vec<TextBox> = canvas.text().boxes().to_vec();
    for text_box in boxes {
        let mut text = text_box.text.clone();
        let shown = egui::Window::new("text box")
            .id(egui::Id::new(("text_box", text_box.id)))
            .title_bar(false)
            .resizable(true)
            .default_pos(canvas_rect.min + text_box.position.to_vec2())
            .default_size(text_box.size)
            .min_size(MIN_TEXT_BOX_SIZE)
            .constrain_to(canvas_rect)
            .frame(
                egui::Frame::none()
                    .inner_margin(4.0)
                    .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(204))),
            )
            .show(ctx, |ui| {
                ui.add_sized(
                    ui.available_size(),
                    egui::TextEdit::multiline(&mut text)
                        .font(font.clone())
                        .text_color(text_color)
                        .frame(false),
                )
            });

        let Some(shown) = shown else {
            continue;
        };
        let rect = shown.response.rect;
        let overlay = canvas.text_mut();
        overlay.move_to(text_box.id, (rect.min - canvas_rect.min).to_pos2());
        overlay.resize(text_box.id, rect.size());
        if shown.inner.is_some_and(|response| response.changed()) {
            overlay.set_text(text_box.id, text);
        }
    }
}

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let mut canvas_rect = None;

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::from_gray(248)))
        .show(ctx, |ui| {
            // The surface is sized once, from the space left after the toolbar.
            if app.canvas.is_none() {
                let size = ui.available_size();
                match Canvas::new(size.x as usize, size.y as usize) {
                    Ok(canvas) => app.canvas = Some(canvas),
                    Err(err) => {
                        log::warn!("Cannot create canvas yet: {err}");
                        return;
                    }
                }
            }
            let Some(canvas) = app.canvas.as_mut() else {
                return;
            };

            let size = egui::vec2(canvas.surface().width() as f32, canvas.surface().height() as f32);
            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
            let response = response.on_hover_cursor(app.settings.active_tool().cursor());
            app.input.set_canvas_rect(rect);

            let sample = ctx.input(|input| PointerSample::from_egui(input, &response));
            let settings = app.settings.tool_settings();
            for event in app.input.process(sample) {
                canvas.handle_event(&event, &settings);
            }

            app.renderer.render(ctx, ui.painter(), rect, canvas.surface());
            canvas_rect = Some(rect);
        });

    if let Some(rect) = canvas_rect {
        text_boxes(app, ctx, rect);
    }
}
