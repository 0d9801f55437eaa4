use crate::canvas::{Canvas, EXPORT_FILE_NAME};
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::settings::PaintSettings;

pub struct PaintApp {
    // Toolbar state for this session only
    pub(crate) settings: PaintSettings,
    // Created on the first frame, once the available canvas area is known
    pub(crate) canvas: Option<Canvas>,
    pub(crate) renderer: Renderer,
    pub(crate) input: InputHandler,
    pub(crate) custom_color: egui::Color32,
    pub(crate) status: Option<String>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_settings(PaintSettings::default())
    }
}

impl PaintApp {
    /// Called once before the first frame. Every session starts from the default toolbar.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = PaintSettings::default();
        log::info!("Starting with tool {:?}, color {}", settings.tool, settings.color);
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: PaintSettings) -> Self {
        Self {
            settings,
            canvas: None,
            renderer: Renderer::new(),
            input: InputHandler::new(),
            custom_color: egui::Color32::BLACK,
            status: None,
        }
    }

    pub fn clear_canvas(&mut self) {
        if let Some(canvas) = &mut self.canvas {
            canvas.clear();
        }
        self.status = None;
    }

    /// Export the canvas to [`EXPORT_FILE_NAME`] in the working directory.
    pub fn save_canvas(&mut self) {
        let Some(canvas) = &self.canvas else {
            return;
        };
        self.status = Some(match canvas.export(EXPORT_FILE_NAME) {
            Ok(()) => format!("Saved {EXPORT_FILE_NAME}"),
            Err(err) => {
                log::warn!("Save failed: {err}");
                format!("Save failed: {err}")
            }
        });
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
