#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod components;
pub mod error;
pub mod fill;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod settings;
pub mod shape;
pub mod spray;
pub mod stroke;
pub mod surface;
pub mod text;
pub mod tools;

pub use app::PaintApp;
pub use canvas::{Canvas, EXPORT_FILE_NAME};
pub use error::{PaintError, PaintResult};
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use settings::PaintSettings;
pub use shape::{Shape, ShapeKind, ShapeOverlay};
pub use surface::{PixelSurface, Snapshot};
pub use text::{TextBox, TextOverlay};
pub use tools::{ToolKind, ToolSettings};
