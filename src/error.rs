use thiserror::Error;

/// Errors surfaced by the paint engine.
///
/// Drawing itself never fails; these only come out of color parsing (which callers turn
/// into logged no-ops), surface creation and export.
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("Invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),

    #[error("Invalid surface size {width}x{height}")]
    InvalidSurfaceSize { width: usize, height: usize },

    #[error("Pixel buffer does not match the surface dimensions")]
    BufferSize,

    #[error("Failed to export image: {0}")]
    Export(#[from] image::ImageError),
}

/// Result type for paint engine operations
pub type PaintResult<T> = Result<T, PaintError>;
