//! Error types for the configurator.

use thiserror::Error;

/// Errors surfaced by the configurator.
///
/// The color engine itself is total: the lenient entry points (such as
/// [`hex_to_rgb`](crate::hex_to_rgb)) recover locally instead of returning
/// these. Strict parsing, surface creation and export are the fallible edges.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid color format {0:?}, expected `#rrggbb`")]
    InvalidColorFormat(String),

    #[error("wheel surface size must be non-zero")]
    EmptySurface,

    #[error("wheel surface of {0}x{0} pixels is too large")]
    SurfaceTooLarge(u32),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
