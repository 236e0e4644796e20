pub mod detect;
pub mod file;
pub mod folder;
pub mod health;
pub mod login;
pub mod register;

pub use detect::Detect;
pub use health::Health;
pub use login::Login;
pub use register::Register;

use std::path::Path;

use common::prelude::Frame;

#[derive(Debug, thiserror::Error)]
pub enum FrameLoadError {
    #[error("failed to read image {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("not a decodable image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Load an encoded image file as a captured [`Frame`].
///
/// Only the header is decoded for dimensions; the encoded bytes go on the
/// wire as-is.
pub(crate) fn frame_from_file(path: &Path) -> Result<Frame, FrameLoadError> {
    let bytes = std::fs::read(path).map_err(|source| FrameLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let (width, height) = image::image_dimensions(path)?;
    Ok(Frame::new(width, height, bytes))
}
