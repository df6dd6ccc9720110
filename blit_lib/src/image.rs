use std::path::Path;
use tracing::debug;
use crate::error::{BlitError, BlitResult};
use crate::geom::Size;

/// An image decoded to tightly packed RGBA8, ready to be uploaded to a device.
pub struct DecodedImage {
    pub size: Size,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Bytes per row.
    pub fn pitch(&self) -> usize {
        self.size.w as usize * 4
    }
}

pub fn decode(path: &Path) -> BlitResult<DecodedImage> {
    let img = ::image::open(path)
        .map_err(|source| BlitError::Decode { path: path.to_path_buf(), source })?
        .into_rgba8();

    let size = Size::from(img.dimensions());
    if size.is_empty() {
        return Err(BlitError::EmptyImage(path.to_path_buf()));
    }
    debug!("Decoded {} ({}x{})", path.display(), size.w, size.h);

    Ok(DecodedImage {
        size,
        pixels: img.into_raw(),
    })
}
