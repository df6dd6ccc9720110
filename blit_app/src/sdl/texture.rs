use std::ops::Deref;
use std::path::Path;
use sdl3::pixels::PixelFormat;
use sdl3::render::TextureCreator;
use sdl3::sys::pixels::SDL_PixelFormat;
use sdl3::video::WindowContext;
use tracing::info;
use blit_lib::image::DecodedImage;
use blit_lib::{Drawable, Size};
use crate::error::{AppError, AppResult};

// Byte order R, G, B, A in memory, which is what the decoder hands us
#[cfg(target_endian = "little")]
const RGBA32: SDL_PixelFormat = SDL_PixelFormat::ABGR8888;
#[cfg(target_endian = "big")]
const RGBA32: SDL_PixelFormat = SDL_PixelFormat::RGBA8888;

/// A device texture together with its natural size.
pub struct Texture<'a> {
    texture: sdl3::render::Texture<'a>,
    size: Size,
}

impl Drawable for Texture<'_> {
    fn size(&self) -> Size {
        self.size
    }
}

impl<'a> Deref for Texture<'a> {
    type Target = sdl3::render::Texture<'a>;
    fn deref(&self) -> &Self::Target {
        &self.texture
    }
}

/// Loads an image file into a texture on the rendering device. Failures are
/// logged here, the caller decides whether they are fatal.
pub fn load_texture<'a>(
    creator: &'a TextureCreator<WindowContext>,
    path: &Path,
) -> AppResult<Texture<'a>> {
    let image = decode_asset(path)?;
    upload(creator, path, image).map_err(AppError::logged)
}

/// Decodes an asset file, logging the cause when it cannot be read.
pub fn decode_asset(path: &Path) -> AppResult<DecodedImage> {
    blit_lib::image::decode(path)
        .map_err(|e| AppError::from(e).logged())
}

fn upload<'a>(
    creator: &'a TextureCreator<WindowContext>,
    path: &Path,
    image: DecodedImage,
) -> AppResult<Texture<'a>> {
    let upload_err = |reason: String| AppError::Upload {
        path: path.to_path_buf(),
        reason,
    };

    let mut texture = creator
        .create_texture_static(
            unsafe { PixelFormat::from_ll(RGBA32) },
            image.size.w,
            image.size.h,
        )
        .map_err(|e| upload_err(e.to_string()))?;
    texture
        .update(None, &image.pixels, image.pitch())
        .map_err(|e| upload_err(e.to_string()))?;
    info!("Loaded {} ({}x{})", path.display(), image.size.w, image.size.h);

    Ok(Texture {
        texture,
        size: image.size,
    })
}
