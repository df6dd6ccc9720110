use std::ops::Deref;
use std::time::{Duration, Instant};
use sdl3::render::FRect;
use tracing::{info, warn};
use blit_lib::{Rect, RenderTarget, Size};
use crate::error::{AppError, AppResult};
use crate::sdl::texture::Texture;
use super::Window;

/// ~60 FPS, only kicks in when vsync is unavailable
const FRAME_TIME: Duration = Duration::from_nanos(16_666_667);

/// The window's renderer and its back buffer.
pub struct Canvas {
    canvas: sdl3::render::WindowCanvas,
    size: Size,
    last_present: Instant,
}

impl TryFrom<Window> for Canvas {
    type Error = AppError;

    fn try_from(window: Window) -> AppResult<Self> {
        // Has to be in place before the renderer exists
        if !sdl3::hint::set(sdl3::hint::names::RENDER_VSYNC, "1") {
            warn!("Could not request vsync, falling back to the frame time cap");
        }

        let canvas = sdl3::render::create_renderer(window.into_inner(), None)
            .map_err(|e| AppError::Device(e.to_string()).logged())?;
        let size = canvas
            .output_size()
            .map_err(|e| AppError::Device(e.to_string()).logged())?;
        info!("Renderer ready, back buffer is {}x{}", size.0, size.1);

        Ok(Canvas {
            canvas,
            size: Size::from(size),
            last_present: Instant::now(),
        })
    }
}

impl Canvas {
    pub fn back_buffer_size(&self) -> Size {
        self.size
    }
}

impl Deref for Canvas {
    type Target = sdl3::render::WindowCanvas;
    fn deref(&self) -> &Self::Target {
        &self.canvas
    }
}

fn frect(r: Rect) -> FRect {
    FRect::new(r.x as f32, r.y as f32, r.w as f32, r.h as f32)
}

impl<'a> RenderTarget<Texture<'a>> for Canvas {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn copy(&mut self, src: &Texture<'a>, clip: Option<Rect>, dest: Rect) {
        if let Err(e) = self.canvas.copy(src, clip.map(frect), frect(dest)) {
            warn!("SDL_RenderTexture Error: {}", e);
        }
    }

    fn present(&mut self) {
        self.canvas.present();

        // Frame timing
        let elapsed = self.last_present.elapsed();
        if elapsed < FRAME_TIME {
            std::thread::sleep(FRAME_TIME - elapsed);
        }
        self.last_present = Instant::now();
    }
}
