pub mod canvas;

use tracing::info;
use crate::config::WindowSettings;
use crate::error::{AppError, AppResult};
use crate::sdl;

pub struct Window {
    wnd: sdl3::video::Window,
}

impl Window {
    pub fn new(ctx: &sdl::Context, settings: &WindowSettings) -> AppResult<Self> {
        let sdl_window = ctx.video()?
            .window(&settings.title, settings.width, settings.height)
            .position(settings.x, settings.y)
            .build()
            .map_err(|e| AppError::WindowBuild(e.to_string()).logged())?;
        info!("Opened window \"{}\" ({}x{})", settings.title, settings.width, settings.height);

        Ok(Window {
            wnd: sdl_window,
        })
    }

    pub fn into_inner(self) -> sdl3::video::Window {
        self.wnd
    }
}
