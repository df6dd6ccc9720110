use tracing::info;
use blit_lib::Scene;
use crate::config::Settings;
use crate::error::AppResult;
use crate::sdl;
use crate::sdl::texture::load_texture;

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        App {
            settings,
        }
    }

    /// Opens the window, loads the assets and runs the frame loop until the user
    /// quits. Returns the number of frames presented.
    ///
    /// Every SDL resource is a local here, so they are released in reverse order
    /// of creation on the way out, the subsystem last.
    pub fn run(&self) -> AppResult<u64> {
        let ctx = sdl::Context::new()?;
        let wnd = sdl::wnd::Window::new(&ctx, &self.settings.window)?;
        let mut canvas = sdl::wnd::canvas::Canvas::try_from(wnd)?;
        let mut event_pump = sdl::evt::EventPump::try_from(&ctx)?;

        let texture_creator = canvas.texture_creator();
        let background = load_texture(&texture_creator, &self.settings.assets.background)?;
        let foreground = load_texture(&texture_creator, &self.settings.assets.foreground)?;

        let mut scene = Scene::new(&self.settings.layout, canvas.back_buffer_size(), background, foreground);

        info!("Entering frame loop");
        let frames = blit_lib::run(&mut scene, &mut canvas, &mut event_pump);

        Ok(frames)
    }
}
