pub mod wnd;
pub mod evt;
pub mod input;
pub mod texture;

use std::ops::Deref;
use tracing::info;
use crate::error::{AppError, AppResult};

/// The initialized SDL library. SDL shuts down once this (and every subsystem
/// handed out from it) is dropped.
pub struct Context {
    ctx: sdl3::Sdl,
}

impl Context {
    pub fn new() -> AppResult<Self> {
        let ctx = sdl3::init().map_err(|e| AppError::Init(e.to_string()).logged())?;
        info!("SDL initialized");

        Ok(Context {
            ctx,
        })
    }

    pub fn video(&self) -> AppResult<sdl3::VideoSubsystem> {
        self.ctx.video().map_err(|e| AppError::Init(e.to_string()).logged())
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        info!("Shutting down SDL");
    }
}

impl Deref for Context {
    type Target = sdl3::Sdl;
    fn deref(&self) -> &Self::Target {
        &self.ctx
    }
}
