use std::path::PathBuf;
use thiserror::Error;
use tracing::error;
use blit_lib::BlitError;

pub type AppResult<T> = ::std::result::Result<T, AppError>;

/// Startup failures, one per stage. All of them are fatal.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("SDL_Init Error: {0}")]
    Init(String),
    #[error("SDL_CreateWindow Error: {0}")]
    WindowBuild(String),
    #[error("SDL_CreateRenderer Error: {0}")]
    Device(String),
    #[error("SDL_LoadTexture Error: {0}")]
    Asset(#[from] BlitError),
    #[error("SDL_LoadTexture Error: failed to upload {}: {reason}", .path.display())]
    Upload { path: PathBuf, reason: String },
}

impl AppError {
    /// Logs the diagnostic where the failure happens. `main` only reports the
    /// exit status.
    pub fn logged(self) -> Self {
        error!("{}", self);
        self
    }

    /// Process exit status reported for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Init(_) => 1,
            AppError::WindowBuild(_) => 2,
            AppError::Device(_) => 3,
            AppError::Asset(_) | AppError::Upload { .. } => 4,
        }
    }
}
