//! Brings SDL up and straight back down again.

use std::process::ExitCode;
use tracing::{error, info};
use blit_app::error::AppResult;
use blit_app::sdl::Context;

fn init() -> AppResult<Context> {
    let ctx = Context::new()?;
    let _video = ctx.video()?;
    Ok(ctx)
}

fn main() -> ExitCode {
    blit_app::init_logging();

    match init() {
        Ok(ctx) => {
            info!("SDL is up, tearing it down");
            drop(ctx);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Exiting with status {}", e.exit_code());
            ExitCode::from(e.exit_code())
        }
    }
}
