use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};
use blit_app::config::{self, Settings};
use blit_app::core::app::App;

fn main() -> ExitCode {
    blit_app::init_logging();
    info!("Begin log");

    let settings = Settings::load(Path::new(config::DEFAULT_PATH));
    match App::new(settings).run() {
        Ok(frames) => {
            info!("Presented {} frames, bye", frames);
            ExitCode::SUCCESS
        },
        Err(e) => {
            error!("Startup failed, exiting with status {}", e.exit_code());
            ExitCode::from(e.exit_code())
        }
    }
}
