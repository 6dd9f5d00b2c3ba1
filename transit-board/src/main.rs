use std::process::ExitCode;

use chrono::Local;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transit_board::app::{self, AppError};
use transit_board::config::AppConfig;
use transit_board::digitransit::{DigitransitClient, MockDigitransitClient};
use transit_board::timeline::render_svg;
use transit_board::web::{self, ViewerState};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let now = Local::now();
    let mut stdout = std::io::stdout();

    let output = match &config.mock_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "using mock responses");
            let api = MockDigitransitClient::new(dir)?;
            app::run(&api, &config, now, &mut stdout).await?
        }
        None => {
            let api = DigitransitClient::new(config.client_config())?;
            app::run(&api, &config, now, &mut stdout).await?
        }
    };

    let Some(timeline) = output.timeline else {
        return Ok(());
    };

    match &config.timeline_path {
        Some(path) => {
            std::fs::write(path, render_svg(&timeline)?)?;
            info!(path = %path.display(), "timeline written");
        }
        None => {
            let state = ViewerState::new(timeline, output.transcript);
            info!("timeline viewer on http://{} (Ctrl-C to quit)", config.listen);
            web::serve(config.listen, state).await?;
        }
    }

    Ok(())
}
