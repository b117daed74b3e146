use anyhow::Result;
use camstats::camera_repo::{HttpCameraRepo, SimulatedCameraRepo};
use camstats::*;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries only the report
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    tracing::debug!(name = version::NAME, version = version::VERSION, "starting");

    let base = match &cli.config {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    let app_config = base.apply_overrides(cli.overrides())?;
    let cameras = &app_config.polling.cameras;

    let report = if app_config.polling.simulate {
        tracing::info!(cameras = cameras.len(), "polling simulated cameras");
        pipeline::summarize(SimulatedCameraRepo::new(), cameras).await?
    } else {
        let repo = HttpCameraRepo::new(
            &app_config.endpoint.base_url,
            app_config.endpoint.timeout(),
        )?;
        tracing::info!(
            base_url = %app_config.endpoint.base_url,
            timeout_secs = app_config.endpoint.timeout_secs,
            cameras = cameras.len(),
            "polling cameras"
        );
        pipeline::summarize(repo, cameras).await?
    };

    println!("{}", pipeline::render(report.as_ref(), cli.json)?);
    Ok(())
}
