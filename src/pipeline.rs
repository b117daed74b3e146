// One complete run: poll the cameras, compile stats, produce the report.

use tracing::info;

use crate::camera_repo::CameraSource;
use crate::error::SummaryError;
use crate::models::SummaryReport;
use crate::poller::Poller;
use crate::summarizer::Summarizer;

/// Polls `camera_ids` from `source` and summarizes them.
/// `Ok(None)` when no camera returned data.
pub async fn summarize<S: CameraSource>(
    source: S,
    camera_ids: &[i64],
) -> anyhow::Result<Option<SummaryReport>> {
    let results = Poller::new(source).poll(camera_ids).await?;

    let mut summarizer = Summarizer::new();
    summarizer.compile(&results)?;

    match summarizer.report() {
        Ok(report) => Ok(Some(report)),
        Err(SummaryError::EmptyIndex { .. }) => {
            info!(requested = camera_ids.len(), "no camera data to summarize");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Text or JSON rendering of a run's outcome for stdout.
pub fn render(report: Option<&SummaryReport>, json: bool) -> anyhow::Result<String> {
    let out = match (report, json) {
        (Some(report), true) => serde_json::to_string_pretty(report)?,
        (Some(report), false) => report.to_string(),
        (None, true) => serde_json::json!({ "error": "no camera data" }).to_string(),
        (None, false) => "Summary: no camera data available".to_string(),
    };
    Ok(out)
}
