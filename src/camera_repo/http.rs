// Camera payloads over HTTP via reqwest: GET {base_url}/{camera_id}

use std::time::Duration;

use tracing::{instrument, warn};

use super::{CameraSource, FetchOutcome};
use crate::error::FetchError;
use crate::models::RawCameraPayload;
use crate::version::USER_AGENT;

pub struct HttpCameraRepo {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCameraRepo {
    /// Client with a per-request timeout covering connect, send and body read.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn camera_url(&self, camera_id: i64) -> String {
        format!("{}/{}", self.base_url, camera_id)
    }

    async fn get_payload(&self, camera_id: i64) -> Result<RawCameraPayload, FetchError> {
        let response = self.client.get(self.camera_url(camera_id)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { camera_id, status });
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { camera_id, source })
    }
}

/// Timeouts and refused/unreachable connections are skipped; everything else aborts.
fn is_skippable(e: &FetchError) -> bool {
    match e {
        FetchError::Http(e) => e.is_timeout() || e.is_connect(),
        _ => false,
    }
}

impl CameraSource for HttpCameraRepo {
    #[instrument(skip(self), fields(repo = "http", operation = "fetch"))]
    async fn fetch(&self, camera_id: i64) -> FetchOutcome {
        match self.get_payload(camera_id).await {
            Ok(payload) => FetchOutcome::Success(payload),
            Err(e) if is_skippable(&e) => {
                warn!(camera_id, error = %e, "camera unreachable, skipping");
                FetchOutcome::Skip(camera_id)
            }
            Err(e) => FetchOutcome::Abort(e),
        }
    }
}
