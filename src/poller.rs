// Poll run: fetch every requested camera in order, skip the unreachable ones,
// stop on the first fatal fetch failure.

use tracing::{debug, info, instrument};

use crate::camera_repo::{CameraSource, FetchOutcome};
use crate::error::PollError;
use crate::models::PollResult;

pub struct Poller<S> {
    source: S,
}

impl<S: CameraSource> Poller<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches `camera_ids` sequentially. Skipped cameras are omitted; an abort
    /// discards everything fetched so far. A repeated id keeps its last success.
    #[instrument(skip_all, fields(operation = "poll", requested = camera_ids.len()))]
    pub async fn poll(&self, camera_ids: &[i64]) -> Result<PollResult, PollError> {
        let mut results = PollResult::new();
        let mut skipped: usize = 0;

        for &camera_id in camera_ids {
            match self.source.fetch(camera_id).await {
                FetchOutcome::Success(payload) => {
                    debug!(camera_id, images = payload.images.len(), "camera fetched");
                    results.insert(camera_id, payload);
                }
                FetchOutcome::Skip(_) => skipped += 1,
                FetchOutcome::Abort(source) => {
                    return Err(PollError::Aborted { camera_id, source });
                }
            }
        }

        info!(fetched = results.len(), skipped, "poll complete");
        Ok(results)
    }
}
