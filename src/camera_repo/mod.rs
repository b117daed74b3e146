// Camera sources: where raw per-camera payloads come from (HTTP endpoint or simulated)

mod http;
mod simulated;

pub use http::HttpCameraRepo;
pub use simulated::SimulatedCameraRepo;

use std::future::Future;

use crate::error::FetchError;
use crate::models::RawCameraPayload;

/// Result of fetching one camera.
#[derive(Debug)]
pub enum FetchOutcome {
    Success(RawCameraPayload),
    /// Timed out or could not connect; the camera is left out of the poll result.
    Skip(i64),
    /// Any other failure; the whole poll run stops.
    Abort(FetchError),
}

pub trait CameraSource {
    fn fetch(&self, camera_id: i64) -> impl Future<Output = FetchOutcome> + Send;
}
