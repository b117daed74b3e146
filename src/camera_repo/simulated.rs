// Simulated camera source: random payloads, no network

use std::ops::RangeInclusive;

use rand::Rng;

use super::{CameraSource, FetchOutcome};
use crate::models::RawCameraPayload;

const MAX_IMAGES: usize = 19;
const FILE_SIZE_RANGE: RangeInclusive<u64> = 5..=9999;

/// Answers every camera id with 0..=19 images of 5..=9999 bytes each.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedCameraRepo;

impl SimulatedCameraRepo {
    pub fn new() -> Self {
        Self
    }

    pub fn random_payload(camera_id: i64) -> RawCameraPayload {
        let mut rng = rand::rng();
        let count = rng.random_range(0..=MAX_IMAGES);
        let sizes: Vec<u64> = (0..count)
            .map(|_| rng.random_range(FILE_SIZE_RANGE))
            .collect();
        RawCameraPayload::from_sizes(camera_id, &sizes)
    }
}

impl CameraSource for SimulatedCameraRepo {
    async fn fetch(&self, camera_id: i64) -> FetchOutcome {
        FetchOutcome::Success(Self::random_payload(camera_id))
    }
}
