// Domain models: raw camera payloads as fetched, derived stats, and the summary report

mod camera;
mod report;

pub use camera::{CameraStats, KeyField, PollResult, RawCameraPayload, RawImage};
pub use report::SummaryReport;
