// Error types for the stats core and the fetch layer

use crate::models::KeyField;

/// Failures of the aggregation core (extraction and index lookup).
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    /// An image entry's `file_size` is not a non-negative number.
    #[error("camera {camera_id}: image #{index} has malformed file_size {value}")]
    MalformedData {
        camera_id: i64,
        index: usize,
        value: serde_json::Value,
    },

    /// `highest()`/`lowest()` on an index with no entries.
    #[error("no entries in the {key} index")]
    EmptyIndex { key: KeyField },
}

/// Failure of a single camera fetch. Timeout and connect errors arrive as `Http`
/// and are turned into skips by the camera source.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("camera {camera_id}: unexpected HTTP status {status}")]
    Status {
        camera_id: i64,
        status: reqwest::StatusCode,
    },

    #[error("camera {camera_id}: invalid payload: {source}")]
    Decode {
        camera_id: i64,
        #[source]
        source: serde_json::Error,
    },
}

/// A poll run that was stopped before producing a result.
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("poll aborted at camera {camera_id}: {source}")]
    Aborted {
        camera_id: i64,
        #[source]
        source: FetchError,
    },
}
