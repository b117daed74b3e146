// Camera models: the wire payload from the camera endpoint and the stats derived from it

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One image entry as reported by the endpoint. `file_size` stays untyped until
/// extraction so that a bad value fails in `analyze`, not while decoding the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawImage {
    #[serde(default)]
    pub file_size: serde_json::Value,
}

impl RawImage {
    pub fn new(file_size: u64) -> Self {
        Self {
            file_size: serde_json::Value::from(file_size),
        }
    }
}

/// Body of `GET {base_url}/{camera_id}`, e.g.
/// `{"camera_id": 10, "images": [{"file_size": 5635}, {"file_size": 8022}]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCameraPayload {
    pub camera_id: i64,
    pub images: Vec<RawImage>,
}

impl RawCameraPayload {
    /// Build a payload from plain sizes (fixtures, simulated source).
    pub fn from_sizes(camera_id: i64, sizes: &[u64]) -> Self {
        Self {
            camera_id,
            images: sizes.iter().copied().map(RawImage::new).collect(),
        }
    }
}

/// Successfully fetched payloads of one poll run, keyed by the requested camera id.
pub type PollResult = BTreeMap<i64, RawCameraPayload>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CameraStats {
    pub camera_id: i64,
    pub total_bytes: u64,
    pub image_count: u64,
    pub largest_image: u64,
}

impl fmt::Display for CameraStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "camera {} (total_bytes={}, image_count={}, largest_image={})",
            self.camera_id, self.total_bytes, self.image_count, self.largest_image
        )
    }
}

/// The CameraStats field an extremum index is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyField {
    TotalBytes,
    ImageCount,
    LargestImage,
}

impl KeyField {
    pub const ALL: [KeyField; 3] = [
        KeyField::TotalBytes,
        KeyField::ImageCount,
        KeyField::LargestImage,
    ];

    pub fn value(self, stats: &CameraStats) -> u64 {
        match self {
            KeyField::TotalBytes => stats.total_bytes,
            KeyField::ImageCount => stats.image_count,
            KeyField::LargestImage => stats.largest_image,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KeyField::TotalBytes => "total_bytes",
            KeyField::ImageCount => "image_count",
            KeyField::LargestImage => "largest_image",
        }
    }
}

impl fmt::Display for KeyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
