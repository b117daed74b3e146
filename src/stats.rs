// Stats extraction: one camera payload -> CameraStats. Pure, no I/O.

use serde_json::Value;

use crate::error::SummaryError;
use crate::models::{CameraStats, RawCameraPayload};

/// Computes total bytes, image count and largest image for one camera.
/// An empty image list yields all zeros.
pub fn analyze(payload: &RawCameraPayload) -> Result<CameraStats, SummaryError> {
    let mut total_bytes: u64 = 0;
    let mut largest_image: u64 = 0;

    for (index, image) in payload.images.iter().enumerate() {
        let size = coerce_file_size(&image.file_size).ok_or_else(|| {
            SummaryError::MalformedData {
                camera_id: payload.camera_id,
                index,
                value: image.file_size.clone(),
            }
        })?;
        total_bytes = total_bytes.saturating_add(size);
        largest_image = largest_image.max(size);
    }

    Ok(CameraStats {
        camera_id: payload.camera_id,
        total_bytes,
        image_count: payload.images.len() as u64,
        largest_image,
    })
}

/// Unsigned integers as-is, non-negative floats truncated, numeric strings parsed.
fn coerce_file_size(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && *f < u64::MAX as f64)
                .map(|f| f.trunc() as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}
