// Summary report: the winning camera per key field

use std::fmt;

use serde::{Deserialize, Serialize};

use super::CameraStats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub by_total_bytes: CameraStats,
    pub by_image_count: CameraStats,
    pub by_largest_image: CameraStats,
}

/// Text form printed by the binary: a header and one line per key field.
impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Cam with most space used: {}", self.by_total_bytes)?;
        writeln!(f, "  Cam with most images    : {}", self.by_image_count)?;
        write!(f, "  Cam with largest image  : {}", self.by_largest_image)
    }
}
