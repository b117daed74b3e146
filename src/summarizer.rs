// Aggregation over one poll run: three extremum indices, rebuilt on every compile.

use tracing::{debug, instrument};

use crate::error::SummaryError;
use crate::extremum_index::ExtremumIndex;
use crate::models::{KeyField, PollResult, SummaryReport};
use crate::stats::analyze;

#[derive(Debug, Clone)]
pub struct Summarizer {
    by_total_bytes: ExtremumIndex,
    by_image_count: ExtremumIndex,
    by_largest_image: ExtremumIndex,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    pub fn new() -> Self {
        Self {
            by_total_bytes: ExtremumIndex::new(KeyField::TotalBytes),
            by_image_count: ExtremumIndex::new(KeyField::ImageCount),
            by_largest_image: ExtremumIndex::new(KeyField::LargestImage),
        }
    }

    /// Replaces all state with the stats of every payload in `results`.
    /// On a malformed payload the error is returned and the previous state is kept.
    #[instrument(skip_all, fields(cameras = results.len()))]
    pub fn compile(&mut self, results: &PollResult) -> Result<(), SummaryError> {
        let mut next = Self::new();
        for payload in results.values() {
            let stats = analyze(payload)?;
            debug!(camera_id = stats.camera_id, ?stats, "camera analyzed");
            next.by_total_bytes.insert(stats);
            next.by_image_count.insert(stats);
            next.by_largest_image.insert(stats);
        }
        *self = next;
        Ok(())
    }

    /// The highest entry of each index. `EmptyIndex` if nothing was compiled.
    pub fn report(&self) -> Result<SummaryReport, SummaryError> {
        Ok(SummaryReport {
            by_total_bytes: *self.by_total_bytes.highest()?,
            by_image_count: *self.by_image_count.highest()?,
            by_largest_image: *self.by_largest_image.highest()?,
        })
    }

    pub fn by_total_bytes(&self) -> &ExtremumIndex {
        &self.by_total_bytes
    }

    pub fn by_image_count(&self) -> &ExtremumIndex {
        &self.by_image_count
    }

    pub fn by_largest_image(&self) -> &ExtremumIndex {
        &self.by_largest_image
    }
}
