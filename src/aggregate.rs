//! Time-bucketed accumulation of distance samples across trial logs.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::perfdata::record::{self, StepRecord};
use crate::perfdata::segments::SegmentReader;

/// Delimiter between step records in a trial log body.
pub const RECORD_DELIM: &str = "$";

/// Fixed-width step windows, each accumulating samples from every trial.
#[derive(Clone, Debug)]
pub struct BucketSeries {
    step_width: u64,
    avg_dists: Vec<Vec<f64>>,
    avg_outside_dists: Vec<Vec<f64>>,
    all_dists: Vec<Vec<f64>>,
}

impl BucketSeries {
    /// Buckets covering `0..=max_steps` in `step_width` windows.
    pub fn new(max_steps: u64, step_width: u64) -> Self {
        assert!(step_width > 0, "bucket width must be positive");
        let n = (max_steps / step_width) as usize + 1;
        Self {
            step_width,
            avg_dists: vec![Vec::new(); n],
            avg_outside_dists: vec![Vec::new(); n],
            all_dists: vec![Vec::new(); n],
        }
    }

    #[inline]
    pub fn n_buckets(&self) -> usize {
        self.avg_dists.len()
    }

    #[inline]
    pub fn step_width(&self) -> u64 {
        self.step_width
    }

    /// Bucket index for a step, or `None` past the declared range.
    #[inline]
    pub fn bucket_of(&self, step: u64) -> Option<usize> {
        let idx = (step / self.step_width) as usize;
        (idx < self.n_buckets()).then_some(idx)
    }

    /// Appends one record's samples to its bucket.
    pub fn ingest(&mut self, record: &StepRecord) -> Result<(), String> {
        let bucket = self.bucket_of(record.step).ok_or_else(|| {
            format!(
                "step {} maps outside the {} buckets declared by the header",
                record.step,
                self.n_buckets()
            )
        })?;
        self.all_dists[bucket].extend_from_slice(&record.box_dists);
        self.avg_dists[bucket].push(record.avg_dist);
        self.avg_outside_dists[bucket].push(record.avg_outside_dist);
        Ok(())
    }

    /// Per-trial average distances collected in `bucket`.
    #[inline]
    pub fn avg_dists(&self, bucket: usize) -> &[f64] {
        &self.avg_dists[bucket]
    }

    /// Per-trial average-outside-goal distances collected in `bucket`.
    #[inline]
    pub fn avg_outside_dists(&self, bucket: usize) -> &[f64] {
        &self.avg_outside_dists[bucket]
    }

    /// Raw per-box distances collected in `bucket` across all trials.
    #[inline]
    pub fn all_dists(&self, bucket: usize) -> &[f64] {
        &self.all_dists[bucket]
    }
}

/// Parses every record of one trial log into `buckets`.
///
/// The text before the first `$` is the file header and is never parsed as a
/// record. Returns the number of records parsed and skipped.
pub fn ingest_trial(buckets: &mut BucketSeries, path: &Path) -> Result<(usize, usize), String> {
    let file = File::open(path).map_err(|e| format!("open {}: {e}", path.display()))?;
    let mut parsed = 0usize;
    let mut skipped = 0usize;
    for (i, segment) in SegmentReader::new(file, RECORD_DELIM).enumerate() {
        let segment = segment.map_err(|e| format!("{}: {e}", path.display()))?;
        if i == 0 {
            continue;
        }
        let parsed_record = record::parse_record(&segment)
            .map_err(|e| format!("{} record {i}: {e}", path.display()))?;
        match parsed_record {
            Some(record) => {
                buckets
                    .ingest(&record)
                    .map_err(|e| format!("{} record {i}: {e}", path.display()))?;
                parsed += 1;
            }
            None => skipped += 1,
        }
    }
    debug!(file = %path.display(), parsed, skipped, "ingested trial log");
    Ok((parsed, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(step: u64, avg: f64) -> StepRecord {
        StepRecord {
            step,
            box_dists: vec![avg],
            avg_dist: avg,
            avg_outside_dist: avg,
        }
    }

    #[test]
    fn bucket_index_is_floor_of_step_over_width() {
        let buckets = BucketSeries::new(100_000, 1000);
        assert_eq!(buckets.n_buckets(), 101);
        assert_eq!(buckets.bucket_of(0), Some(0));
        assert_eq!(buckets.bucket_of(999), Some(0));
        assert_eq!(buckets.bucket_of(1000), Some(1));
        assert_eq!(buckets.bucket_of(55_500), Some(55));
        assert_eq!(buckets.bucket_of(100_000), Some(100));
    }

    #[test]
    fn out_of_range_step_is_rejected() {
        let mut buckets = BucketSeries::new(100_000, 1000);
        assert_eq!(buckets.bucket_of(101_000), None);
        let err = buckets.ingest(&record(101_000, 1.0)).unwrap_err();
        assert!(err.contains("101000"), "{err}");
    }

    #[test]
    fn ingest_appends_to_all_three_series() {
        let mut buckets = BucketSeries::new(10_000, 1000);
        buckets
            .ingest(&StepRecord {
                step: 2500,
                box_dists: vec![1.0, 3.0],
                avg_dist: 2.0,
                avg_outside_dist: 0.5,
            })
            .unwrap();
        assert_eq!(buckets.avg_dists(2), &[2.0]);
        assert_eq!(buckets.avg_outside_dists(2), &[0.5]);
        assert_eq!(buckets.all_dists(2), &[1.0, 3.0]);
        assert!(buckets.avg_dists(0).is_empty());
    }
}
