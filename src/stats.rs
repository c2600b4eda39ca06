//! Per-bucket summary statistics over the aggregated series.

use crate::aggregate::BucketSeries;

/// Arithmetic mean and population standard deviation (divide by N).
pub fn mean_std(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    Some((mean, var.max(0.0).sqrt()))
}

/// Summary of one step bucket across all trials.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BucketSummary {
    pub bucket: usize,
    /// X-axis position of this bucket's sample point.
    pub step: f64,
    /// Per-trial average-distance samples behind `mean`.
    pub samples: usize,
    /// Raw per-box distance samples accumulated in this bucket.
    pub box_samples: usize,
    pub mean: f64,
    pub std_dev: f64,
    /// Mean of the per-trial average-outside-goal distances.
    pub outside_mean: f64,
}

/// Summarizes every bucket; `None` marks a bucket that received no samples.
pub fn summarize(buckets: &BucketSeries, label_interval: f64) -> Vec<Option<BucketSummary>> {
    (0..buckets.n_buckets())
        .map(|bucket| {
            let (mean, std_dev) = mean_std(buckets.avg_dists(bucket))?;
            let (outside_mean, _) = mean_std(buckets.avg_outside_dists(bucket))?;
            Some(BucketSummary {
                bucket,
                step: bucket as f64 * label_interval + 1.0,
                samples: buckets.avg_dists(bucket).len(),
                box_samples: buckets.all_dists(bucket).len(),
                mean,
                std_dev,
                outside_mean,
            })
        })
        .collect()
}

/// CSV report, one row per bucket; no-data buckets leave numeric cells empty.
pub fn summary_csv(summaries: &[Option<BucketSummary>]) -> String {
    let mut out = String::from("bucket,step,samples,box_samples,mean,std_dev,outside_mean\n");
    for (bucket, summary) in summaries.iter().enumerate() {
        match summary {
            Some(s) => out.push_str(&format!(
                "{},{:.1},{},{},{:.6},{:.6},{:.6}\n",
                s.bucket, s.step, s.samples, s.box_samples, s.mean, s.std_dev, s.outside_mean
            )),
            None => out.push_str(&format!("{bucket},,,,,,\n")),
        }
    }
    out
}
