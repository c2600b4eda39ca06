// Entry point: loads config, aggregates every trial log, writes the report.
use std::error::Error;
use std::fs;
use std::path::Path;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use pushperf::aggregate::{self, BucketSeries};
use pushperf::cli::Args;
use pushperf::config::AppConfig;
use pushperf::perfdata::header;
use pushperf::plot;
use pushperf::stats::{self, BucketSummary};

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let cfg = AppConfig::load_or_default(&args.config).with_overrides(&args);
    run(&cfg)
}

fn run(cfg: &AppConfig) -> Result<(), Box<dyn Error>> {
    let header_path = cfg.input.trial_path(0);
    let header = header::read_header(&header_path).map_err(std::io::Error::other)?;
    info!(
        num_boxes = header.num_boxes,
        max_steps = header.max_steps,
        "scanned header of {}",
        header_path.display()
    );

    let mut buckets = BucketSeries::new(header.max_steps, cfg.buckets.step_width);
    for trial in 0..cfg.input.trials {
        let path = cfg.input.trial_path(trial);
        let (parsed, skipped) =
            aggregate::ingest_trial(&mut buckets, &path).map_err(std::io::Error::other)?;
        info!(trial, parsed, skipped, "aggregated {}", path.display());
    }

    let summaries = stats::summarize(&buckets, header.label_interval());
    for (bucket, summary) in summaries.iter().enumerate() {
        match summary {
            Some(s) => debug!(
                bucket,
                samples = s.samples,
                mean = s.mean,
                std_dev = s.std_dev,
                "bucket summary"
            ),
            None => warn!(bucket, "bucket received no samples; omitted from the plot"),
        }
    }

    fs::write(&cfg.output.csv_path, stats::summary_csv(&summaries))?;

    let present: Vec<BucketSummary> = summaries.iter().flatten().copied().collect();
    plot::render_convergence(Path::new(&cfg.output.plot_path), &present)?;

    info!("wrote {} and {}", cfg.output.csv_path, cfg.output.plot_path);
    Ok(())
}
