use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "pushperf.toml")]
    pub config: String,

    /// Trial log prefix, e.g. "Results/circle/circle" (overrides config)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Number of trial files to aggregate (overrides config)
    #[arg(long)]
    pub trials: Option<usize>,

    /// Output path for the convergence plot (overrides config)
    #[arg(long)]
    pub plot: Option<String>,

    /// Output path for the per-bucket summary CSV (overrides config)
    #[arg(long)]
    pub csv: Option<String>,
}
