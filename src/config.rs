use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Args;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "InputConfig::default_prefix")]
    pub prefix: String,
    #[serde(default = "InputConfig::default_suffix")]
    pub suffix: String,
    #[serde(default = "InputConfig::default_trials")]
    pub trials: usize,
}

impl InputConfig {
    fn default_prefix() -> String {
        "Results/circle/circle".to_string()
    }
    fn default_suffix() -> String {
        "_PerfData.txt".to_string()
    }
    fn default_trials() -> usize {
        20
    }

    /// Path of one trial's log file.
    pub fn trial_path(&self, trial: usize) -> PathBuf {
        PathBuf::from(format!("{}{}{}", self.prefix, trial, self.suffix))
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            prefix: Self::default_prefix(),
            suffix: Self::default_suffix(),
            trials: Self::default_trials(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketConfig {
    /// Step window assigned to one bucket. Independent of the x-axis label
    /// interval, which is always 1% of the header's step range.
    #[serde(default = "BucketConfig::default_step_width")]
    pub step_width: u64,
}

impl BucketConfig {
    fn default_step_width() -> u64 {
        1000
    }
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            step_width: Self::default_step_width(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "OutputConfig::default_plot_path")]
    pub plot_path: String,
    #[serde(default = "OutputConfig::default_csv_path")]
    pub csv_path: String,
}

impl OutputConfig {
    fn default_plot_path() -> String {
        "dist2goal.png".to_string()
    }
    fn default_csv_path() -> String {
        "dist2goal.csv".to_string()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            plot_path: Self::default_plot_path(),
            csv_path: Self::default_csv_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub buckets: BucketConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write commented defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path_obj, comment_out(&text)) {
                    eprintln!("Failed to write default config to {path}: {err}");
                }
            }
            Err(err) => {
                eprintln!("Failed to serialize default config: {err}");
            }
        }
        default_cfg
    }

    /// CLI flags win over file values.
    pub fn with_overrides(mut self, args: &Args) -> Self {
        if let Some(prefix) = &args.prefix {
            self.input.prefix = prefix.clone();
        }
        if let Some(trials) = args.trials {
            self.input.trials = trials;
        }
        if let Some(plot) = &args.plot {
            self.output.plot_path = plot.clone();
        }
        if let Some(csv) = &args.csv {
            self.output.csv_path = csv.clone();
        }
        self
    }
}

/// Keeps section headers, comments out every key so the written file
/// documents the defaults without pinning them.
fn comment_out(toml_text: &str) -> String {
    let mut out = String::new();
    for line in toml_text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || (trimmed.starts_with('[') && trimmed.ends_with(']')) {
            out.push_str(line);
        } else {
            out.push_str("# ");
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
