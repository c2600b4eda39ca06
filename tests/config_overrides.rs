use pushperf::cli::Args;
use pushperf::config::AppConfig;

#[test]
fn config_roundtrip_default_toml() {
    let default_cfg = AppConfig::default();
    let text = toml::to_string_pretty(&default_cfg).expect("serialize default");
    let parsed: AppConfig = toml::from_str(&text).expect("parse default");
    assert_eq!(parsed.input.prefix, default_cfg.input.prefix);
    assert_eq!(parsed.input.suffix, default_cfg.input.suffix);
    assert_eq!(parsed.input.trials, default_cfg.input.trials);
    assert_eq!(parsed.buckets.step_width, default_cfg.buckets.step_width);
    assert_eq!(parsed.output.plot_path, default_cfg.output.plot_path);
    assert_eq!(parsed.output.csv_path, default_cfg.output.csv_path);
}

#[test]
fn cli_flags_override_file_values() {
    let args = Args {
        config: "unused.toml".to_string(),
        prefix: Some("Results/square/square".to_string()),
        trials: Some(5),
        plot: None,
        csv: Some("square.csv".to_string()),
    };
    let cfg = AppConfig::default().with_overrides(&args);
    assert_eq!(cfg.input.prefix, "Results/square/square");
    assert_eq!(cfg.input.trials, 5);
    assert_eq!(cfg.output.plot_path, "dist2goal.png");
    assert_eq!(cfg.output.csv_path, "square.csv");
}

#[test]
fn partial_config_file_falls_back_to_field_defaults() {
    let cfg: AppConfig = toml::from_str("[input]\ntrials = 3\n").expect("parse partial");
    assert_eq!(cfg.input.trials, 3);
    assert_eq!(cfg.input.prefix, "Results/circle/circle");
    assert_eq!(cfg.buckets.step_width, 1000);
}
