//! yamldoctor - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use yamldoctor::{
    cli::{Args, Config, Verbosity},
    Doctor, Reporter,
};

fn init_logging(verbosity: Verbosity) {
    // Level comes from flags only; RUST_LOG is not consulted
    let _ = tracing_subscriber::fmt()
        .with_max_level(verbosity.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(args: &Args) -> Result<Config> {
    match &args.config {
        Some(path) => Config::load(Some(path.as_path()))
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbosity());

    let (config, config_error) = match load_config(&args) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let color = config.report.color && !args.no_color;
    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), color);

    if let Some(e) = config_error {
        tracing::warn!("configuration rejected: {:#}", e);
        reporter.fail(format!("Could not load configuration: {:#}", e));
        reporter.detail("Using built-in defaults");
        reporter.blank();
    }

    let doctor = Doctor::new(args.working_dir(), config);
    let report = doctor.run(&mut reporter);

    tracing::debug!(
        available = report.capability.is_available(),
        files = report.files.len(),
        "diagnostics finished"
    );
}
