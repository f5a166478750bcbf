//! Console shell for the pair classifier.
//!
//! Each line read from stdin is one evaluation cycle. A line holding just
//! the left key is a left press, just the right key a right press, anything
//! else no press. Labels go to stdout, logs to stderr.
//!
//! Usage: pressfsm [CONFIG.toml]

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use pressfsm::config::Settings;
use pressfsm::controller::ControllerBuilder;
use pressfsm::io::{ScriptedInput, WriterDisplay};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    color_eyre::install()?;

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(config_path.as_deref())
        .wrap_err("Unable to load settings")?;
    setup_logging(&settings);
    match &config_path {
        Some(path) => info!(
            left = %settings.left_key,
            right = %settings.right_key,
            "Settings loaded from {}",
            path.display()
        ),
        None => info!("No config file given, using default settings"),
    }

    let mut builder = ControllerBuilder::new()
        .input(ScriptedInput::default())
        .display(WriterDisplay::new(io::stdout()));
    if let Some(limit) = settings.history_limit {
        builder = builder.history_limit(limit);
    }
    let mut controller = builder.build()?;

    info!(
        "Ready: '{}' presses left, '{}' presses right",
        settings.left_key, settings.right_key
    );

    for line in io::stdin().lock().lines() {
        let line = line.wrap_err("Failed to read stdin")?;
        controller.input_mut().push(settings.snapshot_for_line(&line));
        controller.run_cycle()?;
    }

    if let Some(history) = controller.classifier().history() {
        info!(
            transitions = history.records().len(),
            outputs = history.outputs().len(),
            "Input closed"
        );
    }
    Ok(())
}

fn setup_logging(settings: &Settings) {
    let env = std::env::var("RUST_LOG").ok();

    FmtSubscriber::builder()
        .with_env_filter(settings.log_filter(env.as_deref()))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
