//! Tip-out session driver
//!
//! Replays a session snapshot through the entry flow, computes the payout
//! breakdown and prints it. In watch mode the file is re-read and the
//! numbers recomputed on every tick.

use anyhow::{Context, Result};
use std::time::Duration;
use tipout::config::{Config, DEFAULT_CONFIG_PATH};
use tipout::flow::EntryFlow;
use tipout::report;
use tipout::session_file::SessionFile;
use tokio::time;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("init") {
        let path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_CONFIG_PATH);
        return Config::write_default(path);
    }

    let mut config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({:#}), using defaults", e);
        Config::default_local()
    });
    if let Some(path) = args.first() {
        config.session_path = path.clone();
    }

    log::info!("Session file: {}", config.session_path().display());

    if !config.watch {
        let output = run_once(&config)?;
        println!("{}", output);
        return Ok(());
    }

    log::info!("Watching for changes every {}s", config.poll_interval_secs);

    let mut interval = time::interval(Duration::from_secs(config.poll_interval_secs.max(1)));
    let mut last_output: Option<String> = None;

    loop {
        interval.tick().await;

        match run_once(&config) {
            Ok(output) => {
                if last_output.as_ref() != Some(&output) {
                    println!("{}", output);
                    last_output = Some(output);
                } else {
                    log::debug!("No change");
                }
            }
            Err(e) => {
                log::error!("Error computing distribution: {:#}", e);
            }
        }
    }
}

/// Load, replay, compute and render one snapshot
fn run_once(config: &Config) -> Result<String> {
    let file = SessionFile::load(config.session_path())?;

    let mut flow = EntryFlow::new(config.default_support_percentage);
    let outcome = file
        .replay(&mut flow)
        .context("Session could not reach the results stage")?;

    for rejected in &outcome.rejected {
        log::warn!("Skipped entry: {}", rejected);
    }

    let result = flow.results()?;
    log::debug!(
        "{} bartenders, {} support staff",
        flow.session().completed_count(tip_model::Role::Bartender),
        flow.session().completed_count(tip_model::Role::SupportStaff)
    );
    report::log_reconciliation(&result, config.balance_tolerance);

    report::render(&result, config.output)
}
