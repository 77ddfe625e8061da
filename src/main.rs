use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use viewscope::storage::settings::{load_settings, save_settings};
use viewscope::storage::FileStore;
use viewscope::types::AppConfig;
use viewscope::{Catalog, Session};

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("viewscope: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_filter);
    tracing::info!("Using data directory {}", config.data_dir.display());

    let catalog = match Catalog::bundled() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Bundled catalog is invalid: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let settings = load_settings(&config);
    let session =
        Session::open(catalog, FileStore::new(config.selections_dir())).with_settings(settings);
    tracing::debug!("Filter panel expanded: {}", session.options_expanded());

    for entry in session.visible() {
        println!(
            "{:<28} {:>6}  {:<32} {}",
            entry.name,
            entry.parameter_size,
            entry.license,
            entry.release_label()
        );
    }
    println!("{} of {} models", session.visible_count(), session.total_count());

    let input = session.calculator();
    let estimate = session.estimate();
    println!(
        "{}B @ {} x{}: {} GB, {}",
        input.parameters_b(),
        input.precision(),
        input.overhead(),
        estimate.display_value(),
        estimate.gpu_label()
    );

    if let Err(e) = save_settings(&config, session.settings()) {
        tracing::warn!("Failed to save settings: {}", e);
    }

    ExitCode::SUCCESS
}
