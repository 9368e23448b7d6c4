use clap::Parser;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};
use std::path::Path;
use anyhow::Context;

mod cli;
mod api;
mod core;
mod models;
mod generators;
mod history;
mod strength;

use crate::cli::Args;
use crate::core::config::Config;
use crate::core::meter::PasswordMeter;
use crate::history::CsvHistoryStore;
use crate::models::PasswordGenerationOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let (mut config, config_warnings) = Config::load();
    if let Some(path) = &args.history_file {
        config.history_file = path.clone();
    }
    if let Some(port) = args.api_port {
        config.web_port = port;
    }
    config
        .ensure_directories_exist()
        .context("Failed to create data directories")?;

    // Configure logging to output to the app log file
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(true)
        .target(env_logger::Target::Pipe(Box::new(
            std::fs::File::create(config.log_dir.join("app.log"))?
        )))
        .init();

    log::info!("🔒 Starting Password Strength Meter");
    for warning in &config_warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    let store = match CsvHistoryStore::open(&config.history_file) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("❌ Could not open password history {}: {e}", config.history_file.display());
            eprintln!("• Does the directory exist and is it writable?");
            eprintln!("• Use --history-file or set HISTORY_FILE in `.env`");
            return Err(e).context("Failed to open password history");
        }
    };
    log::info!("Password history at {}", store.path().display());
    let meter = Arc::new(PasswordMeter::new(Arc::new(store)));

    let defaults = PasswordGenerationOptions {
        length: config.default_password_length,
        ..PasswordGenerationOptions::default()
    };

    // One-shot command
    if let Some(command) = args.command {
        return cli::handlers::run_command(&meter, command, &defaults);
    }

    // API-only mode (blocks forever)
    if args.api_only {
        log::info!("API-only mode active. Interactive menu disabled.");
        println!("🚀 Web form available at http://{}:{}/", config.web_address, config.web_port);
        return api::start_server(meter, defaults, config.web_address.clone(), config.web_port)
            .await
            .map_err(|e| {
                log::error!("API server failed: {}", e);
                anyhow::Error::new(e).context("API server failed")
            });
    }

    // Start API server in background (using a separate thread for Actix)
    if config.web_enabled && !args.no_api {
        let meter = Arc::clone(&meter);
        let defaults = defaults.clone();
        let address = config.web_address.clone();
        let port = config.web_port;

        std::thread::spawn(move || {
            match tokio::runtime::Runtime::new() {
                Ok(rt) => {
                    rt.block_on(async {
                        match api::start_server(meter, defaults, address, port).await {
                            Ok(_) => log::info!("API server shut down gracefully"),
                            Err(e) => log::error!("API server error: {:?}", e),
                        }
                    });
                }
                Err(e) => log::error!("Failed to create tokio runtime: {:?}", e),
            }
        });
        println!("🚀 Web form available at http://{}:{}/", config.web_address, config.web_port);
    }

    let should_exit = Arc::new(AtomicBool::new(false));
    {
        let should_exit = Arc::clone(&should_exit);
        ctrlc::set_handler(move || {
            log::info!("Ctrl+C received. Shutting down...");
            should_exit.store(true, Ordering::SeqCst);
            println!("\nGoodbye!");
            std::process::exit(0);
        })
        .context("Failed to set Ctrl+C handler")?;
    }

    // CLI interactive menu
    cli::menu::run_cli_menu(&meter, &defaults, should_exit).map_err(|e| {
        log::error!("CLI menu error: {:?}", e);
        e
    })?;

    log::info!("Password Strength Meter shutdown complete.");
    Ok(())
}
