// BilPris - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading (config.toml)
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use bilpris::app;
pub use bilpris::core;
pub use bilpris::platform;
pub use bilpris::ui;
pub use bilpris::util;

use clap::Parser;

/// BilPris - Used-car model browser and price estimate viewer.
///
/// Pick a brand and model, fill in the vehicle details, and fetch a
/// price estimate from current market listings.
#[derive(Parser, Debug)]
#[command(name = "BilPris", version, about)]
struct Cli {
    /// Base URL of the estimate backend (overrides config.toml).
    #[arg(short = 's', long = "server")]
    server: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging so the
    // configured level can participate in filter selection.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_error) = match platform::config::load_config(&platform_paths.config_file())
    {
        Ok(config) => (config, None),
        Err(e) => (platform::config::RawConfig::default(), Some(e)),
    };

    // Initialise logging subsystem
    util::logging::init(cli.debug, config.logging.level.as_deref());

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Config loading failed, using defaults");
    }

    // Determine backend URL: CLI override > config file > default.
    let server_url = platform::config::normalise_server_url(
        cli.server
            .as_deref()
            .or(config.server.url.as_deref())
            .unwrap_or(util::constants::DEFAULT_SERVER_URL),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        server = %server_url,
        debug = cli.debug,
        "BilPris starting"
    );

    // Create application state
    let state = app::state::AppState::new(server_url, cli.debug);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(ui::theme::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(ui::theme::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::BilPrisApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch BilPris GUI: {e}");
        std::process::exit(1);
    }
}
