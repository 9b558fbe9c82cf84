//! ScopeCast - Video Editing Scope Estimator
//!
//! Main entry point for the GUI application.
//!
//! # Overview
//!
//! This binary crate provides the Slint GUI frontend for ScopeCast. It initializes:
//! - Configuration loading ([`ConfigManager`])
//! - Logging infrastructure (file rotation + console output)
//! - State management ([`StateManager`])
//! - Performance counters ([`Metrics`])
//! - GUI controller ([`GuiController`] - bridges Slint UI with the estimator)
//!
//! The application uses a two-thread model:
//! - **Main thread**: Runs the Slint event loop (blocking, synchronous)
//! - **State listener**: Background std::thread that recomputes the estimate
//!   on every parameter change and pushes rendered strings back into the UI
//!
//! # Execution Flow
//!
//! 1. Load user settings from ScopeCast Data/
//! 2. Initialize logging → logs/scopecast.<date>.log
//! 3. Create StateManager (Arc<RwLock<AppState>>) and seed it with settings
//! 4. Create GuiController (wires Slint UI to state and the estimator)
//! 5. Run Slint event loop (blocks until window closed)
//! 6. Log a metrics summary when stat logging is enabled
//!
//! # Configuration Files
//!
//! Expected in `ScopeCast Data/` directory:
//! - `ScopeCast Config.yaml`: User preferences (stat logging, debug mode)
//!
//! Estimation parameters are not persisted; every launch starts from the
//! default lecture scenario.
//!
//! # Platform
//!
//! Cross-platform via Slint (Windows, Linux, macOS)

use anyhow::Result;
use scopecast::metrics::Metrics;
use scopecast::ui::GuiController;
use scopecast::{APP_NAME, ConfigManager, StateManager, VERSION};
use std::sync::Arc;

/// Main entry point for the ScopeCast GUI application
///
/// This function orchestrates the complete application lifecycle:
/// 1. Configuration loading
/// 2. Logging setup
/// 3. State management
/// 4. GUI launch and execution
/// 5. Shutdown metrics report
///
/// # Returns
///
/// - `Ok(())` if the application ran and exited normally
/// - `Err(_)` if initialization or GUI execution failed
///
/// # Errors
///
/// This function can fail if:
/// - The config directory cannot be created (permissions)
/// - The configuration file exists but is invalid YAML
/// - Logging initialization fails (disk space, permissions)
/// - Slint UI initialization fails (graphics drivers, display)
/// - GUI encounters a fatal error during execution
fn main() -> Result<()> {
    // Load user settings before logging so the debug flag can raise the
    // log level from the very first line
    let config_manager = ConfigManager::new("ScopeCast Data")?;
    let user_config = config_manager.load_user_config()?;

    // Setup logging with both file and console output
    let _guard = scopecast::logging::setup_logging_with_console(
        "logs",
        "scopecast",
        user_config.settings.debug_mode,
        true,
    )?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);
    tracing::info!(
        "Loaded user settings - stat_logging: {}, debug_mode: {}",
        user_config.settings.stat_logging,
        user_config.settings.debug_mode
    );

    // Create state manager for application state
    let state_manager = Arc::new(StateManager::new());

    // Load user config into state manager
    state_manager.load_from_user_config(&user_config);
    tracing::info!("State manager initialized");

    // Performance counters, reported at shutdown when stat logging is on
    let metrics = Arc::new(Metrics::new());

    // Create GUI controller
    // This wires up the Slint UI with state management and the estimator
    let gui_controller = GuiController::new(state_manager.clone(), metrics.clone())?;

    tracing::info!("GUI controller initialized, launching window");

    // Run the GUI (blocks until window is closed)
    let result = gui_controller.run();

    // Clean up after window closes
    tracing::info!("GUI closed, shutting down");

    if state_manager.read(|s| s.stat_logging) {
        metrics.log_summary();
    }

    tracing::info!("Application shutdown complete");

    result.map_err(|e| {
        tracing::error!("GUI error: {}", e);
        anyhow::anyhow!("GUI error: {}", e)
    })
}
