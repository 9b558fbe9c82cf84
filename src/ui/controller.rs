// GUI Controller - Bridges Slint UI with Rust State Management
//
// This module contains the GuiController which coordinates between:
// - Slint UI (MainWindow)
// - StateManager (application state)
// - Estimator (scope math)
// - UiBridge (worker/GUI coordination)
//
// It handles:
// - Wiring UI callbacks → state mutations
// - Subscribing to state changes → recompute → UI updates
// - Pushing pre-rendered display strings into the window

use crate::metrics::Metrics;
use crate::models::{
    BUFFER_PERCENT_STEP, EstimationInput, EstimationResult, HOURS_PER_DAY_STEP,
};
use crate::services::quotients::QuotientTable;
use crate::services::{EstimateError, Estimator, summary};
use crate::state::{StateChange, StateManager};
use crate::ui::bridge::UiBridge;
use anyhow::{Context, Result};
use std::sync::Arc;

// Include the generated Slint code
slint::include_modules!();

/// GUI Controller that wires up the Slint UI with application state and logic
///
/// This is the main coordinator for the GUI layer. It:
/// - Creates and manages the UiBridge for worker-thread/Slint coordination
/// - Sets up Slint callbacks that translate widget events into state setters
/// - Subscribes to StateManager events, recomputes the estimate, and pushes
///   the rendered breakdown back into the window
///
/// # Example
/// ```ignore
/// let state_manager = Arc::new(StateManager::new());
/// let metrics = Arc::new(Metrics::new());
/// let controller = GuiController::new(state_manager, metrics)?;
/// controller.run()?;
/// ```
///
/// # Data flow
///
/// Widget event → callback → StateManager setter → broadcast StateChange →
/// subscription thread → Estimator::estimate → UiBridge → Slint properties.
///
/// The UI never computes anything itself. Every number and sentence on
/// screen is rendered in `services::summary` and arrives as a finished
/// string, so the display can never drift from the arithmetic.
pub struct GuiController {
    ui: MainWindow,
    _bridge: UiBridge<MainWindow>,
    state_manager: Arc<StateManager>,
}

impl GuiController {
    /// Create a new GUI controller with the given state manager and metrics
    ///
    /// This initializes the Slint UI, seeds the widgets from current state
    /// (including a first estimate so the window never opens blank), and
    /// wires up all callbacks and subscriptions.
    ///
    /// # Arguments
    /// * `state_manager` - Shared application state
    /// * `metrics` - Shared performance counters
    ///
    /// # Returns
    /// * `Ok(GuiController)` - Ready to run
    /// * `Err` - If the Slint UI could not be created
    pub fn new(state_manager: Arc<StateManager>, metrics: Arc<Metrics>) -> Result<Self> {
        let ui = MainWindow::new().context("Failed to create Slint UI")?;

        // Create the bridge for marshalling worker-thread updates onto the
        // Slint event loop
        let bridge = UiBridge::new(&ui);

        // Seed UI from current state before any callback can fire
        Self::sync_ui_with_state(&ui, &state_manager);

        // Wire up UI callbacks
        Self::setup_callbacks(&ui, &state_manager);

        // Subscribe to state changes and recompute on every parameter edit
        Self::setup_state_subscription(&bridge, &state_manager, &metrics);

        tracing::info!("GUI controller initialized");

        Ok(Self {
            ui,
            _bridge: bridge,
            state_manager,
        })
    }

    /// Run the GUI event loop (blocks until window closes)
    pub fn run(self) -> Result<(), slint::PlatformError> {
        self.ui.run()
    }

    /// Restore every estimation parameter to its default value
    ///
    /// Settings are left untouched. Safe to call from any thread.
    pub fn request_reset(&self) {
        self.state_manager.reset_parameters();
    }

    /// Seed all UI properties from the current application state
    ///
    /// Runs once during construction, on the main thread, before the event
    /// loop starts. Also computes and applies the initial estimate so the
    /// breakdown is populated from the first frame.
    fn sync_ui_with_state(ui: &MainWindow, state_manager: &Arc<StateManager>) {
        let input = state_manager.read(|state| state.estimation_input());

        Self::apply_parameter_controls(ui, &input);

        let estimator = Estimator::new();
        match estimator.estimate(&input) {
            Ok(result) => Self::apply_result(ui, estimator.table(), &input, &result),
            Err(e) => Self::apply_error(ui, &e),
        }
    }

    /// Set up all UI callbacks
    ///
    /// Each callback translates a widget event into a typed state mutation.
    /// The callbacks never touch display properties themselves; the
    /// subscription thread reacts to the resulting StateChange and pushes
    /// the recomputed output.
    fn setup_callbacks(ui: &MainWindow, state_manager: &Arc<StateManager>) {
        // Project type buttons
        let state = state_manager.clone();
        ui.on_project_type_selected(move |value| match value.as_str().parse() {
            Ok(project_type) => {
                state.set_project_type(project_type);
            }
            Err(e) => tracing::warn!("Ignoring project type from UI: {}", e),
        });

        // Finished minutes spinbox. The widget enforces its own bounds, so
        // the value is already a positive integer here.
        let state = state_manager.clone();
        ui.on_finished_minutes_edited(move |minutes| {
            state.set_finished_minutes(f64::from(minutes));
        });

        // Editing lift selector
        let state = state_manager.clone();
        ui.on_editing_lift_selected(move |value| match value.as_str().parse() {
            Ok(lift) => {
                state.set_editing_lift(lift);
            }
            Err(e) => tracing::warn!("Ignoring editing lift from UI: {}", e),
        });

        // Finishing lift selector
        let state = state_manager.clone();
        ui.on_finishing_lift_selected(move |value| match value.as_str().parse() {
            Ok(lift) => {
                state.set_finishing_lift(lift);
            }
            Err(e) => tracing::warn!("Ignoring finishing lift from UI: {}", e),
        });

        // Hours-per-day slider. Slint sliders report a continuous float, so
        // snap to the half-hour grid before it reaches the state.
        let state = state_manager.clone();
        ui.on_hours_per_day_edited(move |value| {
            state.set_hours_per_day(snap_to_step(f64::from(value), HOURS_PER_DAY_STEP));
        });

        // Buffer slider, snapped to 5% increments
        let state = state_manager.clone();
        ui.on_buffer_percent_edited(move |value| {
            state.set_buffer_percent(snap_to_step(f64::from(value), BUFFER_PERCENT_STEP));
        });

        // Reset button
        let state = state_manager.clone();
        ui.on_reset_clicked(move || {
            tracing::info!("Reset requested from UI");
            state.reset_parameters();
        });
    }

    /// Subscribe to state changes and recompute the estimate on each one
    ///
    /// Spawns a plain thread that blocks on the broadcast receiver. Every
    /// `ParametersChanged` event carries a full input snapshot; the thread
    /// runs the estimator on it and marshals the rendered strings onto the
    /// event loop through the bridge.
    fn setup_state_subscription(
        bridge: &UiBridge<MainWindow>,
        state_manager: &Arc<StateManager>,
        metrics: &Arc<Metrics>,
    ) {
        let mut state_rx = state_manager.subscribe();
        let bridge_handle = bridge.clone_handle();
        let metrics = metrics.clone();

        std::thread::spawn(move || {
            let estimator = Estimator::new();

            loop {
                match state_rx.blocking_recv() {
                    Ok(StateChange::ParametersChanged { input }) => {
                        metrics.record_state_update();

                        let outcome = estimator.estimate(&input);
                        match &outcome {
                            Ok(_) => metrics.record_estimate_computed(),
                            Err(e) => {
                                metrics.record_estimate_rejected();
                                tracing::warn!("Estimate rejected: {}", e);
                            }
                        }

                        let table = *estimator.table();
                        let queued = bridge_handle.update_ui(move |ui| {
                            GuiController::apply_parameter_controls(ui, &input);
                            match outcome {
                                Ok(result) => {
                                    GuiController::apply_result(ui, &table, &input, &result);
                                }
                                Err(e) => GuiController::apply_error(ui, &e),
                            }
                        });
                        if queued {
                            metrics.record_ui_update();
                        } else {
                            metrics.record_ui_channel_full();
                        }
                    }
                    Ok(StateChange::ParametersReset) => {
                        // The preceding ParametersChanged already resynced
                        // the widgets; nothing extra to push.
                        tracing::info!("Parameters reset to defaults");
                    }
                    Ok(StateChange::SettingsChanged) => {
                        metrics.record_state_update();
                        tracing::debug!("Settings changed");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                        tracing::debug!("State channel closed, stopping UI subscription");
                        break;
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!("UI subscription lagged, skipped {} state changes", n);
                        continue;
                    }
                }
            }
        });
    }

    /// Push the parameter widgets to match an input snapshot
    ///
    /// Setting a Slint property from Rust does not re-fire its callback, so
    /// this cannot loop back into the state manager.
    fn apply_parameter_controls(ui: &MainWindow, input: &EstimationInput) {
        ui.set_project_type(input.project_type.as_str().into());
        ui.set_finished_minutes(input.finished_minutes as i32);
        ui.set_editing_lift(input.editing_lift.as_str().into());
        ui.set_finishing_lift(input.finishing_lift.as_str().into());
        ui.set_hours_per_day(input.hours_per_day as f32);
        ui.set_buffer_percent(input.buffer_percent as f32);
    }

    /// Push a successful estimate into the display properties
    fn apply_result(
        ui: &MainWindow,
        table: &QuotientTable,
        input: &EstimationInput,
        result: &EstimationResult,
    ) {
        ui.set_editing_quotient_hint(summary::editing_hint(table, input.project_type).into());
        ui.set_finishing_quotient_hint(summary::finishing_hint(table, input.project_type).into());
        ui.set_hours_per_day_text(summary::hours_per_day_label(input).into());
        ui.set_buffer_percent_text(summary::buffer_percent_label(input).into());

        ui.set_editing_time_text(summary::format_hours(result.editing_time).into());
        ui.set_finishing_time_text(summary::format_hours(result.finishing_time).into());
        ui.set_base_total_text(summary::format_hours(result.total_hours).into());

        match summary::buffer_row(input, result) {
            Some((label, delta)) => {
                ui.set_buffer_row_visible(true);
                ui.set_buffer_label(label.into());
                ui.set_buffer_delta_text(delta.into());
            }
            None => ui.set_buffer_row_visible(false),
        }

        ui.set_total_effort_text(summary::total_effort_line(result).into());
        ui.set_calendar_text(summary::workdays_label(result.estimated_days).into());
        ui.set_availability_text(summary::availability_line(input).into());
        ui.set_quick_summary(summary::quick_summary(input, result).into());

        ui.set_estimate_error("".into());
        ui.set_estimate_valid(true);
    }

    /// Blank the result panel and surface a validation error
    ///
    /// The figures are replaced with placeholders rather than left stale, so
    /// the screen never pairs an error line with numbers it contradicts.
    fn apply_error(ui: &MainWindow, error: &EstimateError) {
        ui.set_editing_time_text("--".into());
        ui.set_finishing_time_text("--".into());
        ui.set_base_total_text("--".into());
        ui.set_buffer_row_visible(false);
        ui.set_total_effort_text("--".into());
        ui.set_calendar_text("--".into());
        ui.set_availability_text("".into());
        ui.set_quick_summary("".into());

        ui.set_estimate_error(error.to_string().into());
        ui.set_estimate_valid(false);
    }
}

/// Round a slider value to the nearest multiple of `step`
fn snap_to_step(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LiftLevel, ProjectType};

    // Creating a MainWindow requires a display, so these tests exercise the
    // controller's thread-side plumbing directly.

    #[test]
    fn test_snap_to_step_half_hours() {
        assert_eq!(snap_to_step(5.2, 0.5), 5.0);
        assert_eq!(snap_to_step(5.3, 0.5), 5.5);
        assert_eq!(snap_to_step(7.75, 0.5), 8.0);
        assert_eq!(snap_to_step(1.0, 0.5), 1.0);
    }

    #[test]
    fn test_snap_to_step_buffer_grid() {
        assert_eq!(snap_to_step(12.0, 5.0), 10.0);
        assert_eq!(snap_to_step(13.0, 5.0), 15.0);
        assert_eq!(snap_to_step(0.0, 5.0), 0.0);
        assert_eq!(snap_to_step(30.0, 5.0), 30.0);
    }

    #[test]
    fn test_parameter_events_carry_recomputable_snapshots() {
        // The subscription thread relies on each ParametersChanged event
        // carrying everything the estimator needs.
        let state_manager = StateManager::new();
        let mut rx = state_manager.subscribe();

        state_manager.set_editing_lift(LiftLevel::Heavy);
        state_manager.set_project_type(ProjectType::Editorial);

        let estimator = Estimator::new();
        let mut last = None;
        while let Ok(change) = rx.try_recv() {
            if let StateChange::ParametersChanged { input } = change {
                last = Some(estimator.estimate(&input).unwrap());
            }
        }

        let result = last.unwrap();
        // Editorial heavy editing with medium finishing: 40 * (21.5 + 3.5)
        assert_eq!(result.total_minutes, 1000.0);
        assert_eq!(result.total_hours, 1000.0 / 60.0);
    }

    #[test]
    fn test_rejected_input_renders_error_not_panic() {
        let estimator = Estimator::new();
        let input = EstimationInput {
            project_type: ProjectType::Lecture,
            finished_minutes: 0.0,
            editing_lift: LiftLevel::Medium,
            finishing_lift: LiftLevel::Medium,
            hours_per_day: 5.0,
            buffer_percent: 10.0,
        };

        let error = estimator.estimate(&input).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("finished_minutes"));
    }
}
