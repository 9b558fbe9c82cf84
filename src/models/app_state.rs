use crate::models::estimate::{EstimationInput, LiftLevel, ProjectType};

/// Smallest finished duration the spinbox allows, in minutes.
pub const FINISHED_MINUTES_FLOOR: f64 = 1.0;

/// Hours-per-day slider range and step.
pub const HOURS_PER_DAY_MIN: f64 = 1.0;
pub const HOURS_PER_DAY_MAX: f64 = 12.0;
pub const HOURS_PER_DAY_STEP: f64 = 0.5;

/// Buffer slider range and step. The estimator itself accepts any
/// non-negative buffer; 30 % is only the top of the on-screen control.
pub const BUFFER_PERCENT_UI_MAX: f64 = 30.0;
pub const BUFFER_PERCENT_STEP: f64 = 5.0;

/// Single source of truth for all application state.
///
/// Holds the one current set of estimation parameters the screen is showing
/// plus the application settings loaded from the config file. There is no
/// history and no multi-project support: every parameter edit overwrites the
/// corresponding field and the derived estimate is recomputed whole.
///
/// # Thread Safety
///
/// `AppState` is wrapped in `Arc<RwLock<AppState>>` by
/// [`crate::state::StateManager`] to provide thread-safe access across the
/// application. Never access `AppState` directly - always use
/// [`StateManager`](crate::state::StateManager) methods:
/// - [`read()`](crate::state::StateManager::read) for read-only access
/// - [`update()`](crate::state::StateManager::update) for mutations with automatic change events
///
/// # Related Types
///
/// - [`crate::state::StateManager`]: Thread-safe wrapper with event emission
/// - [`crate::state::StateChange`]: Event types for state mutations
/// - [`crate::models::UserConfig`]: Application settings loaded from YAML
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    // Estimation parameters
    pub project_type: ProjectType,
    pub finished_minutes: f64,
    pub editing_lift: LiftLevel,
    pub finishing_lift: LiftLevel,
    pub hours_per_day: f64,
    pub buffer_percent: f64,

    // Application settings
    pub stat_logging: bool,
    pub debug_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            // Initial screen: a 40-minute lecture at medium lift on both
            // phases, 5 focused hours a day, 10 % contingency.
            project_type: ProjectType::Lecture,
            finished_minutes: 40.0,
            editing_lift: LiftLevel::Medium,
            finishing_lift: LiftLevel::Medium,
            hours_per_day: 5.0,
            buffer_percent: 10.0,

            // Settings defaults, overridden by the config file
            stat_logging: true,
            debug_mode: false,
        }
    }
}

impl AppState {
    /// Snapshot the current estimation parameters.
    ///
    /// The returned value is what the estimator consumes; taking a copy here
    /// means a recompute always sees one consistent parameter set even while
    /// further edits land.
    pub fn estimation_input(&self) -> EstimationInput {
        EstimationInput {
            project_type: self.project_type,
            finished_minutes: self.finished_minutes,
            editing_lift: self.editing_lift,
            finishing_lift: self.finishing_lift,
            hours_per_day: self.hours_per_day,
            buffer_percent: self.buffer_percent,
        }
    }

    /// Put every estimation parameter back to its initial value.
    ///
    /// Application settings are left untouched; reset is about the screen,
    /// not the config file.
    pub fn reset_parameters(&mut self) {
        let defaults = AppState::default();
        self.project_type = defaults.project_type;
        self.finished_minutes = defaults.finished_minutes;
        self.editing_lift = defaults.editing_lift;
        self.finishing_lift = defaults.finishing_lift;
        self.hours_per_day = defaults.hours_per_day;
        self.buffer_percent = defaults.buffer_percent;
    }
}
