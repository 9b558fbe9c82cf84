//! Data models for the ScopeCast application.
//!
//! This module contains all the core data structures used throughout the application:
//! - [`AppState`]: The central state container holding the current estimation parameters and settings
//! - [`EstimationInput`] / [`EstimationResult`]: The parameter snapshot fed to the estimator and its derived output
//! - [`LiftLevel`] / [`ProjectType`]: Closed enumerations keying the quotient table
//! - [`UserConfig`]: Application settings loaded from `ScopeCast Config.yaml`
//!
//! # Architecture Note
//!
//! The models are designed to be:
//! - **Serializable**: Config structs derive `Serialize`/`Deserialize` for YAML persistence
//! - **Cloneable**: AppState is wrapped in `Arc<RwLock<>>` by [`StateManager`](crate::state::StateManager) for thread-safe access
//! - **Immutable**: State updates go through StateManager's `update()` method to ensure consistency

pub mod app_state;
pub mod config;
pub mod estimate;

pub use app_state::{
    AppState, BUFFER_PERCENT_STEP, BUFFER_PERCENT_UI_MAX, FINISHED_MINUTES_FLOOR,
    HOURS_PER_DAY_MAX, HOURS_PER_DAY_MIN, HOURS_PER_DAY_STEP,
};
pub use config::{ScopeCastSettings, UserConfig};
pub use estimate::{
    EstimationInput, EstimationResult, LiftLevel, ParseLiftLevelError, ParseProjectTypeError,
    ProjectType,
};
