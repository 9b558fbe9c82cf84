// State management module
//
// This module provides the StateManager which wraps AppState with thread-safe access
// using Arc<RwLock<T>> and emits change events for GUI updates.

use crate::models::{AppState, EstimationInput, LiftLevel, ProjectType};
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

/// Change events emitted when state is modified
///
/// These events are emitted to notify interested parties (primarily the GUI)
/// about state changes without requiring them to poll the state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    /// An estimation parameter has been updated.
    ///
    /// Carries the complete new parameter set so consumers recompute from
    /// one consistent snapshot instead of re-reading state field by field.
    ParametersChanged {
        input: EstimationInput,
    },

    /// Settings have been updated
    SettingsChanged,

    /// All estimation parameters went back to their defaults
    ParametersReset,
}

/// Thread-safe state manager with event emission
///
/// This is the central state management component that:
/// - Provides thread-safe access to [`AppState`] via `Arc<RwLock<T>>`
/// - Detects state changes and emits [`StateChange`] events
/// - Supports subscribing to state changes via tokio broadcast channels
///
/// # Usage
///
/// Always use `StateManager` instead of accessing [`AppState`] directly:
/// - [`read()`](Self::read) for reading state without long-held locks
/// - [`update()`](Self::update) for mutations with automatic event emission
/// - [`subscribe()`](Self::subscribe) for listening to state changes
///
/// # Related Types
///
/// - [`crate::models::AppState`]: The underlying state structure
/// - [`StateChange`]: Event types emitted on state mutations
/// - [`crate::config::ConfigManager`]: Loads settings into state
/// - [`crate::ui::controller::GuiController`]: Primary consumer of state events
pub struct StateManager {
    /// The application state protected by RwLock for thread-safe access
    state: Arc<RwLock<AppState>>,

    /// Broadcast channel for emitting state change events
    /// Multiple subscribers can listen for state changes
    state_tx: broadcast::Sender<StateChange>,
}

impl StateManager {
    /// Create a new StateManager with default state
    ///
    /// # Returns
    /// A new StateManager with a broadcast channel buffer of 100 events
    pub fn new() -> Self {
        let (state_tx, _) = broadcast::channel(100);
        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            state_tx,
        }
    }

    /// Get a read-only snapshot of the current state
    ///
    /// This clones the entire state, so it's safe to use without holding locks.
    /// For checking individual fields, consider using `read()` with a closure.
    pub fn snapshot(&self) -> AppState {
        self.state.read().unwrap().clone()
    }

    /// Execute a function with read access to the state
    ///
    /// # Example
    /// ```ignore
    /// let input = state_manager.read(|state| state.estimation_input());
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AppState) -> R,
    {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Update the state and emit change events
    ///
    /// This is the primary way to modify state. It:
    /// 1. Captures the old state
    /// 2. Applies the update function
    /// 3. Detects what changed
    /// 4. Emits appropriate events
    ///
    /// # Arguments
    /// * `update_fn` - A function that mutates the state
    ///
    /// # Returns
    /// A vector of StateChange events that were emitted. Writing a value
    /// equal to the current one emits nothing.
    ///
    /// # Example
    /// ```ignore
    /// state_manager.update(|state| {
    ///     state.finished_minutes = 90.0;
    /// });
    /// ```
    pub fn update<F>(&self, update_fn: F) -> Vec<StateChange>
    where
        F: FnOnce(&mut AppState),
    {
        let mut state = self.state.write().unwrap();
        let old_state = state.clone();

        // Apply the update
        update_fn(&mut state);

        // Detect changes and emit events
        let changes = self.detect_changes(&old_state, &state);

        for change in &changes {
            // Ignore send errors - it's OK if no one is listening
            let _ = self.state_tx.send(change.clone());
        }

        changes
    }

    /// Subscribe to state change events
    ///
    /// Returns a receiver that will get notified of all future state changes.
    /// Multiple subscribers can listen simultaneously.
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.state_tx.subscribe()
    }

    /// Detect what changed between two states and generate events
    ///
    /// This is called internally by `update()` to determine which events to emit.
    fn detect_changes(&self, old: &AppState, new: &AppState) -> Vec<StateChange> {
        let mut changes = Vec::new();

        // Estimation parameter changes collapse into one event carrying the
        // whole snapshot; consumers always recompute the full estimate.
        if old.estimation_input() != new.estimation_input() {
            changes.push(StateChange::ParametersChanged {
                input: new.estimation_input(),
            });
        }

        // Settings changes (checking all settings fields)
        if old.stat_logging != new.stat_logging || old.debug_mode != new.debug_mode {
            changes.push(StateChange::SettingsChanged);
        }

        changes
    }

    // Convenience methods for common state updates

    /// Set the project type
    pub fn set_project_type(&self, project_type: ProjectType) -> Vec<StateChange> {
        self.update(|state| {
            state.project_type = project_type;
        })
    }

    /// Set the finished video duration in minutes
    pub fn set_finished_minutes(&self, minutes: f64) -> Vec<StateChange> {
        self.update(|state| {
            state.finished_minutes = minutes;
        })
    }

    /// Set the editing lift level
    pub fn set_editing_lift(&self, lift: LiftLevel) -> Vec<StateChange> {
        self.update(|state| {
            state.editing_lift = lift;
        })
    }

    /// Set the finishing lift level
    pub fn set_finishing_lift(&self, lift: LiftLevel) -> Vec<StateChange> {
        self.update(|state| {
            state.finishing_lift = lift;
        })
    }

    /// Set the available working hours per day
    pub fn set_hours_per_day(&self, hours: f64) -> Vec<StateChange> {
        self.update(|state| {
            state.hours_per_day = hours;
        })
    }

    /// Set the contingency buffer percentage
    pub fn set_buffer_percent(&self, percent: f64) -> Vec<StateChange> {
        self.update(|state| {
            state.buffer_percent = percent;
        })
    }

    /// Put every estimation parameter back to its default
    pub fn reset_parameters(&self) -> Vec<StateChange> {
        let mut changes = self.update(|state| {
            state.reset_parameters();
        });

        // Emit a reset event
        let reset_event = StateChange::ParametersReset;
        let _ = self.state_tx.send(reset_event.clone());
        changes.push(reset_event);

        changes
    }

    /// Update settings
    pub fn update_settings<F>(&self, settings_fn: F) -> Vec<StateChange>
    where
        F: FnOnce(&mut AppState),
    {
        self.update(settings_fn)
    }

    /// Load configuration from UserConfig
    ///
    /// This populates the settings fields of AppState from the user
    /// configuration file. Estimation parameters are not part of the file
    /// and keep their defaults.
    ///
    /// # Arguments
    /// * `user_config` - The loaded user configuration
    ///
    /// # Returns
    /// A vector of StateChange events that were emitted
    pub fn load_from_user_config(
        &self,
        user_config: &crate::models::UserConfig,
    ) -> Vec<StateChange> {
        self.update(|state| {
            let settings = &user_config.settings;

            state.stat_logging = settings.stat_logging;
            state.debug_mode = settings.debug_mode;

            tracing::info!(
                "Loaded user config: stat_logging={}, debug_mode={}",
                state.stat_logging,
                state.debug_mode
            );
        })
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

// Make StateManager cloneable for sharing across threads
impl Clone for StateManager {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            state_tx: self.state_tx.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ScopeCastSettings, UserConfig};

    #[test]
    fn test_new_state_manager() {
        let manager = StateManager::new();
        let state = manager.snapshot();

        assert_eq!(state.project_type, ProjectType::Lecture);
        assert_eq!(state.finished_minutes, 40.0);
        assert_eq!(state.hours_per_day, 5.0);
    }

    #[test]
    fn test_update_with_change_detection() {
        let manager = StateManager::new();

        let changes = manager.update(|state| {
            state.finished_minutes = 90.0;
        });

        assert_eq!(changes.len(), 1);
        match &changes[0] {
            StateChange::ParametersChanged { input } => {
                assert_eq!(input.finished_minutes, 90.0);
                assert_eq!(input.project_type, ProjectType::Lecture);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_equal_write_emits_nothing() {
        let manager = StateManager::new();

        // 40.0 is already the default
        let changes = manager.set_finished_minutes(40.0);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_each_parameter_setter_emits_one_event() {
        let manager = StateManager::new();

        assert_eq!(manager.set_project_type(ProjectType::Editorial).len(), 1);
        assert_eq!(manager.set_finished_minutes(25.0).len(), 1);
        assert_eq!(manager.set_editing_lift(LiftLevel::Heavy).len(), 1);
        assert_eq!(manager.set_finishing_lift(LiftLevel::Light).len(), 1);
        assert_eq!(manager.set_hours_per_day(8.0).len(), 1);
        assert_eq!(manager.set_buffer_percent(20.0).len(), 1);

        let state = manager.snapshot();
        assert_eq!(state.project_type, ProjectType::Editorial);
        assert_eq!(state.finished_minutes, 25.0);
        assert_eq!(state.editing_lift, LiftLevel::Heavy);
        assert_eq!(state.finishing_lift, LiftLevel::Light);
        assert_eq!(state.hours_per_day, 8.0);
        assert_eq!(state.buffer_percent, 20.0);
    }

    #[test]
    fn test_parameters_changed_carries_full_snapshot() {
        let manager = StateManager::new();
        manager.set_project_type(ProjectType::Editorial);

        let changes = manager.set_buffer_percent(15.0);
        match &changes[0] {
            StateChange::ParametersChanged { input } => {
                // Earlier edits are present in the snapshot too.
                assert_eq!(input.project_type, ProjectType::Editorial);
                assert_eq!(input.buffer_percent, 15.0);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_reset_parameters() {
        let manager = StateManager::new();
        manager.set_finished_minutes(120.0);
        manager.set_buffer_percent(30.0);

        let changes = manager.reset_parameters();

        assert!(changes.iter().any(|c| matches!(c, StateChange::ParametersChanged { .. })));
        assert!(changes.iter().any(|c| matches!(c, StateChange::ParametersReset)));

        let state = manager.snapshot();
        assert_eq!(state.finished_minutes, 40.0);
        assert_eq!(state.buffer_percent, 10.0);
    }

    #[test]
    fn test_reset_on_default_state_still_announces_reset() {
        let manager = StateManager::new();

        let changes = manager.reset_parameters();

        // Nothing changed, so no ParametersChanged, but the reset event
        // itself still fires for UI feedback.
        assert_eq!(changes, vec![StateChange::ParametersReset]);
    }

    #[test]
    fn test_settings_change_detection() {
        let manager = StateManager::new();

        let changes = manager.update_settings(|state| {
            state.debug_mode = true;
        });

        assert_eq!(changes, vec![StateChange::SettingsChanged]);

        let state = manager.snapshot();
        assert!(state.debug_mode);
    }

    #[test]
    fn test_load_from_user_config() {
        let manager = StateManager::new();
        let config = UserConfig {
            settings: ScopeCastSettings {
                stat_logging: false,
                debug_mode: true,
            },
        };

        let changes = manager.load_from_user_config(&config);
        assert_eq!(changes, vec![StateChange::SettingsChanged]);

        let state = manager.snapshot();
        assert!(!state.stat_logging);
        assert!(state.debug_mode);
        // Parameters stay at their defaults; the file does not carry them.
        assert_eq!(state.finished_minutes, 40.0);
    }

    #[test]
    fn test_subscribe_to_changes() {
        let manager = StateManager::new();
        let mut rx = manager.subscribe();

        // Make a change
        manager.update(|state| {
            state.hours_per_day = 6.0;
        });

        // Should receive the event
        let event = rx.try_recv();
        assert!(event.is_ok());
        assert!(matches!(event.unwrap(), StateChange::ParametersChanged { .. }));
    }

    #[test]
    fn test_multiple_subscribers() {
        let manager = StateManager::new();
        let mut rx1 = manager.subscribe();
        let mut rx2 = manager.subscribe();

        manager.set_editing_lift(LiftLevel::Light);

        // Both subscribers should receive the event
        assert!(rx1.try_recv().is_ok());
        assert!(rx2.try_recv().is_ok());
    }

    #[test]
    fn test_read_with_closure() {
        let manager = StateManager::new();
        manager.update(|state| {
            state.buffer_percent = 5.0;
        });

        let buffer = manager.read(|state| state.buffer_percent);
        assert_eq!(buffer, 5.0);
    }

    #[test]
    fn test_clone_state_manager() {
        let manager1 = StateManager::new();
        let manager2 = manager1.clone();

        // Update through one manager
        manager1.set_finished_minutes(75.0);

        // Changes should be visible through the clone
        let state = manager2.snapshot();
        assert_eq!(state.finished_minutes, 75.0);
    }
}
