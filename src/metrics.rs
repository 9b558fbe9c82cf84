// Performance metrics module
//
// Provides lightweight metrics tracking for monitoring application performance

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Global performance metrics
///
/// Uses atomic operations for thread-safe metric tracking without locks.
/// Metrics are collected throughout the application lifecycle and logged
/// on shutdown (when stat logging is enabled) for a picture of the session.
#[derive(Debug)]
pub struct Metrics {
    /// Total number of estimates successfully computed
    pub estimates_computed: AtomicUsize,

    /// Total number of parameter sets the estimator rejected
    pub estimates_rejected: AtomicUsize,

    /// Number of state updates performed
    pub state_updates: AtomicU64,

    /// Number of UI updates sent
    pub ui_updates: AtomicU64,

    /// Number of UI update channel full errors
    pub ui_update_channel_full: AtomicU64,

    /// Application start time
    start_time: Instant,
}

impl Metrics {
    /// Create a new Metrics instance
    pub fn new() -> Self {
        Self {
            estimates_computed: AtomicUsize::new(0),
            estimates_rejected: AtomicUsize::new(0),
            state_updates: AtomicU64::new(0),
            ui_updates: AtomicU64::new(0),
            ui_update_channel_full: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a successfully computed estimate
    pub fn record_estimate_computed(&self) {
        self.estimates_computed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected parameter set
    pub fn record_estimate_rejected(&self) {
        self.estimates_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a state update
    pub fn record_state_update(&self) {
        self.state_updates.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a UI update
    pub fn record_ui_update(&self) {
        self.ui_updates.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a UI update channel full error
    pub fn record_ui_channel_full(&self) {
        self.ui_update_channel_full.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total uptime
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Log metrics summary
    pub fn log_summary(&self) {
        let uptime = self.uptime();
        tracing::info!("=== Performance Metrics Summary ===");
        tracing::info!("Uptime: {:.2}s", uptime.as_secs_f64());
        tracing::info!(
            "Estimates: {} computed, {} rejected",
            self.estimates_computed.load(Ordering::Relaxed),
            self.estimates_rejected.load(Ordering::Relaxed)
        );
        tracing::info!(
            "State updates: {}, UI updates: {}, channel full errors: {}",
            self.state_updates.load(Ordering::Relaxed),
            self.ui_updates.load(Ordering::Relaxed),
            self.ui_update_channel_full.load(Ordering::Relaxed)
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
