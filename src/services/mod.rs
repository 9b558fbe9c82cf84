//! Services module - Pure business logic for scope estimation.
//!
//! This module contains all the core business logic for converting project
//! parameters into a time breakdown and a workday estimate. The services are
//! **framework-agnostic** and have no dependencies on the UI layer, making
//! them testable and reusable.
//!
//! # Components
//!
//! - [`QuotientTable`]: The calibrated work multipliers, one cell per
//!   (project type, lift level) pair with separate editing and finishing
//!   quotients. Lookups are total; there is no error path.
//!
//! - [`Estimator`]: Runs the estimation pipeline over an
//!   [`EstimationInput`](crate::models::EstimationInput):
//!   - validates the numeric parameters up front
//!   - derives total minutes, hours, buffered hours, and per-phase splits
//!   - rounds exactly once, at the workday ceiling
//!
//! - [`summary`]: Presentation formatting. Turns a result into the strings
//!   the screen shows (breakdown rows, workday label, quotient hints, the
//!   quick-summary sentence).
//!
//! # Design Philosophy
//!
//! The services layer is designed to be:
//! - **Pure**: Estimation is arithmetic over a value snapshot, no I/O
//! - **Synchronous**: Every call completes immediately; nothing blocks
//! - **Testable**: No hidden dependencies, all inputs are explicit parameters
//! - **Framework-agnostic**: No Slint, no GUI code, only business logic
//!
//! # Usage Example
//!
//! ```ignore
//! use scopecast::services::{summary, Estimator};
//!
//! let estimator = Estimator::new();
//! let result = estimator.estimate(&state.estimation_input())?;
//!
//! println!("{}", summary::quick_summary(&input, &result));
//! ```

pub mod estimator;
pub mod quotients;
pub mod summary;

pub use estimator::{EstimateError, Estimator};
pub use quotients::{PhaseQuotients, ProjectQuotients, QuotientTable};
