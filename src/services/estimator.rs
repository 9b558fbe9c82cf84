use thiserror::Error;

use crate::models::{EstimationInput, EstimationResult};
use crate::services::quotients::QuotientTable;

/// Errors that can occur during estimation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    #[error("Invalid {parameter}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

impl EstimateError {
    /// Which input field was rejected.
    pub fn parameter(&self) -> &'static str {
        match self {
            EstimateError::InvalidParameter { parameter, .. } => parameter,
        }
    }
}

/// Service computing scope estimates from a parameter snapshot
///
/// The estimator owns a [`QuotientTable`] and turns an [`EstimationInput`]
/// into an [`EstimationResult`]. The computation is a fixed arithmetic
/// pipeline over f64 with no rounding except the final workday ceiling;
/// presentation rounding happens in [`crate::services::summary`], never here.
///
/// # Design Philosophy
///
/// - **Stateless**: Estimation has no side effects and no retained state;
///   the same input always produces the identical result
/// - **Framework-agnostic**: No GUI dependencies, works with any UI or CLI
/// - **Total over valid input**: Validation happens up front; past it, every
///   arithmetic step is defined and the result carries no NaN or infinity
pub struct Estimator {
    table: QuotientTable,
}

impl Estimator {
    /// Create an estimator over the calibrated production table.
    pub fn new() -> Self {
        Self {
            table: QuotientTable::STANDARD,
        }
    }

    /// Create an estimator over a custom table.
    pub fn with_table(table: QuotientTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &QuotientTable {
        &self.table
    }

    /// Compute the full estimate for one parameter snapshot.
    ///
    /// The arithmetic runs in a fixed order: total minutes from the summed
    /// quotients, hours, buffered hours, then the workday ceiling, then the
    /// per-phase split. A partial final day counts as a whole day.
    ///
    /// # Arguments
    /// * `input` - The complete parameter set to estimate
    ///
    /// # Returns
    /// The derived [`EstimationResult`], or [`EstimateError::InvalidParameter`]
    /// when a numeric field is out of domain. Invalid input is reported
    /// synchronously; NaN or infinity never propagate into a result.
    pub fn estimate(&self, input: &EstimationInput) -> Result<EstimationResult, EstimateError> {
        validate(input)?;

        let editing_quotient = self
            .table
            .editing_quotient(input.project_type, input.editing_lift);
        let finishing_quotient = self
            .table
            .finishing_quotient(input.project_type, input.finishing_lift);

        let total_minutes = input.finished_minutes * (editing_quotient + finishing_quotient);
        let total_hours = total_minutes / 60.0;
        let total_hours_with_buffer = total_hours * (1.0 + input.buffer_percent / 100.0);
        let estimated_days = (total_hours_with_buffer / input.hours_per_day).ceil() as u32;
        let editing_time = (input.finished_minutes * editing_quotient) / 60.0;
        let finishing_time = (input.finished_minutes * finishing_quotient) / 60.0;

        let result = EstimationResult {
            editing_quotient,
            finishing_quotient,
            total_minutes,
            total_hours,
            editing_time,
            finishing_time,
            total_hours_with_buffer,
            estimated_days,
        };

        tracing::debug!(
            "Estimated {} {} min ({}/{}): {:.2}h + {:.2}h = {:.2}h, {:.2}h buffered, {} day(s)",
            input.project_type,
            input.finished_minutes,
            input.editing_lift,
            input.finishing_lift,
            result.editing_time,
            result.finishing_time,
            result.total_hours,
            result.total_hours_with_buffer,
            result.estimated_days
        );

        Ok(result)
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Check the numeric fields before any arithmetic runs.
///
/// `finished_minutes` and `hours_per_day` must be finite and strictly
/// positive; `buffer_percent` must be finite and non-negative. Values above
/// 100 % buffer are legal. The UI slider ranges are narrower than these
/// bounds, so a rejected value means a caller bypassed the screen.
fn validate(input: &EstimationInput) -> Result<(), EstimateError> {
    if !input.finished_minutes.is_finite() || input.finished_minutes <= 0.0 {
        return Err(EstimateError::InvalidParameter {
            parameter: "finished_minutes",
            reason: format!(
                "must be a finite number greater than zero, got {}",
                input.finished_minutes
            ),
        });
    }

    if !input.hours_per_day.is_finite() || input.hours_per_day <= 0.0 {
        return Err(EstimateError::InvalidParameter {
            parameter: "hours_per_day",
            reason: format!(
                "must be a finite number greater than zero, got {}",
                input.hours_per_day
            ),
        });
    }

    if !input.buffer_percent.is_finite() || input.buffer_percent < 0.0 {
        return Err(EstimateError::InvalidParameter {
            parameter: "buffer_percent",
            reason: format!(
                "must be a finite non-negative number, got {}",
                input.buffer_percent
            ),
        });
    }

    Ok(())
}
