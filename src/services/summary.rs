//! Presentation formatting for estimation results.
//!
//! Everything the screen prints comes from this module, so display rounding
//! lives in exactly one place. The rules mirror the breakdown panel:
//! - hour values render with one decimal place ("5.3 hrs")
//! - parameter values render bare, dropping a trailing ".0" ("5", "7.5")
//! - the workday count carries a singular/plural label
//! - the buffer row only exists when the buffer is above zero
//!
//! # Examples
//!
//! ```ignore
//! use scopecast::services::summary::{format_hours, workdays_label};
//!
//! assert_eq!(format_hours(5.333), "5.3 hrs");
//! assert_eq!(workdays_label(1), "1 workday");
//! assert_eq!(workdays_label(3), "3 workdays");
//! ```

use crate::models::{EstimationInput, EstimationResult, LiftLevel, ProjectType};
use crate::services::quotients::QuotientTable;

/// Render an hour quantity for a breakdown row, one decimal place.
pub fn format_hours(hours: f64) -> String {
    format!("{:.1} hrs", hours)
}

/// Render the headline effort figure ("7.7 hours").
pub fn total_effort_line(result: &EstimationResult) -> String {
    format!("{:.1} hours", result.total_hours_with_buffer)
}

/// Render the workday count with its unit ("1 workday", "3 workdays").
pub fn workdays_label(days: u32) -> String {
    if days == 1 {
        format!("{} workday", days)
    } else {
        format!("{} workdays", days)
    }
}

/// Render the availability footnote under the calendar figure.
pub fn availability_line(input: &EstimationInput) -> String {
    format!("at {} focused hrs/day", plain(input.hours_per_day))
}

/// Label above the hours-per-day slider, showing the current value.
pub fn hours_per_day_label(input: &EstimationInput) -> String {
    format!("Working Hours per Day: {}", plain(input.hours_per_day))
}

/// Label above the buffer slider, showing the current value.
pub fn buffer_percent_label(input: &EstimationInput) -> String {
    format!("Contingency Buffer: {}%", plain(input.buffer_percent))
}

/// Label and value for the buffer breakdown row.
///
/// Returns `None` when the buffer is zero or less; the row is simply not
/// shown rather than printing "+0.0 hrs".
pub fn buffer_row(input: &EstimationInput, result: &EstimationResult) -> Option<(String, String)> {
    if input.buffer_percent <= 0.0 {
        return None;
    }

    let label = format!("Buffer (+{}%)", plain(input.buffer_percent));
    let delta = result.total_hours_with_buffer - result.total_hours;
    Some((label, format!("+{:.1} hrs", delta)))
}

/// One-line multiplier hint shown under the editing lift buttons.
///
/// Lists all three tiers for the active project type so switching the
/// project immediately shows what each button would cost.
pub fn editing_hint(table: &QuotientTable, project: ProjectType) -> String {
    lift_hint(|lift| table.editing_quotient(project, lift))
}

/// One-line multiplier hint shown under the finishing lift buttons.
pub fn finishing_hint(table: &QuotientTable, project: ProjectType) -> String {
    lift_hint(|lift| table.finishing_quotient(project, lift))
}

/// One-sentence recap of the whole estimate.
///
/// # Arguments
///
/// * `input` - The parameters the estimate was computed from
/// * `result` - The matching estimation result
///
/// # Returns
///
/// A sentence like "A 40-minute lecture project with medium editing and
/// medium finishing comes to 7.7 hours of work including a 10% buffer.
/// At 5 focused hours per day, plan for 2 workdays."
pub fn quick_summary(input: &EstimationInput, result: &EstimationResult) -> String {
    let buffer_clause = if input.buffer_percent > 0.0 {
        format!(" including a {}% buffer", plain(input.buffer_percent))
    } else {
        String::new()
    };

    format!(
        "A {}-minute {} project with {} editing and {} finishing comes to {:.1} hours of work{}. \
         At {} focused hours per day, plan for {}.",
        plain(input.finished_minutes),
        input.project_type,
        input.editing_lift,
        input.finishing_lift,
        result.total_hours_with_buffer,
        buffer_clause,
        plain(input.hours_per_day),
        workdays_label(result.estimated_days),
    )
}

fn lift_hint(quotient: impl Fn(LiftLevel) -> f64) -> String {
    let parts: Vec<String> = LiftLevel::ALL
        .iter()
        .map(|&lift| format!("{} {}x", lift, plain(quotient(lift))))
        .collect();

    format!("{} work-min per finished min", parts.join(", "))
}

/// Bare number rendering: whole values drop the decimal point ("5" not
/// "5.0"), everything else keeps its digits ("7.5"). Parameter values are
/// slider-snapped, so no long fractions reach this.
fn plain(value: f64) -> String {
    format!("{}", value)
}
