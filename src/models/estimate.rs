use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Effort tier for a single post-production phase.
///
/// Lift levels are ordinal labels, not numbers: they select a column in the
/// quotient table and carry no arithmetic meaning of their own. The set is
/// closed - adding a tier means extending the enum and every `match` over it.
///
/// `Display`/`FromStr` use the lowercase names and exist for the UI and
/// logging boundary only; core APIs always take the enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiftLevel {
    Light,
    Medium,
    Heavy,
}

impl LiftLevel {
    /// All levels in ascending effort order, for iterating UI rows.
    pub const ALL: [LiftLevel; 3] = [LiftLevel::Light, LiftLevel::Medium, LiftLevel::Heavy];

    /// Lowercase name as used in the UI and in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            LiftLevel::Light => "light",
            LiftLevel::Medium => "medium",
            LiftLevel::Heavy => "heavy",
        }
    }
}

impl fmt::Display for LiftLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a lift level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown lift level: {0:?} (expected light, medium, or heavy)")]
pub struct ParseLiftLevelError(pub String);

impl FromStr for LiftLevel {
    type Err = ParseLiftLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(LiftLevel::Light),
            "medium" => Ok(LiftLevel::Medium),
            "heavy" => Ok(LiftLevel::Heavy),
            _ => Err(ParseLiftLevelError(s.to_string())),
        }
    }
}

/// Kind of video project being estimated.
///
/// The two types differ only in their quotient table rows: editorial work
/// carries substantially higher per-minute multipliers than lecture-style
/// material at every lift level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectType {
    /// Talking-head or lecture material. Mostly linear cutting.
    Lecture,
    /// Editorial or creative work. Narrative structure, pacing, grading.
    Editorial,
}

impl ProjectType {
    pub const ALL: [ProjectType; 2] = [ProjectType::Lecture, ProjectType::Editorial];

    /// Lowercase name as used in the UI and in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Lecture => "lecture",
            ProjectType::Editorial => "editorial",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a project type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown project type: {0:?} (expected lecture or editorial)")]
pub struct ParseProjectTypeError(pub String);

impl FromStr for ProjectType {
    type Err = ParseProjectTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lecture" => Ok(ProjectType::Lecture),
            "editorial" => Ok(ProjectType::Editorial),
            _ => Err(ParseProjectTypeError(s.to_string())),
        }
    }
}

/// Complete parameter set for one estimation.
///
/// This is a value snapshot: the state layer assembles it from the current
/// screen parameters and hands it to [`crate::services::Estimator::estimate`].
/// Numeric bounds are validated by the estimator, not here - the struct
/// itself can represent any combination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimationInput {
    pub project_type: ProjectType,
    /// Finished runtime of the delivered video, in minutes. Must be > 0.
    pub finished_minutes: f64,
    pub editing_lift: LiftLevel,
    pub finishing_lift: LiftLevel,
    /// Working hours available per day. Must be > 0.
    pub hours_per_day: f64,
    /// Contingency buffer in percent. Must be >= 0; values above 100 are
    /// legal and scale linearly like everything below.
    pub buffer_percent: f64,
}

/// Derived output of one estimation run.
///
/// All hour fields are unrounded f64; display rounding is the presentation
/// layer's job (see [`crate::services::summary`]). The struct is immutable
/// by convention: a parameter change produces a whole new result, nothing is
/// patched in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimationResult {
    /// Editing multiplier that was applied (minutes of work per finished minute).
    pub editing_quotient: f64,
    /// Finishing multiplier that was applied.
    pub finishing_quotient: f64,
    /// Total work in minutes, before buffer.
    pub total_minutes: f64,
    /// Total work in hours, before buffer.
    pub total_hours: f64,
    /// Editing phase share, in hours.
    pub editing_time: f64,
    /// Finishing phase share, in hours.
    pub finishing_time: f64,
    /// Total work in hours including the contingency buffer.
    pub total_hours_with_buffer: f64,
    /// Calendar workdays needed: buffered hours divided by hours/day,
    /// rounded up. A partial day counts as a full day.
    pub estimated_days: u32,
}
