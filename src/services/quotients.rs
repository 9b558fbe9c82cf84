use crate::models::{LiftLevel, ProjectType};

/// Work multipliers for one (project type, lift level) cell.
///
/// Both values are minutes of work per finished minute of video: an editing
/// quotient of 8.0 means one finished minute costs eight minutes at the edit
/// bay before finishing starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseQuotients {
    /// Editing effort multiplier.
    pub editing: f64,
    /// Finishing (color grade / audio mix) effort multiplier.
    pub finishing: f64,
}

/// The three lift rows for a single project type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectQuotients {
    pub light: PhaseQuotients,
    pub medium: PhaseQuotients,
    pub heavy: PhaseQuotients,
}

impl ProjectQuotients {
    pub const fn for_lift(&self, lift: LiftLevel) -> PhaseQuotients {
        match lift {
            LiftLevel::Light => self.light,
            LiftLevel::Medium => self.medium,
            LiftLevel::Heavy => self.heavy,
        }
    }
}

/// Complete quotient table: one row per project type, one column pair per
/// lift level. Lookups are exhaustive `match`es over both closed enums, so
/// there is no miss case and no error path.
///
/// The table is plain data on purpose. Production estimates use
/// [`QuotientTable::STANDARD`]; tests can build a custom table to exercise
/// the estimator with round numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuotientTable {
    pub lecture: ProjectQuotients,
    pub editorial: ProjectQuotients,
}

impl QuotientTable {
    /// The calibrated production table.
    ///
    /// | Project   | Lift   | Editing | Finishing |
    /// |-----------|--------|---------|-----------|
    /// | lecture   | light  | 5.5     | 1.5       |
    /// | lecture   | medium | 8.0     | 2.5       |
    /// | lecture   | heavy  | 12.5    | 3.5       |
    /// | editorial | light  | 11.0    | 2.5       |
    /// | editorial | medium | 14.0    | 3.5       |
    /// | editorial | heavy  | 21.5    | 4.5       |
    pub const STANDARD: QuotientTable = QuotientTable {
        lecture: ProjectQuotients {
            light: PhaseQuotients { editing: 5.5, finishing: 1.5 },
            medium: PhaseQuotients { editing: 8.0, finishing: 2.5 },
            heavy: PhaseQuotients { editing: 12.5, finishing: 3.5 },
        },
        editorial: ProjectQuotients {
            light: PhaseQuotients { editing: 11.0, finishing: 2.5 },
            medium: PhaseQuotients { editing: 14.0, finishing: 3.5 },
            heavy: PhaseQuotients { editing: 21.5, finishing: 4.5 },
        },
    };

    /// Both multipliers for a cell.
    pub const fn quotients(&self, project: ProjectType, lift: LiftLevel) -> PhaseQuotients {
        match project {
            ProjectType::Lecture => self.lecture.for_lift(lift),
            ProjectType::Editorial => self.editorial.for_lift(lift),
        }
    }

    /// Editing multiplier for a cell.
    pub const fn editing_quotient(&self, project: ProjectType, lift: LiftLevel) -> f64 {
        self.quotients(project, lift).editing
    }

    /// Finishing multiplier for a cell.
    pub const fn finishing_quotient(&self, project: ProjectType, lift: LiftLevel) -> f64 {
        self.quotients(project, lift).finishing
    }
}

impl Default for QuotientTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lecture_values() {
        let table = QuotientTable::STANDARD;

        assert_eq!(table.editing_quotient(ProjectType::Lecture, LiftLevel::Light), 5.5);
        assert_eq!(table.finishing_quotient(ProjectType::Lecture, LiftLevel::Light), 1.5);
        assert_eq!(table.editing_quotient(ProjectType::Lecture, LiftLevel::Medium), 8.0);
        assert_eq!(table.finishing_quotient(ProjectType::Lecture, LiftLevel::Medium), 2.5);
        assert_eq!(table.editing_quotient(ProjectType::Lecture, LiftLevel::Heavy), 12.5);
        assert_eq!(table.finishing_quotient(ProjectType::Lecture, LiftLevel::Heavy), 3.5);
    }

    #[test]
    fn test_standard_editorial_values() {
        let table = QuotientTable::STANDARD;

        assert_eq!(table.editing_quotient(ProjectType::Editorial, LiftLevel::Light), 11.0);
        assert_eq!(table.finishing_quotient(ProjectType::Editorial, LiftLevel::Light), 2.5);
        assert_eq!(table.editing_quotient(ProjectType::Editorial, LiftLevel::Medium), 14.0);
        assert_eq!(table.finishing_quotient(ProjectType::Editorial, LiftLevel::Medium), 3.5);
        assert_eq!(table.editing_quotient(ProjectType::Editorial, LiftLevel::Heavy), 21.5);
        assert_eq!(table.finishing_quotient(ProjectType::Editorial, LiftLevel::Heavy), 4.5);
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(QuotientTable::default(), QuotientTable::STANDARD);
    }

    #[test]
    fn test_quotients_are_positive_and_increase_with_lift() {
        let table = QuotientTable::STANDARD;

        for project in ProjectType::ALL {
            let mut previous_editing = 0.0;
            let mut previous_finishing = 0.0;
            for lift in LiftLevel::ALL {
                let cell = table.quotients(project, lift);
                assert!(cell.editing > previous_editing);
                assert!(cell.finishing >= previous_finishing);
                previous_editing = cell.editing;
                previous_finishing = cell.finishing;
            }
        }
    }

    #[test]
    fn test_editorial_costs_more_than_lecture_at_every_lift() {
        let table = QuotientTable::STANDARD;

        for lift in LiftLevel::ALL {
            let lecture = table.quotients(ProjectType::Lecture, lift);
            let editorial = table.quotients(ProjectType::Editorial, lift);
            assert!(editorial.editing > lecture.editing);
            assert!(editorial.finishing >= lecture.finishing);
        }
    }
}
