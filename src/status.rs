//! Severity aggregation for object validations.
//!
//! Counts error/warning checks and collapses them into the three-way
//! status the indicator renders. Error presence wins over any number of
//! warnings; checks with an unrecognized severity count toward the total
//! only.

use crate::models::validation::ObjectValidation;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Discrete validation outcome of one configuration object.
pub enum ValidationStatus {
    Valid,
    Warning,
    NotValid,
}

impl ValidationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationStatus::Valid => "Valid",
            ValidationStatus::Warning => "Warning",
            ValidationStatus::NotValid => "NotValid",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Per-severity check counts for one object.
pub struct CheckCounts {
    pub errors: usize,
    pub warnings: usize,
    pub total: usize,
}

/// Count checks by severity. Unrecognized severities are not rejected;
/// they only contribute to `total`.
pub fn count_checks(validation: &ObjectValidation) -> CheckCounts {
    let mut counts = CheckCounts::default();
    for check in &validation.checks {
        match check.severity.as_str() {
            "error" => counts.errors += 1,
            "warning" => counts.warnings += 1,
            _ => {}
        }
        counts.total += 1;
    }
    counts
}

/// Collapse counts into a status.
pub fn status_for(counts: CheckCounts) -> ValidationStatus {
    if counts.errors == 0 && counts.warnings == 0 {
        ValidationStatus::Valid
    } else if counts.errors > 0 {
        ValidationStatus::NotValid
    } else {
        ValidationStatus::Warning
    }
}

/// Derive the status of one object validation.
pub fn classify(validation: &ObjectValidation) -> ValidationStatus {
    status_for(count_checks(validation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validation::Check;

    fn validation(severities: &[&str]) -> ObjectValidation {
        ObjectValidation {
            name: "svc".into(),
            object_type: "virtualservice".into(),
            checks: severities
                .iter()
                .map(|s| Check {
                    message: String::new(),
                    severity: (*s).into(),
                    path: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_checks_is_valid() {
        let v = validation(&[]);
        assert_eq!(classify(&v), ValidationStatus::Valid);
        assert_eq!(count_checks(&v), CheckCounts::default());
    }

    #[test]
    fn test_error_wins_over_warnings() {
        let v = validation(&["warning", "error", "warning"]);
        assert_eq!(classify(&v), ValidationStatus::NotValid);
        let counts = count_checks(&v);
        assert_eq!(counts.errors, 1);
        assert_eq!(counts.warnings, 2);
        assert_eq!(counts.total, 3);
    }

    #[test]
    fn test_warnings_only() {
        let v = validation(&["warning"]);
        assert_eq!(classify(&v), ValidationStatus::Warning);
    }

    #[test]
    fn test_unrecognized_severity_counts_toward_total_only() {
        let v = validation(&["info", "hint"]);
        let counts = count_checks(&v);
        assert_eq!(counts.errors, 0);
        assert_eq!(counts.warnings, 0);
        assert_eq!(counts.total, 2);
        // No recognized severity: the object still classifies as Valid.
        assert_eq!(classify(&v), ValidationStatus::Valid);
    }
}
