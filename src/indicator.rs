//! Status presentation: the fixed name/color/icon table, tooltip message
//! composition, and icon size token resolution.
//!
//! Everything here is a pure function of its input; the rendering layer
//! recomputes indicators on every pass instead of caching them.

use crate::models::validation::ObjectValidation;
use crate::status::{self, CheckCounts, ValidationStatus};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Visual affordance bound to a validation status.
pub struct StatusPresentation {
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

pub const VALID: StatusPresentation = StatusPresentation {
    name: "Valid",
    color: "green-400",
    icon: "ok",
};

pub const WARNING: StatusPresentation = StatusPresentation {
    name: "Warning",
    color: "gold-100",
    icon: "warning-triangle-o",
};

pub const NOT_VALID: StatusPresentation = StatusPresentation {
    name: "Not Valid",
    color: "red-100",
    icon: "error-circle-o",
};

/// Fixed presentation table.
pub fn presentation(status: ValidationStatus) -> &'static StatusPresentation {
    match status {
        ValidationStatus::Valid => &VALID,
        ValidationStatus::Warning => &WARNING,
        ValidationStatus::NotValid => &NOT_VALID,
    }
}

pub const SMALL_SIZE: &str = "12px";
pub const MEDIUM_SIZE: &str = "18px";
pub const BIG_SIZE: &str = "35px";
pub const INHERITED_SIZE: &str = "inherited";

/// Resolve a symbolic icon size to a concrete dimension. Total over any
/// input; unknown and absent names fall back to `inherited`.
pub fn resolve_size(size: Option<&str>) -> &'static str {
    match size {
        Some("small") => SMALL_SIZE,
        Some("medium") => MEDIUM_SIZE,
        Some("big") => BIG_SIZE,
        _ => INHERITED_SIZE,
    }
}

/// Tooltip messages for the given counts, pluralization-aware, errors
/// before warnings.
///
/// Checks that only carry unrecognized severities produce an empty list
/// even though `total` is non-zero.
pub fn messages(counts: CheckCounts) -> Vec<String> {
    if counts.total == 0 {
        return vec!["No issues found".to_string()];
    }
    let mut out = Vec::new();
    for (count, severity) in [(counts.errors, "error"), (counts.warnings, "warning")] {
        match count {
            0 => {}
            1 => out.push(format!("1 {} found", severity)),
            n => out.push(format!("{} {}s found", n, severity)),
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Fully derived indicator state for one object validation.
pub struct Indicator {
    pub status: ValidationStatus,
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub messages: Vec<String>,
}

/// Derive the complete indicator for an object validation.
pub fn describe(validation: &ObjectValidation) -> Indicator {
    let counts = status::count_checks(validation);
    let status = status::status_for(counts);
    let pres = presentation(status);
    Indicator {
        status,
        name: pres.name,
        color: pres.color,
        icon: pres.icon,
        messages: messages(counts),
    }
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
    fn test_no_checks_describes_valid() {
        let ind = describe(&validation(&[]));
        assert_eq!(ind.status, ValidationStatus::Valid);
        assert_eq!(ind.name, "Valid");
        assert_eq!(ind.color, "green-400");
        assert_eq!(ind.icon, "ok");
        assert_eq!(ind.messages, vec!["No issues found".to_string()]);
    }

    #[test]
    fn test_single_error_message() {
        let ind = describe(&validation(&["error"]));
        assert_eq!(ind.status, ValidationStatus::NotValid);
        assert_eq!(ind.messages, vec!["1 error found".to_string()]);
    }

    #[test]
    fn test_pluralization_and_ordering() {
        let ind = describe(&validation(&["warning", "error", "error"]));
        assert_eq!(
            ind.messages,
            vec!["2 errors found".to_string(), "1 warning found".to_string()]
        );
    }

    #[test]
    fn test_mixed_severities_scenario() {
        let ind = describe(&validation(&["error", "warning", "warning"]));
        assert_eq!(ind.status, ValidationStatus::NotValid);
        assert_eq!(ind.name, "Not Valid");
        assert_eq!(ind.icon, "error-circle-o");
        assert_eq!(
            ind.messages,
            vec!["1 error found".to_string(), "2 warnings found".to_string()]
        );
    }

    #[test]
    fn test_unrecognized_severities_yield_empty_messages() {
        let ind = describe(&validation(&["info"]));
        assert_eq!(ind.status, ValidationStatus::Valid);
        assert!(ind.messages.is_empty());
    }

    #[test]
    fn test_describe_is_idempotent() {
        let v = validation(&["warning"]);
        assert_eq!(describe(&v), describe(&v));
    }

    #[test]
    fn test_size_table() {
        assert_eq!(resolve_size(Some("small")), "12px");
        assert_eq!(resolve_size(Some("medium")), "18px");
        assert_eq!(resolve_size(Some("big")), "35px");
        assert_eq!(resolve_size(Some("inherited")), "inherited");
        assert_eq!(resolve_size(Some("unknown")), "inherited");
        assert_eq!(resolve_size(None), "inherited");
    }
}
