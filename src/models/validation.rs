//! Validation snapshot schema as delivered by the mesh telemetry backend.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
/// A single validation finding attached to a mesh configuration object.
pub struct Check {
    #[serde(default)]
    pub message: String,
    /// Recognized values are "error" and "warning"; anything else is kept
    /// but never counted against the object.
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Validation state of one configuration object.
///
/// A missing `checks` array is the same thing as an empty one.
pub struct ObjectValidation {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "objectType")]
    pub object_type: String,
    #[serde(default)]
    pub checks: Vec<Check>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_checks_is_empty() {
        let v: ObjectValidation = serde_json::from_str(r#"{"name":"reviews"}"#).unwrap();
        assert_eq!(v.name, "reviews");
        assert!(v.checks.is_empty());
    }

    #[test]
    fn test_backend_shape_parses() {
        let v: ObjectValidation = serde_json::from_str(
            r#"{
                "name": "details",
                "objectType": "virtualservice",
                "checks": [
                    {"message": "Host not found", "severity": "error", "path": "spec/hosts[0]"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(v.object_type, "virtualservice");
        assert_eq!(v.checks.len(), 1);
        assert_eq!(v.checks[0].severity, "error");
    }
}
