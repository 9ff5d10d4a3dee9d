//! Service health schema: envoy ratios, deployment statuses, and request
//! counters as reported per service by the telemetry backend.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Health snapshot keyed by service name. `BTreeMap` keeps report order
/// deterministic.
pub type NamespaceHealth = BTreeMap<String, Health>;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
/// Aggregated health of one service.
pub struct Health {
    pub envoy: EnvoyHealth,
    pub deployment_statuses: Vec<DeploymentStatus>,
    pub requests: RequestHealth,
}

impl Health {
    /// Placeholder used when the backend has no data for a service yet.
    pub fn not_available() -> Health {
        Health::default()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EnvoyHealth {
    pub inbound: EnvoyRatio,
    pub outbound: EnvoyRatio,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EnvoyRatio {
    pub healthy: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DeploymentStatus {
    pub name: String,
    pub replicas: u64,
    pub available: u64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestHealth {
    pub request_count: u64,
    pub request_error_count: u64,
}

impl RequestHealth {
    /// Error rate in percent. `None` when the service has seen no traffic.
    pub fn error_percentage(&self) -> Option<f64> {
        if self.request_count == 0 {
            None
        } else {
            Some(self.request_error_count as f64 * 100.0 / self.request_count as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_available_is_all_zero() {
        let h = Health::not_available();
        assert_eq!(h.envoy.inbound.total, 0);
        assert_eq!(h.envoy.outbound.healthy, 0);
        assert!(h.deployment_statuses.is_empty());
        assert_eq!(h.requests.request_count, 0);
    }

    #[test]
    fn test_error_percentage() {
        let none = RequestHealth {
            request_count: 0,
            request_error_count: 0,
        };
        assert_eq!(none.error_percentage(), None);
        let some = RequestHealth {
            request_count: 200,
            request_error_count: 13,
        };
        assert_eq!(some.error_percentage(), Some(6.5));
    }

    #[test]
    fn test_backend_shape_parses() {
        let h: Health = serde_json::from_str(
            r#"{
                "envoy": {"inbound": {"healthy": 1, "total": 1}, "outbound": {"healthy": 2, "total": 2}},
                "deploymentStatuses": [{"name": "reviews-v1", "replicas": 3, "available": 3}],
                "requests": {"requestCount": 50, "requestErrorCount": 2}
            }"#,
        )
        .unwrap();
        assert_eq!(h.envoy.outbound.total, 2);
        assert_eq!(h.deployment_statuses[0].available, 3);
        assert_eq!(h.requests.request_error_count, 2);
    }
}
