//! Shared data models: backend snapshot schemas and report output structs.

pub mod health;
pub mod validation;

use serde::Serialize;

#[derive(Serialize)]
/// Derived indicator for one configuration object.
pub struct IndicatorReport {
    pub file: String,
    pub object: String,
    #[serde(rename = "objectType")]
    pub object_type: String,
    pub status: String,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub messages: Vec<String>,
    pub errors: usize,
    pub warnings: usize,
}

#[derive(Serialize)]
/// Aggregated check summary used by printers.
pub struct Summary {
    pub valid: usize,
    pub warnings: usize,
    #[serde(rename = "notValid")]
    pub not_valid: usize,
    pub objects: usize,
    pub files: usize,
}

#[derive(Serialize)]
/// Check run results container.
pub struct CheckRun {
    pub reports: Vec<IndicatorReport>,
    pub summary: Summary,
}

#[derive(Serialize)]
/// Traffic band of one service edge.
pub struct TrafficReport {
    pub file: String,
    pub service: String,
    pub class: String,
    pub label: String,
    pub color: String,
    pub dashed: bool,
    #[serde(rename = "errorPercentage")]
    pub error_percentage: Option<f64>,
    #[serde(rename = "requestCount")]
    pub request_count: u64,
    #[serde(rename = "requestErrorCount")]
    pub request_error_count: u64,
}

#[derive(Serialize)]
/// Aggregated traffic summary used by printers.
pub struct TrafficSummary {
    pub failing: usize,
    pub degraded: usize,
    pub healthy: usize,
    #[serde(rename = "noTraffic")]
    pub no_traffic: usize,
    pub services: usize,
    pub files: usize,
}

#[derive(Serialize)]
/// Traffic run results container.
pub struct TrafficRun {
    pub reports: Vec<TrafficReport>,
    pub summary: TrafficSummary,
}
