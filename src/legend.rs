//! Graph edge legend and traffic-rate classification.
//!
//! The legend is the fixed set of edge bands the topology view draws;
//! `classify_traffic` places a service's request counters into one of
//! those bands.

use crate::models::health::RequestHealth;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// One legend row: label, color token, and line style.
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
    pub dashed: bool,
}

pub const OVER_10_ERROR: LegendEntry = LegendEntry {
    label: "Over 10% Error",
    color: "red-100",
    dashed: false,
};

pub const FIVE_TO_10_ERROR: LegendEntry = LegendEntry {
    label: "5 - 10% Error",
    color: "orange-400",
    dashed: false,
};

pub const UNDER_5_ERROR: LegendEntry = LegendEntry {
    label: "< 5% Error",
    color: "green-400",
    dashed: false,
};

pub const IDLE: LegendEntry = LegendEntry {
    label: "Idle",
    color: "black",
    dashed: false,
};

pub const NO_TRAFFIC: LegendEntry = LegendEntry {
    label: "No Traffic yet",
    color: "black",
    dashed: true,
};

/// Display order of the legend.
pub const LEGEND: [LegendEntry; 5] = [
    OVER_10_ERROR,
    FIVE_TO_10_ERROR,
    UNDER_5_ERROR,
    IDLE,
    NO_TRAFFIC,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Traffic band derived from request counters.
pub enum EdgeClass {
    Failing,
    Degraded,
    Healthy,
    NoTraffic,
}

impl EdgeClass {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeClass::Failing => "Failing",
            EdgeClass::Degraded => "Degraded",
            EdgeClass::Healthy => "Healthy",
            EdgeClass::NoTraffic => "NoTraffic",
        }
    }

    /// Legend row this band is drawn with. A counters-only snapshot cannot
    /// tell an idle edge from one that never saw traffic, so both map to
    /// the dashed entry; `IDLE` stays display-only.
    pub fn legend(self) -> &'static LegendEntry {
        match self {
            EdgeClass::Failing => &OVER_10_ERROR,
            EdgeClass::Degraded => &FIVE_TO_10_ERROR,
            EdgeClass::Healthy => &UNDER_5_ERROR,
            EdgeClass::NoTraffic => &NO_TRAFFIC,
        }
    }
}

/// Classify an edge by error rate. Both band boundaries are inclusive:
/// exactly 5% and exactly 10% are `Degraded`.
pub fn classify_traffic(requests: &RequestHealth) -> EdgeClass {
    match requests.error_percentage() {
        None => EdgeClass::NoTraffic,
        Some(pct) if pct > 10.0 => EdgeClass::Failing,
        Some(pct) if pct >= 5.0 => EdgeClass::Degraded,
        Some(_) => EdgeClass::Healthy,
    }
}
