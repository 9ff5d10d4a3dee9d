//! Output rendering for the check, traffic, and legend commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-item fields, a top-level summary, and any collected file errors.

use crate::legend::{LegendEntry, LEGEND};
use crate::models::{CheckRun, TrafficRun};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Colored terminal swatch for a color token.
fn paint(token: &str, text: &str, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match token {
        "red-100" => text.red().to_string(),
        "orange-400" => text.yellow().to_string(),
        "gold-100" => text.yellow().to_string(),
        "green-400" => text.green().to_string(),
        "black" => text.bright_black().to_string(),
        _ => text.to_string(),
    }
}

/// Print indicator reports in the requested format.
pub fn print_check(run: &CheckRun, output: &str, errors: &[String], size: Option<&str>) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_check_json(run, errors, size)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for report in &run.reports {
                let badge = match report.status.as_str() {
                    "NotValid" => {
                        if color {
                            "⟦invalid⟧".red().bold().to_string()
                        } else {
                            "⟦invalid⟧".to_string()
                        }
                    }
                    "Warning" => {
                        if color {
                            "⟦warn⟧".yellow().bold().to_string()
                        } else {
                            "⟦warn⟧".to_string()
                        }
                    }
                    _ => {
                        if color {
                            "⟦valid⟧".green().bold().to_string()
                        } else {
                            "⟦valid⟧".to_string()
                        }
                    }
                };
                let icon = match report.status.as_str() {
                    "NotValid" => "✖".red().to_string(),
                    "Warning" => "▲".yellow().to_string(),
                    _ => "✔".green().to_string(),
                };
                let file = if color {
                    report.file.clone().bold().to_string()
                } else {
                    report.file.clone()
                };
                println!(
                    "{} {} {} ❲{}❳ — {}",
                    icon,
                    badge,
                    file,
                    report.object,
                    report.messages.join("; ")
                );
            }
            let summary = format!(
                "— Summary — valid={} warnings={} not-valid={} objects={} files={}",
                run.summary.valid,
                run.summary.warnings,
                run.summary.not_valid,
                run.summary.objects,
                run.summary.files
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Print traffic-band reports in the requested format.
pub fn print_traffic(run: &TrafficRun, output: &str, errors: &[String]) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_traffic_json(run, errors)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for report in &run.reports {
                let line = if report.dashed { "╌╌" } else { "──" };
                let swatch = paint(&report.color, line, color);
                let rate = match report.error_percentage {
                    Some(pct) => format!(
                        "{:.1}% errors ({}/{} requests)",
                        pct, report.request_error_count, report.request_count
                    ),
                    None => "no traffic yet".to_string(),
                };
                let service = if color {
                    report.service.clone().bold().to_string()
                } else {
                    report.service.clone()
                };
                println!("{} {} ❲{}❳ — {}", swatch, service, report.label, rate);
            }
            let summary = format!(
                "— Summary — failing={} degraded={} healthy={} no-traffic={} services={} files={}",
                run.summary.failing,
                run.summary.degraded,
                run.summary.healthy,
                run.summary.no_traffic,
                run.summary.services,
                run.summary.files
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Print the fixed edge legend.
pub fn print_legend(output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_legend_json()).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for entry in &LEGEND {
                println!("{}", legend_line(entry, color));
            }
        }
    }
}

fn legend_line(entry: &LegendEntry, color: bool) -> String {
    let line = if entry.dashed {
        "╌╌╌╌╌╌"
    } else {
        "──────"
    };
    format!("{} {}", paint(entry.color, line, color), entry.label)
}

/// Compose check JSON object (pure) for testing/snapshot purposes.
pub fn compose_check_json(run: &CheckRun, errors: &[String], size: Option<&str>) -> JsonVal {
    let mut out = serde_json::to_value(run).unwrap();
    out["iconSize"] = json!(crate::indicator::resolve_size(size));
    out["errors"] = json!(errors);
    out
}

/// Compose traffic JSON object (pure) for testing/snapshot purposes.
pub fn compose_traffic_json(run: &TrafficRun, errors: &[String]) -> JsonVal {
    let mut out = serde_json::to_value(run).unwrap();
    out["errors"] = json!(errors);
    out
}

/// Compose legend JSON array (pure) for testing/snapshot purposes.
pub fn compose_legend_json() -> JsonVal {
    serde_json::to_value(LEGEND).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IndicatorReport, Summary};

    fn sample_run() -> CheckRun {
        CheckRun {
            reports: vec![IndicatorReport {
                file: "snapshots/reviews.json".into(),
                object: "reviews".into(),
                object_type: "virtualservice".into(),
                status: "Warning".into(),
                name: "Warning".into(),
                color: "gold-100".into(),
                icon: "warning-triangle-o".into(),
                messages: vec!["1 warning found".into()],
                errors: 0,
                warnings: 1,
            }],
            summary: Summary {
                valid: 0,
                warnings: 1,
                not_valid: 0,
                objects: 1,
                files: 1,
            },
        }
    }

    #[test]
    fn test_compose_check_json_shape() {
        let out = compose_check_json(&sample_run(), &[], Some("big"));
        assert_eq!(out["summary"]["warnings"], 1);
        assert_eq!(out["reports"][0]["objectType"], "virtualservice");
        assert_eq!(out["reports"][0]["icon"], "warning-triangle-o");
        assert_eq!(out["iconSize"], "35px");
        assert!(out["errors"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_compose_check_json_defaults_icon_size() {
        let out = compose_check_json(&sample_run(), &["bad.json: oops".into()], None);
        assert_eq!(out["iconSize"], "inherited");
        assert_eq!(out["errors"][0], "bad.json: oops");
    }

    #[test]
    fn test_compose_legend_json_shape() {
        let out = compose_legend_json();
        assert_eq!(out.as_array().unwrap().len(), 5);
        assert_eq!(out[0]["label"], "Over 10% Error");
        assert_eq!(out[4]["dashed"], true);
    }

    #[test]
    fn test_legend_line_plain() {
        let entry = LegendEntry {
            label: "No Traffic yet",
            color: "black",
            dashed: true,
        };
        assert_eq!(legend_line(&entry, false), "╌╌╌╌╌╌ No Traffic yet");
    }
}
