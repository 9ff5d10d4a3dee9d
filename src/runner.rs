//! Snapshot runners for the check and traffic commands.
//!
//! Walks glob patterns under a repo root, parses each snapshot file, and
//! derives per-object indicator reports (`run_check`) or per-service
//! traffic bands (`run_traffic`) with an aggregated summary. Read and
//! parse failures are collected, not fatal.

use crate::indicator;
use crate::legend;
use crate::models::health::NamespaceHealth;
use crate::models::validation::ObjectValidation;
use crate::models::{
    CheckRun, IndicatorReport, Summary, TrafficReport, TrafficRun, TrafficSummary,
};
use crate::status;
use glob::glob;
use rayon::prelude::*;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Expand patterns relative to `root` into a sorted, deduplicated file
/// list. Invalid patterns are reported and skipped.
fn expand_targets(root: &Path, patterns: &[String], errors: &mut Vec<String>) -> Vec<PathBuf> {
    let mut targets: Vec<PathBuf> = Vec::new();
    for pat in patterns {
        let abs = root.join(pat);
        match glob(&abs.to_string_lossy()) {
            Ok(paths) => {
                for entry in paths.flatten() {
                    if entry.is_file() {
                        targets.push(entry);
                    }
                }
            }
            Err(e) => errors.push(format!("invalid pattern '{}': {}", pat, e)),
        }
    }
    targets.sort();
    targets.dedup();
    targets
}

/// Report file paths relative to the repo root when possible.
fn display_path(root: &Path, path: &Path) -> String {
    pathdiff::diff_paths(path, root)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

/// A snapshot file holds either a single object validation or an array of
/// them.
fn parse_validations(data: &str) -> Result<Vec<ObjectValidation>, serde_json::Error> {
    match serde_json::from_str::<Vec<ObjectValidation>>(data) {
        Ok(list) => Ok(list),
        Err(_) => serde_json::from_str::<ObjectValidation>(data).map(|v| vec![v]),
    }
}

/// Evaluate validation snapshots into indicator reports.
///
/// `filter` restricts evaluation to objects whose name matches. The second
/// tuple element lists files that could not be read or parsed.
pub fn run_check(
    repo_root: &str,
    patterns: &[String],
    filter: Option<&Regex>,
) -> (CheckRun, Vec<String>) {
    let root = PathBuf::from(repo_root);
    let mut errors: Vec<String> = Vec::new();
    let targets = expand_targets(&root, patterns, &mut errors);

    let per_file: Vec<(Vec<IndicatorReport>, Vec<String>, usize)> = targets
        .par_iter()
        .map(|path| {
            let file = display_path(&root, path);
            let data = match fs::read_to_string(path) {
                Ok(s) => s,
                Err(e) => return (Vec::new(), vec![format!("{}: {}", file, e)], 0),
            };
            let objects = match parse_validations(&data) {
                Ok(v) => v,
                Err(e) => {
                    return (
                        Vec::new(),
                        vec![format!("{}: not a validation snapshot: {}", file, e)],
                        0,
                    )
                }
            };
            let mut reports: Vec<IndicatorReport> = Vec::new();
            for validation in &objects {
                if let Some(re) = filter {
                    if !re.is_match(&validation.name) {
                        continue;
                    }
                }
                let counts = status::count_checks(validation);
                let ind = indicator::describe(validation);
                reports.push(IndicatorReport {
                    file: file.clone(),
                    object: validation.name.clone(),
                    object_type: validation.object_type.clone(),
                    status: ind.status.as_str().to_string(),
                    name: ind.name.to_string(),
                    color: ind.color.to_string(),
                    icon: ind.icon.to_string(),
                    messages: ind.messages,
                    errors: counts.errors,
                    warnings: counts.warnings,
                });
            }
            (reports, Vec::new(), 1)
        })
        .collect();

    let mut reports: Vec<IndicatorReport> = Vec::new();
    let mut files = 0usize;
    for (mut file_reports, mut file_errors, parsed) in per_file {
        reports.append(&mut file_reports);
        errors.append(&mut file_errors);
        files += parsed;
    }
    reports.sort_by(|a, b| a.file.cmp(&b.file).then(a.object.cmp(&b.object)));

    let mut summary = Summary {
        valid: 0,
        warnings: 0,
        not_valid: 0,
        objects: reports.len(),
        files,
    };
    for report in &reports {
        match report.status.as_str() {
            "NotValid" => summary.not_valid += 1,
            "Warning" => summary.warnings += 1,
            _ => summary.valid += 1,
        }
    }
    (CheckRun { reports, summary }, errors)
}

/// Evaluate namespace health snapshots into traffic-band reports.
pub fn run_traffic(repo_root: &str, patterns: &[String]) -> (TrafficRun, Vec<String>) {
    let root = PathBuf::from(repo_root);
    let mut errors: Vec<String> = Vec::new();
    let targets = expand_targets(&root, patterns, &mut errors);

    let per_file: Vec<(Vec<TrafficReport>, Vec<String>, usize)> = targets
        .par_iter()
        .map(|path| {
            let file = display_path(&root, path);
            let data = match fs::read_to_string(path) {
                Ok(s) => s,
                Err(e) => return (Vec::new(), vec![format!("{}: {}", file, e)], 0),
            };
            let namespace: NamespaceHealth = match serde_json::from_str(&data) {
                Ok(m) => m,
                Err(e) => {
                    return (
                        Vec::new(),
                        vec![format!("{}: not a health snapshot: {}", file, e)],
                        0,
                    )
                }
            };
            let reports: Vec<TrafficReport> = namespace
                .iter()
                .map(|(service, health)| {
                    let class = legend::classify_traffic(&health.requests);
                    let entry = class.legend();
                    TrafficReport {
                        file: file.clone(),
                        service: service.clone(),
                        class: class.as_str().to_string(),
                        label: entry.label.to_string(),
                        color: entry.color.to_string(),
                        dashed: entry.dashed,
                        error_percentage: health.requests.error_percentage(),
                        request_count: health.requests.request_count,
                        request_error_count: health.requests.request_error_count,
                    }
                })
                .collect();
            (reports, Vec::new(), 1)
        })
        .collect();

    let mut reports: Vec<TrafficReport> = Vec::new();
    let mut files = 0usize;
    for (mut file_reports, mut file_errors, parsed) in per_file {
        reports.append(&mut file_reports);
        errors.append(&mut file_errors);
        files += parsed;
    }
    reports.sort_by(|a, b| a.file.cmp(&b.file).then(a.service.cmp(&b.service)));

    let mut summary = TrafficSummary {
        failing: 0,
        degraded: 0,
        healthy: 0,
        no_traffic: 0,
        services: reports.len(),
        files,
    };
    for report in &reports {
        match report.class.as_str() {
            "Failing" => summary.failing += 1,
            "Degraded" => summary.degraded += 1,
            "Healthy" => summary.healthy += 1,
            _ => summary.no_traffic += 1,
        }
    }
    (TrafficRun { reports, summary }, errors)
}
