//! Configuration discovery and effective settings resolution.
//!
//! Meshvet reads `meshvet.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an
//! `Effective` config. Defaults:
//! - `output`: `human`
//! - `size`: unset (icon size serialized as `inherited`)
//! - `check.patterns` / `traffic.patterns`: unset (commands require them)
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Check-related configuration section under `[check]`.
pub struct CheckCfg {
    pub patterns: Option<Vec<String>>,
    /// Regex applied to object names.
    pub filter: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Traffic-related configuration section under `[traffic]`.
pub struct TrafficCfg {
    pub patterns: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `meshvet.toml|yaml|yml`.
pub struct MeshvetConfig {
    pub output: Option<String>,
    /// Symbolic icon size: small|medium|big|inherited.
    pub size: Option<String>,
    #[serde(default)]
    pub check: Option<CheckCfg>,
    #[serde(default)]
    pub traffic: Option<TrafficCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: String,
    pub size: Option<String>,
    pub check_patterns: Vec<String>,
    pub filter: Option<String>,
    pub traffic_patterns: Vec<String>,
}

const CONFIG_NAMES: [&str; 3] = ["meshvet.toml", "meshvet.yaml", "meshvet.yml"];

/// Find the closest config file at `start` or any ancestor directory.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(d) = dir {
        for name in CONFIG_NAMES {
            let candidate = d.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        dir = d.parent();
    }
    None
}

/// Load the config closest to `repo_root`. Unparsable files are treated
/// as absent.
pub fn load_config(repo_root: &Path) -> Option<MeshvetConfig> {
    let path = find_config_file(repo_root)?;
    let data = fs::read_to_string(&path).ok()?;
    if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str(&data).ok()
    } else {
        serde_yaml::from_str(&data).ok()
    }
}

/// Apply CLI > config > defaults precedence.
pub fn resolve_effective(
    repo_root: Option<&str>,
    output: Option<&str>,
    size: Option<&str>,
    patterns: &[String],
    filter: Option<&str>,
) -> Effective {
    let repo_root = repo_root
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let cfg = load_config(&repo_root).unwrap_or_default();
    let cfg_check = cfg.check.clone().unwrap_or_default();
    let cfg_traffic = cfg.traffic.clone().unwrap_or_default();

    let output = output
        .map(str::to_string)
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    let size = size.map(str::to_string).or(cfg.size);
    let check_patterns = if patterns.is_empty() {
        cfg_check.patterns.unwrap_or_default()
    } else {
        patterns.to_vec()
    };
    let filter = filter.map(str::to_string).or(cfg_check.filter);
    let traffic_patterns = if patterns.is_empty() {
        cfg_traffic.patterns.unwrap_or_default()
    } else {
        patterns.to_vec()
    };

    Effective {
        repo_root,
        output,
        size,
        check_patterns,
        filter,
        traffic_patterns,
    }
}
