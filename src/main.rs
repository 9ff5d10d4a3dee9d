//! Meshvet CLI binary entry point.
//! Delegates to modules for check/traffic/legend and prints results.

mod cli;
mod config;
mod indicator;
mod legend;
mod models;
mod output;
mod runner;
mod status;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use regex::Regex;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            repo_root,
            patterns,
            filter,
            size,
            output,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                output.as_deref(),
                size.as_deref(),
                &patterns,
                filter.as_deref(),
            );
            if config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No meshvet.toml found; using defaults."
                );
            }
            if eff.check_patterns.is_empty() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    "No snapshot patterns configured. Pass --pattern or add meshvet.toml."
                );
                std::process::exit(2);
            }
            if patterns.is_empty() && eff.output != "json" {
                eprintln!(
                    "{} {}",
                    utils::info_prefix(),
                    format!(
                        "Using configured patterns: [{}]",
                        eff.check_patterns.join(", ")
                    )
                );
            }
            let filter_re = match eff.filter.as_deref() {
                Some(expr) => match Regex::new(expr) {
                    Ok(re) => Some(re),
                    Err(e) => {
                        eprintln!(
                            "{} {}",
                            utils::error_prefix(),
                            format!("Invalid --filter regex '{}': {}", expr, e)
                        );
                        std::process::exit(2);
                    }
                },
                None => None,
            };
            let repo_root_str = eff.repo_root.to_string_lossy().to_string();
            let (run, errors) =
                runner::run_check(&repo_root_str, &eff.check_patterns, filter_re.as_ref());
            if eff.output != "json" {
                for err in &errors {
                    eprintln!("{} {}", utils::error_prefix(), err);
                }
            }
            output::print_check(&run, &eff.output, &errors, eff.size.as_deref());
            if run.summary.not_valid > 0 {
                std::process::exit(1);
            }
        }
        Commands::Traffic {
            repo_root,
            patterns,
            output,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                output.as_deref(),
                None,
                &patterns,
                None,
            );
            if config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No meshvet.toml found; using defaults."
                );
            }
            if eff.traffic_patterns.is_empty() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    "No snapshot patterns configured. Pass --pattern or add meshvet.toml."
                );
                std::process::exit(2);
            }
            if patterns.is_empty() && eff.output != "json" {
                eprintln!(
                    "{} {}",
                    utils::info_prefix(),
                    format!(
                        "Using configured patterns: [{}]",
                        eff.traffic_patterns.join(", ")
                    )
                );
            }
            let repo_root_str = eff.repo_root.to_string_lossy().to_string();
            let (run, errors) = runner::run_traffic(&repo_root_str, &eff.traffic_patterns);
            if eff.output != "json" {
                for err in &errors {
                    eprintln!("{} {}", utils::error_prefix(), err);
                }
            }
            output::print_traffic(&run, &eff.output, &errors);
        }
        Commands::Legend { output } => {
            let mode = output.unwrap_or_else(|| "human".to_string());
            output::print_legend(&mode);
        }
    }
}
