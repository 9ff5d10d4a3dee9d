//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "meshvet",
    version,
    about = "Meshvet — mesh config validation indicators",
    long_about = "Meshvet — render service-mesh validation status indicators and traffic bands from telemetry snapshots.\n\nConfiguration precedence: CLI > meshvet.toml > defaults.",
    after_help = "Examples:\n  meshvet check --pattern 'snapshots/*.json'\n  meshvet check --pattern 'snapshots/*.json' --filter '^reviews' --output json\n  meshvet traffic --pattern 'health/*.json'\n  meshvet legend",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for indicators, traffic bands, and the legend.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current meshvet version.")]
    Version,
    /// Derive validation status indicators from snapshots
    #[command(
        about = "Evaluate validation snapshots",
        long_about = "Classify every configuration object found in validation snapshot files and render a status indicator per object. Any Not Valid object makes the run exit non-zero.",
        after_help = "Examples:\n  meshvet check --pattern 'snapshots/*.json'\n  meshvet check --repo-root . --pattern 'snapshots/*.json' --output json --size medium"
    )]
    Check {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long = "pattern", help = "Snapshot glob pattern, repeatable")]
        patterns: Vec<String>,
        #[arg(long, help = "Regex applied to object names")]
        filter: Option<String>,
        #[arg(long, help = "Icon size token: small|medium|big|inherited")]
        size: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Classify service traffic into legend bands
    #[command(
        about = "Evaluate health snapshots",
        long_about = "Place every service found in namespace health snapshot files into an edge legend band by request error rate.",
        after_help = "Examples:\n  meshvet traffic --pattern 'health/*.json'\n  meshvet traffic --pattern 'health/*.json' --output json"
    )]
    Traffic {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long = "pattern", help = "Snapshot glob pattern, repeatable")]
        patterns: Vec<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Print the edge legend
    #[command(
        about = "Print the edge legend",
        long_about = "Print the fixed edge legend rows in display order."
    )]
    Legend {
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
