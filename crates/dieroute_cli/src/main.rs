//! dieroute CLI, the command-line front end for die-to-die route allocation.
//!
//! Provides `dieroute init` for project scaffolding, `dieroute check` for
//! validating the input files, `dieroute paths` for inspecting candidate die
//! sequences, and `dieroute run` for the full allocation with reports.

#![warn(missing_docs)]

mod check;
mod init;
mod paths;
mod pipeline;
mod report;
mod run;

use std::io::IsTerminal;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// dieroute: capacity-limited route allocation between dies.
#[derive(Parser, Debug)]
#[command(name = "dieroute", version, about = "Die-to-die route allocator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `dieroute.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new dieroute project.
    Init {
        /// Project name (creates a subdirectory). If omitted, initializes in
        /// the current directory.
        name: Option<String>,
    },
    /// Load and validate the input files.
    Check,
    /// List the candidate die sequences between two dies.
    Paths(PathsArgs),
    /// Allocate routes for every cross-die endpoint pair.
    Run(RunArgs),
}

/// Arguments for the `dieroute paths` subcommand.
#[derive(Parser, Debug)]
pub struct PathsArgs {
    /// Index of the die the sequences start at.
    pub source: u32,

    /// Index of the die the sequences should reach.
    pub target: u32,

    /// Maximum number of dies per sequence, both ends included.
    #[arg(long)]
    pub hop_limit: Option<usize>,
}

/// Arguments for the `dieroute run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Maximum number of dies per route, both ends included.
    #[arg(long)]
    pub hop_limit: Option<usize>,

    /// Maximum number of candidate sequences collected per die pair.
    #[arg(long)]
    pub budget: Option<usize>,

    /// What to do with sequences cut off by the hop limit.
    #[arg(long, value_enum)]
    pub dead_ends: Option<DeadEndArg>,

    /// Whether repeaters may be shared between routes.
    #[arg(long, value_enum)]
    pub relay_reuse: Option<RelayReuseArg>,

    /// Output path for the report file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Report file format.
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

/// Dead-end sequence handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DeadEndArg {
    /// Keep them as candidates.
    Keep,
    /// Drop them.
    Discard,
}

/// Repeater sharing between routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RelayReuseArg {
    /// Unique within a route only.
    Local,
    /// Never reuse a committed repeater.
    Exclusive,
}

/// Report file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable route listing.
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.quiet, cli.verbose);

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Init { name } => init::run(name, &global),
        Command::Check => check::run(&global),
        Command::Paths(ref args) => paths::run(args, &global),
        Command::Run(ref args) => run::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over the flags.
fn init_tracing(quiet: bool, verbose: bool) {
    let default = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_init_default() {
        let cli = Cli::parse_from(["dieroute", "init"]);
        match cli.command {
            Command::Init { name } => assert!(name.is_none()),
            _ => panic!("expected Init command"),
        }
    }

    #[test]
    fn parse_init_with_name() {
        let cli = Cli::parse_from(["dieroute", "init", "chiplet"]);
        match cli.command {
            Command::Init { name } => assert_eq!(name.as_deref(), Some("chiplet")),
            _ => panic!("expected Init command"),
        }
    }

    #[test]
    fn parse_check() {
        let cli = Cli::parse_from(["dieroute", "check"]);
        assert!(matches!(cli.command, Command::Check));
    }

    #[test]
    fn parse_paths() {
        let cli = Cli::parse_from(["dieroute", "paths", "0", "3", "--hop-limit", "5"]);
        match cli.command {
            Command::Paths(ref args) => {
                assert_eq!(args.source, 0);
                assert_eq!(args.target, 3);
                assert_eq!(args.hop_limit, Some(5));
            }
            _ => panic!("expected Paths command"),
        }
    }

    #[test]
    fn parse_run_default() {
        let cli = Cli::parse_from(["dieroute", "run"]);
        match cli.command {
            Command::Run(ref args) => {
                assert!(args.hop_limit.is_none());
                assert!(args.budget.is_none());
                assert!(args.dead_ends.is_none());
                assert!(args.relay_reuse.is_none());
                assert!(args.output.is_none());
                assert!(args.format.is_none());
            }
            _ => panic!("expected Run command"),
        }
    }

    #[test]
    fn parse_run_with_overrides() {
        let cli = Cli::parse_from([
            "dieroute",
            "run",
            "--hop-limit",
            "3",
            "--budget",
            "50",
            "--dead-ends",
            "discard",
            "--relay-reuse",
            "exclusive",
            "--output",
            "out.json",
            "--format",
            "json",
        ]);
        match cli.command {
            Command::Run(ref args) => {
                assert_eq!(args.hop_limit, Some(3));
                assert_eq!(args.budget, Some(50));
                assert_eq!(args.dead_ends, Some(DeadEndArg::Discard));
                assert_eq!(args.relay_reuse, Some(RelayReuseArg::Exclusive));
                assert_eq!(args.output.as_deref(), Some("out.json"));
                assert_eq!(args.format, Some(ReportFormat::Json));
            }
            _ => panic!("expected Run command"),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["dieroute", "--quiet", "--color", "never", "check"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["dieroute", "run", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["dieroute", "--config", "/path/to/dieroute.toml", "check"]);
        assert_eq!(cli.config.as_deref(), Some("/path/to/dieroute.toml"));
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["dieroute", "run", "--dead-ends", "maybe"]).is_err());
    }
}
