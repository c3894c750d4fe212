//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for resolved configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Table of values with their sources
    Text,
    /// Snapshot as JSON (replayable with --values)
    Json,
}

impl From<OutputFormat> for hyperconf_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => hyperconf_domain::OutputFormat::Text,
            OutputFormat::Json => hyperconf_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for hyperconf
#[derive(Parser, Debug)]
#[command(name = "hyperconf")]
#[command(author, version, about = "Typed hyperparameter configuration with replayable snapshots")]
#[command(long_about = r#"
hyperconf resolves a manifest of typed parameters against overrides and
prints the resolved configuration. Override values are type-checked: an
integer or a string is never accepted where a boolean is declared.

Overrides are applied in this order (later wins):
1. --snapshot <file>   A snapshot saved by an earlier run
2. --values <file>     TOML or JSON files, in the order given
3. environment         Variables under --env-prefix (or overrides.env_prefix)
4. --set NAME=VALUE    Command-line assignments

Settings are loaded from (in priority order):
1. HYPERCONF_* environment variables
2. --config <path>     Explicit config file
3. ./hyperconf.toml    Project-level config
4. ~/.config/hyperconf/config.toml   Global config

Example:
  hyperconf resolve training.toml --set stream=false
  hyperconf resolve training.toml --values sweep.json --save-snapshot run.json
  hyperconf resolve training.toml --snapshot run.json
  hyperconf check training.toml
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a manifest against overrides
    Resolve(ResolveArgs),
    /// Validate a manifest and list its parameters
    Check(CheckArgs),
}

/// Arguments for `hyperconf resolve`
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Manifest file (TOML or JSON)
    pub manifest: PathBuf,

    /// Override file (TOML or JSON); may be given multiple times
    #[arg(long = "values", value_name = "FILE")]
    pub values: Vec<PathBuf>,

    /// Override a single parameter; VALUE is parsed as JSON, else taken as text
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Replay a snapshot saved by --save-snapshot
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Save the resolved snapshot to this file
    #[arg(long, value_name = "FILE")]
    pub save_snapshot: Option<PathBuf>,

    /// Read overrides from environment variables with this prefix
    #[arg(long, value_name = "PREFIX")]
    pub env_prefix: Option<String>,

    /// Fail on overrides for undeclared parameters
    #[arg(long)]
    pub strict: bool,

    /// Only print these parameters (the saved snapshot is always complete)
    #[arg(long = "only", value_name = "NAME")]
    pub only: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

/// Arguments for `hyperconf check`
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Manifest file (TOML or JSON)
    pub manifest: PathBuf,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::try_parse_from([
            "hyperconf",
            "-vv",
            "resolve",
            "training.toml",
            "--set",
            "stream=false",
            "-s",
            "layer_trainable=[false,true,true]",
            "--values",
            "a.toml",
            "--values",
            "b.json",
            "--strict",
            "-o",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Some(Command::Resolve(args)) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.manifest, PathBuf::from("training.toml"));
        assert_eq!(args.set, vec!["stream=false", "layer_trainable=[false,true,true]"]);
        assert_eq!(args.values.len(), 2);
        assert!(args.strict);
        assert_eq!(args.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_parse_check() {
        let cli =
            Cli::try_parse_from(["hyperconf", "check", "training.toml", "--no-color"]).unwrap();
        assert!(cli.no_color);
        assert!(matches!(cli.command, Some(Command::Check(_))));
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::try_parse_from(["hyperconf", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_output_format_into_domain() {
        let format: hyperconf_domain::OutputFormat = OutputFormat::Json.into();
        assert_eq!(format, hyperconf_domain::OutputFormat::Json);
    }
}
