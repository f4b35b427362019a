// Dotlanth
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Command-line interface for the DotScript analyzer

pub mod check;

use crate::config::ToolConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};
use dotscript_analyzer::symbols::BUILTINS;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub use check::{CheckArgs, run_check};

#[derive(Parser, Debug)]
#[command(name = "dotscript")]
#[command(about = "DotScript - Static analyzer for trading scripts")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (TOML, overrides $DOTSCRIPT_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze scripts and report errors, warnings and cost estimates
    Check(CheckArgs),
    /// List the built-in names known to the analyzer
    Builtins,
}

/// Install the stderr log subscriber; `RUST_LOG` takes precedence over `--verbose`
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

/// Print the static catalogue followed by configured extras
pub fn list_builtins(config: &ToolConfig) {
    for name in BUILTINS {
        println!("{}", name);
    }
    for name in &config.analyzer.extra_builtins {
        println!("{} (configured)", name);
    }
}

/// Dispatch a parsed command line; returns whether the run passed
pub fn run(cli: Cli) -> Result<bool> {
    let config = ToolConfig::resolve_config(cli.config)?;

    match cli.command {
        Commands::Check(args) => run_check(args, &config),
        Commands::Builtins => {
            list_builtins(&config);
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_arguments() {
        let cli = Cli::parse_from(["dotscript", "-v", "check", "a.ds", "b.ds", "--format", "json", "--deny-warnings"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.files.len(), 2);
                assert_eq!(args.format, Some(crate::config::OutputFormat::Json));
                assert!(args.deny_warnings);
            }
            Commands::Builtins => panic!("expected check"),
        }
    }
}
