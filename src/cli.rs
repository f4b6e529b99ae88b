use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wayfarer - a terminal travel destination finder
#[derive(Parser)]
#[command(name = "wayfarer")]
#[command(about = "Answer three questions, get a travel destination")]
#[command(version)]
pub struct Cli {
    /// Path to a custom rules file (JSON). Defaults to the built-in table.
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a recommendation without the TUI (headless mode)
    Resolve {
        /// Terrain preference (Mountains or Beach)
        #[arg(long)]
        terrain: String,

        /// Activity preference (Adventure or Relaxation)
        #[arg(long)]
        activity: String,

        /// Budget level (Low, Medium, or High)
        #[arg(long)]
        budget: String,
    },
    /// Validate a rules file
    Validate {
        /// Path to the rules file to validate
        rules_file: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_args() {
        // Running with no args should succeed (defaults to TUI mode)
        let result = Cli::try_parse_from(["wayfarer"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert!(cli.command.is_none());
        assert!(cli.rules.is_none());
    }

    #[test]
    fn test_cli_resolve_command() {
        let result = Cli::try_parse_from([
            "wayfarer", "resolve", "--terrain", "Beach", "--activity", "Adventure", "--budget",
            "Low",
        ]);
        assert!(result.is_ok());
        match result.unwrap().command {
            Some(Commands::Resolve {
                terrain,
                activity,
                budget,
            }) => {
                assert_eq!(terrain, "Beach");
                assert_eq!(activity, "Adventure");
                assert_eq!(budget, "Low");
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_cli_resolve_requires_all_three() {
        let result = Cli::try_parse_from(["wayfarer", "resolve", "--terrain", "Beach"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_validate_command() {
        let result = Cli::try_parse_from(["wayfarer", "validate", "/path/to/rules.json"]);
        assert!(result.is_ok());
        match result.unwrap().command {
            Some(Commands::Validate { rules_file }) => {
                assert_eq!(rules_file.to_str().unwrap(), "/path/to/rules.json");
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_global_rules_flag() {
        let result = Cli::try_parse_from([
            "wayfarer",
            "resolve",
            "--rules",
            "custom.json",
            "--terrain",
            "Mountains",
            "--activity",
            "Relaxation",
            "--budget",
            "High",
        ]);
        assert!(result.is_ok());
        assert_eq!(result.unwrap().rules.unwrap().to_str().unwrap(), "custom.json");
    }
}
