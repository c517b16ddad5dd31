use crate::config::default_config_path;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "freshrss-cleaner")]
#[command(about = "A command line tool to clean up old entries from FreshRSS")]
pub struct Cli {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Mark entries older than each feed's configured age as read
    Clean {
        /// Path to the configuration file
        #[arg(short, long, default_value_os_t = default_config_path())]
        config: PathBuf,
    },

    /// Create a base configuration file in the user's config directory
    CreateConfig,

    /// Print version and build information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clean_with_config() {
        let cli = Cli::parse_from(["freshrss-cleaner", "clean", "--config", "/tmp/x.yaml"]);

        match cli.command {
            Commands::Clean { config } => assert_eq!(config, PathBuf::from("/tmp/x.yaml")),
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_clean_defaults_to_user_config_path() {
        let cli = Cli::parse_from(["freshrss-cleaner", "-v", "clean"]);

        assert!(cli.verbose);
        match cli.command {
            Commands::Clean { config } => assert_eq!(config, default_config_path()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_other_subcommands() {
        let cli = Cli::parse_from(["freshrss-cleaner", "create-config"]);
        assert!(matches!(cli.command, Commands::CreateConfig));

        let cli = Cli::parse_from(["freshrss-cleaner", "version"]);
        assert!(matches!(cli.command, Commands::Version));

        assert!(Cli::try_parse_from(["freshrss-cleaner"]).is_err());
    }
}
