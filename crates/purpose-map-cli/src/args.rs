use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "purpose-map")]
#[command(about = "List source files with the purpose inferred from their directory layout")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors and results only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file (default: $PURPOSE_MAP_CONFIG or ./purpose-map.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    En,
    Zh,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a source tree and list every candidate file with its purpose
    Scan {
        /// Root directory (default: $PURPOSE_MAP_ROOT)
        root: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Label language (overrides output.locale)
        #[arg(short, long, value_enum)]
        locale: Option<LocaleArg>,

        /// Append per-purpose counts
        #[arg(short, long)]
        summary: bool,

        /// Additional extensions to scan (e.g., --ext js --ext jsx)
        #[arg(long = "ext")]
        extensions: Vec<String>,

        /// Additional glob patterns to exclude, relative to the root
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// Classify paths without touching the filesystem
    Classify {
        /// Paths to classify (need not exist)
        #[arg(required = true)]
        paths: Vec<String>,

        /// Label language (overrides output.locale)
        #[arg(short, long, value_enum)]
        locale: Option<LocaleArg>,

        /// Show which rule matched
        #[arg(long)]
        explain: bool,
    },

    /// Show classification rules in precedence order
    Rules {
        /// Label language (overrides output.locale)
        #[arg(short, long, value_enum)]
        locale: Option<LocaleArg>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., scan.extensions)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., scan.extensions)
        key: String,

        /// Value to set (e.g., "ts,tsx" or "[ts, tsx]")
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scan_with_options() {
        let cli = Cli::try_parse_from([
            "purpose-map",
            "scan",
            "./src",
            "--format",
            "json",
            "--locale",
            "zh",
            "--summary",
            "--ext",
            "js",
            "-e",
            "generated/*",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Scan {
                root,
                format,
                locale,
                summary,
                extensions,
                exclude,
            }) => {
                assert_eq!(root, Some(PathBuf::from("./src")));
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(locale, Some(LocaleArg::Zh));
                assert!(summary);
                assert_eq!(extensions, vec!["js"]);
                assert_eq!(exclude, vec!["generated/*"]);
            }
            _ => panic!("expected scan command"),
        }
    }

    #[test]
    fn test_scan_root_is_optional() {
        let cli = Cli::try_parse_from(["purpose-map", "scan"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Scan { root: None, .. })
        ));
    }

    #[test]
    fn test_classify_requires_paths() {
        assert!(Cli::try_parse_from(["purpose-map", "classify"]).is_err());
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["purpose-map", "-v", "-q", "rules"]).is_err());
    }

    #[test]
    fn test_global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["purpose-map", "rules", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
