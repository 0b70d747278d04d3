// Configuration management for route2nm
// Supports CLI arguments, config file (TOML), and environment variables

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::Level;

use crate::routes::parser::MalformedPolicy;

const DEFAULT_CONFIG_FILE: &str = "route2nm.toml";

/// Convert legacy `<address>/<prefix> via <gateway>` route files into
/// indexed ADDRESSn/NETMASKn/GATEWAYn/METRICn files
#[derive(Parser, Debug, Clone)]
#[command(name = "route2nm")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Legacy route file to convert
    pub input: PathBuf,

    /// Directory for the converted file (default: next to the input)
    #[arg(short, long, env = "ROUTE2NM_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip malformed route lines with a warning instead of failing
    #[arg(long, env = "ROUTE2NM_SKIP_MALFORMED")]
    pub skip_malformed: bool,

    /// Convert and print, but do not write a file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Don't print the converted routes
    #[arg(short, long)]
    pub quiet: bool,

    /// Logging level (error, warn, info, debug, trace)
    #[arg(short, long, env = "ROUTE2NM_LOG")]
    pub log_level: Option<String>,

    /// Path to configuration file
    #[arg(short, long, env = "ROUTE2NM_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Configuration file structure (TOML format)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Parsing settings
    #[serde(default)]
    pub parsing: ParsingConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for converted files
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Echo converted routes to stdout
    #[serde(default = "default_true")]
    pub print: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ParsingConfig {
    /// Skip malformed lines instead of failing the run
    #[serde(default)]
    pub skip_malformed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            directory: None,
            print: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

/// Merged configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub policy: MalformedPolicy,
    pub dry_run: bool,
    pub print: bool,
    pub log_level: Level,
}

impl Config {
    /// Load configuration from all sources (CLI args, config file, defaults)
    /// Priority: CLI args > Environment variables > Config file > Defaults
    pub fn load() -> anyhow::Result<Self> {
        let cli_args = CliArgs::parse();

        let config_file = match &cli_args.config {
            Some(config_path) => load_config_file(config_path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    load_config_file(default_path)?
                } else {
                    ConfigFile::default()
                }
            }
        };

        Self::merge(cli_args, config_file)
    }

    /// Merge CLI arguments over a config file (CLI args win)
    pub fn merge(cli_args: CliArgs, config_file: ConfigFile) -> anyhow::Result<Self> {
        let log_level = parse_log_level(
            cli_args
                .log_level
                .as_deref()
                .unwrap_or(&config_file.logging.level),
        )?;

        let policy = if cli_args.skip_malformed || config_file.parsing.skip_malformed {
            MalformedPolicy::Skip
        } else {
            MalformedPolicy::Abort
        };

        Ok(Config {
            input: cli_args.input,
            output_dir: cli_args.output_dir.or(config_file.output.directory),
            policy,
            dry_run: cli_args.dry_run,
            print: !cli_args.quiet && config_file.output.print,
            log_level,
        })
    }
}

fn load_config_file(path: &Path) -> anyhow::Result<ConfigFile> {
    // Logging is not up yet, so this goes to stderr directly
    eprintln!("Loading configuration from: {}", path.display());
    let config_content = std::fs::read_to_string(path)?;
    Ok(toml::from_str::<ConfigFile>(&config_content)?)
}

fn parse_log_level(level_str: &str) -> anyhow::Result<Level> {
    match level_str.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(anyhow::anyhow!("Invalid log level: {}", level_str)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.output.print);
        assert!(config.output.directory.is_none());
        assert!(!config.parsing.skip_malformed);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_config_file() {
        let config: ConfigFile = toml::from_str(
            r#"
            [output]
            directory = "/srv/converted"

            [parsing]
            skip_malformed = true
            "#,
        )
        .unwrap();
        assert_eq!(config.output.directory, Some(PathBuf::from("/srv/converted")));
        assert!(config.output.print);
        assert!(config.parsing.skip_malformed);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_merge_cli_overrides_file() {
        let cli = CliArgs::try_parse_from([
            "route2nm",
            "route-eth0",
            "--output-dir",
            "/tmp/out",
            "--quiet",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let file = ConfigFile {
            output: OutputConfig {
                directory: Some(PathBuf::from("/srv/converted")),
                print: true,
            },
            ..ConfigFile::default()
        };

        let config = Config::merge(cli, file).unwrap();
        assert_eq!(config.input, PathBuf::from("route-eth0"));
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/out")));
        assert!(!config.print);
        assert!(!config.dry_run);
        assert_eq!(config.policy, MalformedPolicy::Abort);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_merge_file_enables_skip() {
        let cli = CliArgs::try_parse_from(["route2nm", "routes", "-n", "-l", "warn"]).unwrap();
        let file = ConfigFile {
            parsing: ParsingConfig {
                skip_malformed: true,
            },
            ..ConfigFile::default()
        };

        let config = Config::merge(cli, file).unwrap();
        assert_eq!(config.policy, MalformedPolicy::Skip);
        assert!(config.dry_run);
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn test_parse_log_level() {
        assert!(matches!(parse_log_level("info"), Ok(Level::INFO)));
        assert!(matches!(parse_log_level("DEBUG"), Ok(Level::DEBUG)));
        assert!(parse_log_level("invalid").is_err());
    }
}
