//! Runtime configuration: constants, environment and command line.

use crate::error::{Error, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default registry file, removed after a successful parse.
pub const REGISTRY_FILE: &str = "networks.local";
/// log4rs configuration file, relative to the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";
/// Timeout for downloading the registry.
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Environment variable with the registry download URL.
pub const ENV_REGISTRY_URL: &str = "SUBNET_MATCHER_REGISTRY_URL";
/// Environment variable overriding the registry file path.
pub const ENV_REGISTRY_FILE: &str = "SUBNET_MATCHER_REGISTRY_FILE";

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Looks up the most specific subnet/cidr for each ip address in a file
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    /// File with one ip address per line, e.g. /path/to/filename.txt
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Registry file (tab separated name, cidr, description)
    #[arg(short = 'r', long = "registry", value_name = "PATH")]
    pub registry: Option<PathBuf>,

    /// Download location used when the registry file is missing
    #[arg(short = 'u', long = "url")]
    pub url: Option<String>,

    /// Do not delete the registry file after reading it
    #[arg(long)]
    pub keep_registry: bool,

    /// Also list every matching network for each address
    #[arg(long)]
    pub all: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub ip_file: PathBuf,
    pub registry_file: PathBuf,
    pub registry_url: Option<String>,
    pub keep_registry: bool,
    pub all_matches: bool,
    pub format: OutputFormat,
}

impl Settings {
    /// Merge command line over environment over defaults.
    ///
    /// `env` looks up a variable by name, normally `std::env::var(..).ok()`.
    pub fn from_cli<F>(cli: Cli, env: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ip_file = cli.file.ok_or(Error::MissingInputFile)?;
        let registry_file = cli
            .registry
            .or_else(|| env(ENV_REGISTRY_FILE).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(REGISTRY_FILE));
        let registry_url = cli
            .url
            .or_else(|| env(ENV_REGISTRY_URL))
            .filter(|u| !u.trim().is_empty());

        Ok(Settings {
            ip_file,
            registry_file,
            registry_url,
            keep_registry: cli.keep_registry,
            all_matches: cli.all,
            format: cli.format,
        })
    }

    /// Settings from the process arguments and environment (after `.env` is loaded).
    pub fn from_env_args() -> Result<Settings> {
        Settings::from_cli(Cli::parse(), |key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_missing_input_file() {
        let cli = Cli::try_parse_from(["subnet-matcher"]).unwrap();
        assert_eq!(
            Settings::from_cli(cli, no_env).unwrap_err(),
            Error::MissingInputFile
        );
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["subnet-matcher", "-f", "ips.txt"]).unwrap();
        let settings = Settings::from_cli(cli, no_env).unwrap();
        assert_eq!(settings.ip_file, PathBuf::from("ips.txt"));
        assert_eq!(settings.registry_file, PathBuf::from(REGISTRY_FILE));
        assert_eq!(settings.registry_url, None);
        assert!(!settings.keep_registry);
        assert!(!settings.all_matches);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_env_fallback() {
        let cli = Cli::try_parse_from(["subnet-matcher", "--file", "ips.txt"]).unwrap();
        let env = |key: &str| match key {
            ENV_REGISTRY_URL => Some("https://net.example.edu/pub/networks.local".to_string()),
            ENV_REGISTRY_FILE => Some("/tmp/nets.tsv".to_string()),
            _ => None,
        };
        let settings = Settings::from_cli(cli, env).unwrap();
        assert_eq!(settings.registry_file, PathBuf::from("/tmp/nets.tsv"));
        assert_eq!(
            settings.registry_url.as_deref(),
            Some("https://net.example.edu/pub/networks.local")
        );
    }

    #[test]
    fn test_cli_overrides_env() {
        let cli = Cli::try_parse_from([
            "subnet-matcher",
            "-f",
            "ips.txt",
            "-r",
            "local.tsv",
            "-u",
            "http://localhost/n",
            "--keep-registry",
            "--all",
            "--format",
            "json",
        ])
        .unwrap();
        let env = |_: &str| Some("from-env".to_string());
        let settings = Settings::from_cli(cli, env).unwrap();
        assert_eq!(settings.registry_file, PathBuf::from("local.tsv"));
        assert_eq!(settings.registry_url.as_deref(), Some("http://localhost/n"));
        assert!(settings.keep_registry);
        assert!(settings.all_matches);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_blank_url_ignored() {
        let cli = Cli::try_parse_from(["subnet-matcher", "-f", "ips.txt"]).unwrap();
        let settings = Settings::from_cli(cli, |_| Some("  ".to_string())).unwrap();
        assert_eq!(settings.registry_url, None);
    }
}
