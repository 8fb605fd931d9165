use crate::adapters::http::DEFAULT_USER_AGENT;
use crate::app::RunOptions;
use crate::config::{OutputFormat, TomlConfig, DEFAULT_SOURCE_URL};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "spiral-matrix")]
#[command(about = "Fetch an ASCII-art integer grid and print it in counter-clockwise spiral order")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_SOURCE_URL)]
    pub url: String,

    #[arg(long, conflicts_with = "url", help = "Read the grid from a local file")]
    pub file: Option<PathBuf>,

    #[arg(long, help = "TOML config file, its values override the flags")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Print the parsed grid before the traversal")]
    pub show_grid: bool,

    #[arg(long, help = "Exit with an error instead of printing an empty result")]
    pub strict: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// 以 TOML 配置覆蓋命令列參數
    pub fn merge_toml(&mut self, toml: &TomlConfig) {
        self.url = toml.source.url.clone();
        if let Some(timeout) = toml.source.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(user_agent) = &toml.source.user_agent {
            self.user_agent = user_agent.clone();
        }
        if let Some(format) = toml.output_format() {
            self.format = format;
        }
        if let Some(show_grid) = toml.show_grid() {
            self.show_grid = show_grid;
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            format: self.format,
            show_grid: self.show_grid,
            strict: self.strict,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn source_url(&self) -> &str {
        &self.url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.file {
            Some(path) => validation::validate_path("file", &path.to_string_lossy())?,
            None => validation::validate_url("url", &self.url)?,
        }
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        validation::validate_non_empty_string("user_agent", &self.user_agent)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["spiral-matrix"]);
        assert_eq!(config.source_url(), DEFAULT_SOURCE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::parse_from([
            "spiral-matrix",
            "--url",
            "http://127.0.0.1:9000/grid",
            "--timeout-seconds",
            "2",
            "--format",
            "json",
            "--strict",
        ]);
        assert_eq!(config.url, "http://127.0.0.1:9000/grid");
        assert_eq!(config.timeout_seconds, 2);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.strict);

        let options = config.run_options();
        assert_eq!(options.format, OutputFormat::Json);
        assert!(options.strict);
        assert!(!options.show_grid);
    }

    #[test]
    fn test_file_conflicts_with_url() {
        assert!(CliConfig::try_parse_from([
            "spiral-matrix",
            "--url",
            "http://example.com",
            "--file",
            "grid.txt"
        ])
        .is_err());

        let config = CliConfig::try_parse_from(["spiral-matrix", "--file", "grid.txt"]).unwrap();
        assert_eq!(config.file, Some(PathBuf::from("grid.txt")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_timeout() {
        let config = CliConfig::parse_from(["spiral-matrix", "--timeout-seconds", "0"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge_toml_overrides() {
        let toml = TomlConfig::from_toml_str(
            r#"
[source]
url = "https://example.com/other.txt"
timeout_seconds = 30

[output]
format = "json"
"#,
        )
        .unwrap();

        let mut config = CliConfig::parse_from(["spiral-matrix", "--verbose"]);
        config.merge_toml(&toml);
        assert_eq!(config.url, "https://example.com/other.txt");
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(config.verbose);
    }
}
