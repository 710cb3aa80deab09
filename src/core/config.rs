//! Logger configuration supplied by the surrounding CLI layer
//!
//! The CLI decides the level floor, color policy, output format and
//! destination; this module turns those knobs into a ready logger.

use super::{
    error::{LoggerError, Result},
    level::Level,
    logger::ConsoleLogger,
    printer::Printer,
    terminal,
};
use crate::printers::{JsonPrinter, TextPrinter};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

/// Line format written by the printer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(LoggerError::InvalidFormat(s.to_string())),
        }
    }
}

/// Color policy for text output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colors when the destination is a capable terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorChoice {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(LoggerError::InvalidColorChoice(s.to_string())),
        }
    }
}

/// Where rendered lines go
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    #[default]
    Stdout,
    Stderr,
    Discard,
    /// Appended to, created if missing
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: Level,
    pub format: OutputFormat,
    pub colors: ColorChoice,
    pub destination: Destination,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Debug,
            format: OutputFormat::default(),
            colors: ColorChoice::default(),
            destination: Destination::default(),
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the CLI's global flags.
    ///
    /// Without `debug` the floor is raised to INFO. `no_color` turns
    /// colors off regardless of the terminal.
    #[must_use]
    pub fn apply_flags(mut self, debug: bool, no_color: bool) -> Self {
        if !debug {
            self.level = Level::Info;
        }
        if no_color {
            self.colors = ColorChoice::Never;
        }
        self
    }

    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn colors(mut self, colors: ColorChoice) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Whether text output to the configured destination gets colors
    pub fn resolve_colors(&self) -> bool {
        match self.colors {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => match self.destination {
                Destination::Stdout => terminal::stdout_colors_supported(),
                Destination::Stderr => terminal::stderr_colors_supported(),
                Destination::Discard | Destination::File(_) => false,
            },
        }
    }

    /// Build the printer and wrap it in a logger at the configured level
    pub fn build(&self) -> Result<ConsoleLogger> {
        let printer: Arc<dyn Printer> = match self.format {
            OutputFormat::Text => {
                let colors = self.resolve_colors();
                let printer = match &self.destination {
                    Destination::Stdout => TextPrinter::new(std::io::stdout()),
                    Destination::Stderr => TextPrinter::new(std::io::stderr()),
                    Destination::Discard => TextPrinter::new(std::io::sink()),
                    Destination::File(path) => TextPrinter::new(open_append(path)?),
                };
                Arc::new(printer.with_colors(colors))
            }
            OutputFormat::Json => Arc::new(match &self.destination {
                Destination::Stdout => JsonPrinter::new(std::io::stdout()),
                Destination::Stderr => JsonPrinter::new(std::io::stderr()),
                Destination::Discard => JsonPrinter::new(std::io::sink()),
                Destination::File(path) => JsonPrinter::new(open_append(path)?),
            }),
        };

        Ok(ConsoleLogger::new(printer).with_level(self.level))
    }
}

fn open_append(path: &Path) -> Result<std::fs::File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggerError::io_operation("opening log file", path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, Level::Debug);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.colors, ColorChoice::Auto);
        assert_eq!(config.destination, Destination::Stdout);
    }

    #[test]
    fn test_apply_flags() {
        let config = LoggerConfig::new().apply_flags(false, true);
        assert_eq!(config.level, Level::Info);
        assert_eq!(config.colors, ColorChoice::Never);
        assert!(!config.resolve_colors());

        let config = LoggerConfig::new().apply_flags(true, false);
        assert_eq!(config.level, Level::Debug);
        assert_eq!(config.colors, ColorChoice::Auto);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"level":"WARN","format":"json","destination":"discard"}"#)
                .unwrap();
        assert_eq!(config.level, Level::Warn);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.destination, Destination::Discard);
        assert_eq!(config.colors, ColorChoice::Auto);
    }

    #[test]
    fn test_deserialize_file_destination() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"destination":{"file":"/tmp/agent.log"}}"#).unwrap();
        assert_eq!(
            config.destination,
            Destination::File(PathBuf::from("/tmp/agent.log"))
        );
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(LoggerError::InvalidFormat(_))
        ));
        assert_eq!("never".parse::<ColorChoice>().unwrap(), ColorChoice::Never);
        assert!("sometimes".parse::<ColorChoice>().is_err());
    }

    #[test]
    fn test_auto_colors_off_for_files() {
        let config = LoggerConfig::new().destination(Destination::File(PathBuf::from("x.log")));
        assert!(!config.resolve_colors());
        assert!(LoggerConfig::new().colors(ColorChoice::Always).resolve_colors());
    }

    #[test]
    fn test_build_discard() {
        let logger = LoggerConfig::new()
            .level(Level::Notice)
            .destination(Destination::Discard)
            .build()
            .unwrap();
        assert_eq!(logger.level(), Level::Notice);
    }

    #[test]
    fn test_build_reports_unopenable_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggerConfig::new()
            .destination(Destination::File(dir.path().join("missing").join("agent.log")));
        assert!(matches!(
            config.build(),
            Err(LoggerError::IoOperation { .. })
        ));
    }
}
