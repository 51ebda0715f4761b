//! Command-line configuration.
//!
//! Flags:
//!   --start=<2N>     First even number of the window (default: 10000000)
//!   --range=<width>  Window width; the last even scanned is start + width (default: 2000)
//!   --json           Print the summary as JSON instead of the table

use crate::{ScanWindow, DEFAULT_RANGE, DEFAULT_START};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for --{flag}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("unknown flag '{0}'")]
    UnknownFlag(String),
}

/// Parsed scanner options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub start: u64,
    pub range: u64,
    pub json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            start: DEFAULT_START,
            range: DEFAULT_RANGE,
            json: false,
        }
    }
}

impl CliConfig {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = CliConfig::default();
        for arg in args {
            let arg = arg.as_ref();
            if let Some(v) = arg.strip_prefix("--start=") {
                config.start = parse_u64("start", v)?;
            } else if let Some(v) = arg.strip_prefix("--range=") {
                config.range = parse_u64("range", v)?;
            } else if arg == "--json" {
                config.json = true;
            } else {
                return Err(ConfigError::UnknownFlag(arg.to_string()));
            }
        }
        Ok(config)
    }

    pub fn window(&self) -> ScanWindow {
        ScanWindow::new(self.start, self.range)
    }
}

fn parse_u64(flag: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .replace('_', "")
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidValue {
            flag,
            value: value.to_string(),
        })
}
