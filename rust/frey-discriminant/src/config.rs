//! Command-line configuration.
//!
//! Flags:
//!   --random=<count>  Also check this many seeded random cases (default: 0)
//!   --max-n=<N>       Upper bound on N for random cases (default: 1000)
//!   --seed=<u64>      RNG seed for random cases (default: 42)
//!   --json            Print the report as JSON

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for --{flag}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("unknown flag '{0}'")]
    UnknownFlag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub random: usize,
    pub max_n: u64,
    pub seed: u64,
    pub json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            random: 0,
            max_n: 1000,
            seed: 42,
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
            if let Some(v) = arg.strip_prefix("--random=") {
                config.random = parse("random", v)?;
            } else if let Some(v) = arg.strip_prefix("--max-n=") {
                config.max_n = parse("max-n", v)?;
            } else if let Some(v) = arg.strip_prefix("--seed=") {
                config.seed = parse("seed", v)?;
            } else if arg == "--json" {
                config.json = true;
            } else {
                return Err(ConfigError::UnknownFlag(arg.to_string()));
            }
        }
        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse::<T>().map_err(|_| ConfigError::InvalidValue {
        flag,
        value: value.to_string(),
    })
}
