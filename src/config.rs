//! Run configuration.
//!
//! There are no command line flags. The vector length is fixed per scenario
//! and only the seed and the scenario selection can be changed, through
//! environment variables.

use crate::error::{Error, Result};

/// Environment variable holding the random seed
pub const SEED_VAR: &str = "VECTORIZED_DOT_SEED";

/// Environment variable selecting `small`, `large` or `all` scenarios
pub const SCENARIO_VAR: &str = "VECTORIZED_DOT_SCENARIO";

/// One vector length to run both strategies against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub size: usize,
}

impl Scenario {
    pub const SMALL: Scenario = Scenario {
        name: "small",
        size: 100_000,
    };
    pub const LARGE: Scenario = Scenario {
        name: "large",
        size: 1_000_000,
    };
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Scenarios to run, in order
    pub scenarios: Vec<Scenario>,
    /// Seed for the vector source; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scenarios: vec![Scenario::SMALL, Scenario::LARGE],
            seed: None,
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a configuration from `lookup`, falling back to defaults for
    /// variables that are unset or blank.
    pub fn from_vars<L>(lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = non_blank(lookup(SEED_VAR)) {
            let seed = value.parse::<u64>().map_err(|_| Error::InvalidConfig {
                key: SEED_VAR,
                value: value.clone(),
            })?;
            config.seed = Some(seed);
        }

        if let Some(value) = non_blank(lookup(SCENARIO_VAR)) {
            config.scenarios = match value.to_lowercase().as_str() {
                "small" => vec![Scenario::SMALL],
                "large" => vec![Scenario::LARGE],
                "all" => vec![Scenario::SMALL, Scenario::LARGE],
                _ => {
                    return Err(Error::InvalidConfig {
                        key: SCENARIO_VAR,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
