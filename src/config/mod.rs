use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "linelog")]
#[command(about = "Echo-style console line logger")]
pub struct CliConfig {
    /// Values to log, joined with single spaces into one line
    pub values: Vec<String>,

    #[arg(long, help = "Route the line to stderr instead of stdout")]
    pub stderr: bool,

    #[arg(long, default_value = "1", help = "Emit the line this many times")]
    pub repeat: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("repeat", self.repeat, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_values() {
        let config = CliConfig::parse_from(["linelog", "a", "b", "c"]);
        assert_eq!(config.values, vec!["a", "b", "c"]);
        assert!(!config.stderr);
        assert_eq!(config.repeat, 1);
    }

    #[test]
    fn test_validate_repeat() {
        let config = CliConfig::parse_from(["linelog", "--repeat", "3", "a"]);
        assert!(config.validate().is_ok());

        let config = CliConfig::parse_from(["linelog", "--repeat", "0", "a"]);
        assert!(config.validate().is_err());
    }
}
