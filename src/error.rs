use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Reasons a submitted date of birth is rejected before any calculation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("A date of birth is required.")]
    Missing,

    #[error("'{input}' is not a valid date: {reason}")]
    Unparseable { input: String, reason: String },

    #[error("Date of birth {date} is before {min}.")]
    BeforeMinimum { date: NaiveDate, min: NaiveDate },

    #[error("Date of birth {date} is in the future (today is {today}).")]
    InFuture { date: NaiveDate, today: NaiveDate },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
