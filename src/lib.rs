//! Age calculation from a date of birth: "You are N years, M months, D days old".

pub mod age;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod logger;
pub mod notify;
pub mod validation;

pub use age::{AgeBreakdown, age_string, compute_age};
pub use config::Config;
pub use error::{ConfigError, ValidationError};
pub use form::{AgeForm, AgeReport};
pub use notify::{ConsoleNotifier, LogNotifier, Notifier, NotifierKind, RecordingNotifier};
pub use validation::{parse_birth_date, validate_birth_date};
