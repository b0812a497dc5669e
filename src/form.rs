//! Submit handling for the date-of-birth form: validate, compute, notify.

use chrono::NaiveDate;
use serde::Serialize;

use crate::age::{AgeBreakdown, compute_age};
use crate::error::ValidationError;
use crate::notify::Notifier;
use crate::validation::{default_min_birth_date, parse_birth_date, validate_birth_date};

/// Outcome of one accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeReport {
    pub birth_date: NaiveDate,
    pub today: NaiveDate,
    pub age: AgeBreakdown,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct AgeForm {
    min_birth_date: NaiveDate,
    last_result: Option<String>,
}

impl Default for AgeForm {
    fn default() -> Self {
        Self::new(default_min_birth_date())
    }
}

impl AgeForm {
    pub fn new(min_birth_date: NaiveDate) -> Self {
        Self {
            min_birth_date,
            last_result: None,
        }
    }

    /// Sentence from the most recent accepted submission.
    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    /// Handles a raw form value. `None` means the field was left blank.
    pub fn submit(
        &mut self,
        input: Option<&str>,
        today: NaiveDate,
        notifier: &mut dyn Notifier,
    ) -> Result<AgeReport, ValidationError> {
        let parsed = input.map(parse_birth_date).transpose()?;
        self.submit_date(parsed, today, notifier)
    }

    /// Handles an already-parsed form value.
    ///
    /// Rejected input leaves the previous result in place and notifies nothing.
    pub fn submit_date(
        &mut self,
        birth_date: Option<NaiveDate>,
        today: NaiveDate,
        notifier: &mut dyn Notifier,
    ) -> Result<AgeReport, ValidationError> {
        let birth_date = match validate_birth_date(birth_date, today, self.min_birth_date) {
            Ok(date) => date,
            Err(e) => {
                tracing::debug!("Rejected date of birth: {e}");
                return Err(e);
            }
        };

        let age = compute_age(birth_date, today);
        let message = age.sentence();
        tracing::debug!(%birth_date, %today, ?age, "Computed age");

        notifier.notify(&message);
        self.last_result = Some(message.clone());

        Ok(AgeReport {
            birth_date,
            today,
            age,
            message,
        })
    }
}
