//! Trip form input and validation.
//!
//! The browser form bounds its inputs, but every value is checked again here
//! before a [`TripRequest`] is built.

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{Budget, DomainError, ExperienceLevel, PartySize, TripRequest};

use super::format::format_currency;

/// Allowed number of travelers.
pub const PARTY_SIZE_RANGE: RangeInclusive<u32> = 1..=20;

/// Allowed budget, in whole currency units.
pub const BUDGET_RANGE: RangeInclusive<u64> = 5_000..=500_000;

/// Budget slider step.
pub const BUDGET_STEP: u64 = 5_000;

/// Raw trip form as submitted by the browser.
#[derive(Debug, Clone, Deserialize)]
pub struct TripForm {
    /// Where to go
    #[serde(default)]
    pub destination: String,

    /// Travel date as `YYYY-MM-DD`
    #[serde(default)]
    pub date: Option<String>,

    /// Number of travelers
    pub party_size: u32,

    /// Total budget
    pub budget: u64,

    /// One of the experience slider stops
    pub experience_level: u32,
}

/// Reasons a submitted form is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a destination.")]
    MissingDestination,

    #[error("Please select a travel date.")]
    MissingDate,

    #[error("Travel date must be a valid date (YYYY-MM-DD).")]
    InvalidDate,

    #[error("Travel date cannot be in the past.")]
    DateInPast,

    #[error("Party size must be between 1 and 20 travelers.")]
    PartySize,

    #[error("{0}")]
    Budget(String),

    #[error("Experience level must be one of 0, 25, 50, 75 or 100.")]
    ExperienceLevel,
}

impl From<DomainError> for FormError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::EmptyDestination => FormError::MissingDestination,
            DomainError::InvalidPartySize(_) => FormError::PartySize,
            DomainError::InvalidBudget => FormError::Budget(budget_message()),
            DomainError::InvalidExperienceLevel(_) => FormError::ExperienceLevel,
        }
    }
}

fn budget_message() -> String {
    format!(
        "Budget must be between {} and {} in steps of {}.",
        format_currency(*BUDGET_RANGE.start()),
        format_currency(*BUDGET_RANGE.end()),
        format_currency(BUDGET_STEP),
    )
}

impl TripForm {
    /// Check the form and build a trip request.
    ///
    /// `today` is the earliest acceptable travel date.
    pub fn validate(&self, today: NaiveDate) -> Result<TripRequest, FormError> {
        if self.destination.trim().is_empty() {
            return Err(FormError::MissingDestination);
        }

        let date = self
            .date
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or(FormError::MissingDate)?;
        let date =
            NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| FormError::InvalidDate)?;
        if date < today {
            return Err(FormError::DateInPast);
        }

        if !PARTY_SIZE_RANGE.contains(&self.party_size) {
            return Err(FormError::PartySize);
        }

        if !BUDGET_RANGE.contains(&self.budget) || self.budget % BUDGET_STEP != 0 {
            return Err(FormError::Budget(budget_message()));
        }

        let level = ExperienceLevel::new(self.experience_level)?;
        if level.stop_label().is_none() {
            return Err(FormError::ExperienceLevel);
        }

        let request = TripRequest::new(
            &self.destination,
            PartySize::new(self.party_size)?,
            Budget::new(self.budget)?,
            level,
        )?;

        Ok(request.with_travel_date(date))
    }
}
