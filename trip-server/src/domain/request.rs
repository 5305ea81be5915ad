//! Trip request types.
//!
//! A [`TripRequest`] is the validated input to itinerary generation. Each
//! field is a small newtype that can only hold a plannable value, so the
//! generator never has to re-check its input.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// How lavish the traveler wants the trip to be, from 0 to 100.
///
/// The form only offers the five named stops (0, 25, 50, 75, 100), but any
/// value in range can be planned.
///
/// # Examples
///
/// ```
/// use trip_server::domain::ExperienceLevel;
///
/// let level = ExperienceLevel::new(75).unwrap();
/// assert_eq!(level.get(), 75);
/// assert_eq!(level.stop_label(), Some("Luxury"));
///
/// assert!(ExperienceLevel::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ExperienceLevel(u8);

impl ExperienceLevel {
    /// Highest experience level.
    pub const MAX: u8 = 100;

    /// The five stops offered by the form slider, with their names.
    pub const STOPS: [(u8, &'static str); 5] = [
        (0, "Budget"),
        (25, "Comfort"),
        (50, "Premium"),
        (75, "Luxury"),
        (100, "Ultra Luxury"),
    ];

    /// Create an experience level, rejecting values above 100.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value > u32::from(Self::MAX) {
            return Err(DomainError::InvalidExperienceLevel(value));
        }
        Ok(Self(value as u8))
    }

    /// The raw level.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Price multiplier applied to hotel and activity costs: `1 + level/100`.
    pub fn multiplier(self) -> f64 {
        1.0 + f64::from(self.0) / 100.0
    }

    /// The name of this level if it sits exactly on one of the slider stops.
    pub fn stop_label(self) -> Option<&'static str> {
        Self::STOPS
            .iter()
            .find(|(stop, _)| *stop == self.0)
            .map(|(_, label)| *label)
    }
}

impl TryFrom<u32> for ExperienceLevel {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExperienceLevel> for u32 {
    fn from(level: ExperienceLevel) -> Self {
        u32::from(level.0)
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of travelers. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PartySize(u32);

impl PartySize {
    /// Create a party size, rejecting zero.
    pub fn new(travelers: u32) -> Result<Self, DomainError> {
        if travelers == 0 {
            return Err(DomainError::InvalidPartySize(travelers));
        }
        Ok(Self(travelers))
    }

    /// The number of travelers.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for PartySize {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PartySize> for u32 {
    fn from(size: PartySize) -> Self {
        size.0
    }
}

/// Total trip budget in whole currency units. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Budget(u64);

impl Budget {
    /// Create a budget, rejecting zero.
    pub fn new(amount: u64) -> Result<Self, DomainError> {
        if amount == 0 {
            return Err(DomainError::InvalidBudget);
        }
        Ok(Self(amount))
    }

    /// The amount in whole currency units.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for Budget {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Budget> for u64 {
    fn from(budget: Budget) -> Self {
        budget.0
    }
}

/// A validated request for a trip plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    destination: String,
    travel_date: Option<NaiveDate>,
    party_size: PartySize,
    budget: Budget,
    experience: ExperienceLevel,
}

impl TripRequest {
    /// Create a request. The destination is trimmed and must not be empty.
    pub fn new(
        destination: &str,
        party_size: PartySize,
        budget: Budget,
        experience: ExperienceLevel,
    ) -> Result<Self, DomainError> {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(DomainError::EmptyDestination);
        }

        Ok(Self {
            destination: destination.to_string(),
            travel_date: None,
            party_size,
            budget,
            experience,
        })
    }

    /// Set the travel date.
    pub fn with_travel_date(mut self, date: NaiveDate) -> Self {
        self.travel_date = Some(date);
        self
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// The requested travel date. Collected for display only; it does not
    /// influence the generated plan.
    pub fn travel_date(&self) -> Option<NaiveDate> {
        self.travel_date
    }

    pub fn party_size(&self) -> PartySize {
        self.party_size
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    pub fn experience(&self) -> ExperienceLevel {
        self.experience
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(destination: &str) -> Result<TripRequest, DomainError> {
        TripRequest::new(
            destination,
            PartySize::new(2).unwrap(),
            Budget::new(40_000).unwrap(),
            ExperienceLevel::new(50).unwrap(),
        )
    }

    #[test]
    fn experience_level_bounds() {
        assert!(ExperienceLevel::new(0).is_ok());
        assert!(ExperienceLevel::new(100).is_ok());
        assert_eq!(
            ExperienceLevel::new(101),
            Err(DomainError::InvalidExperienceLevel(101))
        );
    }

    #[test]
    fn experience_multiplier() {
        assert_eq!(ExperienceLevel::new(0).unwrap().multiplier(), 1.0);
        assert_eq!(ExperienceLevel::new(25).unwrap().multiplier(), 1.25);
        assert_eq!(ExperienceLevel::new(100).unwrap().multiplier(), 2.0);
    }

    #[test]
    fn stop_labels() {
        assert_eq!(ExperienceLevel::new(0).unwrap().stop_label(), Some("Budget"));
        assert_eq!(
            ExperienceLevel::new(100).unwrap().stop_label(),
            Some("Ultra Luxury")
        );
        assert_eq!(ExperienceLevel::new(30).unwrap().stop_label(), None);
    }

    #[test]
    fn reject_zero_party_and_budget() {
        assert_eq!(PartySize::new(0), Err(DomainError::InvalidPartySize(0)));
        assert_eq!(Budget::new(0), Err(DomainError::InvalidBudget));
        assert_eq!(PartySize::new(1).unwrap().get(), 1);
        assert_eq!(Budget::new(5_000).unwrap().get(), 5_000);
    }

    #[test]
    fn destination_is_trimmed() {
        let req = request("  Paris  ").unwrap();
        assert_eq!(req.destination(), "Paris");
        assert_eq!(req.travel_date(), None);
    }

    #[test]
    fn reject_blank_destination() {
        assert_eq!(request("   "), Err(DomainError::EmptyDestination));
        assert_eq!(request(""), Err(DomainError::EmptyDestination));
    }

    #[test]
    fn travel_date_is_kept() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 24).unwrap();
        let req = request("Lisbon").unwrap().with_travel_date(date);
        assert_eq!(req.travel_date(), Some(date));
    }

    #[test]
    fn serde_rejects_out_of_range_values() {
        assert!(serde_json::from_str::<ExperienceLevel>("150").is_err());
        assert!(serde_json::from_str::<PartySize>("0").is_err());
        assert!(serde_json::from_str::<Budget>("0").is_err());

        let level: ExperienceLevel = serde_json::from_str("75").unwrap();
        assert_eq!(level.get(), 75);
    }
}
