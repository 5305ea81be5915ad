//! Domain types for the trip planner.
//!
//! This module contains the validated trip request and the generated plan
//! types. All types enforce their invariants at construction time, so code
//! that receives these types can trust their validity.

mod error;
mod plan;
mod request;
mod theme;
mod tier;

pub use error::DomainError;
pub use plan::{Activity, ActivityCategory, ActivityDuration, DayPlan, Hotel, TripPlan};
pub use request::{Budget, ExperienceLevel, PartySize, TripRequest};
pub use theme::DayTheme;
pub use tier::{ActivityLoad, HotelTier, NameStyle};
