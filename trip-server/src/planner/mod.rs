//! Itinerary generator.
//!
//! This module implements the core planning function that answers:
//! "Given this destination, budget, party and travel style, what does the
//! trip look like?"
//!
//! Generation is a pure computation over the request and a caller-supplied
//! random source. It never fails for a validated [`crate::domain::TripRequest`].

mod catalog;
mod config;
mod generate;


pub use config::PlannerConfig;
pub use generate::{Planner, generate};
