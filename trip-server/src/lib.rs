//! Trip planner server.
//!
//! A web application that turns a destination, a party size, a budget and an
//! experience level into a day-by-day itinerary with a hotel and cost totals.

pub mod backend;
pub mod config;
pub mod credentials;
pub mod domain;
pub mod planner;
pub mod web;
