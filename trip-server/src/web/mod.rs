//! Web layer for the trip planner.
//!
//! Serves the trip form, turns submissions into itineraries, and manages the
//! stored API keys.

mod dto;
mod form;
mod format;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use form::{BUDGET_RANGE, BUDGET_STEP, FormError, PARTY_SIZE_RANGE, TripForm};
pub use format::{CURRENCY_SYMBOL, format_currency, format_date};
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
