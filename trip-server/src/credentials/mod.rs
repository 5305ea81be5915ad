//! API credential storage.
//!
//! Holds the two API keys a real itinerary backend would need, stored under
//! fixed keys in a local JSON file. The keys are never sent anywhere by the
//! mock backend.

mod error;
mod store;

pub use error::CredentialError;
pub use store::{CredentialStore, Credentials, GEMINI_KEY, SERPER_KEY, mask_key};
