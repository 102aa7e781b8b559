// Core of the Remote Guardian backend: the maintenance-suggestion pipeline.
//
// The dashboard UI never links against this crate directly; guardian-server
// sits in front of it as the action boundary. Everything here is stateless
// per call: one prompt render, one provider round trip, one typed decode.

// Export client module - transport to the Gemini API
pub mod client;
pub use client::*;

// Export types module - domain and wire data structures
pub mod types;
pub use types::*;

// Export config module - configuration loading
pub mod config;
pub use config::*;

// Export errors module - shared error types
pub mod errors;
pub use errors::*;

// Export suggest module - the suggestion operation itself
pub mod suggest;
pub use suggest::*;

// Prompt construction for the suggestion flow
pub mod prompt;

#[cfg(test)]
pub(crate) mod test_support;
