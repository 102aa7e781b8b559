// Action boundary of the Remote Guardian backend. The dashboard talks to
// this daemon; the daemon validates input and hands it to guardian-core.

// Export action module - validation and dispatch into the pipeline
pub mod action;
pub use action::*;

// Export config module - daemon configuration file
pub mod config;
pub use config::*;

// HTTP surface of the daemon
pub mod http_server;
