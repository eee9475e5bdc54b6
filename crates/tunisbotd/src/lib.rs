//! TunisBot HTTP service library.
//!
//! Exposes the router so integration tests can drive it without a socket.

pub mod routes;
pub mod server;

pub use server::{app, run, AppState};
