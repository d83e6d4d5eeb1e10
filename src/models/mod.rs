//! Response models for the greeter service
//!
//! The root endpoint answers in plain text; errors answer in JSON.

pub mod responses;

pub use responses::{ErrorResponse, Greeting};
