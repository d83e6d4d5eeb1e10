//! API Module
//!
//! HTTP handler and routing for the greeter service.
//!
//! # Endpoints
//! - `GET /` - Greets with the value cached under the demo key

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
