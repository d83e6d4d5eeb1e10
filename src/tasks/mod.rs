//! Background Tasks Module
//!
//! Contains background tasks that run alongside the HTTP server.

mod reconnect;

pub use reconnect::spawn_reconnect_task;
