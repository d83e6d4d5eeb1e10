//! Redis Greeter - a minimal HTTP service backed by Redis
//!
//! Serves `GET /` with a greeting built from a single cached demo value.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod startup;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::AppError;
pub use store::{KeyValueStore, StoreHandle};
pub use tasks::spawn_reconnect_task;
