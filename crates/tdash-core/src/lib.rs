//! Task Dashboard Core Library
//!
//! Record stores, per-view state and the pure derivations that turn the
//! two into what a dashboard page shows.

pub mod config;
pub mod context;
pub mod derive;
pub mod error;
pub mod forms;
pub mod model;
pub mod page;
pub mod presentation;
pub mod record;
pub mod seed;
pub mod store;
pub mod view_state;

pub use error::{DashError, DashResult};
