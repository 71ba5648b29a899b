// src/pipeline/mod.rs

//! Pipeline entry points for rule updater operations.
//!
//! - `run_session`: Select users, collect rule settings, apply them

pub mod session;

pub use session::{RunSummary, run_session, select_users};
