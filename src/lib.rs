// src/lib.rs

//! pdrules: bulk notification rule updater library

pub mod api;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod prompt;
pub mod services;
pub mod utils;
