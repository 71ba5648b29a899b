// src/models/mod.rs

//! Domain models for the rule updater.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod contact;
mod directory;
mod rule;
mod rule_config;

// Re-export all public types
pub use config::{ApiConfig, Config, DeleteFailurePolicy, LoggingConfig, SyncConfig};
pub use contact::{ContactMethod, MethodType};
pub use directory::{Team, TeamRef, User};
pub use rule::{ContactMethodRef, NewNotificationRule, NotificationRule, Urgency};
pub use rule_config::{RuleConfiguration, RuleConfigurationBuilder, RuleKey};
