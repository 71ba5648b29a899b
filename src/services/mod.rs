// src/services/mod.rs

//! Service layer for the rule updater.
//!
//! This module contains the business logic for:
//! - Paginated collection fetching (`fetch_all`)
//! - Target user resolution (`UserResolver`)
//! - Contact method indexing (`ContactIndex`)
//! - Rule configuration prompts (`configure_rules`)
//! - Per-user rule synchronization (`RuleSynchronizer`)

mod configure;
mod contacts;
mod pagination;
mod resolver;
mod synchronizer;

pub use configure::configure_rules;
pub use contacts::ContactIndex;
pub use pagination::fetch_all;
pub use resolver::{Scope, UserResolver, dedupe_by_id, select_by_label};
pub use synchronizer::{
    PlanStep, PlannedRule, RuleSynchronizer, SyncEvent, UserReport, plan_rules,
};
