// src/api/mod.rs

//! Boundary to the incident-management REST API.
//!
//! The synchronization services only talk to [`IncidentApi`]. [`RestClient`]
//! is the HTTP implementation; tests substitute an in-memory one.

mod client;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::models::{ContactMethod, NewNotificationRule, NotificationRule};

pub use client::RestClient;

/// One page of a paginated list endpoint.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Raw items found under the collection key
    pub items: Vec<Value>,
    /// Whether the service reports further pages
    pub more: bool,
}

/// Operations the rule updater needs from the remote service.
#[async_trait]
pub trait IncidentApi: Send + Sync {
    /// Fetch one page of `path`, reading items from the `key` array.
    async fn list_page(&self, path: &str, key: &str, limit: usize, offset: usize) -> Result<Page>;

    /// List a user's contact methods.
    async fn contact_methods(&self, user_id: &str) -> Result<Vec<ContactMethod>>;

    /// List a user's notification rules.
    async fn notification_rules(&self, user_id: &str) -> Result<Vec<NotificationRule>>;

    /// Delete one notification rule.
    async fn delete_notification_rule(&self, user_id: &str, rule_id: &str) -> Result<()>;

    /// Create a notification rule and return it as stored.
    async fn create_notification_rule(
        &self,
        user_id: &str,
        rule: &NewNotificationRule,
    ) -> Result<NotificationRule>;
}

/// API token. Never printed, not even by `Debug`.
#[derive(Clone)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Value for the `Authorization` header.
    pub(crate) fn authorization(&self) -> String {
        format!("Token token={}", self.0.trim())
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}
