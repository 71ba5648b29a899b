// src/models/rule.rs

//! Notification rules, existing and to be created.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::MethodType;

/// Urgency tier a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Low,
}

impl Urgency {
    /// Processing order: high, then low.
    pub const ALL: [Urgency; 2] = [Urgency::High, Urgency::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a contact method inside a rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMethodRef {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: String,
}

/// A notification rule that exists on the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationRule {
    pub id: String,

    #[serde(default)]
    pub urgency: Option<String>,

    #[serde(default)]
    pub start_delay_in_minutes: u32,

    #[serde(default)]
    pub contact_method: Option<ContactMethodRef>,
}

/// Body of a rule creation request (the inner `notification_rule` object).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewNotificationRule {
    pub start_delay_in_minutes: u32,
    pub contact_method: ContactMethodRef,
    pub urgency: Urgency,
}

impl NewNotificationRule {
    pub fn new(
        urgency: Urgency,
        method: MethodType,
        contact_method_id: impl Into<String>,
        delay_minutes: u32,
    ) -> Self {
        Self {
            start_delay_in_minutes: delay_minutes,
            contact_method: ContactMethodRef {
                id: contact_method_id.into(),
                kind: method.remote_type().to_string(),
            },
            urgency,
        }
    }
}
