// src/models/contact.rs

//! Contact methods and the method types rules can target.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of contact method a notification rule can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MethodType {
    Email,
    Sms,
    Phone,
    Push,
}

impl MethodType {
    /// All method types in menu order.
    pub const ALL: [MethodType; 4] = [
        MethodType::Email,
        MethodType::Sms,
        MethodType::Phone,
        MethodType::Push,
    ];

    /// Map a remote `type` tag. Unrecognized tags yield `None`.
    pub fn from_remote(tag: &str) -> Option<Self> {
        match tag {
            "email_contact_method" => Some(Self::Email),
            "sms_contact_method" => Some(Self::Sms),
            "phone_contact_method" => Some(Self::Phone),
            "push_notification_contact_method" => Some(Self::Push),
            _ => None,
        }
    }

    /// Remote `type` tag used in rule payloads.
    pub fn remote_type(&self) -> &'static str {
        match self {
            Self::Email => "email_contact_method",
            Self::Sms => "sms_contact_method",
            Self::Phone => "phone_contact_method",
            Self::Push => "push_notification_contact_method",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Sms => "SMS",
            Self::Phone => "Phone",
            Self::Push => "Push",
        }
    }
}

impl fmt::Display for MethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user's contact method as listed by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMethod {
    pub id: String,

    /// Remote type tag, e.g. `sms_contact_method`
    #[serde(rename = "type")]
    pub kind: String,

    /// Address (email, phone number, device) for display only
    #[serde(default)]
    pub address: Option<String>,
}

impl ContactMethod {
    /// Recognized method type, if any.
    pub fn method_type(&self) -> Option<MethodType> {
        MethodType::from_remote(&self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_tags_map_both_ways() {
        for method in MethodType::ALL {
            assert_eq!(MethodType::from_remote(method.remote_type()), Some(method));
        }
    }

    #[test]
    fn test_unknown_tag_is_ignored() {
        assert_eq!(MethodType::from_remote("slack_contact_method"), None);
        assert_eq!(MethodType::from_remote("email_contact_method_reference"), None);
    }

    #[test]
    fn test_contact_method_deserializes_type_field() {
        let cm: ContactMethod = serde_json::from_str(
            r#"{"id":"PC1","type":"sms_contact_method","address":"5555550100"}"#,
        )
        .unwrap();
        assert_eq!(cm.method_type(), Some(MethodType::Sms));
    }
}
