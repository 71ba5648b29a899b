// src/models/directory.rs

//! Users and teams as returned by the directory endpoints.

use serde::{Deserialize, Serialize};

use crate::utils::label::format_label;

/// A user account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Stable unique identifier
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Login email
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Menu label, `"{name} ({email})"`. Users are selected by exact label.
    pub fn label(&self) -> String {
        format_label(&self.name, &self.email)
    }

    /// Name for progress lines, falling back to email and then id.
    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else if !self.email.is_empty() {
            &self.email
        } else {
            &self.id
        }
    }
}

/// A team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: String,

    #[serde(default)]
    pub name: String,
}

impl Team {
    /// Menu label, `"{name} ({id})"`.
    pub fn label(&self) -> String {
        format_label(&self.name, &self.id)
    }

    /// Structured reference for a selected team.
    pub fn to_ref(&self) -> TeamRef {
        TeamRef {
            label: self.label(),
            id: self.id.clone(),
        }
    }
}

/// A selected team: the label shown to the operator and the id behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRef {
    pub label: String,
    pub id: String,
}
