//! In-memory `IncidentApi` used by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use pdrules::api::{IncidentApi, Page};
use pdrules::error::{AppError, Result};
use pdrules::models::{ContactMethod, NewNotificationRule, NotificationRule};
use serde_json::{Value, json};

/// A request the fake received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListPage {
        path: String,
        limit: usize,
        offset: usize,
    },
    ContactMethods(String),
    NotificationRules(String),
    Delete {
        user: String,
        rule: String,
    },
    Create {
        user: String,
        rule: NewNotificationRule,
    },
}

#[derive(Default)]
pub struct FakeApi {
    collections: HashMap<String, Vec<Value>>,
    contact_methods: HashMap<String, Vec<ContactMethod>>,
    rules: HashMap<String, Vec<NotificationRule>>,
    failing_pages: HashSet<String>,
    stalled_pages: HashSet<String>,
    failing_lookups: HashSet<String>,
    failing_deletes: HashSet<String>,
    failing_creates: HashSet<String>,
    calls: Mutex<Vec<Call>>,
    next_rule_id: Mutex<usize>,
}

pub fn user_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "type": "user",
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
    })
}

pub fn team_json(id: &str, name: &str) -> Value {
    json!({"id": id, "type": "team", "name": name})
}

fn server_error(what: &str) -> AppError {
    AppError::Api {
        status: 500,
        url: what.to_string(),
        message: "internal error".to_string(),
    }
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `items` from a list endpoint such as `/users`.
    pub fn with_collection(mut self, path: &str, items: Vec<Value>) -> Self {
        self.collections.insert(path.to_string(), items);
        self
    }

    pub fn with_contact_methods(mut self, user: &str, methods: &[(&str, &str)]) -> Self {
        let methods = methods
            .iter()
            .map(|(id, kind)| ContactMethod {
                id: id.to_string(),
                kind: kind.to_string(),
                address: None,
            })
            .collect();
        self.contact_methods.insert(user.to_string(), methods);
        self
    }

    pub fn with_rules(mut self, user: &str, rule_ids: &[&str]) -> Self {
        let rules = rule_ids
            .iter()
            .map(|id| NotificationRule {
                id: id.to_string(),
                urgency: Some("high".to_string()),
                start_delay_in_minutes: 0,
                contact_method: None,
            })
            .collect();
        self.rules.insert(user.to_string(), rules);
        self
    }

    pub fn failing_page(mut self, path: &str) -> Self {
        self.failing_pages.insert(path.to_string());
        self
    }

    /// Answer every page of `path` with no items but `more: true`.
    pub fn stalled_page(mut self, path: &str) -> Self {
        self.stalled_pages.insert(path.to_string());
        self
    }

    /// Fail contact method and rule listings for this user.
    pub fn failing_lookups(mut self, user: &str) -> Self {
        self.failing_lookups.insert(user.to_string());
        self
    }

    pub fn failing_delete(mut self, rule_id: &str) -> Self {
        self.failing_deletes.insert(rule_id.to_string());
        self
    }

    /// Fail creations that target this contact method id.
    pub fn failing_create(mut self, contact_method_id: &str) -> Self {
        self.failing_creates.insert(contact_method_id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn page_requests(&self, path: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::ListPage { path: p, .. } if p == path))
            .count()
    }

    pub fn creates(&self) -> Vec<(String, NewNotificationRule)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Create { user, rule } => Some((user, rule)),
                _ => None,
            })
            .collect()
    }

    pub fn deletes(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Delete { user, rule } => Some((user, rule)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl IncidentApi for FakeApi {
    async fn list_page(
        &self,
        path: &str,
        _key: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Page> {
        self.record(Call::ListPage {
            path: path.to_string(),
            limit,
            offset,
        });
        if self.failing_pages.contains(path) {
            return Err(server_error(path));
        }
        if self.stalled_pages.contains(path) {
            return Ok(Page {
                items: Vec::new(),
                more: true,
            });
        }

        let all = self.collections.get(path).cloned().unwrap_or_default();
        let end = (offset + limit).min(all.len());
        let items = all.get(offset..end).map(<[Value]>::to_vec).unwrap_or_default();
        Ok(Page {
            items,
            more: offset + limit < all.len(),
        })
    }

    async fn contact_methods(&self, user_id: &str) -> Result<Vec<ContactMethod>> {
        self.record(Call::ContactMethods(user_id.to_string()));
        if self.failing_lookups.contains(user_id) {
            return Err(server_error(user_id));
        }
        Ok(self.contact_methods.get(user_id).cloned().unwrap_or_default())
    }

    async fn notification_rules(&self, user_id: &str) -> Result<Vec<NotificationRule>> {
        self.record(Call::NotificationRules(user_id.to_string()));
        if self.failing_lookups.contains(user_id) {
            return Err(server_error(user_id));
        }
        Ok(self.rules.get(user_id).cloned().unwrap_or_default())
    }

    async fn delete_notification_rule(&self, user_id: &str, rule_id: &str) -> Result<()> {
        self.record(Call::Delete {
            user: user_id.to_string(),
            rule: rule_id.to_string(),
        });
        if self.failing_deletes.contains(rule_id) {
            return Err(server_error(rule_id));
        }
        Ok(())
    }

    async fn create_notification_rule(
        &self,
        user_id: &str,
        rule: &NewNotificationRule,
    ) -> Result<NotificationRule> {
        self.record(Call::Create {
            user: user_id.to_string(),
            rule: rule.clone(),
        });
        if self.failing_creates.contains(&rule.contact_method.id) {
            return Err(server_error(&rule.contact_method.id));
        }

        let mut next = self.next_rule_id.lock().unwrap();
        *next += 1;
        Ok(NotificationRule {
            id: format!("PNEW{}", *next),
            urgency: Some(rule.urgency.as_str().to_string()),
            start_delay_in_minutes: rule.start_delay_in_minutes,
            contact_method: Some(rule.contact_method.clone()),
        })
    }
}
