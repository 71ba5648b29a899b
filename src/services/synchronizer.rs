// src/services/synchronizer.rs

//! Per-user notification rule synchronization.
//!
//! For each user: index contact methods, optionally delete every existing
//! rule, then create one rule per configured (urgency, method type, contact
//! method). Discovery failures propagate; creation failures are reported and
//! skipped; deletion failures follow [`DeleteFailurePolicy`].

use std::fmt;

use crate::api::IncidentApi;
use crate::error::{AppError, Result};
use crate::models::{
    DeleteFailurePolicy, MethodType, NewNotificationRule, RuleConfiguration, RuleKey, Urgency,
    User,
};
use crate::services::ContactIndex;
use crate::utils::log;

/// A rule the synchronizer intends to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRule {
    pub urgency: Urgency,
    pub method: MethodType,
    pub contact_method_id: String,
    pub delay_minutes: u32,
}

impl PlannedRule {
    pub fn to_request(&self) -> NewNotificationRule {
        NewNotificationRule::new(
            self.urgency,
            self.method,
            self.contact_method_id.clone(),
            self.delay_minutes,
        )
    }
}

/// One step of a user's rule plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStep {
    Create(PlannedRule),
    /// Configured method type the user has no contact method for
    Missing(RuleKey),
}

/// Derive the creation plan for one user, high urgency first and methods in
/// configured order. One rule per matching contact method id.
pub fn plan_rules(config: &RuleConfiguration, index: &ContactIndex) -> Vec<PlanStep> {
    let mut steps = Vec::new();
    for (key, delay) in config.entries() {
        let ids = index.ids(key.method);
        if ids.is_empty() {
            steps.push(PlanStep::Missing(key));
            continue;
        }
        steps.extend(ids.iter().map(|id| {
            PlanStep::Create(PlannedRule {
                urgency: key.urgency,
                method: key.method,
                contact_method_id: id.clone(),
                delay_minutes: delay,
            })
        }));
    }
    steps
}

/// Something that happened while syncing a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    Deleted { rule_id: String },
    DeleteFailed { rule_id: String, error: String },
    Created { rule: PlannedRule, rule_id: String },
    CreateFailed { rule: PlannedRule, error: String },
    Skipped { key: RuleKey },
    /// Processing stopped after a failed deletion
    Stopped,
}

impl fmt::Display for SyncEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deleted { rule_id } => write!(f, "Deleted notification rule {rule_id}"),
            Self::DeleteFailed { rule_id, error } => {
                write!(f, "Failed to delete notification rule {rule_id}: {error}")
            }
            Self::Created { rule, .. } => write!(
                f,
                "Added {} rule ({}, {} min delay) for contact method {}",
                rule.method, rule.urgency, rule.delay_minutes, rule.contact_method_id
            ),
            Self::CreateFailed { rule, error } => write!(
                f,
                "Failed to add {} rule ({}) for contact method {}: {}",
                rule.method, rule.urgency, rule.contact_method_id, error
            ),
            Self::Skipped { key } => write!(
                f,
                "No {} contact method, skipping {} urgency rule",
                key.method, key.urgency
            ),
            Self::Stopped => write!(f, "Stopped after failed deletion, no rules added"),
        }
    }
}

/// Outcome of syncing one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserReport {
    pub user_id: String,
    pub user_name: String,
    pub events: Vec<SyncEvent>,
}

impl UserReport {
    fn new(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            user_name: user.display_name().to_string(),
            events: Vec::new(),
        }
    }

    /// Record and print an event.
    fn push(&mut self, event: SyncEvent) {
        let line = format!("{}: {}", self.user_name, event);
        match event {
            SyncEvent::DeleteFailed { .. } | SyncEvent::CreateFailed { .. } => log::error(&line),
            SyncEvent::Skipped { .. } | SyncEvent::Stopped => log::warn(&line),
            _ => log::sub_item(&line),
        }
        self.events.push(event);
    }

    fn count(&self, pred: impl Fn(&SyncEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(*e)).count()
    }

    pub fn deleted(&self) -> usize {
        self.count(|e| matches!(e, SyncEvent::Deleted { .. }))
    }

    pub fn delete_failures(&self) -> usize {
        self.count(|e| matches!(e, SyncEvent::DeleteFailed { .. }))
    }

    pub fn created(&self) -> usize {
        self.count(|e| matches!(e, SyncEvent::Created { .. }))
    }

    pub fn create_failures(&self) -> usize {
        self.count(|e| matches!(e, SyncEvent::CreateFailed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|e| matches!(e, SyncEvent::Skipped { .. }))
    }

    pub fn stopped(&self) -> bool {
        self.events.contains(&SyncEvent::Stopped)
    }
}

/// Applies one rule configuration to users, one user at a time.
pub struct RuleSynchronizer<'a> {
    api: &'a dyn IncidentApi,
    config: &'a RuleConfiguration,
    replace: bool,
    on_delete_failure: DeleteFailurePolicy,
}

impl<'a> RuleSynchronizer<'a> {
    pub fn new(api: &'a dyn IncidentApi, config: &'a RuleConfiguration, replace: bool) -> Self {
        Self {
            api,
            config,
            replace,
            on_delete_failure: DeleteFailurePolicy::default(),
        }
    }

    pub fn with_delete_policy(mut self, policy: DeleteFailurePolicy) -> Self {
        self.on_delete_failure = policy;
        self
    }

    /// Sync every user in order. Stops at the first propagating error.
    pub async fn sync_all(&self, users: &[User]) -> Result<Vec<UserReport>> {
        let mut reports = Vec::with_capacity(users.len());
        for (n, user) in users.iter().enumerate() {
            log::info(&format!(
                "[{}/{}] Updating user: {}",
                n + 1,
                users.len(),
                user.display_name()
            ));
            reports.push(self.sync_user(user).await?);
        }
        Ok(reports)
    }

    /// Sync a single user.
    pub async fn sync_user(&self, user: &User) -> Result<UserReport> {
        let mut report = UserReport::new(user);

        let methods = self.api.contact_methods(&user.id).await?;
        let index = ContactIndex::from_methods(&methods);

        if self.replace && !self.delete_existing(user, &mut report).await? {
            report.push(SyncEvent::Stopped);
            return Ok(report);
        }

        for step in plan_rules(self.config, &index) {
            match step {
                PlanStep::Missing(key) => report.push(SyncEvent::Skipped { key }),
                PlanStep::Create(rule) => {
                    let event = match self
                        .api
                        .create_notification_rule(&user.id, &rule.to_request())
                        .await
                    {
                        Ok(created) => SyncEvent::Created {
                            rule,
                            rule_id: created.id,
                        },
                        Err(error) => SyncEvent::CreateFailed {
                            rule,
                            error: error.to_string(),
                        },
                    };
                    report.push(event);
                }
            }
        }

        Ok(report)
    }

    /// Delete every existing rule. Returns `false` when the user should be
    /// left alone because a deletion failed under `SkipUser`.
    async fn delete_existing(&self, user: &User, report: &mut UserReport) -> Result<bool> {
        let rules = self.api.notification_rules(&user.id).await?;

        for rule in rules {
            match self.api.delete_notification_rule(&user.id, &rule.id).await {
                Ok(()) => report.push(SyncEvent::Deleted { rule_id: rule.id }),
                Err(error) => match self.on_delete_failure {
                    DeleteFailurePolicy::Continue => report.push(SyncEvent::DeleteFailed {
                        rule_id: rule.id,
                        error: error.to_string(),
                    }),
                    DeleteFailurePolicy::SkipUser => {
                        report.push(SyncEvent::DeleteFailed {
                            rule_id: rule.id,
                            error: error.to_string(),
                        });
                        return Ok(false);
                    }
                    DeleteFailurePolicy::Abort => {
                        return Err(AppError::DeleteAborted {
                            user: user.display_name().to_string(),
                            rule: rule.id,
                            source: Box::new(error),
                        });
                    }
                },
            }
        }

        if report.deleted() > 0 {
            log::sub_item(&format!(
                "{}: Deleted {} existing notification rule(s)",
                report.user_name,
                report.deleted()
            ));
        }
        Ok(true)
    }
}
