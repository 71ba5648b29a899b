// src/pipeline/session.rs

//! Interactive update session.

use crate::api::IncidentApi;
use crate::error::Result;
use crate::models::{Config, User};
use crate::prompt::Prompt;
use crate::services::{
    RuleSynchronizer, Scope, UserReport, UserResolver, configure_rules, select_by_label,
};
use crate::utils::log;

/// Totals for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub users: usize,
    pub rules_deleted: usize,
    pub delete_failures: usize,
    pub rules_created: usize,
    pub create_failures: usize,
    pub skipped_methods: usize,
    pub users_stopped: usize,
}

impl RunSummary {
    pub fn from_reports(reports: &[UserReport]) -> Self {
        let total = |f: fn(&UserReport) -> usize| -> usize { reports.iter().map(f).sum() };
        Self {
            users: reports.len(),
            rules_deleted: total(UserReport::deleted),
            delete_failures: total(UserReport::delete_failures),
            rules_created: total(UserReport::created),
            create_failures: total(UserReport::create_failures),
            skipped_methods: total(UserReport::skipped),
            users_stopped: reports.iter().filter(|r| r.stopped()).count(),
        }
    }

    fn print(&self) {
        log::summary(
            "Notification rule update",
            &[
                ("Users processed", self.users.to_string()),
                ("Rules deleted", self.rules_deleted.to_string()),
                ("Delete failures", self.delete_failures.to_string()),
                ("Rules created", self.rules_created.to_string()),
                ("Create failures", self.create_failures.to_string()),
                ("Skipped methods", self.skipped_methods.to_string()),
                ("Users stopped", self.users_stopped.to_string()),
            ],
        );
    }
}

/// Ask for a scope and resolve it to target users. Empty means nothing to do.
pub async fn select_users(
    resolver: &UserResolver<'_>,
    prompt: &mut dyn Prompt,
) -> Result<Vec<User>> {
    let scopes: Vec<String> = Scope::ALL.iter().map(|s| s.label().to_string()).collect();
    let Some(choice) = prompt.select("Select user scope:", &scopes)? else {
        return Ok(Vec::new());
    };

    match Scope::ALL[choice] {
        Scope::AllUsers => resolver.all_users().await,
        Scope::SpecificUsers => {
            let users = resolver.all_users().await?;
            let labels: Vec<String> = users.iter().map(User::label).collect();
            let picked: Vec<String> = prompt
                .multi_select("Select users to update:", &labels)?
                .into_iter()
                .map(|i| labels[i].clone())
                .collect();
            Ok(select_by_label(users, &picked))
        }
        Scope::SpecificTeams => {
            let teams = resolver.all_teams().await?;
            let labels: Vec<String> = teams.iter().map(|t| t.label()).collect();
            let picked: Vec<_> = prompt
                .multi_select("Select teams to update:", &labels)?
                .into_iter()
                .map(|i| teams[i].to_ref())
                .collect();
            resolver.members_of(&picked).await
        }
    }
}

/// Run one full update session against `api`.
pub async fn run_session(
    config: &Config,
    api: &dyn IncidentApi,
    prompt: &mut dyn Prompt,
) -> Result<RunSummary> {
    let resolver = UserResolver::new(api, config.api.page_size);

    let users = select_users(&resolver, prompt).await?;
    if users.is_empty() {
        log::info("No users selected. Exiting.");
        return Ok(RunSummary::default());
    }
    log::info(&format!("Selected {} users.", users.len()));

    let replace = prompt.confirm(
        "Do you want to REPLACE all existing notification rules? (Otherwise, new rules will be added)",
    )?;
    let rules = configure_rules(prompt)?;
    if rules.is_empty() {
        log::warn("No notification methods selected; no rules will be added.");
    }

    log::header(if replace {
        "Replacing notification rules"
    } else {
        "Adding notification rules"
    });

    let reports = RuleSynchronizer::new(api, &rules, replace)
        .with_delete_policy(config.sync.on_delete_failure)
        .sync_all(&users)
        .await?;

    let summary = RunSummary::from_reports(&reports);
    summary.print();
    log::success("Done!");

    Ok(summary)
}
