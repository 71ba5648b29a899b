// src/services/resolver.rs

//! Target user resolution.

use std::collections::HashSet;

use crate::api::IncidentApi;
use crate::error::Result;
use crate::models::{Team, TeamRef, User};
use crate::services::fetch_all;

/// Which users a run affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    AllUsers,
    SpecificUsers,
    SpecificTeams,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::AllUsers, Scope::SpecificUsers, Scope::SpecificTeams];

    pub fn label(&self) -> &'static str {
        match self {
            Scope::AllUsers => "All users",
            Scope::SpecificUsers => "Specific users",
            Scope::SpecificTeams => "Specific teams",
        }
    }
}

/// Fetches users and teams and narrows them to the selected scope.
pub struct UserResolver<'a> {
    api: &'a dyn IncidentApi,
    page_size: usize,
}

impl<'a> UserResolver<'a> {
    pub fn new(api: &'a dyn IncidentApi, page_size: usize) -> Self {
        Self { api, page_size }
    }

    /// Every user on the account.
    pub async fn all_users(&self) -> Result<Vec<User>> {
        fetch_all(self.api, "/users", "users", self.page_size).await
    }

    /// Every team on the account.
    pub async fn all_teams(&self) -> Result<Vec<Team>> {
        fetch_all(self.api, "/teams", "teams", self.page_size).await
    }

    /// Members of one team.
    pub async fn team_members(&self, team_id: &str) -> Result<Vec<User>> {
        fetch_all(
            self.api,
            &format!("/teams/{team_id}/users"),
            "users",
            self.page_size,
        )
        .await
    }

    /// Union of the members of `teams`, one entry per user id.
    pub async fn members_of(&self, teams: &[TeamRef]) -> Result<Vec<User>> {
        let mut members = Vec::new();
        for team in teams {
            let users = self.team_members(&team.id).await?;
            log::debug!("Team {} has {} member(s)", team.label, users.len());
            members.extend(users);
        }
        Ok(dedupe_by_id(members))
    }
}

/// Users whose label exactly matches one of `labels`, in their original order.
pub fn select_by_label(users: Vec<User>, labels: &[String]) -> Vec<User> {
    let wanted: HashSet<&str> = labels.iter().map(String::as_str).collect();
    users
        .into_iter()
        .filter(|user| wanted.contains(user.label().as_str()))
        .collect()
}

/// Drop repeated user ids, keeping the first occurrence.
pub fn dedupe_by_id(users: Vec<User>) -> Vec<User> {
    let mut seen = HashSet::new();
    users
        .into_iter()
        .filter(|user| seen.insert(user.id.clone()))
        .collect()
}
