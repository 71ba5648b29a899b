//! End-to-end sessions driven by scripted operator answers.

mod support;

use std::io::Cursor;

use pdrules::models::{Config, Urgency};
use pdrules::pipeline::{RunSummary, run_session};
use pdrules::prompt::LinePrompt;
use support::{FakeApi, team_json, user_json};

fn answers(lines: &[&str]) -> LinePrompt<Cursor<Vec<u8>>, Vec<u8>> {
    let mut input = lines.join("\n");
    input.push('\n');
    LinePrompt::new(Cursor::new(input.into_bytes()), Vec::new())
}

fn directory() -> FakeApi {
    FakeApi::new()
        .with_collection(
            "/users",
            vec![
                user_json("P1", "Ada"),
                user_json("P2", "Grace"),
                user_json("P3", "Alan"),
            ],
        )
        .with_collection(
            "/teams",
            vec![team_json("TOPS", "Ops"), team_json("TPLAT", "Platform")],
        )
        .with_collection(
            "/teams/TOPS/users",
            vec![user_json("P1", "Ada"), user_json("P2", "Grace")],
        )
        .with_collection(
            "/teams/TPLAT/users",
            vec![user_json("P2", "Grace"), user_json("P3", "Alan")],
        )
        .with_contact_methods("P1", &[("PE1", "email_contact_method")])
        .with_contact_methods(
            "P2",
            &[("PE2", "email_contact_method"), ("PS2", "sms_contact_method")],
        )
        .with_contact_methods("P3", &[("PP3", "push_notification_contact_method")])
        .with_rules("P1", &["OLD1"])
        .with_rules("P2", &["OLD2"])
        .with_rules("P3", &["OLD3"])
}

#[tokio::test]
async fn no_scope_selected_is_nothing_to_do() {
    let api = directory();
    let mut prompt = answers(&["7"]);

    let summary = run_session(&Config::default(), &api, &mut prompt).await.unwrap();

    assert_eq!(summary, RunSummary::default());
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn empty_user_selection_is_nothing_to_do() {
    let api = directory();
    let mut prompt = answers(&["2", "x,99"]);

    let summary = run_session(&Config::default(), &api, &mut prompt).await.unwrap();

    assert_eq!(summary.users, 0);
    assert!(api.creates().is_empty());
}

#[tokio::test]
async fn specific_users_append_email_rules() {
    let api = directory();
    // scope, users, replace?, high methods, low methods, high Email delay
    let mut prompt = answers(&["2", "3,1", "n", "1", "", "10"]);

    let summary = run_session(&Config::default(), &api, &mut prompt).await.unwrap();

    assert_eq!(summary.users, 2);
    assert_eq!(summary.rules_created, 1);
    assert_eq!(summary.skipped_methods, 1);
    assert_eq!(summary.rules_deleted, 0);

    let creates = api.creates();
    assert_eq!(creates.len(), 1);
    assert_eq!(creates[0].0, "P1");
    assert_eq!(creates[0].1.start_delay_in_minutes, 10);
    assert_eq!(creates[0].1.urgency, Urgency::High);
}

#[tokio::test]
async fn team_scope_replaces_rules_for_union_of_members() {
    let api = directory();
    // scope, teams, replace?, high: Email+SMS, low: Push, delays: 0, abc, 15
    let mut prompt = answers(&["3", "1,2", "y", "1,2", "4", "0", "abc", "15"]);

    let summary = run_session(&Config::default(), &api, &mut prompt).await.unwrap();

    assert_eq!(summary.users, 3);
    assert_eq!(summary.rules_deleted, 3);
    // P1: high email; P2: high email + high sms; P3: low push
    assert_eq!(summary.rules_created, 4);

    let sms = api
        .creates()
        .into_iter()
        .find(|(_, r)| r.contact_method.id == "PS2")
        .unwrap();
    assert_eq!(sms.1.start_delay_in_minutes, 0);

    let users_touched: Vec<String> = api.deletes().into_iter().map(|(user, _)| user).collect();
    assert_eq!(users_touched, vec!["P1", "P2", "P3"]);
}

#[tokio::test]
async fn team_can_be_picked_by_label_or_id() {
    let api = directory();
    let mut prompt = answers(&["3", "Platform (TPLAT)", "n", "", ""]);

    let summary = run_session(&Config::default(), &api, &mut prompt).await.unwrap();

    assert_eq!(summary.users, 2);
    assert_eq!(summary.rules_created, 0);
}

#[tokio::test]
async fn account_without_teams_is_nothing_to_do() {
    let api = FakeApi::new().with_collection("/teams", Vec::new());
    let mut prompt = answers(&["3", "1"]);

    let summary = run_session(&Config::default(), &api, &mut prompt).await.unwrap();

    assert_eq!(summary, RunSummary::default());
    assert_eq!(api.page_requests("/teams"), 1);
    assert!(api.creates().is_empty());
    assert!(api.deletes().is_empty());
}

#[tokio::test]
async fn account_without_users_is_nothing_to_do() {
    let api = FakeApi::new();
    let mut prompt = answers(&["2", "1"]);

    let summary = run_session(&Config::default(), &api, &mut prompt).await.unwrap();

    assert_eq!(summary.users, 0);
    assert_eq!(api.page_requests("/users"), 1);
}

#[tokio::test]
async fn discovery_failure_ends_the_session() {
    let api = FakeApi::new().failing_page("/users");
    let mut prompt = answers(&["1"]);

    let result = run_session(&Config::default(), &api, &mut prompt).await;

    assert!(result.unwrap_err().is_transport());
}
