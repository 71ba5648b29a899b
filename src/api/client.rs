// src/api/client.rs

//! HTTP implementation of [`IncidentApi`].

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use super::{ApiToken, IncidentApi, Page};
use crate::error::{AppError, Result};
use crate::models::{ApiConfig, ContactMethod, NewNotificationRule, NotificationRule};
use crate::utils::http::create_client;

/// Authenticated REST client. Built once per run and never mutated.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    token: ApiToken,
}

#[derive(Serialize)]
struct CreateRuleRequest<'a> {
    notification_rule: &'a NewNotificationRule,
}

impl RestClient {
    /// Create a client for the configured API using `token` for every call.
    pub fn new(config: &ApiConfig, token: ApiToken) -> Result<Self> {
        if token.is_empty() {
            return Err(AppError::config("API token is empty"));
        }
        let base_url = Url::parse(&config.base_url)?;

        Ok(Self {
            client: create_client(config)?,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, self.token.authorization())
    }

    /// Send a request and turn non-success statuses into [`AppError::Api`].
    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response> {
        let response = self.authorized(request).send().await?;
        let status = response.status();
        log::debug!("{} -> {}", url, status);

        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(AppError::Api {
                status: status.as_u16(),
                url: url.to_string(),
                message,
            })
        }
    }

    async fn get_json(&self, path: &str, query: &[(&str, usize)]) -> Result<Value> {
        let url = self.url(path);
        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.send(request, &url).await?;
        Ok(response.json().await?)
    }

    async fn get_collection<T: DeserializeOwned>(&self, path: &str, key: &str) -> Result<Vec<T>> {
        let mut body = self.get_json(path, &[]).await?;
        take_field(&mut body, key, path)
    }
}

/// Move `key` out of a response object and deserialize it.
fn take_field<T: DeserializeOwned>(body: &mut Value, key: &str, context: &str) -> Result<T> {
    let value = body
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| AppError::decode(context, format!("missing `{key}`")))?;
    serde_json::from_value(value).map_err(|e| AppError::decode(context, e))
}

#[async_trait]
impl IncidentApi for RestClient {
    async fn list_page(
        &self,
        path: &str,
        key: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Page> {
        let mut body = self
            .get_json(path, &[("limit", limit), ("offset", offset)])
            .await?;
        let items: Vec<Value> = take_field(&mut body, key, path)?;
        let more = body.get("more").and_then(Value::as_bool).unwrap_or(false);
        Ok(Page { items, more })
    }

    async fn contact_methods(&self, user_id: &str) -> Result<Vec<ContactMethod>> {
        self.get_collection(&format!("/users/{user_id}/contact_methods"), "contact_methods")
            .await
    }

    async fn notification_rules(&self, user_id: &str) -> Result<Vec<NotificationRule>> {
        self.get_collection(
            &format!("/users/{user_id}/notification_rules"),
            "notification_rules",
        )
        .await
    }

    async fn delete_notification_rule(&self, user_id: &str, rule_id: &str) -> Result<()> {
        let url = self.url(&format!("/users/{user_id}/notification_rules/{rule_id}"));
        self.send(self.client.delete(&url), &url).await?;
        Ok(())
    }

    async fn create_notification_rule(
        &self,
        user_id: &str,
        rule: &NewNotificationRule,
    ) -> Result<NotificationRule> {
        let path = format!("/users/{user_id}/notification_rules");
        let url = self.url(&path);
        let request = self.client.post(&url).json(&CreateRuleRequest {
            notification_rule: rule,
        });
        let mut body: Value = self.send(request, &url).await?.json().await?;
        take_field(&mut body, "notification_rule", &path)
    }
}
