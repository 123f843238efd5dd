//! Access to the remote users service.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::{UserId, UserRecord},
    protocol::{NewUser, UserUpdate},
};
use tracing::debug;
use url::Url;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// The remote calls the record controller depends on.
///
/// Mutations report only success or failure; the controller always follows a
/// successful mutation with `list_users` to resynchronise.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn create_user(&self, user: &NewUser) -> Result<()>;
    async fn list_users(&self) -> Result<Vec<UserRecord>>;
    async fn update_user(&self, id: UserId, update: &UserUpdate) -> Result<()>;
    /// `raw_id` is appended verbatim after `/users/`.
    async fn delete_user(&self, raw_id: &str) -> Result<()>;
}

/// [`UserDirectory`] over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    http: Client,
    base_url: Url,
}

impl HttpUserDirectory {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            http,
            base_url: parse_server_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `id` is appended to the path as typed. Only characters a path cannot
    /// carry are percent-encoded, so `1/2` addresses `/users/1/2`.
    fn users_url(&self, id: Option<&str>) -> Url {
        let base = self.base_url.path().trim_end_matches('/');
        let path = match id {
            Some(id) => format!("{base}/users/{id}"),
            None => format!("{base}/users"),
        };
        let mut url = self.base_url.clone();
        url.set_path(&path);
        url
    }
}

/// Validates a service base URL; only `http` and `https` are accepted.
pub fn parse_server_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("invalid server url '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("server url '{raw}' must use http or https");
    }
    if url.cannot_be_a_base() {
        bail!("server url '{raw}' cannot carry a path");
    }
    Ok(url)
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().clone();
    let body = response.text().await.unwrap_or_default();
    let body = body.trim();
    if body.is_empty() {
        bail!("{url} answered {status}");
    }
    bail!("{url} answered {status}: {body}")
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn create_user(&self, user: &NewUser) -> Result<()> {
        let url = self.users_url(None);
        debug!(%url, "POST user");
        let response = self.http.post(url).json(user).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        let url = self.users_url(None);
        debug!(%url, "GET users");
        let response = ensure_success(self.http.get(url).send().await?).await?;
        // A `null` body is an empty collection.
        let users: Option<Vec<UserRecord>> = response
            .json()
            .await
            .context("malformed users payload")?;
        Ok(users.unwrap_or_default())
    }

    async fn update_user(&self, id: UserId, update: &UserUpdate) -> Result<()> {
        let url = self.users_url(Some(&id.to_string()));
        debug!(%url, "PUT user");
        let response = self.http.put(url).json(update).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete_user(&self, raw_id: &str) -> Result<()> {
        let url = self.users_url(Some(raw_id));
        debug!(%url, "DELETE user");
        let response = self.http.delete(url).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/directory_tests.rs"]
mod tests;
