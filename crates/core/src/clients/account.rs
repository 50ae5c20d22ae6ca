use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::{debug, warn};

use super::traits::AccountProvider;
use crate::errors::CoreError;
use crate::models::account::{SavedFund, UserProfile};

/// First-party account service client: registration, login, and CRUD on
/// the user's saved-fund list.
///
/// Authenticated endpoints use DRF-style token auth:
/// `Authorization: Token {token}`. Beyond the register path (whose
/// rejection body is a field → messages map surfaced verbatim), the
/// client does not distinguish 401/403/404/500 — every non-2xx is the
/// same generic request failure.
pub struct AccountClient {
    client: Client,
    base_url: String,
}

// ── Request/response bodies ─────────────────────────────────────────

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Serialize)]
struct SaveRequest<'a> {
    scheme_code: &'a str,
}

impl AccountClient {
    /// `base_url` is the account service origin, e.g. `http://127.0.0.1:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into(),
        }
    }

    fn auth_header(token: &str) -> String {
        format!("Token {token}")
    }

    fn request_failed(operation: &str, status: reqwest::StatusCode) -> CoreError {
        CoreError::Api {
            provider: "account".into(),
            message: format!("{operation} failed (HTTP {})", status.as_u16()),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AccountProvider for AccountClient {
    fn name(&self) -> &str {
        "account"
    }

    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, CoreError> {
        let url = format!("{}/api/register/", self.base_url);
        debug!(username, "registering account");

        let resp = self
            .client
            .post(&url)
            .json(&RegisterRequest {
                username,
                email,
                password,
            })
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return resp.json().await.map_err(|e| CoreError::Api {
                provider: "account".into(),
                message: format!("failed to parse created user: {e}"),
            });
        }

        // A rejection body maps field names to human-readable messages;
        // fall back to the generic failure if it doesn't parse that way.
        match resp.json::<HashMap<String, Vec<String>>>().await {
            Ok(fields) if !fields.is_empty() => {
                warn!(status = status.as_u16(), "registration rejected");
                Err(CoreError::Rejected(fields))
            }
            _ => Err(Self::request_failed("registration", status)),
        }
    }

    async fn login(&self, username: &str, password: &str) -> Result<String, CoreError> {
        let url = format!("{}/api/login/", self.base_url);
        debug!(username, "logging in");

        let resp = self
            .client
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Self::request_failed("login", status));
        }

        let body: LoginResponse = resp.json().await.map_err(|e| CoreError::Api {
            provider: "account".into(),
            message: format!("failed to parse login response: {e}"),
        })?;
        Ok(body.token)
    }

    async fn list_saved(&self, token: &str) -> Result<Vec<SavedFund>, CoreError> {
        let url = format!("{}/api/saved-funds/", self.base_url);

        let resp = self
            .client
            .get(&url)
            .header("Authorization", Self::auth_header(token))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Self::request_failed("loading saved funds", status));
        }

        resp.json().await.map_err(|e| CoreError::Api {
            provider: "account".into(),
            message: format!("failed to parse saved funds: {e}"),
        })
    }

    async fn save(&self, token: &str, scheme_code: &str) -> Result<SavedFund, CoreError> {
        let url = format!("{}/api/saved-funds/", self.base_url);
        debug!(scheme_code, "saving fund");

        let resp = self
            .client
            .post(&url)
            .header("Authorization", Self::auth_header(token))
            .json(&SaveRequest { scheme_code })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            // Duplicate saves are rejected server-side and land here too.
            return Err(Self::request_failed("saving fund", status));
        }

        resp.json().await.map_err(|e| CoreError::Api {
            provider: "account".into(),
            message: format!("failed to parse saved-fund record: {e}"),
        })
    }

    async fn remove(&self, token: &str, id: i64) -> Result<(), CoreError> {
        let url = format!("{}/api/saved-funds/{id}/", self.base_url);
        debug!(id, "removing saved fund");

        let resp = self
            .client
            .delete(&url)
            .header("Authorization", Self::auth_header(token))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Self::request_failed("removing fund", status));
        }
        Ok(())
    }

    async fn profile(&self, token: &str) -> Result<UserProfile, CoreError> {
        let url = format!("{}/api/profile/", self.base_url);

        let resp = self
            .client
            .get(&url)
            .header("Authorization", Self::auth_header(token))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Self::request_failed("loading profile", status));
        }

        resp.json().await.map_err(|e| CoreError::Api {
            provider: "account".into(),
            message: format!("failed to parse profile: {e}"),
        })
    }
}
