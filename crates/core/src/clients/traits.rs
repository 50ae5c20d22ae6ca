use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::account::{SavedFund, UserProfile};
use crate::models::fund::{FundDetail, FundSummary};

/// Trait abstraction over the third-party read-only fund-data API.
///
/// The HTTP implementation lives in [`super::mfapi`]; tests substitute
/// mocks so the facade's control flow can be exercised without a network.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait FundDataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Search funds by free-text query. The caller guarantees the query is
    /// non-empty; any non-success response is a generic search failure.
    async fn search(&self, query: &str) -> Result<Vec<FundSummary>, CoreError>;

    /// Fetch the full detail (metadata + NAV history) for one scheme code.
    async fn detail(&self, scheme_code: &str) -> Result<FundDetail, CoreError>;
}

/// Trait abstraction over the first-party account service.
///
/// Every method taking a `token` is an authenticated call; the facade
/// checks the session BEFORE invoking these, so an implementation may
/// assume the token is present (though possibly stale or revoked).
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AccountProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Create an account. A rejection body is a field → messages map,
    /// surfaced verbatim as `CoreError::Rejected`.
    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, CoreError>;

    /// Exchange credentials for a session token.
    async fn login(&self, username: &str, password: &str) -> Result<String, CoreError>;

    /// List the user's saved funds.
    async fn list_saved(&self, token: &str) -> Result<Vec<SavedFund>, CoreError>;

    /// Bookmark a fund. The server assigns and returns the record id;
    /// scheme-code uniqueness per user is enforced server-side.
    async fn save(&self, token: &str, scheme_code: &str) -> Result<SavedFund, CoreError>;

    /// Delete a saved-fund record by its server-assigned id.
    async fn remove(&self, token: &str, id: i64) -> Result<(), CoreError>;

    /// Fetch the account profile.
    async fn profile(&self, token: &str) -> Result<UserProfile, CoreError>;
}
