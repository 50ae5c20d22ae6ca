pub mod clients;
pub mod errors;
pub mod models;
pub mod resource;
pub mod services;
pub mod storage;

use clients::account::AccountClient;
use clients::mfapi::MfApiClient;
use clients::traits::{AccountProvider, FundDataProvider};
use errors::CoreError;
use models::{
    account::{Credentials, RegistrationForm, SavedFund, UserProfile},
    chart::{NavChartPoint, NavPerformance},
    fund::{FundDetail, FundSummary, NavEntry},
    session::Session,
};
use services::chart_service::ChartService;
use storage::manager::SessionStore;

/// Main entry point for the FundScope core library.
///
/// Holds the session and the two remote clients, and exposes one method
/// per page-level operation of the app: search, fund detail, register,
/// login/logout, and the saved-fund CRUD. A frontend renders what these
/// return; it never talks to the network itself.
#[must_use]
pub struct FundScope {
    session: Session,
    funds: Box<dyn FundDataProvider>,
    account: Box<dyn AccountProvider>,
    chart_service: ChartService,
    /// Tracks whether the session has changed since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for FundScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FundScope")
            .field("authenticated", &self.session.is_authenticated())
            .field("recent_searches", &self.session.recent_searches().len())
            .field("funds", &self.funds.name())
            .field("account", &self.account.name())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl FundScope {
    /// Create a fresh instance with a logged-out session and the real
    /// HTTP clients. `account_base_url` is the account service origin,
    /// e.g. `http://127.0.0.1:8000`.
    pub fn new(account_base_url: impl Into<String>) -> Self {
        Self::build(
            Session::new(),
            Box::new(MfApiClient::new()),
            Box::new(AccountClient::new(account_base_url)),
        )
    }

    /// Create an instance with explicit providers. This is the seam the
    /// tests use to substitute mock clients.
    pub fn with_providers(
        session: Session,
        funds: Box<dyn FundDataProvider>,
        account: Box<dyn AccountProvider>,
    ) -> Self {
        Self::build(session, funds, account)
    }

    // ── Session persistence ─────────────────────────────────────────

    /// Restore a previously saved session from raw bytes.
    /// Use this for WASM / embedded hosts where the frontend owns I/O.
    pub fn load_from_bytes(
        data: &[u8],
        account_base_url: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let session = SessionStore::load_from_bytes(data)?;
        Ok(Self::build(
            session,
            Box::new(MfApiClient::new()),
            Box::new(AccountClient::new(account_base_url)),
        ))
    }

    /// Serialize the current session to raw bytes.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_bytes(&mut self) -> Result<Vec<u8>, CoreError> {
        let bytes = SessionStore::save_to_bytes(&self.session)?;
        self.dirty = false;
        Ok(bytes)
    }

    /// Restore the session from a file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(
        path: &str,
        account_base_url: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let session = SessionStore::load_from_file(path)?;
        Ok(Self::build(
            session,
            Box::new(MfApiClient::new()),
            Box::new(AccountClient::new(account_base_url)),
        ))
    }

    /// Save the session to a file on disk (native only).
    /// Clears the unsaved-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&mut self, path: &str) -> Result<(), CoreError> {
        SessionStore::save_to_file(&self.session, path)?;
        self.dirty = false;
        Ok(())
    }

    /// Returns `true` if the session changed since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Auth ────────────────────────────────────────────────────────

    /// Exchange credentials for a token and store it in the session.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<(), CoreError> {
        credentials.validate()?;
        let token = self
            .account
            .login(&credentials.username, &credentials.password)
            .await?;
        self.session.login(token);
        self.dirty = true;
        Ok(())
    }

    /// Clear the token. Subsequent authenticated calls fail with the
    /// redirect-to-login condition without issuing a request.
    pub fn logout(&mut self) {
        if self.session.is_authenticated() {
            self.session.logout();
            self.dirty = true;
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// The current session token, or `None` when logged out.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    /// Validate the registration form locally, then create the account.
    /// Nothing is dispatched while local validation fails.
    pub async fn register(&self, form: &RegistrationForm) -> Result<UserProfile, CoreError> {
        form.validate()?;
        self.account
            .register(&form.username, &form.email, &form.password)
            .await
    }

    // ── Fund discovery ──────────────────────────────────────────────

    /// Search funds by free-text query. Whitespace-only queries are
    /// rejected locally and never sent; non-empty ones are recorded in
    /// the recent-search history before dispatch.
    pub async fn search(&mut self, query: &str) -> Result<Vec<FundSummary>, CoreError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation(vec![
                "Search query must not be empty".to_string(),
            ]));
        }
        self.session.record_search(trimmed);
        self.dirty = true;
        self.funds.search(trimmed).await
    }

    /// Fetch the full detail (metadata + NAV history) for one fund.
    pub async fn fund_detail(&self, scheme_code: &str) -> Result<FundDetail, CoreError> {
        let code = scheme_code.trim();
        if code.is_empty() {
            return Err(CoreError::Validation(vec![
                "Scheme code must not be empty".to_string(),
            ]));
        }
        self.funds.detail(code).await
    }

    /// Recent search queries, most recent first (capped, deduplicated).
    #[must_use]
    pub fn recent_searches(&self) -> &[String] {
        self.session.recent_searches()
    }

    /// Drop the recent-search history.
    pub fn clear_recent_searches(&mut self) {
        if !self.session.recent_searches().is_empty() {
            self.session.clear_recent_searches();
            self.dirty = true;
        }
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Chart-ready NAV series, sorted ascending by date.
    #[must_use]
    pub fn nav_chart(&self, detail: &FundDetail) -> Vec<NavChartPoint> {
        self.chart_service.nav_series(&detail.series)
    }

    /// The most recent NAV entry of a fund, for the "current NAV" card.
    #[must_use]
    pub fn current_nav<'a>(&self, detail: &'a FundDetail) -> Option<&'a NavEntry> {
        self.chart_service.current_nav(&detail.series)
    }

    /// Day-over-day NAV movement of a fund.
    #[must_use]
    pub fn performance(&self, detail: &FundDetail) -> Option<NavPerformance> {
        self.chart_service.performance(&detail.series)
    }

    // ── Saved funds (authenticated) ─────────────────────────────────

    /// List the user's saved funds.
    pub async fn saved_funds(&self) -> Result<Vec<SavedFund>, CoreError> {
        let token = self.require_token()?;
        self.account.list_saved(token).await
    }

    /// Bookmark a fund. The server assigns the record id and enforces
    /// scheme-code uniqueness per user.
    pub async fn save_fund(&self, scheme_code: &str) -> Result<SavedFund, CoreError> {
        let token = self.require_token()?;
        self.account.save(token, scheme_code).await
    }

    /// Remove a saved fund by its server-assigned record id.
    pub async fn remove_saved(&self, id: i64) -> Result<(), CoreError> {
        let token = self.require_token()?;
        self.account.remove(token, id).await
    }

    /// Fetch the account profile.
    pub async fn profile(&self) -> Result<UserProfile, CoreError> {
        let token = self.require_token()?;
        self.account.profile(token).await
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Gate for authenticated calls: `Unauthenticated` here means the
    /// caller redirects to the login route, and no request is issued.
    fn require_token(&self) -> Result<&str, CoreError> {
        self.session.token().ok_or(CoreError::Unauthenticated)
    }

    fn build(
        session: Session,
        funds: Box<dyn FundDataProvider>,
        account: Box<dyn AccountProvider>,
    ) -> Self {
        Self {
            session,
            funds,
            account,
            chart_service: ChartService::new(),
            dirty: false,
        }
    }
}
