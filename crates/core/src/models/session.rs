use serde::{Deserialize, Serialize};

/// Maximum number of recent search strings retained.
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Client-side session state: the bearer token plus the recent-search
/// history. This is everything the app persists between runs.
///
/// Contract: `is_authenticated()` is true iff a token is present. There is
/// no expiry or refresh — a server-invalidated token simply makes the next
/// authenticated request fail, and the calling view surfaces that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: Option<String>,

    #[serde(default)]
    recent_searches: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Auth contract ───────────────────────────────────────────────

    /// Store the token issued at login.
    pub fn login(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Clear the token. Recent searches survive logout.
    pub fn logout(&mut self) {
        self.token = None;
    }

    /// The current token, or `None` when logged out.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    // ── Recent searches ─────────────────────────────────────────────

    /// Record a search query: most-recent-first, deduplicated
    /// (case-insensitive), capped at [`MAX_RECENT_SEARCHES`].
    /// Whitespace-only queries are ignored.
    pub fn record_search(&mut self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return;
        }
        self.recent_searches
            .retain(|q| !q.eq_ignore_ascii_case(trimmed));
        self.recent_searches.insert(0, trimmed.to_string());
        self.recent_searches.truncate(MAX_RECENT_SEARCHES);
    }

    /// Recent searches, most recent first.
    #[must_use]
    pub fn recent_searches(&self) -> &[String] {
        &self.recent_searches
    }

    /// Drop the search history.
    pub fn clear_recent_searches(&mut self) {
        self.recent_searches.clear();
    }
}
