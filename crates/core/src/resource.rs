use crate::errors::CoreError;

/// Observable state of one remote fetch: `Loading → (Error | Ready)`,
/// starting from `Idle` before the first trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(String),
}

/// The reusable fetch state machine shared by every data-bearing view:
/// one request in flight at a time, resolved into `Ready` or `Error`.
///
/// A generation counter guards against the navigate-away race: each
/// `begin()` invalidates all earlier in-flight requests, so a late
/// response from an abandoned load is discarded instead of clobbering
/// the current state.
#[derive(Debug)]
pub struct RemoteResource<T> {
    state: RemoteState<T>,
    generation: u64,
}

impl<T> RemoteResource<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RemoteState::Idle,
            generation: 0,
        }
    }

    /// Start a load. Returns the generation token to pass back to
    /// [`resolve`](Self::resolve); any token from an earlier `begin` is
    /// stale from this point on.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = RemoteState::Loading;
        self.generation
    }

    /// Apply the outcome of the load started by `begin`. Returns `false`
    /// (and changes nothing) when the generation is stale.
    pub fn resolve(&mut self, generation: u64, outcome: Result<T, CoreError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.state = match outcome {
            Ok(value) => RemoteState::Ready(value),
            Err(e) => RemoteState::Error(e.to_string()),
        };
        true
    }

    /// Back to `Idle`, invalidating any in-flight request.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = RemoteState::Idle;
    }

    #[must_use]
    pub fn state(&self) -> &RemoteState<T> {
        &self.state
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.state, RemoteState::Idle)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, RemoteState::Loading)
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, RemoteState::Ready(_))
    }

    /// The loaded value, when ready.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            RemoteState::Ready(v) => Some(v),
            _ => None,
        }
    }

    /// The user-facing failure message, when errored.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            RemoteState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

impl<T> RemoteResource<Vec<T>> {
    /// The `empty` sub-state of `ready`: the load succeeded but the
    /// result sequence has nothing to show.
    #[must_use]
    pub fn is_empty_ready(&self) -> bool {
        matches!(&self.state, RemoteState::Ready(items) if items.is_empty())
    }
}

impl RemoteResource<()> {
    /// Resolve an action cycle (`idle → saving → (idle | error)`): success
    /// returns to `Idle` rather than parking in `Ready`, so the next
    /// save/remove can start immediately.
    pub fn resolve_action(&mut self, generation: u64, outcome: Result<(), CoreError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.state = match outcome {
            Ok(()) => RemoteState::Idle,
            Err(e) => RemoteState::Error(e.to_string()),
        };
        true
    }
}

impl<T> Default for RemoteResource<T> {
    fn default() -> Self {
        Self::new()
    }
}
