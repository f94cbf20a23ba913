// ── Auth session holder ──
//
// Owns the bearer token lifecycle: exchange credentials for a token,
// install it on the shared ApiClient, persist it to the cache file, and
// broadcast state transitions over a watch channel. Consumers subscribe
// to the channel; there is no ambient global session.

use std::path::PathBuf;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::watch;
use tracing::{debug, warn};

use frota_api::ApiClient;
use frota_api::types::{LoginRequest, RegisterRequest, User};

use crate::error::CoreError;

/// Observable session state.
///
/// `Authenticated` carries the account as reported at login time; the
/// backend fills in id/role on deployments that support `/auth/me`.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Anonymous,
    Authenticating,
    Authenticated(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Session holder shared between the facade and its background tasks.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    api: Arc<ApiClient>,
    state: watch::Sender<SessionState>,
    token_cache: Option<PathBuf>,
}

impl Session {
    /// Create a session over a shared API client.
    ///
    /// `token_cache` is the file the token is persisted to between
    /// invocations; `None` keeps it in memory only.
    pub fn new(api: Arc<ApiClient>, token_cache: Option<PathBuf>) -> Self {
        let (state, _) = watch::channel(SessionState::Anonymous);
        Self {
            inner: Arc::new(SessionInner {
                api,
                state,
                token_cache,
            }),
        }
    }

    /// Subscribe to session state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Whether a token is currently held. Purely local -- no round-trip.
    /// Use [`validate()`](Self::validate) for server-side confirmation.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.api.has_token().await
    }

    // ── Login / register ─────────────────────────────────────────────

    /// Exchange credentials for a token and adopt it.
    ///
    /// On failure the session returns to `Anonymous` and the previous
    /// token (if any) is discarded.
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<User, CoreError> {
        let _ = self.inner.state.send(SessionState::Authenticating);

        let request = LoginRequest {
            email: email.to_owned(),
            password: password.expose_secret().to_owned(),
        };

        let response = match self.inner.api.login(&request).await {
            Ok(r) => r,
            Err(e) => {
                self.clear_local().await;
                return Err(e.into());
            }
        };

        self.adopt_token(&response.token).await;

        // The token reply only carries a username; ask /auth/me for the
        // full account, falling back to a synthesized record.
        let user = match self.inner.api.current_user().await {
            Ok(user) => user,
            Err(e) => {
                debug!(error = %e, "auth/me unavailable, synthesizing user from login reply");
                User {
                    id: 0,
                    name: response.username.clone(),
                    email: email.to_owned(),
                    role: "USER".into(),
                }
            }
        };

        let _ = self
            .inner
            .state
            .send(SessionState::Authenticated(user.clone()));
        Ok(user)
    }

    /// Create an account and adopt the returned token.
    ///
    /// Password confirmation is checked locally before any request.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, CoreError> {
        if request.password != request.confirm_password {
            return Err(CoreError::ValidationFailed {
                message: "passwords do not match".into(),
            });
        }

        let _ = self.inner.state.send(SessionState::Authenticating);

        let response = match self.inner.api.register(request).await {
            Ok(r) => r,
            Err(e) => {
                self.clear_local().await;
                return Err(e.into());
            }
        };

        self.adopt_token(&response.token).await;

        let user = User {
            id: 0,
            name: response.username.clone(),
            email: request.email.clone(),
            role: request.role.clone(),
        };
        let _ = self
            .inner
            .state
            .send(SessionState::Authenticated(user.clone()));
        Ok(user)
    }

    /// End the session.
    ///
    /// The backend logout is best-effort; local state and the cached
    /// token are always cleared, so this never fails.
    pub async fn logout(&self) {
        if self.inner.api.has_token().await {
            if let Err(e) = self.inner.api.logout().await {
                warn!(error = %e, "server-side logout failed, clearing local session anyway");
            }
        }
        self.clear_local().await;
    }

    // ── Validation / restore ─────────────────────────────────────────

    /// Ask the backend whether the held token is still accepted.
    ///
    /// A rejected token clears the session.
    pub async fn validate(&self) -> Result<bool, CoreError> {
        if !self.inner.api.has_token().await {
            return Ok(false);
        }
        match self.inner.api.validate_token().await {
            Ok(true) => Ok(true),
            Ok(false) => {
                self.clear_local().await;
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load a cached token from disk and validate it.
    ///
    /// Returns `true` if a valid session was restored. An unreadable or
    /// rejected token is discarded silently.
    pub async fn restore(&self) -> bool {
        let Some(path) = self.inner.token_cache.as_deref() else {
            return false;
        };
        let Ok(raw) = std::fs::read_to_string(path) else {
            return false;
        };
        let token = raw.trim();
        if token.is_empty() {
            return false;
        }

        self.inner.api.set_token(SecretString::from(token.to_owned())).await;

        match self.inner.api.validate_token().await {
            Ok(true) => {
                let user = match self.inner.api.current_user().await {
                    Ok(user) => user,
                    Err(_) => User {
                        id: 0,
                        name: String::new(),
                        email: String::new(),
                        role: "USER".into(),
                    },
                };
                let _ = self.inner.state.send(SessionState::Authenticated(user));
                true
            }
            Ok(false) => {
                debug!("cached token rejected, clearing");
                self.clear_local().await;
                false
            }
            Err(e) => {
                // Backend unreachable: keep the token, stay optimistic.
                warn!(error = %e, "could not validate cached token");
                true
            }
        }
    }

    /// Called by the facade when any API call comes back unauthorized:
    /// a rejected token means the session is over.
    pub(crate) async fn invalidate(&self) {
        debug!("token rejected by backend, clearing session");
        self.clear_local().await;
    }

    // ── Internals ────────────────────────────────────────────────────

    async fn adopt_token(&self, token: &str) {
        self.inner
            .api
            .set_token(SecretString::from(token.to_owned()))
            .await;
        if let Some(path) = self.inner.token_cache.as_deref() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Err(e) = std::fs::write(path, token) {
                warn!(error = %e, path = %path.display(), "failed to cache token");
            }
        }
    }

    async fn clear_local(&self) {
        self.inner.api.clear_token().await;
        if let Some(path) = self.inner.token_cache.as_deref() {
            let _ = std::fs::remove_file(path);
        }
        let _ = self.inner.state.send(SessionState::Anonymous);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &*self.inner.state.borrow())
            .finish_non_exhaustive()
    }
}
