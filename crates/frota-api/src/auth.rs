// Auth endpoints
//
// Token exchange and session validation under /api/auth. Token storage
// lives on the client; these methods only talk to the wire.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{AuthResponse, LoginRequest, RegisterRequest, User};

impl ApiClient {
    /// Exchange credentials for a bearer token.
    ///
    /// Does not install the token; callers decide whether to adopt it.
    ///
    /// `POST /api/auth/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, Error> {
        debug!(email = %request.email, "logging in");
        match self.post("auth/login", request).await {
            Err(Error::Unauthorized) => Err(Error::Authentication {
                message: "invalid email or password".into(),
            }),
            other => other,
        }
    }

    /// Create an account and receive a bearer token.
    ///
    /// `POST /api/auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, Error> {
        debug!(email = %request.email, "registering account");
        self.post("auth/register", request).await
    }

    /// Check whether the held token is still accepted by the backend.
    ///
    /// `POST /api/auth/validate`
    pub async fn validate_token(&self) -> Result<bool, Error> {
        match self
            .post_no_response("auth/validate", &serde_json::json!({}))
            .await
        {
            Ok(()) => Ok(true),
            Err(Error::Unauthorized) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Invalidate the session server-side.
    ///
    /// `POST /api/auth/logout`
    pub async fn logout(&self) -> Result<(), Error> {
        debug!("logging out");
        self.post_no_response("auth/logout", &serde_json::json!({}))
            .await
    }

    /// Fetch the account behind the held token.
    ///
    /// `GET /api/auth/me`
    pub async fn current_user(&self) -> Result<User, Error> {
        self.get("auth/me").await
    }
}
