// ── Runtime connection configuration ──
//
// These types describe *how* to reach the fleet backend. They carry
// credential data and connection tuning, but never touch disk. The CLI
// constructs a `FleetConfig` from its profile and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// Login credentials for the backend.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict). Default.
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed dev servers).
    DangerAcceptInvalid,
}

/// Configuration for talking to a single backend deployment.
///
/// Built by the CLI, passed to `Fleet` -- core never reads config files.
#[derive(Debug, Clone)]
pub struct FleetConfig {
    /// Backend URL (e.g., `http://localhost:8080`).
    pub url: Url,
    /// Credentials for interactive login, if configured.
    pub credentials: Option<Credentials>,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
    /// Notification polling period (seconds). 0 disables the poller.
    pub poll_interval_secs: u64,
    /// Where to cache the bearer token between invocations.
    /// `None` keeps the token in memory only.
    pub token_cache: Option<PathBuf>,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            url: Url::parse("http://localhost:8080").expect("static URL"),
            credentials: None,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            poll_interval_secs: 30,
            token_cache: None,
        }
    }
}

impl FleetConfig {
    /// Translate the TLS strategy into the transport-layer mode.
    pub(crate) fn tls_mode(&self) -> frota_api::TlsMode {
        match &self.tls {
            TlsVerification::SystemDefaults => frota_api::TlsMode::System,
            TlsVerification::CustomCa(path) => frota_api::TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => frota_api::TlsMode::DangerAcceptInvalid,
        }
    }
}
