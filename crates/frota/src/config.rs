//! Bridges the config file, environment, and CLI flags into a `FleetConfig`.

use std::time::Duration;

use frota_config::Config;
use frota_core::{FleetConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Resolve the active profile name: `--profile` wins, then the config
/// file's `default_profile`, then "default".
pub fn active_profile_name(global: &GlobalOpts, cfg: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `FleetConfig` from the config file, profile, and CLI overrides.
pub fn build_fleet_config(global: &GlobalOpts) -> Result<FleetConfig, CliError> {
    let cfg = frota_config::load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    let mut fleet = if let Some(profile) = cfg.profiles.get(&profile_name) {
        frota_config::profile_to_fleet_config(profile, &profile_name, &cfg.defaults)?
    } else if global.profile.is_some() {
        // An explicitly requested profile that doesn't exist is an error;
        // a missing implicit default falls through to flags/env.
        return Err(CliError::ProfileNotFound {
            name: profile_name,
            available: {
                let mut names: Vec<&str> = cfg.profiles.keys().map(String::as_str).collect();
                names.sort_unstable();
                names.join(", ")
            },
        });
    } else {
        let url_str = global.server.as_deref().ok_or_else(|| CliError::NoConfig {
            path: frota_config::config_path().display().to_string(),
        })?;
        FleetConfig {
            url: parse_server_url(url_str)?,
            credentials: None,
            tls: TlsVerification::SystemDefaults,
            timeout: Duration::from_secs(cfg.defaults.timeout),
            poll_interval_secs: cfg.defaults.poll_interval,
            token_cache: Some(frota_config::token_cache_path()),
        }
    };

    // CLI flags override whatever the profile said.
    if let Some(ref server) = global.server {
        fleet.url = parse_server_url(server)?;
    }
    if global.insecure {
        fleet.tls = TlsVerification::DangerAcceptInvalid;
    }
    if let Some(secs) = global.timeout {
        fleet.timeout = Duration::from_secs(secs);
    }

    Ok(fleet)
}

fn parse_server_url(raw: &str) -> Result<url::Url, CliError> {
    raw.parse().map_err(|_| CliError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {raw}"),
    })
}
