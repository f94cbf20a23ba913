//! Auth command handlers: login, register, logout, whoami, status.

use secrecy::SecretString;

use frota_core::{Fleet, RegisterRequest, User};

use crate::cli::{AuthArgs, AuthCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub async fn handle(fleet: &Fleet, args: AuthArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        AuthCommand::Login { email } => {
            let email = match email {
                Some(e) => e,
                None => prompt_input("Email")?,
            };
            let password = resolve_password(global)?;

            let user = fleet.session().login(&email, &password).await?;
            if !global.quiet {
                eprintln!("Logged in as {} ({})", user.name, user.role);
            }
            Ok(())
        }

        AuthCommand::Register { name, email, role } => {
            let password = prompt_password("Password")?;
            let confirm = prompt_password("Confirm password")?;

            let request = RegisterRequest {
                name,
                email,
                password,
                confirm_password: confirm,
                role,
            };
            let user = fleet.session().register(&request).await?;
            if !global.quiet {
                eprintln!("Account created; logged in as {}", user.name);
            }
            Ok(())
        }

        AuthCommand::Logout => {
            fleet.session().logout().await;
            if !global.quiet {
                eprintln!("Logged out");
            }
            Ok(())
        }

        AuthCommand::Whoami => {
            let Some(user) = fleet.session().state().user().cloned() else {
                return Err(CliError::NotAuthenticated);
            };
            let out = output::render_single(
                &global.output,
                &user,
                user_detail,
                |u| u.email.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AuthCommand::Status => {
            if fleet.session().validate().await? {
                if !global.quiet {
                    eprintln!("Session token accepted by the backend");
                }
                Ok(())
            } else {
                Err(CliError::NotAuthenticated)
            }
        }
    }
}

fn user_detail(user: &User) -> String {
    format!(
        "Name:  {}\nEmail: {}\nRole:  {}",
        user.name, user.email, user.role
    )
}

// ── Credential prompts ───────────────────────────────────────────────

fn prompt_input(label: &str) -> Result<String, CliError> {
    dialoguer::Input::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))
}

fn prompt_password(label: &str) -> Result<String, CliError> {
    rpassword::prompt_password(format!("{label}: ")).map_err(CliError::Io)
}

/// Resolve the login password: `FROTA_PASSWORD`, then the profile's
/// credential chain (env var, keyring, plaintext), then a prompt.
fn resolve_password(global: &GlobalOpts) -> Result<SecretString, CliError> {
    if let Ok(raw) = std::env::var("FROTA_PASSWORD") {
        return Ok(SecretString::from(raw));
    }

    let cfg = frota_config::load_config_or_default();
    let profile_name = crate::config::active_profile_name(global, &cfg);
    if let Some(profile) = cfg.profiles.get(&profile_name) {
        if let Ok(password) = frota_config::resolve_password(profile, &profile_name) {
            return Ok(password);
        }
    }

    Ok(SecretString::from(prompt_password("Password")?))
}
