//! Config command handlers: profile management without a backend connection.

use tabled::Tabled;

use frota_config::{Config, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

#[derive(Clone, serde::Serialize, Tabled)]
struct ProfileRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Server")]
    server: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Default")]
    default: String,
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global),
        ConfigCommand::Show => show(global),
        ConfigCommand::Profiles => profiles(global),
        ConfigCommand::Use { name } => use_profile(&name, global),
        ConfigCommand::SetPassword { profile } => set_password(profile.as_deref(), global),
        ConfigCommand::Export { out } => export(out.as_deref(), global),
    }
}

// ── Subcommands ─────────────────────────────────────────────────────

fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = frota_config::load_config_or_default();

    let name: String = dialoguer::Input::new()
        .with_prompt("Profile name")
        .default("default".into())
        .interact_text()
        .map_err(io_err)?;

    let server: String = dialoguer::Input::new()
        .with_prompt("Server URL")
        .default("http://localhost:8080".into())
        .interact_text()
        .map_err(io_err)?;

    let email: String = dialoguer::Input::new()
        .with_prompt("Login email (empty to skip)")
        .allow_empty(true)
        .interact_text()
        .map_err(io_err)?;

    let profile = Profile {
        server,
        email: (!email.is_empty()).then_some(email),
        ..Profile::default()
    };

    let store = dialoguer::Confirm::new()
        .with_prompt("Store a password in the system keyring?")
        .default(false)
        .interact()
        .map_err(io_err)?;
    if store {
        let password = rpassword::prompt_password("Password: ").map_err(CliError::Io)?;
        frota_config::store_password(&name, &password)?;
    }

    cfg.profiles.insert(name.clone(), profile);
    cfg.default_profile = Some(name);
    frota_config::save_config(&cfg)?;

    if !global.quiet {
        eprintln!(
            "Config written to {}",
            frota_config::config_path().display()
        );
    }
    Ok(())
}

fn show(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = redacted_config();

    let rendered = match global.output {
        OutputFormat::Json => output::render_json_pretty(&cfg),
        OutputFormat::JsonCompact => output::render_json_compact(&cfg),
        _ => output::render_yaml(&cfg),
    };
    output::print_output(&rendered, global.quiet);
    Ok(())
}

fn profiles(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = frota_config::load_config_or_default();
    let default = cfg.default_profile.clone().unwrap_or_default();

    let mut rows: Vec<ProfileRow> = cfg
        .profiles
        .iter()
        .map(|(name, profile)| ProfileRow {
            name: name.clone(),
            server: profile.server.clone(),
            email: profile.email.clone().unwrap_or_default(),
            default: if *name == default { "*" } else { "" }.into(),
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));

    let out = output::render_list(&global.output, &rows, Clone::clone, |row| row.name.clone());
    output::print_output(&out, global.quiet);
    Ok(())
}

fn use_profile(name: &str, global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = frota_config::load_config_or_default();
    if !cfg.profiles.contains_key(name) {
        return Err(CliError::ProfileNotFound {
            name: name.to_owned(),
            available: sorted_names(&cfg).join(", "),
        });
    }
    cfg.default_profile = Some(name.to_owned());
    frota_config::save_config(&cfg)?;
    if !global.quiet {
        eprintln!("Default profile set to '{name}'");
    }
    Ok(())
}

fn set_password(profile: Option<&str>, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = frota_config::load_config_or_default();
    let name = profile
        .map(ToOwned::to_owned)
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into());

    let password = rpassword::prompt_password("Password: ").map_err(CliError::Io)?;
    frota_config::store_password(&name, &password)?;

    if !global.quiet {
        eprintln!("Password stored in keyring for profile '{name}'");
    }
    Ok(())
}

fn export(out: Option<&std::path::Path>, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = redacted_config();
    let rendered = match global.output {
        OutputFormat::Yaml => output::render_yaml(&cfg),
        OutputFormat::JsonCompact => output::render_json_compact(&cfg),
        _ => output::render_json_pretty(&cfg),
    };
    match out {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            if !global.quiet {
                eprintln!("Config exported to {}", path.display());
            }
        }
        None => output::print_output(&rendered, global.quiet),
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────

/// Loaded config with plaintext passwords masked; never echo secrets.
fn redacted_config() -> Config {
    let mut cfg = frota_config::load_config_or_default();
    for profile in cfg.profiles.values_mut() {
        if profile.password.is_some() {
            profile.password = Some("<redacted>".into());
        }
    }
    cfg
}

fn sorted_names(cfg: &Config) -> Vec<String> {
    let mut names: Vec<String> = cfg.profiles.keys().cloned().collect();
    names.sort_unstable();
    names
}

fn io_err(e: dialoguer::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}
