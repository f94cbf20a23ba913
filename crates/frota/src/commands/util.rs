//! Shared helpers for command handlers.

use std::io::IsTerminal;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::CliError;

/// Parse a wire enum (status, fuel type, ...) from a CLI argument.
///
/// Accepts any case thanks to strum's `ascii_case_insensitive`.
pub fn parse_enum<T>(field: &str, raw: &str) -> Result<T, CliError>
where
    T: FromStr + strum::VariantNames,
{
    raw.parse().map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("'{raw}' is not one of: {}", T::VARIANTS.join(", ")),
    })
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, CliError> {
    raw.parse().map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("'{raw}' is not a date (expected YYYY-MM-DD)"),
    })
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Non-interactive invocations (piped stdin) without `--yes` fail
/// instead of hanging on a prompt.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Case-insensitive substring match used by `--search` filters.
pub fn matches_search(needle: &str, haystacks: &[&str]) -> bool {
    let needle = needle.to_lowercase();
    haystacks
        .iter()
        .any(|h| h.to_lowercase().contains(&needle))
}

/// Render an optional value for table cells.
pub fn cell<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use frota_core::VehicleStatus;

    #[test]
    fn enum_parsing_is_case_insensitive() {
        let status: VehicleStatus = parse_enum("status", "out_of_service").expect("parse");
        assert_eq!(status, VehicleStatus::OutOfService);
    }

    #[test]
    fn bad_enum_value_lists_variants() {
        let err = parse_enum::<VehicleStatus>("status", "PARKED").unwrap_err();
        match err {
            CliError::Validation { reason, .. } => {
                assert!(reason.contains("AVAILABLE"), "reason: {reason}");
            }
            other => panic!("expected Validation, got: {other:?}"),
        }
    }

    #[test]
    fn search_matches_any_field() {
        assert!(matches_search("corol", &["Toyota", "Corolla", "AB-12-CD"]));
        assert!(!matches_search("honda", &["Toyota", "Corolla", "AB-12-CD"]));
    }
}
