pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod ui;

use crate::core::config::AppConfig;
use crate::core::view::MonthFilter;
use anyhow::{Result, bail};

/// The category vocabulary lives in the config, not in the ledger; the
/// ledger itself only insists on a non-empty category.
fn ensure_known_category(config: &AppConfig, category: &str) -> Result<()> {
    let category = category.trim();
    if category.is_empty() {
        // Let the ledger produce its field-specific message.
        return Ok(());
    }
    if !config.categories.iter().any(|c| c.eq_ignore_ascii_case(category)) {
        bail!(
            "unknown category '{}' (configured categories: {})",
            category,
            config.categories.join(", ")
        );
    }
    Ok(())
}

/// Parses an optional `YYYY-MM` argument. An empty string means no filter,
/// matching the behavior of a cleared month picker.
fn parse_month_filter(month: Option<&str>) -> Result<Option<MonthFilter>> {
    month
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::parse)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_known_category() {
        let config = AppConfig::default();
        assert!(ensure_known_category(&config, "Food").is_ok());
        assert!(ensure_known_category(&config, "food").is_ok());
        assert!(ensure_known_category(&config, "Gadgets").is_err());
        // Empty category is deferred to ledger validation.
        assert!(ensure_known_category(&config, "  ").is_ok());
    }

    #[test]
    fn test_parse_month_filter() {
        assert_eq!(parse_month_filter(None).unwrap(), None);
        assert_eq!(parse_month_filter(Some("")).unwrap(), None);
        assert_eq!(
            parse_month_filter(Some("2024-01")).unwrap(),
            Some(MonthFilter { year: 2024, month: 1 })
        );
        assert!(parse_month_filter(Some("nope")).is_err());
    }
}
