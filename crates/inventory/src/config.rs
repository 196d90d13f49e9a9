//! Inventory configuration.

use serde::{Deserialize, Serialize};

/// Environment variable holding the currency symbol used in listings.
pub const CURRENCY_ENV: &str = "STOCKROOM_CURRENCY";

/// Environment variable selecting the listing style (`plain` or `framed`).
pub const LISTING_STYLE_ENV: &str = "STOCKROOM_LISTING_STYLE";

/// How `Inventory::list` frames its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStyle {
    /// Item lines only.
    #[default]
    Plain,
    /// Item lines followed by an end sentinel; an empty inventory yields a
    /// single empty sentinel instead.
    Framed,
}

impl ListingStyle {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Some(Self::Plain),
            "framed" => Some(Self::Framed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub currency_symbol: String,
    pub listing_style: ListingStyle,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
            listing_style: ListingStyle::Plain,
        }
    }
}

impl InventoryConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Unset variables keep their
    /// defaults; unrecognized values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(symbol) = lookup(CURRENCY_ENV) {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup(LISTING_STYLE_ENV) {
            match ListingStyle::parse(&raw) {
                Some(style) => config.listing_style = style,
                None => tracing::warn!(
                    var = LISTING_STYLE_ENV,
                    value = %raw,
                    "unrecognized listing style; using plain"
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = InventoryConfig::from_lookup(lookup(&[]));
        assert_eq!(config, InventoryConfig::default());
        assert_eq!(config.currency_symbol, "R$");
        assert_eq!(config.listing_style, ListingStyle::Plain);
    }

    #[test]
    fn reads_overrides() {
        let config = InventoryConfig::from_lookup(lookup(&[
            (CURRENCY_ENV, "$"),
            (LISTING_STYLE_ENV, "Framed"),
        ]));
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.listing_style, ListingStyle::Framed);
    }

    #[test]
    fn ignores_unknown_listing_style() {
        let config = InventoryConfig::from_lookup(lookup(&[(LISTING_STYLE_ENV, "fancy")]));
        assert_eq!(config.listing_style, ListingStyle::Plain);
    }

    #[test]
    fn deserializes_partial_config() {
        let config: InventoryConfig =
            serde_json::from_str(r#"{ "listing_style": "framed" }"#).unwrap();
        assert_eq!(config.listing_style, ListingStyle::Framed);
        assert_eq!(config.currency_symbol, "R$");
    }
}
