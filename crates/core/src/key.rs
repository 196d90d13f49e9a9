//! Normalized item keys.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Case-insensitive identity of an item: the lowercased form of its name.
///
/// Derived from the display name by a pure function, so `"Apple"`, `"APPLE"`
/// and `"apple"` all map to the same key while the item keeps its original
/// casing for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(String);

impl ItemKey {
    pub fn from_name(name: &str) -> Self {
        Self(name.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemKey {}

impl core::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn differently_cased_names_share_a_key() {
        assert_eq!(ItemKey::from_name("Apple"), ItemKey::from_name("APPLE"));
        assert_eq!(ItemKey::from_name("apple").as_str(), "apple");
    }

    #[test]
    fn lowercasing_is_unicode_aware() {
        assert_eq!(ItemKey::from_name("FEIJÃO"), ItemKey::from_name("feijão"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let key = ItemKey::from_name("Milk");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"milk\"");
    }
}
