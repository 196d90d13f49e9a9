use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ItemKey, Price};

/// One product type: display name, unit price and quantity on hand.
///
/// Identity is the case-insensitive name. Two items whose names differ only in
/// casing are equal and hash alike; price and quantity are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ItemFields", into = "ItemFields")]
pub struct Item {
    key: ItemKey,
    name: String,
    unit_price: Price,
    quantity: u64,
}

/// Wire shape: the key is derived, never stored.
#[derive(Serialize, Deserialize)]
struct ItemFields {
    name: String,
    unit_price: Price,
    quantity: u64,
}

impl From<ItemFields> for Item {
    fn from(fields: ItemFields) -> Self {
        Item::new(fields.name, fields.unit_price, fields.quantity)
    }
}

impl From<Item> for ItemFields {
    fn from(item: Item) -> Self {
        ItemFields {
            name: item.name,
            unit_price: item.unit_price,
            quantity: item.quantity,
        }
    }
}

impl Item {
    pub fn new(name: impl Into<String>, unit_price: Price, quantity: u64) -> Self {
        let name = name.into();
        Self {
            key: ItemKey::from_name(&name),
            name,
            unit_price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &ItemKey {
        &self.key
    }

    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Value of the stock on hand (`unit_price * quantity`).
    pub fn stock_value(&self) -> Price {
        self.unit_price.saturating_mul(self.quantity)
    }

    pub fn set_unit_price(&mut self, unit_price: Price) {
        self.unit_price = unit_price;
    }

    /// Change the display name. The key follows the new name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.key = ItemKey::from_name(&self.name);
    }

    /// Add `other`'s quantity if it names the same item; otherwise leave `self` alone.
    ///
    /// Returns `self` so accumulations can be chained.
    pub fn accumulate(&mut self, other: &Item) -> &mut Self {
        if self.key == other.key {
            self.quantity = self.quantity.saturating_add(other.quantity);
        }
        self
    }

    /// Subtract `other`'s quantity if it names the same item; otherwise a no-op.
    ///
    /// The quantity never goes below zero: a deduction larger than the stock is
    /// rejected with `InsufficientStock` and nothing changes.
    pub fn deduct(&mut self, other: &Item) -> DomainResult<&mut Self> {
        if self.key != other.key {
            return Ok(self);
        }
        let remaining = self.quantity.checked_sub(other.quantity).ok_or_else(|| {
            DomainError::insufficient_stock(&self.name, other.quantity, self.quantity)
        })?;
        self.quantity = remaining;
        Ok(self)
    }

    /// Display line with a currency symbol in front of the price.
    pub fn display_with(&self, currency_symbol: &str) -> String {
        format!(
            "{} - {}{} (qty: {})",
            self.name, currency_symbol, self.unit_price, self.quantity
        )
    }
}

impl Entity for Item {
    type Id = ItemKey;

    fn id(&self) -> &Self::Id {
        &self.key
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Item {}

impl core::hash::Hash for Item {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} - {} (qty: {})",
            self.name, self.unit_price, self.quantity
        )
    }
}
