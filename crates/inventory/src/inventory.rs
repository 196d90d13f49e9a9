use indexmap::IndexMap;
use tracing::{info, warn};

use stockroom_core::{DomainError, DomainResult, ItemKey, Price};

use crate::config::InventoryConfig;
use crate::item::Item;
use crate::listing::Listing;

/// The inventory ledger: one `Item` per normalized name, kept in the order the
/// names were first added.
///
/// Invariant: every stored item's key equals the map key it is stored under.
/// Entries are never dropped when their quantity reaches zero; the only way an
/// entry leaves the map is by being renamed to another key.
///
/// Every rejected operation leaves the inventory unchanged.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: IndexMap<ItemKey, Item>,
    config: InventoryConfig,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InventoryConfig) -> Self {
        Self {
            items: IndexMap::new(),
            config,
        }
    }

    /// Add `quantity` units of `name`.
    ///
    /// The first add for a name creates the item with `unit_price`; later adds
    /// (any casing) only increase the quantity and ignore the price argument.
    pub fn add(&mut self, name: &str, unit_price: Price, quantity: u64) -> &Item {
        let request = Item::new(name, unit_price, quantity);
        let stored = self
            .items
            .entry(request.key().clone())
            .or_insert_with(|| Item::new(name, unit_price, 0));
        stored.accumulate(&request);

        info!(
            item = %stored.name(),
            added = quantity,
            quantity = stored.quantity(),
            "item added"
        );
        stored
    }

    /// `add` with a quantity of one.
    pub fn add_one(&mut self, name: &str, unit_price: Price) -> &Item {
        self.add(name, unit_price, 1)
    }

    /// Remove `quantity` units of `name`.
    ///
    /// All-or-nothing: if the stock is empty or smaller than `quantity`, nothing
    /// changes. Removing exactly the stock leaves the item in place with zero.
    pub fn remove(&mut self, name: &str, quantity: u64) -> DomainResult<&Item> {
        let key = ItemKey::from_name(name);
        let Some(stored) = self.items.get_mut(&key) else {
            let err = DomainError::not_found(name);
            warn!(item = %name, kind = err.kind(), "remove rejected");
            return Err(err);
        };

        let available = stored.quantity();
        if available == 0 || quantity > available {
            let err = DomainError::insufficient_stock(stored.name(), quantity, available);
            warn!(
                item = %stored.name(),
                requested = quantity,
                available,
                kind = err.kind(),
                "remove rejected"
            );
            return Err(err);
        }

        let request = Item::new(stored.name(), stored.unit_price(), quantity);
        let stored = stored.deduct(&request)?;

        info!(
            item = %stored.name(),
            removed = quantity,
            quantity = stored.quantity(),
            "item removed"
        );
        Ok(&*stored)
    }

    /// `remove` with a quantity of one.
    pub fn remove_one(&mut self, name: &str) -> DomainResult<&Item> {
        self.remove(name, 1)
    }

    pub fn update_price(&mut self, name: &str, unit_price: Price) -> DomainResult<&Item> {
        let key = ItemKey::from_name(name);
        let Some(stored) = self.items.get_mut(&key) else {
            let err = DomainError::not_found(name);
            warn!(item = %name, kind = err.kind(), "price update rejected");
            return Err(err);
        };

        let previous = stored.unit_price();
        stored.set_unit_price(unit_price);

        info!(
            item = %stored.name(),
            previous = %previous,
            price = %unit_price,
            "item price updated"
        );
        Ok(&*stored)
    }

    /// Give an item a new display name, moving it to the new name's key.
    ///
    /// Renaming onto a name owned by another item is refused; items are never
    /// merged. A rename that only changes casing keeps the same entry.
    pub fn rename_item(&mut self, old_name: &str, new_name: &str) -> DomainResult<&Item> {
        let old_key = ItemKey::from_name(old_name);
        let new_key = ItemKey::from_name(new_name);

        if !self.items.contains_key(&old_key) {
            let err = DomainError::not_found(old_name);
            warn!(item = %old_name, kind = err.kind(), "rename rejected");
            return Err(err);
        }

        if new_name.trim().is_empty() {
            let err = DomainError::validation("name cannot be empty");
            warn!(item = %old_name, kind = err.kind(), "rename rejected");
            return Err(err);
        }

        if new_key == old_key {
            let Some(stored) = self.items.get_mut(&old_key) else {
                return Err(DomainError::not_found(old_name));
            };
            stored.rename(new_name);
            info!(from = %old_name, to = %new_name, "item renamed");
            return Ok(&*stored);
        }

        if self.items.contains_key(&new_key) {
            let err = DomainError::name_conflict(new_name);
            warn!(item = %old_name, target = %new_name, kind = err.kind(), "rename rejected");
            return Err(err);
        }

        let Some(mut item) = self.items.shift_remove(&old_key) else {
            return Err(DomainError::not_found(old_name));
        };
        item.rename(new_name);
        let (index, _) = self.items.insert_full(new_key, item);

        info!(from = %old_name, to = %new_name, "item renamed");
        Ok(&self.items[index])
    }

    pub fn get_item(&self, name: &str) -> Option<&Item> {
        self.items.get(&ItemKey::from_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(&ItemKey::from_name(name))
    }

    /// Display lines for every item, in insertion order.
    ///
    /// The listing is a snapshot; it can be consumed after further mutation
    /// without observing it.
    pub fn list(&self) -> Listing {
        info!(items = self.items.len(), "listing inventory");
        let lines = self
            .items
            .values()
            .map(|item| format!("• {}", item.display_with(&self.config.currency_symbol)))
            .collect();
        Listing::new(lines, self.config.listing_style)
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Value of all stock on hand.
    pub fn total_value(&self) -> Price {
        self.items
            .values()
            .fold(Price::ZERO, |acc, item| acc.saturating_add(item.stock_value()))
    }
}
