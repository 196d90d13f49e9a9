//! Inventory domain module.
//!
//! An in-memory ledger of named items, their unit price and quantity on hand.
//! Pure domain logic: no IO and no persistence. Success and rejection notices
//! are emitted as `tracing` events; install a subscriber (see
//! `stockroom-observability`) to see them.

pub mod config;
pub mod inventory;
pub mod item;
pub mod listing;

pub use config::{InventoryConfig, ListingStyle};
pub use inventory::Inventory;
pub use item::Item;
pub use listing::{EMPTY_SENTINEL, END_SENTINEL, Listing};

pub use stockroom_core::{DomainError, DomainResult, ItemKey, Price};
