//! Inventory data model.
//!
//! This module contains the item-management core of the dashboard:
//! - `Item`, `NewItem` and `Unit` data types
//! - `ItemStore`, the owner of the item collection and id counter
//! - `validate`, the gate every new item passes before admission

mod item;
mod store;
mod validator;

pub use item::{Item, ItemId, NewItem, Unit, UnknownUnit};
pub use store::{demo_items, ItemStore, DEFAULT_LOW_STOCK_THRESHOLD};
pub use validator::{validate, ValidationError};
