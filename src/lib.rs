//! Terminal dashboard for tracking the stock levels of an in-memory
//! inventory.
//!
//! The item model lives in [`inventory`]; [`state`] drives the views on top
//! of it and [`ui`] renders them with `ratatui`.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod inventory;
pub mod logger;
pub mod state;
pub mod ui;
