//! Dashboard state management module.
//!
//! This module contains the state of the dashboard, including:
//! - Main `State` struct owning the item store and the view selection
//! - Navigation types (View, DeleteButton)
//! - Form types (CreateForm, FormField, UnitPicker, Alert)
//! - State error handling

mod error;
mod form;
mod navigation;

pub use error::StateError;
pub use form::{Alert, CreateForm, DeleteConfirmation, FormField, UnitPicker};
pub use navigation::{DeleteButton, View};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
