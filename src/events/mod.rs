//! Event handling module.
//!
//! This module contains the terminal event handler: key polling on a
//! background thread and dispatch of key presses to the dashboard state.

pub mod terminal;
