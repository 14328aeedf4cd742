//! Reusable UI widget components.
//!
//! This module contains styling utilities shared by the render functions.

pub mod styling;
