//! UI utilities for terminal output
//!
//! This module provides the deletion confirmation prompt and progress
//! spinners.

mod confirm;
mod spinner;

pub use confirm::confirm_deletion;
pub use spinner::{create_spinner, finish_spinner};
