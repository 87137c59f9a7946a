//! Utility modules for browser access and display formatting.
//!
//! Provides:
//! - [`dom`] - Window, document root, localStorage, console, fullscreen
//! - [`format`] - Currency, quantity, and percentage formatting

pub mod dom;
pub mod format;
