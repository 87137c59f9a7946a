//! Core logic behind the dashboard shell.
//!
//! This module provides:
//! - [`DashboardData`] loading and validation
//! - [`theme`] preference persistence
//! - [`error`] types shared by the loaders and browser helpers

mod data;
pub mod error;
pub mod theme;

pub use data::DashboardData;
