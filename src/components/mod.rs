//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing (main entry point)
//! - [`layout`] - Page frame: sidebar, header, content area
//! - [`dashboard`] - Page content: breadcrumbs, asset table
//! - [`avatar`] - Image avatar with fallback content
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod avatar;
pub mod dashboard;
pub mod icons;
pub mod layout;
pub mod router;

pub use router::AppRouter;
