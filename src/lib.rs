//! Velzon crypto dashboard, rendered client-side with Leptos.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::App;
