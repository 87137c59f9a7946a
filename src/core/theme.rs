//! Theme preference persistence using localStorage.
//!
//! Only the last chosen theme is stored; a missing or unreadable value
//! falls back to [`Theme::default`].

use crate::config::THEME_STORAGE_KEY;
use crate::core::error::StorageError;
use crate::models::Theme;
use crate::utils::dom;

/// Theme restored at startup.
pub fn load_theme() -> Theme {
    dom::local_storage()
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|value| Theme::parse(&value))
        .unwrap_or_default()
}

/// Persist the chosen theme.
pub fn save_theme(theme: Theme) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    storage
        .set_item(THEME_STORAGE_KEY, theme.as_str())
        .map_err(|_| StorageError::SaveFailed)
}
