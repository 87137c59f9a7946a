use serde::Deserialize;

/// Signed-in user shown in the header account menu
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Account {
    pub name: String,
    pub role: String,
    /// Avatar fallback when the image is missing or fails to load
    pub initials: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}
