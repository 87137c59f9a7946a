//! Dashboard data loading.
//!
//! Components never embed their records: the sidebar, header, and asset
//! table all render sequences handed to them by the caller. The default
//! sequences live in a bundled TOML document (see [`DASHBOARD_DATA`]) and
//! are validated here before anything is rendered.

use std::collections::HashSet;

use serde::Deserialize;

use crate::config::DASHBOARD_DATA;
use crate::core::error::DataError;
use crate::models::{Account, CryptoAsset, NavEntry, Notification};

// ============================================================================
// Raw Records
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum NavKindTag {
    #[default]
    Link,
    Toggle,
    Collapsible,
}

#[derive(Debug, Deserialize)]
struct NavRecord {
    route: String,
    icon: String,
    label: String,
    #[serde(default)]
    kind: NavKindTag,
    #[serde(default)]
    children: Vec<NavRecord>,
}

impl TryFrom<NavRecord> for NavEntry {
    type Error = DataError;

    fn try_from(record: NavRecord) -> Result<Self, Self::Error> {
        let NavRecord {
            route,
            icon,
            label,
            kind,
            children,
        } = record;

        match kind {
            NavKindTag::Collapsible if children.is_empty() => Err(DataError::EmptyGroup(label)),
            NavKindTag::Collapsible => {
                let children = children
                    .into_iter()
                    .map(NavEntry::try_from)
                    .collect::<Result<_, _>>()?;
                Ok(NavEntry::collapsible(route, icon, label, children))
            }
            _ if !children.is_empty() => Err(DataError::UnexpectedChildren(label)),
            NavKindTag::Link => Ok(NavEntry::link(route, icon, label)),
            NavKindTag::Toggle => Ok(NavEntry::toggle(route, icon, label)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DashboardRecord {
    account: Account,
    #[serde(default)]
    languages: Vec<String>,
    #[serde(default)]
    nav: Vec<NavRecord>,
    #[serde(default)]
    footer: Vec<NavRecord>,
    #[serde(default)]
    notifications: Vec<Notification>,
    #[serde(default)]
    assets: Vec<CryptoAsset>,
}

// ============================================================================
// DashboardData
// ============================================================================

/// Read-only records rendered by the dashboard shell.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub account: Account,
    /// Display names for the language menu.
    pub languages: Vec<String>,
    /// Main "Menu" section of the sidebar.
    pub nav: Vec<NavEntry>,
    /// Sidebar footer actions (Settings, Logout).
    pub footer: Vec<NavEntry>,
    pub notifications: Vec<Notification>,
    pub assets: Vec<CryptoAsset>,
}

impl DashboardData {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, DataError> {
        let record: DashboardRecord = toml::from_str(source)?;

        let data = Self {
            account: record.account,
            languages: record.languages,
            nav: convert_entries(record.nav)?,
            footer: convert_entries(record.footer)?,
            notifications: record.notifications,
            assets: record.assets,
        };
        data.validate()?;
        Ok(data)
    }

    /// The data shipped with the application.
    pub fn bundled() -> Result<Self, DataError> {
        Self::from_toml(DASHBOARD_DATA)
    }

    /// Finds a sidebar entry (main section or footer) by route.
    pub fn find_entry(&self, route: &str) -> Option<&NavEntry> {
        crate::models::find_by_route(&self.nav, route)
            .or_else(|| crate::models::find_by_route(&self.footer, route))
    }

    fn validate(&self) -> Result<(), DataError> {
        unique("notification", self.notifications.iter().map(|n| n.id.as_str()))?;
        unique("asset", self.assets.iter().map(|a| a.id.as_str()))?;

        let mut routes = HashSet::new();
        for entry in self.nav.iter().chain(&self.footer).flat_map(NavEntry::walk) {
            if !routes.insert(entry.route.as_str()) {
                return Err(DataError::DuplicateRoute(entry.route.clone()));
            }
        }
        Ok(())
    }
}

fn convert_entries(records: Vec<NavRecord>) -> Result<Vec<NavEntry>, DataError> {
    records.into_iter().map(NavEntry::try_from).collect()
}

fn unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
