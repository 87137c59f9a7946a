//! Sidebar navigation entries.

/// How a navigation entry reacts to a click.
#[derive(Clone, Debug, PartialEq)]
pub enum NavKind {
    /// Navigates to the entry's route.
    Link,
    /// Invokes the sidebar's activation callback; never navigates.
    Toggle,
    /// Expands or collapses a nested list; never navigates.
    Collapsible(Vec<NavEntry>),
}

/// A single sidebar entry.
///
/// Whether an entry is active is never stored: it is derived on every
/// render by comparing `route` against the current route.
#[derive(Clone, Debug, PartialEq)]
pub struct NavEntry {
    /// Route identifier, e.g. `#/crypto`.
    pub route: String,
    /// Icon key resolved by `components::icons::lookup`.
    pub icon: String,
    pub label: String,
    pub kind: NavKind,
}

impl NavEntry {
    pub fn link(
        route: impl Into<String>,
        icon: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            route: route.into(),
            icon: icon.into(),
            label: label.into(),
            kind: NavKind::Link,
        }
    }

    pub fn toggle(
        route: impl Into<String>,
        icon: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            kind: NavKind::Toggle,
            ..Self::link(route, icon, label)
        }
    }

    pub fn collapsible(
        route: impl Into<String>,
        icon: impl Into<String>,
        label: impl Into<String>,
        children: Vec<NavEntry>,
    ) -> Self {
        Self {
            kind: NavKind::Collapsible(children),
            ..Self::link(route, icon, label)
        }
    }

    /// True when this entry's route is exactly the current route.
    pub fn is_active(&self, current_route: &str) -> bool {
        self.route == current_route
    }

    pub fn is_collapsible(&self) -> bool {
        matches!(self.kind, NavKind::Collapsible(_))
    }

    /// Nested entries of a collapsible group (empty for other kinds).
    pub fn children(&self) -> &[NavEntry] {
        match &self.kind {
            NavKind::Collapsible(children) => children,
            _ => &[],
        }
    }

    /// Initial expansion state: only an active collapsible group starts open.
    pub fn initially_expanded(&self, current_route: &str) -> bool {
        self.is_collapsible() && self.is_active(current_route)
    }

    /// Depth-first iterator over this entry and all nested entries.
    pub fn walk(&self) -> Box<dyn Iterator<Item = &NavEntry> + '_> {
        Box::new(std::iter::once(self).chain(self.children().iter().flat_map(NavEntry::walk)))
    }
}

/// Finds an entry anywhere in the tree by route.
pub fn find_by_route<'a>(entries: &'a [NavEntry], route: &str) -> Option<&'a NavEntry> {
    entries
        .iter()
        .flat_map(NavEntry::walk)
        .find(|e| e.route == route)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<NavEntry> {
        vec![
            NavEntry::link("#/analytics", "dashboard", "Analytics"),
            NavEntry::link("#/crypto", "bitcoin", "Crypto"),
            NavEntry::collapsible(
                "#/account",
                "user",
                "Account",
                vec![
                    NavEntry::link("#/account/profile", "user", "Profile"),
                    NavEntry::link("#/account/billing", "dollar", "Billing"),
                ],
            ),
        ]
    }

    #[test]
    fn test_exactly_one_active_on_match() {
        let entries = sample();
        let active: Vec<_> = entries.iter().filter(|e| e.is_active("#/crypto")).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Crypto");
    }

    #[test]
    fn test_none_active_without_match() {
        let entries = sample();
        assert!(entries.iter().all(|e| !e.is_active("#/nowhere")));
    }

    #[test]
    fn test_active_is_plain_string_equality() {
        let entries = sample();
        // A child route does not activate its parent group.
        assert!(entries.iter().all(|e| !e.is_active("#/account/profile")));
        assert!(entries.iter().all(|e| !e.is_active("#/crypto/")));
    }

    #[test]
    fn test_initially_expanded() {
        let entries = sample();
        assert!(entries[2].initially_expanded("#/account"));
        assert!(!entries[2].initially_expanded("#/crypto"));
        // Links never expand, even when active.
        assert!(!entries[1].initially_expanded("#/crypto"));
        // Nor does a group whose child is the current page.
        assert!(!entries[2].initially_expanded("#/account/profile"));
    }

    #[test]
    fn test_children_only_for_collapsible() {
        let entries = sample();
        assert!(entries[0].children().is_empty());
        assert_eq!(entries[2].children().len(), 2);
        assert!(NavEntry::toggle("#/logout", "logout", "Logout").children().is_empty());
    }

    #[test]
    fn test_find_by_route_searches_children() {
        let entries = sample();
        let found = find_by_route(&entries, "#/account/billing").map(|e| e.label.as_str());
        assert_eq!(found, Some("Billing"));
        assert!(find_by_route(&entries, "#/missing").is_none());
    }
}
