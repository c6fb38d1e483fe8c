//! Navigation menu model
//!
//! A menu is a fixed, ordered list of [`NavItem`]s. The active entry is the
//! one whose path equals the current location exactly: no prefix matching,
//! no trailing-slash normalization.

use serde::Serialize;
use std::collections::HashSet;

use crate::error::NavError;
use crate::icon::NavIcon;

/// One navigable destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Route path, unique within a menu (e.g. "/parent/bookings")
    pub path: &'static str,
    /// Display label
    pub label: &'static str,
    /// Symbol drawn next to the label
    pub icon: NavIcon,
}

impl NavItem {
    pub const fn new(path: &'static str, label: &'static str, icon: NavIcon) -> Self {
        Self { path, label, icon }
    }

    /// Exact match against the current location
    pub fn is_active(&self, current: &str) -> bool {
        self.path == current
    }
}

/// Parent role menu, in display order
pub const PARENT_NAV: [NavItem; 5] = [
    NavItem::new("/parent/dashboard", "Dashboard", NavIcon::Dashboard),
    NavItem::new("/parent/bookings", "My Bookings", NavIcon::Bookings),
    NavItem::new("/parent/rentals", "My Rentals", NavIcon::Rentals),
    NavItem::new("/parent/messages", "Messages", NavIcon::Messages),
    NavItem::new("/parent/settings", "Account Settings", NavIcon::Settings),
];

/// A menu entry resolved against the current location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink<'a> {
    #[serde(flatten)]
    pub item: &'a NavItem,
    pub active: bool,
}

impl NavLink<'_> {
    pub const CLASS: &'static str = "sidebar-link";
    pub const ACTIVE_CLASS: &'static str = "sidebar-link sidebar-link-active";

    /// CSS class list for the rendered anchor
    pub fn class(&self) -> &'static str {
        if self.active {
            Self::ACTIVE_CLASS
        } else {
            Self::CLASS
        }
    }
}

/// Validated, ordered navigation menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavMenu {
    items: Vec<NavItem>,
}

impl NavMenu {
    /// Build a menu, rejecting empty lists, duplicate paths and relative paths
    pub fn new(items: Vec<NavItem>) -> Result<Self, NavError> {
        if items.is_empty() {
            return Err(NavError::EmptyMenu);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            validate_path(item.path)?;
            if !seen.insert(item.path) {
                return Err(NavError::DuplicatePath {
                    path: item.path.to_string(),
                });
            }
        }

        Ok(Self { items })
    }

    /// The fixed parent menu
    pub fn parent() -> Self {
        Self {
            items: PARENT_NAV.to_vec(),
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.items.iter().any(|item| item.path == path)
    }

    /// All entries in declared order, flagged against `current`
    pub fn links(&self, current: &str) -> Vec<NavLink<'_>> {
        self.items
            .iter()
            .map(|item| NavLink {
                item,
                active: item.is_active(current),
            })
            .collect()
    }

    /// The entry matching `current`, if any
    pub fn active(&self, current: &str) -> Option<&NavItem> {
        self.items.iter().find(|item| item.is_active(current))
    }
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::parent()
    }
}

fn validate_path(path: &str) -> Result<(), NavError> {
    let reason = if !path.starts_with('/') {
        "must start with '/'"
    } else if path.chars().any(char::is_whitespace) {
        "must not contain whitespace"
    } else {
        return Ok(());
    };

    Err(NavError::InvalidPath {
        path: path.to_string(),
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(links: &[NavLink<'_>]) -> Vec<&'static str> {
        links.iter().map(|l| l.item.label).collect()
    }

    fn active_labels(links: &[NavLink<'_>]) -> Vec<&'static str> {
        links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.item.label)
            .collect()
    }

    #[test]
    fn test_parent_menu_is_valid() {
        let menu = NavMenu::new(PARENT_NAV.to_vec()).unwrap();
        assert_eq!(menu, NavMenu::parent());
        assert_eq!(menu.len(), 5);
    }

    #[test]
    fn test_links_keep_declared_order() {
        let menu = NavMenu::parent();
        for current in ["/parent/dashboard", "/parent/messages", "/nowhere"] {
            assert_eq!(
                labels(&menu.links(current)),
                vec![
                    "Dashboard",
                    "My Bookings",
                    "My Rentals",
                    "Messages",
                    "Account Settings"
                ]
            );
        }
    }

    #[test]
    fn test_exactly_one_active_per_known_path() {
        let menu = NavMenu::parent();
        for item in menu.items() {
            let links = menu.links(item.path);
            assert_eq!(active_labels(&links), vec![item.label]);
        }
    }

    #[test]
    fn test_bookings_active() {
        let menu = NavMenu::parent();
        let links = menu.links("/parent/bookings");

        assert_eq!(active_labels(&links), vec!["My Bookings"]);
        assert_eq!(links.iter().filter(|l| !l.active).count(), 4);
        assert_eq!(links[1].class(), NavLink::ACTIVE_CLASS);
        assert_eq!(links[0].class(), NavLink::CLASS);
    }

    #[test]
    fn test_unknown_location_has_no_active() {
        let menu = NavMenu::parent();
        assert!(active_labels(&menu.links("/parent/unknown")).is_empty());
        assert!(menu.active("/parent/unknown").is_none());
        assert!(menu.active("").is_none());
    }

    #[test]
    fn test_no_prefix_or_trailing_slash_match() {
        let menu = NavMenu::parent();
        for current in [
            "/parent/bookings/42",
            "/parent/bookings/",
            "/parent",
            "/PARENT/BOOKINGS",
        ] {
            assert!(menu.active(current).is_none(), "{current} matched");
        }
    }

    #[test]
    fn test_active_lookup() {
        let menu = NavMenu::parent();
        let item = menu.active("/parent/settings").unwrap();
        assert_eq!(item.label, "Account Settings");
        assert_eq!(item.icon, NavIcon::Settings);
        assert!(menu.contains("/parent/rentals"));
        assert!(!menu.contains("/parent/rentals/1"));
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(NavMenu::new(Vec::new()), Err(NavError::EmptyMenu));
    }

    #[test]
    fn test_new_rejects_duplicate_path() {
        let items = vec![
            NavItem::new("/a", "A", NavIcon::Dashboard),
            NavItem::new("/b", "B", NavIcon::Messages),
            NavItem::new("/a", "Again", NavIcon::Settings),
        ];
        assert_eq!(
            NavMenu::new(items),
            Err(NavError::DuplicatePath {
                path: "/a".to_string()
            })
        );
    }

    #[test]
    fn test_new_rejects_invalid_paths() {
        let relative = NavMenu::new(vec![NavItem::new("parent", "P", NavIcon::Brand)]);
        assert!(matches!(relative, Err(NavError::InvalidPath { .. })));

        let spaced = NavMenu::new(vec![NavItem::new("/my bookings", "B", NavIcon::Bookings)]);
        assert!(matches!(spaced, Err(NavError::InvalidPath { .. })));
    }

    #[test]
    fn test_link_serializes_flat() {
        let menu = NavMenu::parent();
        let links = menu.links("/parent/messages");
        let json = serde_json::to_value(&links[3]).unwrap();

        assert_eq!(json["path"], "/parent/messages");
        assert_eq!(json["label"], "Messages");
        assert_eq!(json["icon"], "messages");
        assert_eq!(json["active"], true);
    }
}
