//! Navigation icon set
//!
//! Every symbol the sidebar can draw is a variant of [`NavIcon`]. Geometry is
//! Lucide-style (24x24 viewBox, stroked) and lives in static tables, so an
//! icon reference can never fail to resolve once it is typed.

use serde::{Deserialize, Serialize};

/// One primitive of an icon's SVG geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconShape {
    /// `<path d=...>`
    Path(&'static str),
    /// `<polyline points=...>`
    Polyline(&'static str),
    /// `<rect x y width height rx>`
    Rect {
        x: u8,
        y: u8,
        width: u8,
        height: u8,
        rx: u8,
    },
    /// `<circle cx cy r>`
    Circle { cx: u8, cy: u8, r: u8 },
    /// `<line x1 y1 x2 y2>`
    Line { x1: u8, y1: u8, x2: u8, y2: u8 },
}

/// Symbols used by the parent sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavIcon {
    Brand,
    Dashboard,
    Bookings,
    Rentals,
    Messages,
    Settings,
    SignOut,
}

const BRAND: &[IconShape] = &[
    IconShape::Path("m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"),
    IconShape::Polyline("9 22 9 12 15 12 15 22"),
];

const DASHBOARD: &[IconShape] = &[
    IconShape::Rect { x: 3, y: 3, width: 7, height: 9, rx: 1 },
    IconShape::Rect { x: 14, y: 3, width: 7, height: 5, rx: 1 },
    IconShape::Rect { x: 14, y: 12, width: 7, height: 9, rx: 1 },
    IconShape::Rect { x: 3, y: 16, width: 7, height: 5, rx: 1 },
];

const BOOKINGS: &[IconShape] = &[
    IconShape::Path("M8 2v4"),
    IconShape::Path("M16 2v4"),
    IconShape::Rect { x: 3, y: 4, width: 18, height: 18, rx: 2 },
    IconShape::Path("M3 10h18"),
    IconShape::Path("m9 16 2 2 4-4"),
];

const RENTALS: &[IconShape] = &[
    IconShape::Path(
        "M11 21.73a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73z",
    ),
    IconShape::Path("M12 22V12"),
    IconShape::Path("m3.3 7 7.703 4.734a2 2 0 0 0 1.994 0L20.7 7"),
    IconShape::Path("m7.5 4.27 9 5.15"),
];

const MESSAGES: &[IconShape] = &[IconShape::Path(
    "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z",
)];

const SETTINGS: &[IconShape] = &[
    IconShape::Path(
        "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z",
    ),
    IconShape::Circle { cx: 12, cy: 12, r: 3 },
];

const SIGN_OUT: &[IconShape] = &[
    IconShape::Path("M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"),
    IconShape::Polyline("16 17 21 12 16 7"),
    IconShape::Line { x1: 21, y1: 12, x2: 9, y2: 12 },
];

impl NavIcon {
    /// All icons, in declaration order
    pub const ALL: [NavIcon; 7] = [
        NavIcon::Brand,
        NavIcon::Dashboard,
        NavIcon::Bookings,
        NavIcon::Rentals,
        NavIcon::Messages,
        NavIcon::Settings,
        NavIcon::SignOut,
    ];

    /// Symbolic kebab-case name (matches the serde representation)
    pub fn name(&self) -> &'static str {
        match self {
            NavIcon::Brand => "brand",
            NavIcon::Dashboard => "dashboard",
            NavIcon::Bookings => "bookings",
            NavIcon::Rentals => "rentals",
            NavIcon::Messages => "messages",
            NavIcon::Settings => "settings",
            NavIcon::SignOut => "sign-out",
        }
    }

    /// Resolve a symbolic name; unknown names yield `None`
    ///
    /// # Examples
    ///
    /// ```
    /// use parentdesk_types::NavIcon;
    ///
    /// assert_eq!(NavIcon::from_name("bookings"), Some(NavIcon::Bookings));
    /// assert_eq!(NavIcon::from_name("unicorn"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.name() == name)
    }

    /// SVG primitives making up this icon
    pub fn shapes(&self) -> &'static [IconShape] {
        match self {
            NavIcon::Brand => BRAND,
            NavIcon::Dashboard => DASHBOARD,
            NavIcon::Bookings => BOOKINGS,
            NavIcon::Rentals => RENTALS,
            NavIcon::Messages => MESSAGES,
            NavIcon::Settings => SETTINGS,
            NavIcon::SignOut => SIGN_OUT,
        }
    }
}

impl std::fmt::Display for NavIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_resolves_every_variant() {
        for icon in NavIcon::ALL {
            assert_eq!(NavIcon::from_name(icon.name()), Some(icon));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(NavIcon::from_name(""), None);
        assert_eq!(NavIcon::from_name("Dashboard"), None);
        assert_eq!(NavIcon::from_name("sign_out"), None);
    }

    #[test]
    fn test_every_icon_has_geometry() {
        for icon in NavIcon::ALL {
            assert!(!icon.shapes().is_empty(), "{icon} has no shapes");
        }
    }

    #[test]
    fn test_serde_name_matches() {
        let json = serde_json::to_string(&NavIcon::SignOut).unwrap();
        assert_eq!(json, "\"sign-out\"");

        let parsed: NavIcon = serde_json::from_str("\"rentals\"").unwrap();
        assert_eq!(parsed, NavIcon::Rentals);
    }
}
