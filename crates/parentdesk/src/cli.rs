//! Menu inspection output for the `nav` command

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use parentdesk_types::NavMenu;

/// Format the menu against an optional location (human table or JSON)
pub fn format_menu(menu: &NavMenu, current: Option<&str>, json: bool) -> Result<String> {
    let links = menu.links(current.unwrap_or_default());

    if json {
        return serde_json::to_string_pretty(&links).context("Failed to serialize menu");
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("").fg(Color::Cyan),
        Cell::new("Label").fg(Color::Cyan),
        Cell::new("Path").fg(Color::Cyan),
        Cell::new("Icon").fg(Color::Cyan),
    ]);

    for link in &links {
        let marker = if link.active { "▶" } else { "" };
        table.add_row(Row::from(vec![
            marker,
            link.item.label,
            link.item.path,
            link.item.icon.name(),
        ]));
    }

    let mut out = table.to_string();
    if let Some(current) = current {
        if menu.active(current).is_none() {
            out.push_str(&format!("\nNo menu entry matches '{}'", current));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_menu_table_lists_labels() {
        let out = format_menu(&NavMenu::parent(), Some("/parent/bookings"), false).unwrap();

        for label in ["Dashboard", "My Bookings", "My Rentals", "Messages", "Account Settings"] {
            assert!(out.contains(label), "{label} missing");
        }
        assert_eq!(out.matches('▶').count(), 1);
        assert!(!out.contains("No menu entry"));
    }

    #[test]
    fn test_format_menu_unknown_location() {
        let out = format_menu(&NavMenu::parent(), Some("/parent/unknown"), false).unwrap();

        assert_eq!(out.matches('▶').count(), 0);
        assert!(out.contains("No menu entry matches '/parent/unknown'"));
    }

    #[test]
    fn test_format_menu_json() {
        let out = format_menu(&NavMenu::parent(), Some("/parent/dashboard"), true).unwrap();
        let links: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();

        assert_eq!(links.len(), 5);
        assert_eq!(links[0]["active"], true);
        assert!(links[1..].iter().all(|l| l["active"] == false));
    }
}
