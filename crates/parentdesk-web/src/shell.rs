//! Server-rendered parent shell
//!
//! Renders the sidebar to HTML for a request path, with the matching link
//! marked active, for clients that do not run the WASM bundle.

use leptos::prelude::*;
use parentdesk_types::NavMenu;

use crate::components::{Sidebar, BRAND_NAME};

/// Render only the sidebar markup for `current`
pub fn render_sidebar(menu: &NavMenu, current: &str) -> String {
    let owner = Owner::new();
    let menu = menu.clone();
    let current = current.to_string();

    owner.with(move || {
        let current = Signal::stored(current);
        view! { <Sidebar current menu /> }.to_html()
    })
}

/// Render a complete HTML document with the sidebar for `current`
pub fn render_shell(menu: &NavMenu, current: &str) -> String {
    let sidebar = render_sidebar(menu, current);
    let title = menu
        .active(current)
        .map(|item| item.label)
        .unwrap_or("Not found");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {brand}</title>
</head>
<body>
    <div class="app">
        <div class="layout">
            {sidebar}
            <main class="content">
                <h2 class="page-title">{title}</h2>
            </main>
        </div>
    </div>
</body>
</html>"#,
        title = title,
        brand = BRAND_NAME,
        sidebar = sidebar,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_title_follows_active_item() {
        let menu = NavMenu::parent();
        let html = render_shell(&menu, "/parent/rentals");
        assert!(html.contains("<title>My Rentals - ParentDesk</title>"));

        let html = render_shell(&menu, "/parent/unknown");
        assert!(html.contains("<title>Not found - ParentDesk</title>"));
    }
}
