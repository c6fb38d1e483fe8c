//! Header component

use leptos::prelude::*;
use parentdesk_types::NavMenu;

/// Header with mobile hamburger menu and the title of the current section
#[component]
pub fn Header(
    /// Current route path
    #[prop(into)]
    current: Signal<String>,
    sidebar_open: RwSignal<bool>,
) -> impl IntoView {
    let menu = NavMenu::parent();
    let title = move || {
        current.with(|current| {
            menu.active(current)
                .map(|item| item.label)
                .unwrap_or("Parent")
        })
    };

    view! {
        <header class="header">
            <button
                class="hamburger"
                on:click=move |_| sidebar_open.update(|v| *v = !*v)
                aria-label="Toggle sidebar"
                aria-expanded=move || sidebar_open.get().to_string()
            >
                <span class="hamburger-icon">"☰"</span>
            </button>

            <div class="header-content">
                <h1 class="page-title">{title}</h1>
            </div>
        </header>
    }
}
