//! Dashboard page component

use leptos::prelude::*;
use leptos_router::components::A;
use parentdesk_types::NavMenu;

use crate::components::Icon;

/// Dashboard page - landing view with shortcuts to every other section
#[component]
pub fn Dashboard() -> impl IntoView {
    let shortcuts = NavMenu::parent()
        .items()
        .iter()
        .copied()
        .filter(|item| item.path != "/parent/dashboard")
        .map(|item| {
            view! {
                <A href=item.path attr:class="shortcut-card">
                    <Icon icon=item.icon size=32 />
                    <span class="shortcut-label">{item.label}</span>
                </A>
            }
        })
        .collect_view();

    view! {
        <div class="page dashboard-page">
            <h2>"Dashboard"</h2>
            <div class="page-content">
                <p class="hint">"Jump to bookings, rentals, messages or your account."</p>
                <div class="shortcut-grid">{shortcuts}</div>
            </div>
        </div>
    }
}
