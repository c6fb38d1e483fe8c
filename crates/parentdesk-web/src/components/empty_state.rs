//! Empty state component for parent pages without content yet

use leptos::prelude::*;
use leptos_router::components::A;

/// Placeholder shown by parent pages whose data views are not wired yet
#[component]
pub fn EmptyState(
    /// Page title (e.g., "My Bookings")
    title: &'static str,
    /// What this page will show
    description: &'static str,
    /// Optional hint for the parent in the meantime
    #[prop(optional)]
    hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2 class="empty-state-title">{title}</h2>
            <p class="empty-state-description">{description}</p>

            {hint.map(|h| {
                view! {
                    <div class="empty-state-hint">
                        <strong>"Tip:"</strong>
                        " "
                        {h}
                    </div>
                }
            })}

            <div class="empty-state-actions">
                <A href="/parent/dashboard" attr:class="btn btn-primary">
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    >
                        <path d="m12 19-7-7 7-7"/>
                        <path d="M19 12H5"/>
                    </svg>
                    " Back to Dashboard"
                </A>
            </div>
        </div>
    }
}
