//! Messages page component

use leptos::prelude::*;

use crate::components::EmptyState;

/// Messages page - inbox
#[component]
pub fn Messages() -> impl IntoView {
    view! {
        <div class="page messages-page">
            <EmptyState
                title="Messages"
                description="Conversations with providers and organizers."
                hint="Providers can also reach you by email."
            />
        </div>
    }
}
