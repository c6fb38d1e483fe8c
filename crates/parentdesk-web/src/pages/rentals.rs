//! My Rentals page component

use leptos::prelude::*;

use crate::components::EmptyState;

/// My Rentals page - active and past rentals
#[component]
pub fn Rentals() -> impl IntoView {
    view! {
        <div class="page rentals-page">
            <EmptyState
                title="My Rentals"
                description="Equipment and venue rentals, their pickup windows and return dates."
                hint="Return dates are also shown on the dashboard."
            />
        </div>
    }
}
