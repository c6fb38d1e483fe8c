//! My Bookings page component

use leptos::prelude::*;

use crate::components::EmptyState;

/// My Bookings page - bookings made on behalf of the family
#[component]
pub fn Bookings() -> impl IntoView {
    view! {
        <div class="page bookings-page">
            <EmptyState
                title="My Bookings"
                description="Upcoming and past bookings for your children, with session times and providers."
                hint="Confirmation emails include a link back to each booking."
            />
        </div>
    }
}
