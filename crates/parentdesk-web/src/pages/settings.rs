//! Account Settings page component

use leptos::prelude::*;

use crate::components::EmptyState;

/// Account Settings page - account preferences
#[component]
pub fn AccountSettings() -> impl IntoView {
    view! {
        <div class="page settings-page">
            <EmptyState
                title="Account Settings"
                description="Profile, contact details, children and notification preferences."
            />
        </div>
    }
}
