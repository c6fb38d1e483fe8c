//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
    path,
};

use crate::components::{Header, Sidebar};
use crate::pages::{AccountSettings, Bookings, Dashboard, Messages, Rentals};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <ParentLayout />
        </Router>
    }
}

/// Header, sidebar and routed content; must live inside `<Router>`
#[component]
fn ParentLayout() -> impl IntoView {
    // Mobile sidebar state
    let sidebar_open = RwSignal::new(false);

    let pathname = use_location().pathname;
    let current = Signal::derive(move || pathname.get());

    view! {
        <div class="app">
            <Header current sidebar_open />
            <div class="layout">
                <Sidebar current open=sidebar_open />
                <main class="content">
                    <Routes fallback=|| "Not found">
                        <Route
                            path=path!("/")
                            view=|| view! { <Redirect path="/parent/dashboard" /> }
                        />
                        <Route
                            path=path!("/parent")
                            view=|| view! { <Redirect path="/parent/dashboard" /> }
                        />
                        <Route path=path!("/parent/dashboard") view=Dashboard />
                        <Route path=path!("/parent/bookings") view=Bookings />
                        <Route path=path!("/parent/rentals") view=Rentals />
                        <Route path=path!("/parent/messages") view=Messages />
                        <Route path=path!("/parent/settings") view=AccountSettings />
                    </Routes>
                </main>
            </div>
        </div>
    }
}
