//! Parent sidebar navigation component

use leptos::prelude::*;
use parentdesk_types::{NavIcon, NavLink, NavMenu};

use super::Icon;

/// Brand shown at the top of the sidebar
pub const BRAND_NAME: &str = "ParentDesk";

/// Sidebar with brand header, navigation menu and sign-out control.
///
/// The current location is an explicit input: the link whose path equals
/// it exactly is rendered active, every other link is not. Links are plain
/// anchors; inside a `<Router>` they navigate client-side.
#[component]
pub fn Sidebar(
    /// Current route path
    #[prop(into)]
    current: Signal<String>,
    /// Menu to render (the parent menu unless overridden)
    #[prop(default = NavMenu::parent())]
    menu: NavMenu,
    /// Mobile drawer state; links and the backdrop close it
    #[prop(optional)]
    open: Option<RwSignal<bool>>,
    /// Sign-out action; clicking is a no-op when absent
    #[prop(optional)]
    on_sign_out: Option<Callback<()>>,
) -> impl IntoView {
    let is_open = move || open.map(|open| open.get()).unwrap_or(false);
    let close = move || {
        if let Some(open) = open {
            open.set(false);
        }
    };

    let links = menu
        .items()
        .iter()
        .copied()
        .map(move |item| {
            let active = move || current.with(|current| item.is_active(current));
            let class = move || {
                if active() {
                    NavLink::ACTIVE_CLASS
                } else {
                    NavLink::CLASS
                }
            };

            view! {
                <li class="nav-item">
                    <a
                        href=item.path
                        class=class
                        aria-current=move || active().then_some("page")
                        on:click=move |_| close()
                    >
                        <span class="sidebar-link-icon">
                            <Icon icon=item.icon />
                        </span>
                        <span class="sidebar-link-label">{item.label}</span>
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <>
            // Backdrop overlay for mobile
            <Show when=is_open>
                <div class="sidebar-backdrop" on:click=move |_| close()></div>
            </Show>

            <aside class="sidebar" class:sidebar-open=is_open>
                <div class="sidebar-brand">
                    <Icon icon=NavIcon::Brand size=24 />
                    <span class="sidebar-brand-name">{BRAND_NAME}</span>
                </div>

                <nav class="nav" aria-label="Parent navigation">
                    <ul class="nav-list">{links}</ul>
                </nav>

                <div class="sidebar-footer">
                    <button
                        type="button"
                        class="sidebar-signout"
                        on:click=move |_| sign_out(on_sign_out)
                    >
                        <span class="sidebar-link-icon">
                            <Icon icon=NavIcon::SignOut />
                        </span>
                        <span class="sidebar-link-label">"Sign Out"</span>
                    </button>
                </div>
            </aside>
        </>
    }
}

/// Forward a sign-out click to the bound action, if any
pub fn sign_out(on_sign_out: Option<Callback<()>>) {
    if let Some(on_sign_out) = on_sign_out {
        on_sign_out.run(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_sign_out_runs_callback_once() {
        let owner = Owner::new();
        owner.with(|| {
            let clicks = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&clicks);
            let callback = Callback::new(move |_: ()| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

            sign_out(Some(callback));
            assert_eq!(clicks.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn test_sign_out_without_callback_is_noop() {
        sign_out(None);
    }
}
