//! Inline SVG icon renderer

use leptos::prelude::*;
use parentdesk_types::{IconShape, NavIcon};

/// Renders a [`NavIcon`] as inline Lucide-style SVG.
///
/// `None` renders nothing, so an unresolved `NavIcon::from_name` lookup
/// leaves the label in place without an icon.
#[component]
pub fn Icon(
    /// Symbol to draw
    #[prop(into)]
    icon: Option<NavIcon>,
    /// Width and height in pixels
    #[prop(default = 20)]
    size: u32,
) -> impl IntoView {
    icon.map(|icon| {
        let shapes = icon
            .shapes()
            .iter()
            .map(|shape| shape_view(*shape))
            .collect_view();

        view! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                class="nav-icon"
                data-icon=icon.name()
                width=size.to_string()
                height=size.to_string()
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                {shapes}
            </svg>
        }
    })
}

fn shape_view(shape: IconShape) -> AnyView {
    match shape {
        IconShape::Path(d) => view! { <path d=d /> }.into_any(),
        IconShape::Polyline(points) => view! { <polyline points=points /> }.into_any(),
        IconShape::Rect {
            x,
            y,
            width,
            height,
            rx,
        } => view! {
            <rect
                x=x.to_string()
                y=y.to_string()
                width=width.to_string()
                height=height.to_string()
                rx=rx.to_string()
            />
        }
        .into_any(),
        IconShape::Circle { cx, cy, r } => view! {
            <circle cx=cx.to_string() cy=cy.to_string() r=r.to_string() />
        }
        .into_any(),
        IconShape::Line { x1, y1, x2, y2 } => view! {
            <line x1=x1.to_string() y1=y1.to_string() x2=x2.to_string() y2=y2.to_string() />
        }
        .into_any(),
    }
}
