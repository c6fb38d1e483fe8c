//! parentdesk-types - Shared navigation types for parentdesk
//!
//! This crate contains pure data structures without heavy dependencies.
//! No tokio, no async runtime - just serde-serializable types.
//!
//! Used by:
//! - parentdesk-web (Leptos components and SSR server)
//! - parentdesk (CLI)

pub mod error;
pub mod icon;
pub mod nav;

pub use error::NavError;
pub use icon::{IconShape, NavIcon};
pub use nav::{NavItem, NavLink, NavMenu, PARENT_NAV};
