//! UI Components
//!
//! Reusable Leptos components.

mod submenu_item;

pub use submenu_item::SubMenuItem;
