//! Menu State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::models::SubMenu;

/// Top-level menu state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct MenuState {
    /// Whether the week-1 section is expanded
    pub week1_open: bool,
    /// The one expanded topic panel, if any
    pub active_submenu: Option<SubMenu>,
}

impl MenuState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            week1_open: config.week1_open,
            active_submenu: config.initial_submenu,
        }
    }
}

/// Selecting the active topic again collapses it
pub fn next_submenu(current: Option<SubMenu>, clicked: SubMenu) -> Option<SubMenu> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Type alias for the store
pub type MenuStore = Store<MenuState>;

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_toggle_week1(store: &MenuStore) {
    let field = store.week1_open();
    let mut open = field.write();
    *open = !*open;
    log::debug!("[MENU] week1_open={}", *open);
}

pub fn store_switch_submenu(store: &MenuStore, menu: SubMenu) {
    let field = store.active_submenu();
    let mut active = field.write();
    *active = next_submenu(*active, menu);
    log::debug!("[MENU] active_submenu={:?}", *active);
}
