//! Submenu Item Component
//!
//! Collapsible topic header with its content section.

use leptos::prelude::*;

use crate::models::SubMenu;
use crate::store::{store_switch_submenu, use_menu_store, MenuStateStoreFields};

/// One topic row under the week menu.
///
/// The content section (description + children) is rendered only while this
/// topic is the active submenu, so switching topics unmounts the previous demo.
#[component]
pub fn SubMenuItem(menu: SubMenu, children: ChildrenFn) -> impl IntoView {
    let store = use_menu_store();
    let is_active = move || store.active_submenu().get() == Some(menu);

    view! {
        <div
            class=move || if is_active() { "submenu-item active" } else { "submenu-item" }
            on:click=move |_| store_switch_submenu(&store, menu)
        >
            <h3>{menu.title()}</h3>
            <span class="arrow">{move || if is_active() { "▼" } else { "▶" }}</span>
        </div>
        <Show when=is_active>
            <div class="content-section">
                <p class="section-desc">{menu.description()}</p>
                {children()}
            </div>
        </Show>
    }
}
