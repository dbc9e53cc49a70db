//! Leptos Study App
//!
//! Top-level container: header plus the collapsible week-1 menu.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::SubMenuItem;
use crate::config::use_config;
use crate::models::SubMenu;
use crate::store::{store_toggle_week1, MenuState, MenuStateStoreFields};
use crate::tutorials::{ComponentsAndProps, EventHandling, JsxExample, RenderingLogic, StateAndLifecycle};

#[component]
pub fn App() -> impl IntoView {
    let config = use_config();
    let store = Store::new(MenuState::from_config(&config));
    provide_context(store);

    log::info!(
        "[APP] Mounted, week1_open={}, active_submenu={:?}",
        config.week1_open,
        config.initial_submenu
    );

    let week1_open = move || store.week1_open().get();

    view! {
        <div class="App">
            <header class="App-header">
                <h1>"Leptos 学习项目"</h1>
                <p>"从 Vue 到 Leptos 的学习之旅"</p>
            </header>

            <main>
                <div class="menu-section">
                    <div class=move || if week1_open() { "menu-week open" } else { "menu-week" }>
                        <div class="menu-week-header" on:click=move |_| store_toggle_week1(&store)>
                            <h2>"第1周：Leptos 基础"</h2>
                            <span class="arrow">{move || if week1_open() { "▼" } else { "▶" }}</span>
                        </div>

                        <Show when=week1_open>
                            <div class="submenu-container">
                                {SubMenu::ALL.into_iter().map(|menu| view! {
                                    <SubMenuItem menu=menu>
                                        {topic_view(menu)}
                                    </SubMenuItem>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                </div>
            </main>
        </div>
    }
}

/// Demo component for a topic
fn topic_view(menu: SubMenu) -> AnyView {
    match menu {
        SubMenu::Jsx => view! { <JsxExample /> }.into_any(),
        SubMenu::Props => view! { <ComponentsAndProps /> }.into_any(),
        SubMenu::State => view! { <StateAndLifecycle /> }.into_any(),
        SubMenu::Events => view! { <EventHandling /> }.into_any(),
        SubMenu::Rendering => view! { <RenderingLogic /> }.into_any(),
    }
}
