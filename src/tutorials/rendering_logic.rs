//! Conditional and List Rendering Example
//!
//! Vue vs Leptos:
//!
//! 1. Conditional rendering
//!    Vue:    `v-if="condition"` / `v-show="condition"`
//!    Leptos: `<Show when=...>`, `move || if ... { a.into_any() } else { b.into_any() }`,
//!            or `Option` values that render nothing when `None`
//!
//! 2. List rendering
//!    Vue:    `v-for="item in items" :key="item.id"`
//!    Leptos: `<For each=... key=... children=...>` for keyed lists,
//!            `iter().map(...).collect_view()` for static ones

use leptos::prelude::*;

use crate::models::{TodoFilter, TodoItem};
use crate::todos::{add_todo, filter_todos, initial_todos, toggle_todo};

#[component]
pub fn RenderingLogic() -> impl IntoView {
    let (is_logged_in, set_is_logged_in) = signal(false);
    let (show_content, set_show_content) = signal(true);
    let (selected_tab, set_selected_tab) = signal(TodoFilter::All);
    let (todos, set_todos) = signal(initial_todos());
    let (new_text, set_new_text) = signal(String::new());

    // Derived list, like a Vue computed
    let filtered = Memo::new(move |_| todos.with(|list| filter_todos(list, selected_tab.get())));

    // 1. if/else rendering; both branches erased to one type with into_any
    let auth_section = move || {
        if is_logged_in.get() {
            view! {
                <div class="auth-section">
                    <h4>"欢迎回来！"</h4>
                    <button on:click=move |_| set_is_logged_in.set(false)>"登出"</button>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="auth-section">
                    <h4>"请登录"</h4>
                    <button on:click=move |_| set_is_logged_in.set(true)>"登录"</button>
                </div>
            }
            .into_any()
        }
    };

    // 2. Replace the whole list, flipping one record
    let on_toggle = move |id: u32| {
        set_todos.update(|list| *list = toggle_todo(list, id));
        log::debug!("[TODOS] Toggled #{}", id);
    };

    // 3. Append a record
    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        set_todos.update(|list| *list = add_todo(list, text));
        set_new_text.set(String::new());
    };

    view! {
        <div class="rendering-logic">
            <h2>"条件渲染和列表渲染示例"</h2>

            <section class="example-section">
                <h3>"条件渲染"</h3>

                // 1.1 if/else
                {auth_section}

                // 1.2 ternary-style toggle
                <div class="toggle-section">
                    <button on:click=move |_| set_show_content.update(|s| *s = !*s)>
                        {move || if show_content.get() { "隐藏" } else { "显示" }}
                        "内容"
                    </button>
                    {move || if show_content.get() {
                        view! { <p>"这是一些内容，点击按钮可以切换显示状态"</p> }.into_any()
                    } else {
                        view! { <p>"内容已隐藏"</p> }.into_any()
                    }}
                </div>

                // 1.3 short-circuit (React `&&`, Vue v-if)
                <Show when=move || is_logged_in.get()>
                    <p class="welcome-message">"你可以看到这条消息是因为你已登录"</p>
                </Show>
            </section>

            <section class="example-section">
                <h3>"列表渲染"</h3>

                <div class="tabs">
                    {TodoFilter::ALL.into_iter().map(|filter| view! {
                        <button
                            class=move || if selected_tab.get() == filter { "active" } else { "" }
                            on:click=move |_| set_selected_tab.set(filter)
                        >
                            {filter.label()}
                        </button>
                    }).collect_view()}
                </div>

                <ul class="todo-list">
                    // Keyed on (id, completed): a toggled record gets a fresh row
                    <For
                        each=move || filtered.get()
                        key=|todo: &TodoItem| (todo.id, todo.completed)
                        children=move |todo: TodoItem| {
                            let id = todo.id;
                            view! {
                                <li
                                    class=if todo.completed { "completed" } else { "" }
                                    on:click=move |_| on_toggle(id)
                                >
                                    <input type="checkbox" prop:checked=todo.completed readonly=true />
                                    <span>{todo.text}</span>
                                </li>
                            }
                        }
                    />
                </ul>

                <Show when=move || filtered.with(Vec::is_empty)>
                    <p class="empty-message">{move || selected_tab.get().empty_message()}</p>
                </Show>

                <form class="todo-add-form" on:submit=on_add>
                    <input
                        type="text"
                        placeholder="添加待办事项..."
                        prop:value=new_text
                        on:input=move |ev| set_new_text.set(event_target_value(&ev))
                    />
                    <button type="submit">"添加"</button>
                </form>
            </section>

            <section class="example-section">
                <h3>"渲染逻辑最佳实践"</h3>
                <ul class="best-practices">
                    <li>
                        <strong>"条件渲染："</strong>
                        <ul>
                            <li>"简单条件使用 <Show> 或 Option"</li>
                            <li>"二选一条件使用 if/else 加 into_any"</li>
                            <li>"复杂条件抽成返回视图的闭包"</li>
                        </ul>
                    </li>
                    <li>
                        <strong>"列表渲染："</strong>
                        <ul>
                            <li>"动态列表使用 <For> 并提供唯一的 key"</li>
                            <li>"避免使用索引作为 key"</li>
                            <li>"过滤和转换使用迭代器方法"</li>
                        </ul>
                    </li>
                    <li>
                        <strong>"性能优化："</strong>
                        <ul>
                            <li>"派生数据使用 Memo 缓存"</li>
                            <li>"频繁切换的内容可以用 style:display 代替重新创建"</li>
                            <li>"大列表考虑虚拟滚动"</li>
                        </ul>
                    </li>
                </ul>
            </section>
        </div>
    }
}
