//! view! Macro Example
//!
//! Notes for Vue developers:
//! - `view!` is Leptos' template syntax, playing the role of Vue's `<template>`
//!   and React's JSX. It is a Rust macro, checked at compile time.
//! - Text must be quoted: `<p>"hello"</p>`. Rust expressions go in `{}`,
//!   like Vue's `{{ }}`.
//! - `class` is not a reserved word here, so it stays `class` (React needs `className`).
//! - There are no `v-if`/`v-for` directives; plain Rust (`if`, `then`, `map`) or
//!   the `<Show>`/`<For>` components are used instead.
//!
//! Class names:
//! - Vue: `<div class="example">`       Leptos: `<div class="example">`
//! - Vue: `<div :class="{ active: isActive }">`  Leptos: `<div class:active=move || is_active>`
//! - Vue: `<div :class="['a', 'b']">`   Leptos: `<div class=["a", "b"].join(" ")>`

use leptos::prelude::*;

#[component]
pub fn JsxExample() -> impl IntoView {
    // 1. Plain variables live in the component function body,
    // no data()/setup() needed
    let name = "Leptos学习者";
    let element = view! { <h1>"你好, " {name}</h1> };

    // 2. Expressions
    let number = 42;
    let show_message = true;

    // 3. Classes
    let is_active = true;
    let base_class = "list-container";
    let conditional_class = if is_active { "active" } else { "" };

    view! {
        <div class="jsx-example">
            // 1. Interpolation: Vue `{{ name }}`, Leptos `{name}`
            {element}

            // 2. Any Rust expression works inside {}
            <p>"数字加法: " {2 + 2}</p>
            <p>"变量使用: " {number}</p>

            // 3. Conditional rendering
            // Vue: v-if="showMessage"
            // Leptos: bool::then, or <Show when=...> for reactive conditions
            {show_message.then(|| view! {
                <p class="conditional-message">"这是一条条件显示的消息"</p>
            })}

            // 4. Class names
            <div class=format!("{} {}", base_class, conditional_class)>
                <h2>"类名使用示例"</h2>
                <ul>
                    <li>"基本类名: class=\"example\""</li>
                    <li>"动态类名: class:active=move || is_active"</li>
                    <li>"多个类名: class=[\"class1\", \"class2\"].join(\" \")"</li>
                </ul>
            </div>

            // 5. Inline style vs CSS class
            <div>
                <h3>"样式使用对比"</h3>
                // style:prop keeps the CSS property names (Vue :style uses camelCase objects)
                <button
                    style:background-color="blue"
                    style:color="white"
                    style:padding="10px 20px"
                    style:border="none"
                    style:border-radius="4px"
                    style:cursor="pointer"
                >
                    "内联样式按钮"
                </button>
                <button class="styled-button" class:active=move || is_active>
                    "CSS类样式按钮"
                </button>
            </div>

            // 6. Static list; dynamic lists are shown in the rendering demo
            <div class="list-container">
                <h2>"列表示例"</h2>
                <ul>
                    <li>"第一项"</li>
                    <li>"第二项"</li>
                    <li>"第三项"</li>
                </ul>
            </div>

            // 7. Comments
            // Vue template: <!-- comment -->
            // Leptos view!: ordinary Rust `//` comments, never rendered
        </div>
    }
}
