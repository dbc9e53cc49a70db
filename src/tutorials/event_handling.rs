//! Event Handling Example
//!
//! Leptos vs Vue:
//!
//! 1. Naming
//!    Vue: `@click="handleClick"`
//!    Leptos: `on:click=handle_click`
//!
//! 2. Extra arguments
//!    Vue: `@click="handleClick(param, $event)"`
//!    Leptos: `on:click=move |ev| handle_click(param, ev)`
//!
//! 3. Modifiers
//!    Vue: `@click.stop="handleClick"`
//!    Leptos: call `ev.stop_propagation()` inside the handler
//!
//! 4. `v-model`
//!    Vue: `<input v-model="text">`
//!    Leptos: `<input prop:value=text on:input=move |ev| set_text.set(event_target_value(&ev))>`
//!    or the shorthand `bind:value=(text, set_text)`
//!
//! Events are the real `web_sys` types, so handlers get typed access to
//! `client_x`, `key`, `prevent_default` and so on.

use leptos::html;
use leptos::prelude::*;
use web_sys::{HtmlInputElement, KeyboardEvent, MouseEvent, SubmitEvent};

use crate::logging;
use crate::models::{FormData, MousePosition};

#[component]
pub fn EventHandling() -> impl IntoView {
    let (click_count, set_click_count) = signal(0u32);
    let (mouse_position, set_mouse_position) = signal(MousePosition::default());
    let (input_text, set_input_text) = signal(String::new());
    let (form_data, set_form_data) = signal(FormData::default());
    let (submitted, set_submitted) = signal::<Option<FormData>>(None);

    // Template ref, like Vue's ref="button"
    let button_ref = NodeRef::<html::Button>::new();

    // 1. Basic click
    let handle_click = move |ev: MouseEvent| {
        set_click_count.update(|n| *n += 1);
        logging::log_value("[EVENTS] 点击事件对象：", &ev);
        if let Some(button) = button_ref.get() {
            log::debug!("[EVENTS] 按钮文本: {}", button.inner_text());
        }
    };

    // 2. Handler with an extra parameter
    let handle_param_click = |param: &str, ev: MouseEvent| {
        log::info!("[EVENTS] 参数：{}", param);
        logging::log_value("[EVENTS] 事件对象：", &ev);
    };

    // 3. Mouse move
    let handle_mouse_move = move |ev: MouseEvent| {
        set_mouse_position.set(MousePosition {
            x: ev.client_x(),
            y: ev.client_y(),
        });
    };

    // 4. Controlled input
    let handle_input_change = move |ev: web_sys::Event| {
        set_input_text.set(event_target_value(&ev));
    };

    // 5. Form submit
    let handle_submit = move |ev: SubmitEvent| {
        // Stop the browser from navigating (Vue: @submit.prevent)
        ev.prevent_default();
        let data = form_data.get();
        logging::log_record("[EVENTS] 表单数据：", &data);
        set_submitted.set(Some(data));
    };

    // 6. Bubbling
    let handle_parent_click = |_ev: MouseEvent| {
        log::info!("[EVENTS] 父元素被点击");
    };

    let handle_child_click = |ev: MouseEvent| {
        // Same as Vue @click.stop
        ev.stop_propagation();
        log::info!("[EVENTS] 子元素被点击");
    };

    // 7. Keyboard
    let handle_key_down = |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            log::info!("[EVENTS] 按下回车键");
        }
    };

    // 8. One handler for every field, keyed by the input's name
    let handle_form_change = move |ev: web_sys::Event| {
        let name = event_target::<HtmlInputElement>(&ev).name();
        let value = event_target_value(&ev);
        set_form_data.update(|data| {
            if !data.set_field(&name, value) {
                log::warn!("[EVENTS] Unknown form field: {}", name);
            }
        });
    };

    view! {
        <div class="event-handling">
            <h2>"Leptos 事件处理示例"</h2>

            <section class="example-section">
                <h3>"基础点击事件"</h3>
                <button node_ref=button_ref on:click=handle_click>
                    "点击次数: " {click_count}
                </button>
            </section>

            <section class="example-section">
                <h3>"带参数的事件"</h3>
                <button on:click=move |ev| handle_param_click("测试参数", ev)>
                    "带参数的按钮"
                </button>
            </section>

            <section class="example-section">
                <h3>"鼠标事件"</h3>
                <div class="mouse-area" on:mousemove=handle_mouse_move>
                    "移动鼠标查看坐标"
                    <p>
                        {move || {
                            let MousePosition { x, y } = mouse_position.get();
                            format!("X: {}, Y: {}", x, y)
                        }}
                    </p>
                </div>
            </section>

            <section class="example-section">
                <h3>"表单输入"</h3>
                <input
                    type="text"
                    prop:value=input_text
                    on:input=handle_input_change
                    on:keydown=handle_key_down
                    placeholder="输入内容..."
                />
                <p>"输入的内容: " {input_text}</p>
            </section>

            <section class="example-section">
                <h3>"事件冒泡"</h3>
                <div class="bubble-container" on:click=handle_parent_click>
                    "父元素"
                    <button on:click=handle_child_click>"子元素 (阻止冒泡)"</button>
                </div>
            </section>

            <section class="example-section">
                <h3>"表单提交"</h3>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <input
                            type="text"
                            name="username"
                            prop:value=move || form_data.with(|d| d.username.clone())
                            on:input=handle_form_change
                            placeholder="用户名"
                        />
                    </div>
                    <div class="form-group">
                        <input
                            type="email"
                            name="email"
                            prop:value=move || form_data.with(|d| d.email.clone())
                            on:input=handle_form_change
                            placeholder="邮箱"
                        />
                    </div>
                    <button type="submit">"提交表单"</button>
                </form>
                {move || submitted.get().map(|data| view! {
                    <p class="submitted">
                        "已提交: 用户名=" {data.username} ", 邮箱=" {data.email}
                    </p>
                })}
            </section>

            <section class="example-section">
                <h3>"Leptos事件处理最佳实践"</h3>
                <ul>
                    <li>"使用 on:事件名 绑定（on:click, on:submit）"</li>
                    <li>"直接传递闭包或函数，而不是字符串"</li>
                    <li>"需要传参时用 move 闭包包装"</li>
                    <li>"事件参数是具体的 web_sys 类型，编译期即可检查"</li>
                    <li>"表单处理时记得调用 prevent_default"</li>
                    <li>"同一处理函数可以按 name 属性处理多个字段"</li>
                </ul>
            </section>
        </div>
    }
}
