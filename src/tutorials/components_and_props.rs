//! Components and Props Example
//!
//! Component styles in Leptos:
//! 1. `#[component]` functions
//!    - the default way to write components, close to Vue 3 `<script setup>`
//!    - props are the function arguments; the macro builds a typed props struct
//!    - the function runs once; later updates flow through signals, not re-runs
//!
//! 2. Plain structs with a `render` method
//!    - a hand-written props struct plus a method returning `impl IntoView`
//!    - the closest thing to a class component / Vue 2 options object
//!    - useful when the data is built up with a builder first
//!
//! Notes for Vue developers:
//! 1. Props are function arguments instead of a `props` option
//! 2. There is no `emits`; pass a `Callback` prop instead
//! 3. Data flows one way; there is no `.sync` / `v-model` on props
//! 4. Prop types are checked by the compiler, like `defineProps<...>()` with TypeScript

use leptos::prelude::*;

/// Function component.
///
/// - `name` is required (Vue `required: true`)
/// - `role` is optional with a default (Vue `default:`), set via `#[prop(default)]`
#[component]
fn Welcome(
    #[prop(into)] name: String,
    #[prop(into, default = "访客".to_string())] role: String,
) -> impl IntoView {
    view! {
        <div class="welcome">
            <h3>"欢迎, " {name} "!"</h3>
            <p>"您的角色是: " {role}</p>
        </div>
    }
}

/// Struct component.
///
/// Lifecycle lives in the creating scope instead of methods:
/// - setup code in the body          -> Vue `created`
/// - `Effect::new`                   -> Vue `mounted` / `updated`
/// - `on_cleanup`                    -> Vue `unmounted`
#[derive(Clone, Debug)]
struct UserCard {
    username: String,
    email: String,
    /// Optional avatar URL
    avatar: Option<String>,
}

impl UserCard {
    fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            avatar: None,
        }
    }

    fn avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar = Some(url.into());
        self
    }

    fn render(self) -> impl IntoView {
        let Self { username, email, avatar } = self;
        let alt = username.clone();
        view! {
            <div class="user-card">
                // Option renders nothing when None (Vue: v-if="avatar")
                {avatar.map(|src| view! { <img src=src alt=alt class="avatar" /> })}
                <div class="user-info">
                    <h4>{username}</h4>
                    <p>{email}</p>
                </div>
            </div>
        }
    }
}

/// Composition:
/// 1. data and callbacks go down through props
/// 2. nested content goes through `children` (Vue slots)
/// 3. element access goes through `NodeRef` (Vue template refs)
#[component]
pub fn ComponentsAndProps() -> impl IntoView {
    view! {
        <div class="components-demo">
            <h2>"组件和Props示例"</h2>

            <section>
                <h3>"1. 函数组件"</h3>
                // Vue: <welcome name="张三" />
                <Welcome name="张三" />
                <Welcome name="李四" role="管理员" />
            </section>

            <section>
                <h3>"2. 结构体组件"</h3>
                // Vue: <user-card :username="..." :email="..." />
                {UserCard::new("王五", "wangwu@example.com")
                    .avatar("https://via.placeholder.com/50")
                    .render()}
                {UserCard::new("赵六", "zhaoliu@example.com").render()}
            </section>

            <section>
                <h3>"3. Props的特点"</h3>
                <ul>
                    <li>"Props是只读的，组件不能修改自己的props（Vue也是如此）"</li>
                    <li>"Props可以设置默认值（类似Vue的default选项）"</li>
                    <li>"Props可以是可选的（类似Vue的required: false）"</li>
                    <li>"Props的类型由编译器检查，无需运行时验证"</li>
                    <li>"#[prop(into)] 允许直接传入 &str 等可转换的类型"</li>
                </ul>
            </section>

            <section>
                <h3>"4. 组件写法的使用场景"</h3>
                <ul>
                    <li>"#[component] 函数：绝大多数场景的首选"</li>
                    <li>"结构体 + render：需要先用 builder 组装数据时"</li>
                    <li>"children 参数：需要插槽式嵌套内容时"</li>
                </ul>
            </section>
        </div>
    }
}
