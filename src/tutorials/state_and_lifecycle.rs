//! State and Lifecycle Example
//!
//! State in Leptos:
//! - `signal(value)` returns a (read, write) pair, similar to Vue 3 `ref`
//! - reading a signal inside a closure subscribes that closure, so only the
//!   text nodes that read it update; the component function never re-runs
//! - `Memo::new` is the equivalent of Vue `computed`
//!
//! Lifecycle mapping:
//! ```text
//! Vue 2/3          Leptos
//! created      ->  component body
//! mounted      ->  Effect::new (first run, after render)
//! watch(dep)   ->  Effect::new reading `dep`
//! unmounted    ->  on_cleanup
//! ```

use chrono::{Local, NaiveTime};
use leptos::prelude::*;
use leptos_ticker::use_ticker;

use crate::config::use_config;
use crate::models::ClockState;

fn now() -> NaiveTime {
    Local::now().time()
}

/// Counter: signals plus effects
#[component]
fn FunctionCounter() -> impl IntoView {
    let (count, set_count) = signal(0u32);
    let (last_update, set_last_update) = signal(now());

    // Runs once after mount (no tracked reads), cleanup runs on unmount
    Effect::new(move |_| {
        log::info!("[COUNTER] 组件已挂载");
    });
    on_cleanup(|| log::info!("[COUNTER] 组件将卸载"));

    // Re-runs whenever `count` changes, like Vue `watch(count, ...)`
    Effect::new(move |_| {
        let value = count.get();
        set_last_update.set(now());
        log::info!("[COUNTER] count已更新: {}", value);
    });

    view! {
        <div class="counter">
            <h3>"函数组件计数器"</h3>
            <p>"当前计数: " {count}</p>
            <p>"上次更新: " {move || last_update.get().format("%H:%M:%S").to_string()}</p>
            <button on:click=move |_| set_count.update(|n| *n += 1)>"增加"</button>
        </div>
    }
}

/// Timer: a periodic tick held as a scoped resource.
///
/// Starting acquires the tick, stopping releases it, and unmounting the
/// component releases it through the ticker's own cleanup.
#[component]
fn ClassTimer() -> impl IntoView {
    let config = use_config();
    let (clock, set_clock) = signal(ClockState::new(now()));
    let running = Memo::new(move |_| clock.with(|c| c.running));
    let ticker = use_ticker(config.tick_interval);

    log::info!("[TIMER] Timer组件已挂载");
    on_cleanup(|| log::info!("[TIMER] Timer组件将卸载"));

    // React to `running` only, not to every tick
    Effect::new(move |_| {
        if running.get() {
            // Subscribers are notified only when the displayed time changed
            let started = ticker.start(move || {
                set_clock.maybe_update(|c| c.tick(now()));
            });
            if started {
                log::info!("[TIMER] 开始计时");
            }
        } else if ticker.stop() {
            log::info!("[TIMER] 停止计时");
        }
    });

    view! {
        <div class="timer">
            <h3>"结构体组件计时器"</h3>
            <p>"当前时间: " {move || clock.with(ClockState::display)}</p>
            <button on:click=move |_| set_clock.update(ClockState::toggle)>
                {move || if running.get() { "停止" } else { "开始" }}
            </button>
        </div>
    }
}

#[component]
pub fn StateAndLifecycle() -> impl IntoView {
    view! {
        <div class="state-lifecycle-demo">
            <h2>"State和生命周期示例"</h2>

            <section>
                <h3>"1. 信号与副作用"</h3>
                <p class="section-desc">"使用 signal 和 Effect 管理状态和副作用，类似Vue3的组合式API"</p>
                <FunctionCounter />
            </section>

            <section>
                <h3>"2. 资源的获取与释放"</h3>
                <p class="section-desc">"定时器在开始时获取、停止或卸载时释放，类似Vue的onUnmounted中clearInterval"</p>
                <ClassTimer />
            </section>

            <section>
                <h3>"3. Leptos状态管理的特点"</h3>
                <ul>
                    <li>"组件函数只运行一次，更新由信号驱动"</li>
                    <li>"信号更新只会触发读取它的闭包，而不是整个组件"</li>
                    <li>"使用 update 基于当前值计算下一个值"</li>
                    <li>"Effect 在渲染之后运行，自动追踪依赖"</li>
                </ul>
            </section>

            <section>
                <h3>"4. 与Vue的主要区别"</h3>
                <ul>
                    <li>"两者都是细粒度响应式，但Leptos读写分离为两个句柄"</li>
                    <li>"Effect 自动追踪依赖，类似Vue的watchEffect"</li>
                    <li>"计算属性使用 Memo::new"</li>
                    <li>"结构体状态整体替换或通过 update 修改，没有深层代理"</li>
                </ul>
            </section>
        </div>
    }
}
