//! Leptos Study Frontend Entry Point

mod models;
mod todos;
mod config;
mod logging;
mod store;
mod components;
mod tutorials;
mod app;

use app::App;
use config::{provide_config, AppConfig};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_window();
    logging::init(config.log_level);
    log::info!("[APP] Starting with {:?}", config);

    mount_to_body(move || {
        provide_config(config.clone());
        view! { <App /> }
    });
}
