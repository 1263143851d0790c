//! Cocktail Group Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod detail;
mod error;
mod group;
mod models;
mod notice;
mod search;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::default();
    if let Err(err) = console_logger::init(config.log_level, console_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("logger already installed: {}", err).into());
    }
    mount_to_body(App);
}
