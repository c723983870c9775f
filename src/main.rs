//! Kanban UI Entry Point

mod app;
mod components;
mod context;
mod reveal;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if rolling_logger::init_logger("Kanban", level).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }
    mount_to_body(App);
}
