//! Superclient Frontend Entry Point

mod app;
mod browser;
mod commands;
mod components;
mod context;
mod models;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    // Better panic messages in browser console
    console_error_panic_hook::set_once();

    // Debug builds log at Debug, release at Info
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    mount_to_body(App);
}
