//! Stock List Web App Entry Point
//!
//! Telegram Mini App view that shows the list passed in the launch parameter.

mod models;
mod error;
mod lexicon;
mod launch;
mod render;
mod bridge;
mod session;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
