//! Cardwall Frontend Entry Point

mod app;
mod cache;
mod commands;
mod components;
mod config;
mod context;
mod errors;
mod labels;
mod markup;
mod models;
mod sequence;
mod store;
mod sync;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
