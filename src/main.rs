#![allow(non_snake_case)]

mod app;
mod components;
mod content;
pub mod context;
mod dom;
mod events;
mod pages;
mod storage;
mod theme;

use tracing::Level;

fn main() {
    // Fails only when a subscriber is already installed.
    let _ = dioxus::logger::init(Level::INFO);

    dioxus::launch(app::App);
}
