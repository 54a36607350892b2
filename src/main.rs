#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod pages;
mod theme;
mod transport;

use tracing::Level;

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", err);
    }

    tracing::info!("Starting gift viewer");

    dioxus::LaunchBuilder::web().launch(app::App);
}
