use dioxus::prelude::*;

mod aggregate;
mod api;
mod app;
mod chart;
mod components;
mod loader;
mod shared;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const FAVICON: Asset = asset!("/assets/favicon.ico");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    backend::init_tracing();

    dioxus::launch(app::App);
}
