//! Activity Board - Yew WASM Frontend
//!
//! Renders the activity list and signup form and drives them through
//! `board_core::Board`.

mod api;
mod app;
mod components;
mod logging;
mod pages;
mod state;
mod view;

pub use api::GlooActivityApi;
pub use app::App;
pub use view::YewBoardView;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    logging::init(tracing::Level::INFO);
    yew::Renderer::<App>::new().render();
}
