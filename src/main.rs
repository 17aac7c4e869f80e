mod animation;
mod components;
mod config;
mod content;
mod error;
mod grid;
mod host;
mod model;
mod render;
mod state;
mod surface;

use components::App;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {e}").into());
        }
    }
    yew::Renderer::<App>::new().render();
}
