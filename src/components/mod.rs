pub mod app;
pub mod hero;
pub mod hex_background;
pub mod nav_bar;

pub use app::App;
