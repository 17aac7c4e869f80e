use super::{hero::Hero, hex_background::HexBackground, nav_bar::NavBar};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div id="root" style="position:relative; overflow:hidden; min-height:100vh; background:#000000; color:#ffffff; font-family:system-ui, sans-serif;">
            <HexBackground />
            <NavBar />
            <Hero />
        </div>
    }
}
