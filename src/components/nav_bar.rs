use crate::content::{Link, NAV_LINKS, OWNER_NAME};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NavLinkProps {
    pub link: Link,
}

#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let hovered = use_state(|| false);
    let enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let color = if *hovered { "#818cf8" } else { "#ffffff" };
    html! { <a href={props.link.href} onmouseenter={enter} onmouseleave={leave} style={format!("color:{}; text-decoration:none; transition:color 0.15s;", color)}>{ props.link.label }</a> }
}

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    html! {<header style="position:relative; z-index:10; display:flex; justify-content:space-between; align-items:center; padding:16px 32px; max-width:1024px; margin:0 auto;">
        <h1 style="font-size:18px; font-weight:600; margin:0;">{ OWNER_NAME }</h1>
        <nav style="display:flex; gap:24px; font-size:14px;">
            { for NAV_LINKS.iter().map(|link| html! { <NavLink link={*link} /> }) }
        </nav>
    </header>}
}
