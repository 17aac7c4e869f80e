use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::animation::HexField;
use crate::config::{self, Preset};
use crate::error::BackdropError;
use crate::host::BrowserHost;
use crate::surface::CanvasSurface;

fn mount(
    canvas_ref: &NodeRef,
    preset: Preset,
) -> Result<HexField<BrowserHost, CanvasSurface>, BackdropError> {
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or(BackdropError::CanvasMissing)?;
    let surface = CanvasSurface::new(canvas)?;
    let host = BrowserHost::new()?;
    let mut field = HexField::new(host, surface, config::resolve(preset));
    field.start()?;
    Ok(field)
}

#[derive(Properties, PartialEq)]
pub struct HexBackgroundProps {
    #[prop_or_default]
    pub preset: Preset,
}

/// Full-viewport canvas behind the page content. Draws nothing if the
/// canvas or its context cannot be set up.
#[function_component(HexBackground)]
pub fn hex_background(props: &HexBackgroundProps) -> Html {
    let canvas_ref = use_node_ref();
    {
        let canvas_ref = canvas_ref.clone();
        let preset = props.preset;
        use_effect_with((), move |_| {
            let field = match mount(&canvas_ref, preset) {
                Ok(field) => Some(field),
                Err(e) => {
                    log::warn!("hex background disabled: {e}");
                    None
                }
            };
            // Cleanup
            move || {
                if let Some(mut field) = field {
                    field.stop();
                }
            }
        });
    }
    html! { <canvas ref={canvas_ref} style="position:absolute; top:0; left:0; width:100%; height:100%; pointer-events:none; z-index:0;" /> }
}
