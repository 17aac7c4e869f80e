//! Browser [`Host`]: window listeners and `requestAnimationFrame`.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, MouseEvent, TouchEvent, Window};

use crate::animation::{FrameId, Host};
use crate::error::BackdropError;
use crate::model::Viewport;

/// One or more DOM listeners sharing a closure; removed on drop.
pub struct DomListener {
    target: EventTarget,
    events: &'static [&'static str],
    callback: Closure<dyn FnMut(Event)>,
}

impl DomListener {
    fn attach(
        target: EventTarget,
        events: &'static [&'static str],
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, BackdropError> {
        let mut listener = DomListener {
            target,
            events: &[],
            callback,
        };
        for (i, ev) in events.iter().enumerate() {
            listener
                .target
                .add_event_listener_with_callback(ev, listener.callback.as_ref().unchecked_ref())?;
            // dropping on error detaches only what was attached
            listener.events = &events[..=i];
        }
        Ok(listener)
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        for ev in self.events {
            let _ = self
                .target
                .remove_event_listener_with_callback(ev, self.callback.as_ref().unchecked_ref());
        }
    }
}

pub struct BrowserHost {
    window: Window,
    frame_cb: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl BrowserHost {
    pub fn new() -> Result<Self, BackdropError> {
        let window = web_sys::window().ok_or(BackdropError::WindowUnavailable)?;
        Ok(Self {
            window,
            frame_cb: RefCell::new(None),
        })
    }
}

fn read_viewport(window: &Window) -> Option<Viewport> {
    let width = window.inner_width().ok().and_then(|v| v.as_f64())?;
    let height = window.inner_height().ok().and_then(|v| v.as_f64())?;
    Some(Viewport::new(width, height))
}

/// Client coordinates of a mouse move, or of the first touch of a touch move.
fn pointer_position(e: &Event) -> Option<(f64, f64)> {
    if let Some(m) = e.dyn_ref::<MouseEvent>() {
        return Some((m.client_x() as f64, m.client_y() as f64));
    }
    let t = e.dyn_ref::<TouchEvent>()?.touches().item(0)?;
    Some((t.client_x() as f64, t.client_y() as f64))
}

impl Host for BrowserHost {
    type Listener = DomListener;

    fn viewport(&self) -> Option<Viewport> {
        read_viewport(&self.window)
    }

    fn listen_pointer_move(
        &self,
        mut handler: Box<dyn FnMut(f64, f64)>,
    ) -> Result<DomListener, BackdropError> {
        let cb = Closure::wrap(Box::new(move |e: Event| {
            if let Some((x, y)) = pointer_position(&e) {
                handler(x, y);
            }
        }) as Box<dyn FnMut(Event)>);
        DomListener::attach(self.window.clone().into(), &["mousemove", "touchmove"], cb)
    }

    fn listen_resize(
        &self,
        mut handler: Box<dyn FnMut(Viewport)>,
    ) -> Result<DomListener, BackdropError> {
        let window = self.window.clone();
        let cb = Closure::wrap(Box::new(move |_e: Event| match read_viewport(&window) {
            Some(vp) => handler(vp),
            None => log::warn!("resize without readable viewport"),
        }) as Box<dyn FnMut(Event)>);
        DomListener::attach(self.window.clone().into(), &["resize"], cb)
    }

    fn set_frame_callback(&self, callback: Box<dyn FnMut()>) {
        *self.frame_cb.borrow_mut() = Some(Closure::wrap(callback));
    }

    fn clear_frame_callback(&self) {
        self.frame_cb.borrow_mut().take();
    }

    fn request_frame(&self) -> Result<FrameId, BackdropError> {
        let cb = self.frame_cb.borrow();
        let cb = cb
            .as_ref()
            .ok_or_else(|| BackdropError::Host("no frame callback installed".into()))?;
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(BackdropError::from)
    }

    fn cancel_frame(&self, id: FrameId) {
        let _ = self.window.cancel_animation_frame(id);
    }
}
