//! Frame loop and lifecycle for the hexagon background.
//!
//! [`HexField`] owns the long-lived [`FieldState`] and a drawing surface and
//! talks to its environment through [`Host`]: viewport queries, pointer and
//! resize subscriptions, and a once-per-refresh frame callback.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::HexFieldConfig;
use crate::error::BackdropError;
use crate::model::Viewport;
use crate::state::FieldState;
use crate::surface::DrawSurface;

pub type FrameId = i32;

/// Event source and frame scheduler the background runs against.
///
/// Listener values unsubscribe when dropped.
pub trait Host {
    type Listener;

    fn viewport(&self) -> Option<Viewport>;
    fn listen_pointer_move(
        &self,
        handler: Box<dyn FnMut(f64, f64)>,
    ) -> Result<Self::Listener, BackdropError>;
    fn listen_resize(
        &self,
        handler: Box<dyn FnMut(Viewport)>,
    ) -> Result<Self::Listener, BackdropError>;
    /// Install the callback invoked for every requested frame.
    fn set_frame_callback(&self, callback: Box<dyn FnMut()>);
    fn clear_frame_callback(&self);
    fn request_frame(&self) -> Result<FrameId, BackdropError>;
    fn cancel_frame(&self, id: FrameId);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Stopped,
}

struct Inner<S> {
    config: HexFieldConfig,
    state: Option<FieldState>,
    surface: S,
    phase: Phase,
    pending: Option<FrameId>,
}

impl<S: DrawSurface> Inner<S> {
    fn draw(&mut self) {
        if let Some(st) = &self.state {
            st.draw(&mut self.surface);
        }
    }
}

pub struct HexField<H: Host + 'static, S: DrawSurface + 'static> {
    host: Rc<H>,
    inner: Rc<RefCell<Inner<S>>>,
    listeners: Vec<H::Listener>,
}

impl<H: Host + 'static, S: DrawSurface + 'static> HexField<H, S> {
    pub fn new(host: H, surface: S, config: HexFieldConfig) -> Self {
        Self {
            host: Rc::new(host),
            inner: Rc::new(RefCell::new(Inner {
                config: config.sanitized(),
                state: None,
                surface,
                phase: Phase::Idle,
                pending: None,
            })),
            listeners: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.inner.borrow().phase
    }

    /// Size the surface, build the grid, wire input and start the frame loop.
    pub fn start(&mut self) -> Result<(), BackdropError> {
        if self.phase() != Phase::Idle {
            return Err(BackdropError::AlreadyStarted);
        }
        let viewport = self.host.viewport().ok_or(BackdropError::ViewportUnavailable)?;
        // committed below, once listeners and the first frame are accepted
        let st = FieldState::new(viewport, self.inner.borrow().config);

        let pointer_listener = {
            let inner = Rc::downgrade(&self.inner);
            self.host.listen_pointer_move(Box::new(move |x, y| {
                let Some(inner) = inner.upgrade() else { return };
                if let Some(st) = inner.borrow_mut().state.as_mut() {
                    st.pointer_moved(x, y);
                }
            }))?
        };
        let resize_listener = {
            let inner = Rc::downgrade(&self.inner);
            self.host.listen_resize(Box::new(move |viewport| {
                let Some(inner) = inner.upgrade() else { return };
                let mut guard = inner.borrow_mut();
                let inner = &mut *guard;
                if let Some(st) = inner.state.as_mut() {
                    st.resized(viewport);
                    st.apply_size(&mut inner.surface);
                    log::debug!(
                        "hex field resize {}x{} ({} cells)",
                        viewport.width,
                        viewport.height,
                        st.grid.len()
                    );
                }
            }))?
        };

        self.host
            .set_frame_callback(frame_callback(Rc::downgrade(&self.host), Rc::downgrade(&self.inner)));
        let first = match self.host.request_frame() {
            Ok(id) => id,
            Err(e) => {
                self.host.clear_frame_callback();
                return Err(e);
            }
        };
        self.listeners.push(pointer_listener);
        self.listeners.push(resize_listener);
        {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            st.apply_size(&mut inner.surface);
            log::debug!(
                "hex field start {}x{} ({} cells)",
                viewport.width,
                viewport.height,
                st.grid.len()
            );
            inner.state = Some(st);
            inner.phase = Phase::Running;
            inner.pending = Some(first);
            inner.draw();
        }
        Ok(())
    }

    /// Unsubscribe input and cancel the pending frame. Safe to call repeatedly.
    pub fn stop(&mut self) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            if inner.phase != Phase::Running {
                return;
            }
            inner.phase = Phase::Stopped;
            inner.pending.take()
        };
        if let Some(id) = pending {
            self.host.cancel_frame(id);
        }
        self.listeners.clear();
        self.host.clear_frame_callback();
        log::debug!("hex field stopped");
    }

    #[cfg(test)]
    pub fn state(&self) -> Option<FieldState> {
        self.inner.borrow().state.clone()
    }

    #[cfg(test)]
    pub fn pending_frame(&self) -> Option<FrameId> {
        self.inner.borrow().pending
    }

    #[cfg(test)]
    pub fn with_surface<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.inner.borrow_mut().surface)
    }
}

impl<H: Host + 'static, S: DrawSurface + 'static> Drop for HexField<H, S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Render once and schedule the next frame while the field is running.
fn frame_callback<H: Host + 'static, S: DrawSurface + 'static>(
    host: Weak<H>,
    inner: Weak<RefCell<Inner<S>>>,
) -> Box<dyn FnMut()> {
    Box::new(move || {
        let (Some(host), Some(inner)) = (host.upgrade(), inner.upgrade()) else {
            return;
        };
        let mut inner = inner.borrow_mut();
        inner.pending = None;
        if inner.phase != Phase::Running {
            return;
        }
        inner.draw();
        match host.request_frame() {
            Ok(id) => inner.pending = Some(id),
            Err(e) => log::warn!("hex field frame loop halted: {e}"),
        }
    })
}
