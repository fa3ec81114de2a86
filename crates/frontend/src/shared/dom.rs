//! Small DOM helpers shared by the page sections.
//!
//! Every helper tolerates a missing window/document and silently does
//! nothing, so sections keep working in partial pages.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

fn media_matches(query: &str) -> Option<bool> {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mql| mql.matches())
}

/// `true` when the platform asks for reduced motion.
pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)").unwrap_or(false)
}

/// Platform light-scheme signal; `None` when media queries are unavailable.
pub fn prefers_light_scheme() -> Option<bool> {
    media_matches("(prefers-color-scheme: light)")
}

pub fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Stop the browser from restoring the previous scroll offset and start
/// at the top of the page.
pub fn reset_scroll_position() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.set_scroll_restoration(web_sys::ScrollRestoration::Manual);
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

pub fn scroll_to(top: f64, smooth: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Instant
    });
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Smoothly scroll `el` to the vertical centre of the viewport.
pub fn scroll_into_center(el: &web_sys::Element) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn open_in_new_context(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener");
    }
}

/// Attach a listener for the rest of the page lifetime.
pub fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        Ok(()) => closure.forget(),
        Err(e) => log::warn!("could not listen for {}: {:?}", event, e),
    }
}

/// [`listen`] on the window; no-op without one.
pub fn listen_window(event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    if let Some(window) = web_sys::window() {
        listen(&window, event, handler);
    }
}

/// Coalesces bursts of events into at most one update per animation frame.
///
/// A call to [`FrameGate::schedule`] while an update is already pending is
/// dropped.
#[derive(Clone, Default)]
pub struct FrameGate {
    pending: Rc<Cell<bool>>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an update as pending; `false` when one already is.
    fn claim(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn schedule(&self, update: impl FnOnce() + 'static) {
        if !self.claim() {
            return;
        }
        let pending = self.pending.clone();
        leptos::prelude::request_animation_frame(move || {
            pending.set(false);
            update();
        });
    }
}

/// Run `update` on window scroll and resize, at most once per animation
/// frame across both events.
pub fn on_scroll_or_resize(update: impl Fn() + 'static) {
    let update = Rc::new(update);
    let gate = FrameGate::new();
    for event in ["scroll", "resize"] {
        let gate = gate.clone();
        let update = update.clone();
        listen_window(event, move |_| {
            let update = update.clone();
            gate.schedule(move || update());
        });
    }
}

/// Run `f` after the next two animation frames, i.e. once layout and the
/// first paint have settled.
pub fn after_layout(f: impl FnOnce() + 'static) {
    leptos::prelude::request_animation_frame(move || {
        leptos::prelude::request_animation_frame(f);
    });
}

type FrameCallback = Closure<dyn FnMut(f64)>;

struct FrameLoopInner {
    running: Cell<bool>,
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<FrameCallback>>,
}

/// A recurring animation-frame task with explicit start/stop.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

impl FrameLoop {
    /// `tick` receives the frame timestamp in milliseconds.
    pub fn new(mut tick: impl FnMut(f64) + 'static) -> Self {
        let inner = Rc::new(FrameLoopInner {
            running: Cell::new(false),
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            if !inner.running.get() {
                return;
            }
            tick(timestamp);
            Self::request(&inner);
        });
        *inner.callback.borrow_mut() = Some(callback);

        Self { inner }
    }

    fn request(inner: &FrameLoopInner) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(callback) = inner.callback.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                inner.handle.set(Some(id));
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        Self::request(&self.inner);
    }

    pub fn stop(&self) {
        self.inner.running.set(false);
        if let Some(id) = self.inner.handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}
