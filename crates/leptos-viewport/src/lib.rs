//! Leptos Viewport Utilities
//!
//! Reactive window width tracking for Leptos.
//! Callers compare the width against a single breakpoint with `is_at_least`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Width assumed when the window cannot be measured (non-browser targets)
pub const FALLBACK_WIDTH_PX: f64 = 1024.0;

/// Viewport state signals
#[derive(Clone, Copy)]
pub struct ViewportSignals {
    pub width_read: ReadSignal<f64>,
    pub width_write: WriteSignal<f64>,
}

/// Whether `width_px` falls on the wide side of `breakpoint_px`
pub fn is_at_least(width_px: f64, breakpoint_px: f64) -> bool {
    width_px >= breakpoint_px
}

/// Current `window.innerWidth`, if there is a window
pub fn read_window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

pub fn create_viewport_signals() -> ViewportSignals {
    let initial = read_window_width().unwrap_or(FALLBACK_WIDTH_PX);
    let (width_read, width_write) = signal(initial);
    ViewportSignals {
        width_read,
        width_write,
    }
}

/// Bind a window resize listener that keeps the width signal current
pub fn bind_window_resize(viewport: ViewportSignals) {
    use wasm_bindgen::closure::Closure;

    let on_resize = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        if let Some(width) = read_window_width() {
            // Ignore sub-pixel jitter
            if (width - viewport.width_read.get_untracked()).abs() >= 1.0 {
                viewport.width_write.set(width);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}

/// Create viewport signals and start tracking resizes
pub fn use_viewport() -> ViewportSignals {
    let viewport = create_viewport_signals();
    bind_window_resize(viewport);
    viewport
}
