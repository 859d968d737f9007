use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;

/// Vertical offset, in CSS pixels, past which the page counts as scrolled.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD
}

pub fn current_offset() -> Option<f64> {
    web_sys::window().and_then(|window| window.scroll_y().ok())
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// A passive window `scroll` listener that lives exactly as long as this value.
///
/// The handler receives the vertical offset once on attach and again on every scroll
/// event. Dropping the subscription unregisters the listener, so a component can hold it
/// inside an effect and release it from the effect's destructor.
pub struct ScrollSubscription {
    listener: Option<Closure<dyn Fn()>>,
}

impl ScrollSubscription {
    pub fn attach<F>(on_offset: F) -> Self
    where
        F: Fn(f64) + 'static,
    {
        let Some(window) = web_sys::window() else {
            log::warn!("no window available, scroll tracking disabled");
            return Self::inert();
        };
        let on_offset = Rc::new(on_offset);
        let callback = Closure::<dyn Fn()>::new({
            let on_offset = on_offset.clone();
            move || {
                if let Some(offset) = current_offset() {
                    on_offset(offset);
                }
            }
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("failed to register scroll listener: {:?}", e);
            return Self::inert();
        }
        // Initial sample so state is right before the first scroll event.
        if let Ok(offset) = window.scroll_y() {
            on_offset(offset);
        }
        Self {
            listener: Some(callback),
        }
    }

    fn inert() -> Self {
        Self { listener: None }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let Some(callback) = self.listener.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove scroll listener: {:?}", e);
            }
        }
    }
}
