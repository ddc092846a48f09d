//! DOM event listeners removed on drop.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

pub struct EventListener {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
    pub fn new(
        target: web_sys::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event| handler(event));
        if target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .is_err()
        {
            zoon::eprintln!("[DOM] failed to listen for '{event}'");
        }
        Self {
            target,
            event,
            callback,
        }
    }

    /// Listener on `window`; `None` outside a browsing context.
    pub fn on_window(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        Some(Self::new(window.into(), event, handler))
    }

    /// Listener on `document`; `None` outside a browsing context.
    pub fn on_document(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document.into(), event, handler))
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
