//! Scroll-triggered entrance animations.

use std::cell::RefCell;
use std::rc::Rc;

use folio::reveal::{Motion, REVEAL_THRESHOLD, RevealLatch};
use zoon::wasm_bindgen::JsCast;
use zoon::wasm_bindgen::closure::Closure;
use zoon::*;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Live `IntersectionObserver`, disconnected on drop.
pub struct RevealObserver {
    observer: web_sys::IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_reveal` the first time at least `REVEAL_THRESHOLD` of `element`
/// is visible, then stops observing.
///
/// Returns `None` when the browser has no `IntersectionObserver`.
pub fn observe_once(
    element: &web_sys::Element,
    on_reveal: impl FnOnce() + 'static,
) -> Option<RevealObserver> {
    let mut latch = RevealLatch::new();
    let mut on_reveal = Some(on_reveal);
    let callback = ObserverCallback::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() || !latch.observe(entry.intersection_ratio()) {
                    continue;
                }
                observer.disconnect();
                if let Some(on_reveal) = on_reveal.take() {
                    on_reveal();
                }
            }
        },
    );
    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&REVEAL_THRESHOLD.into());
    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .ok()?;
    observer.observe(element);
    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// One-way "has been seen" flag shared by a section and its children.
#[derive(Clone, Default)]
pub struct Revealed(Mutable<bool>);

impl Revealed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.0.get()
    }

    pub fn signal(&self) -> impl Signal<Item = bool> + use<> {
        self.0.signal()
    }

    /// Starts watching the element once it's inserted; the observer lives
    /// until the element is removed.
    pub fn watch(&self, raw_el: RawHtmlEl<web_sys::HtmlElement>) -> RawHtmlEl<web_sys::HtmlElement> {
        let observer: Rc<RefCell<Option<RevealObserver>>> = Rc::default();
        let flag = self.0.clone();
        raw_el
            .after_insert({
                let observer = observer.clone();
                move |element| {
                    let reveal = {
                        let flag = flag.clone();
                        move || flag.set_neq(true)
                    };
                    match observe_once(&element, reveal) {
                        Some(watching) => *observer.borrow_mut() = Some(watching),
                        None => {
                            eprintln!("[REVEAL] IntersectionObserver unavailable, showing content");
                            flag.set_neq(true);
                        }
                    }
                }
            })
            .after_remove(move |_| drop(observer.borrow_mut().take()))
    }

    /// Hidden until revealed, then transitions in according to `motion`.
    pub fn animate(
        &self,
        raw_el: RawHtmlEl<web_sys::HtmlElement>,
        motion: Motion,
    ) -> RawHtmlEl<web_sys::HtmlElement> {
        let hidden_transform = motion.hidden_transform();
        raw_el
            .style("transition", motion.transition().as_str())
            .style_signal("opacity", self.signal().map_bool(|| "1", || "0"))
            .style_signal(
                "transform",
                self.signal()
                    .map_bool(|| "none".to_owned(), move || hidden_transform.clone()),
            )
    }

    /// `watch` plus `animate` on the same element.
    pub fn section(
        &self,
        raw_el: RawHtmlEl<web_sys::HtmlElement>,
        motion: Motion,
    ) -> RawHtmlEl<web_sys::HtmlElement> {
        self.animate(self.watch(raw_el), motion)
    }
}
