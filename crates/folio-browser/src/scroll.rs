//! Smooth in-page navigation and scroll position tracking.

use folio::scroll::Section;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use zoon::{Mutable, eprintln};

use crate::listener::EventListener;
use crate::media;

pub fn scroll_to_section(section: Section) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section.id()));
    let Some(element) = element else {
        eprintln!("[SCROLL] no element with id '{}'", section.id());
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.)
}

fn scroll_height() -> f64 {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.)
}

/// Fraction of the page scrolled so far.
pub fn scroll_progress() -> f64 {
    folio::scroll::progress(scroll_y(), scroll_height(), media::viewport_size().1)
}

/// Mirrors `window.scrollY` into `position` until the listener is dropped.
pub fn track_scroll(position: Mutable<f64>) -> Option<EventListener> {
    position.set_neq(scroll_y());
    EventListener::on_window("scroll", move |_| position.set_neq(scroll_y()))
}
