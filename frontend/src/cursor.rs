//! Ring that follows the pointer and swells over interactive elements.

use std::rc::Rc;

use folio::cursor::{CursorState, INTERACTIVE_SELECTOR};
use folio_browser::listener::EventListener;
use folio_browser::media;
use folio_browser::zoon::wasm_bindgen::JsCast;
use folio_browser::zoon::*;

use crate::theme::CURSOR_COLOR;

#[derive(Clone)]
pub struct Cursor {
    state: Mutable<CursorState>,
    _pointer: Option<Rc<EventListener>>,
}

impl Cursor {
    pub fn new() -> Self {
        let (width, height) = media::viewport_size();
        let state = Mutable::new(CursorState::centered(width, height));
        let pointer = EventListener::on_document("mousemove", {
            let state = state.clone();
            move |event| {
                let Ok(event) = event.dyn_into::<web_sys::MouseEvent>() else {
                    return;
                };
                let hovering = event
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                    .is_some_and(|element| matches!(element.closest(INTERACTIVE_SELECTOR), Ok(Some(_))));
                let mut cursor = state.lock_mut();
                cursor.move_to(f64::from(event.client_x()), f64::from(event.client_y()));
                cursor.hovering = hovering;
            }
        });
        Self {
            state,
            _pointer: pointer.map(Rc::new),
        }
    }

    pub fn root(&self) -> impl Element + use<> {
        El::new()
            .update_raw_el(|raw_el| {
                raw_el
                    .attr("aria-hidden", "true")
                    .style("position", "fixed")
                    .style("border", &format!("2px solid {CURSOR_COLOR}"))
                    .style("border-radius", "50%")
                    .style("pointer-events", "none")
                    .style("z-index", "9999")
                    .style("mix-blend-mode", "exclusion")
                    .style("transition", "width 0.2s ease, height 0.2s ease, background-color 0.2s ease, box-shadow 0.2s ease")
                    .style_signal("left", self.state.signal_ref(|cursor| format!("{}px", cursor.origin().0)))
                    .style_signal("top", self.state.signal_ref(|cursor| format!("{}px", cursor.origin().1)))
                    .style_signal("width", self.state.signal_ref(|cursor| format!("{}px", cursor.look().size)))
                    .style_signal("height", self.state.signal_ref(|cursor| format!("{}px", cursor.look().size)))
                    .style_signal(
                        "background-color",
                        self.state
                            .signal_ref(|cursor| format!("rgba(115, 86, 241, {})", cursor.look().fill_alpha)),
                    )
                    .style_signal(
                        "box-shadow",
                        self.state
                            .signal_ref(|cursor| format!("{} rgba(115, 86, 241, 0.5)", cursor.look().glow)),
                    )
            })
    }
}
