use std::rc::Rc;

use folio::content::PROFILE;
use folio::scroll::{HeaderState, Section};
use folio_browser::scroll;
use folio_browser::zoon::*;

use crate::theme::{ACCENT_GRADIENT, ThemeSwitch};
use crate::widgets::gradient_text;

/// Fixed navigation bar.
#[derive(Clone)]
pub struct Header {
    theme: ThemeSwitch,
    state: Mutable<HeaderState>,
    wide: Mutable<bool>,
    _scroll_task: Rc<TaskHandle>,
}

impl Header {
    pub fn new(theme: ThemeSwitch, scroll_y: &Mutable<f64>, wide: Mutable<bool>) -> Self {
        let state = Mutable::new(HeaderState::default());
        let scroll_task = Task::start_droppable(scroll_y.signal().for_each_sync({
            let state = state.clone();
            move |y| {
                let mut header = state.get();
                if header.on_scroll(y) {
                    state.set(header);
                }
            }
        }));
        Self {
            theme,
            state,
            wide,
            _scroll_task: Rc::new(scroll_task),
        }
    }

    fn scrolled(&self) -> impl Signal<Item = bool> + use<> {
        self.state.signal().map(|state| state.is_scrolled()).dedupe()
    }

    fn menu_open(&self) -> impl Signal<Item = bool> + use<> {
        self.state.signal().map(|state| state.is_menu_open()).dedupe()
    }

    fn go_to(&self, section: Section) {
        let mut state = self.state.get();
        let target = state.navigate(section);
        self.state.set_neq(state);
        scroll::scroll_to_section(target);
    }

    fn toggle_menu(&self) {
        let mut state = self.state.get();
        state.toggle_menu();
        self.state.set(state);
    }

    pub fn root(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Background::new().color_signal(map_ref! {
                let scrolled = self.scrolled(),
                let menu_open = self.menu_open(),
                let opaque = self.theme.header_background() =>
                if *scrolled || *menu_open { *opaque } else { color!("rgba(0, 0, 0, 0)") }
            }))
            .update_raw_el(|raw_el| {
                raw_el
                    .style("position", "fixed")
                    .style("top", "0")
                    .style("left", "0")
                    .style("right", "0")
                    .style("z-index", "50")
                    .style("transition", "background-color 0.3s ease")
                    .style_signal(
                        "backdrop-filter",
                        self.scrolled().map_bool(|| "blur(12px)", || "none"),
                    )
                    .style_signal(
                        "border-bottom",
                        map_ref! {
                            let scrolled = self.scrolled(),
                            let border = self.theme.border() =>
                            if *scrolled { *border } else { "1px solid transparent" }
                        },
                    )
            })
            .item(
                Row::new()
                    .s(Width::fill())
                    .s(Padding::new().x(24).y(16))
                    .s(Align::new().center_x())
                    .s(Gap::new().x(24))
                    .update_raw_el(|raw_el| raw_el.style("max-width", "1152px"))
                    .item(self.brand())
                    .item(
                        Row::new()
                            .s(Align::new().right())
                            .s(Gap::new().x(16))
                            .item_signal(self.wide.signal().map_true({
                                let this = self.clone();
                                move || this.desktop_nav()
                            }))
                            .item(self.theme_toggle())
                            .item_signal(self.wide.signal().map_false({
                                let this = self.clone();
                                move || this.menu_button()
                            })),
                    ),
            )
            .item_signal(
                map_ref! {
                    let wide = self.wide.signal(),
                    let menu_open = self.menu_open() =>
                    !*wide && *menu_open
                }
                .map_true({
                    let this = self.clone();
                    move || this.mobile_nav()
                }),
            )
    }

    fn brand(&self) -> impl Element + use<> {
        let hovered = Mutable::new(false);
        Button::new()
            .s(Font::new().size(24).weight(FontWeight::Bold))
            .s(Transform::with_signal_self(
                hovered.signal().map_true(|| Transform::new().scale(105)),
            ))
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .label(gradient_text(PROFILE.name, ACCENT_GRADIENT))
            .on_press(scroll::scroll_to_top)
    }

    fn desktop_nav(&self) -> impl Element + use<> {
        Row::new()
            .s(Gap::new().x(32))
            .update_raw_el(|raw_el| raw_el.attr("role", "navigation"))
            .items(Section::NAV.map(|section| self.nav_link(section, false)))
    }

    fn mobile_nav(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Padding::new().x(24).bottom(24))
            .s(Gap::new().y(8))
            .update_raw_el(|raw_el| raw_el.attr("role", "navigation"))
            .items(Section::NAV.map(|section| self.nav_link(section, true)))
    }

    fn nav_link(&self, section: Section, block: bool) -> impl Element + use<> {
        let hovered = Mutable::new(false);
        Button::new()
            .s(Padding::new().y(if block { 8 } else { 4 }))
            .s(Font::new()
                .size(if block { 16 } else { 14 })
                .weight(FontWeight::Medium)
                .color_signal(map_ref! {
                    let hovered = hovered.signal(),
                    let dark = self.theme.is_dark() =>
                    match (*hovered, *dark) {
                        (true, true) => color!("#ffffff"),
                        (true, false) => color!("#111827"),
                        (false, true) => color!("#d1d5db"),
                        (false, false) => color!("#4b5563"),
                    }
                }))
            .update_raw_el(|raw_el| {
                raw_el.style_signal(
                    "box-shadow",
                    hovered
                        .signal()
                        .map_bool(|| "inset 0 -2px 0 #9333ea", || "none"),
                )
            })
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .label(section.title())
            .on_press({
                let this = self.clone();
                move || this.go_to(section)
            })
    }

    fn theme_toggle(&self) -> impl Element + use<> {
        let hovered = Mutable::new(false);
        Button::new()
            .s(Padding::all(8))
            .s(RoundedCorners::all_max())
            .s(Font::new().size(18))
            .s(Background::new().color_signal(self.theme.pick(color!("#1f2937"), color!("#f3f4f6"))))
            .s(Transform::with_signal_self(
                hovered.signal().map_true(|| Transform::new().rotate(180)),
            ))
            .update_raw_el(|raw_el| {
                raw_el
                    .attr("aria-label", "Toggle theme")
                    .style("transition", "transform 0.3s ease")
            })
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .label_signal(self.theme.is_dark().map_bool(|| "☀️", || "🌙"))
            .on_press({
                let theme = self.theme.clone();
                move || theme.toggle()
            })
    }

    fn menu_button(&self) -> impl Element + use<> {
        Button::new()
            .s(Padding::all(8))
            .s(RoundedCorners::all_max())
            .s(Font::new().size(18).color_signal(self.theme.heading_text()))
            .s(Background::new().color_signal(self.theme.pick(color!("#1f2937"), color!("#f3f4f6"))))
            .update_raw_el(|raw_el| raw_el.attr("aria-label", "Toggle menu"))
            .label_signal(self.menu_open().map_bool(|| "✕", || "☰"))
            .on_press({
                let this = self.clone();
                move || this.toggle_menu()
            })
    }
}
