use std::rc::Rc;

use folio::content::{LOADING_DELAY_MS, LOADING_TEXT};
use folio_browser::listener::EventListener;
use folio_browser::{scroll, timer};
use folio_browser::zoon::{println, *};

use crate::about::about;
use crate::contact::Contact;
use crate::cursor::Cursor;
use crate::experience::experience;
use crate::footer::footer;
use crate::header::Header;
use crate::hero::Hero;
use crate::projects::Projects;
use crate::skills::skills;
use crate::tech_stack::tech_stack;
use crate::theme::{PROGRESS_GRADIENT, ThemeSwitch};

/// Viewports at least this wide get the desktop layout.
const WIDE_VIEWPORT_PX: u32 = 768;
const SPINNER_FRAME_MS: u32 = 16;

#[derive(Clone)]
pub struct App {
    theme: ThemeSwitch,
    loading: Mutable<bool>,
    scroll_y: Mutable<f64>,
    wide: Mutable<bool>,
    cursor: Cursor,
    _loading_timer: Rc<TaskHandle>,
    _scroll_listener: Option<Rc<EventListener>>,
}

impl App {
    pub fn new() -> impl Element {
        let loading = Mutable::new(true);
        let loading_timer = timer::after(LOADING_DELAY_MS, {
            let loading = loading.clone();
            move || {
                println!("[APP] loading screen done");
                loading.set(false);
            }
        });
        let scroll_y = Mutable::new(0_f64);
        let scroll_listener = scroll::track_scroll(scroll_y.clone());
        Self {
            theme: ThemeSwitch::load(),
            loading,
            scroll_y,
            wide: Mutable::new(true),
            cursor: Cursor::new(),
            _loading_timer: Rc::new(loading_timer),
            _scroll_listener: scroll_listener.map(Rc::new),
        }
        .root()
    }

    fn root(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Background::new().color_signal(self.theme.page_background()))
            .s(Font::new()
                .family([FontFamily::new("Inter"), FontFamily::SansSerif])
                .color_signal(self.theme.heading_text()))
            .update_raw_el(|raw_el| {
                raw_el
                    .style("min-height", "100vh")
                    .style("cursor", "none")
                    .style("transition", "background-color 0.5s ease, color 0.5s ease")
            })
            .on_viewport_size_change({
                let wide = self.wide.clone();
                move |width, _| wide.set_neq(width >= WIDE_VIEWPORT_PX)
            })
            .item(self.cursor.root())
            .item_signal(self.loading.signal().map_bool(
                {
                    let this = self.clone();
                    move || this.loading_screen().unify()
                },
                {
                    let this = self.clone();
                    move || this.page().unify()
                },
            ))
    }

    fn loading_screen(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(24))
            .update_raw_el(|raw_el| {
                raw_el
                    .attr("role", "status")
                    .style("min-height", "100vh")
                    .style("justify-content", "center")
                    .style("align-items", "center")
            })
            .item(spinner())
            .item(
                El::new()
                    .s(Font::new()
                        .size(18)
                        .weight(FontWeight::Medium)
                        .color_signal(self.theme.muted_text()))
                    .child(LOADING_TEXT),
            )
    }

    fn progress_bar(&self) -> impl Element + use<> {
        El::new()
            .s(Height::exact(4))
            .update_raw_el(|raw_el| {
                raw_el
                    .attr("aria-hidden", "true")
                    .style("position", "fixed")
                    .style("top", "0")
                    .style("left", "0")
                    .style("z-index", "50")
                    .style("background", PROGRESS_GRADIENT)
                    .style_signal(
                        "width",
                        self.scroll_y
                            .signal()
                            .map(|_| format!("{}%", scroll::scroll_progress() * 100.)),
                    )
            })
    }

    fn page(&self) -> impl Element + use<> {
        let theme = &self.theme;
        Column::new()
            .s(Width::fill())
            .item(self.progress_bar())
            .item(Header::new(theme.clone(), &self.scroll_y, self.wide.clone()).root())
            .item(
                Column::new()
                    .s(Width::fill())
                    .update_raw_el(|raw_el| raw_el.attr("role", "main"))
                    .item(Hero::new(theme.clone()).root())
                    .item(about(theme))
                    .item(skills(theme))
                    .item(Projects::new(theme.clone()).root())
                    .item(experience(theme))
                    .item(tech_stack(theme, &self.wide))
                    .item(Contact::new(theme.clone()).root()),
            )
            .item(footer(theme))
    }
}

/// Ring rotating once per second.
fn spinner() -> impl Element + use<> {
    let angle = Mutable::new(0_f64);
    let spin = Task::start_droppable({
        let angle = angle.clone();
        async move {
            loop {
                Timer::sleep(SPINNER_FRAME_MS).await;
                angle.update(|angle| (angle + 360. * f64::from(SPINNER_FRAME_MS) / 1000.) % 360.);
            }
        }
    });
    El::new()
        .s(Width::exact(64))
        .s(Height::exact(64))
        .s(RoundedCorners::all_max())
        .s(Transform::with_signal_self(
            angle.signal().map(|angle| Transform::new().rotate(angle)),
        ))
        .update_raw_el(|raw_el| {
            raw_el
                .style("border", "4px solid rgba(147, 51, 234, 0.2)")
                .style("border-top-color", "#9333ea")
                .after_remove(move |_| drop(spin))
        })
}
