use std::rc::Rc;

use folio::content::PROFILE;
use folio::scroll::Section;
use folio::typewriter::{TYPEWRITER_STEP_MS, Typewriter};
use folio_browser::network_canvas::network_canvas;
use folio_browser::scroll;
use folio_browser::zoon::*;

use crate::theme::ThemeSwitch;
use crate::widgets::social_link;

/// Full-screen landing section above `#about`.
#[derive(Clone)]
pub struct Hero {
    theme: ThemeSwitch,
    typed: Mutable<&'static str>,
    _typewriter: Rc<TaskHandle>,
}

impl Hero {
    pub fn new(theme: ThemeSwitch) -> Self {
        let typed = Mutable::new("");
        let typewriter = Task::start_droppable({
            let typed = typed.clone();
            async move {
                let mut typewriter = Typewriter::new(PROFILE.role);
                loop {
                    Timer::sleep(TYPEWRITER_STEP_MS).await;
                    if !typewriter.advance() {
                        break;
                    }
                    typed.set_neq(typewriter.visible_text());
                }
            }
        });
        Self {
            theme,
            typed,
            _typewriter: Rc::new(typewriter),
        }
    }

    pub fn root(&self) -> impl Element + use<> {
        Stack::new()
            .s(Width::fill())
            .update_raw_el(|raw_el| raw_el.style("min-height", "100vh").style("overflow", "hidden"))
            .layer(network_canvas())
            .layer(self.content())
            .layer(self.chevron())
    }

    fn content(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Align::center())
            .s(Padding::new().x(24).top(96).bottom(64))
            .s(Gap::new().y(24))
            .update_raw_el(|raw_el| raw_el.style("max-width", "900px"))
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .s(Font::new()
                        .size(72)
                        .weight(FontWeight::Bold)
                        .center()
                        .color_signal(self.theme.heading_text()))
                    .child(PROFILE.name),
            )
            .item(
                Row::new()
                    .s(Align::new().center_x())
                    .s(Font::new()
                        .size(28)
                        .weight(FontWeight::Medium)
                        .color_signal(self.theme.muted_text()))
                    .item(Text::with_signal(self.typed.signal()))
                    .item(El::new().s(Font::new().color(color!("#9333ea"))).child("|")),
            )
            .item(
                Paragraph::new()
                    .s(Align::new().center_x())
                    .s(Font::new()
                        .size(20)
                        .line_height(32)
                        .center()
                        .color_signal(self.theme.muted_text()))
                    .content(PROFILE.tagline),
            )
            .item(
                Row::new()
                    .s(Align::new().center_x())
                    .s(Gap::both(24))
                    .multiline()
                    .item(self.resume_link())
                    .item(
                        Row::new()
                            .s(Gap::new().x(16))
                            .items(PROFILE.socials.iter().map(|link| social_link(&self.theme, link))),
                    ),
            )
    }

    fn resume_link(&self) -> impl Element + use<> {
        let hovered = Mutable::new(false);
        Link::new()
            .s(Padding::new().x(32).y(16))
            .s(RoundedCorners::all_max())
            .s(Font::new()
                .size(16)
                .weight(FontWeight::SemiBold)
                .color_signal(self.theme.heading_text()))
            .s(Background::new().color_signal(map_ref! {
                let hovered = hovered.signal(),
                let surface = self.theme.solid_surface(),
                let page = self.theme.page_background() =>
                if *hovered { *page } else { *surface }
            }))
            .update_raw_el(|raw_el| {
                raw_el
                    .attr("download", "")
                    .attr("rel", "noopener noreferrer")
                    .style_signal("border", self.theme.border())
            })
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .label("⬇ Download Resume")
            .to(PROFILE.resume_href)
            .new_tab(NewTab::new())
    }

    fn chevron(&self) -> impl Element + use<> {
        Button::new()
            .s(Align::new().center_x().bottom())
            .s(Padding::new().bottom(32))
            .s(Font::new().size(32).color_signal(self.theme.muted_text()))
            .update_raw_el(|raw_el| raw_el.attr("aria-label", "Scroll to about"))
            .label("⌄")
            .on_press(|| scroll::scroll_to_section(Section::About))
    }
}
