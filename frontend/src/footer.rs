use folio::content::{FOOTER, FOOTER_SOCIALS, PROFILE};
use folio::scroll::Section;
use folio_browser::scroll;
use folio_browser::zoon::*;

use crate::theme::{ACCENT_GRADIENT, ThemeSwitch};
use crate::widgets::{accent_button, gradient_text, grid, paragraph, social_link};

pub fn footer(theme: &ThemeSwitch) -> impl Element + use<> {
    El::new()
        .s(Width::fill())
        .s(Padding::new().x(16).top(48).bottom(32))
        .s(Background::new().color_signal(theme.solid_surface()))
        .update_raw_el(|raw_el| {
            raw_el
                .attr("role", "contentinfo")
                .style_signal("border-top", theme.border())
        })
        .child(
            Column::new()
                .s(Width::fill())
                .s(Align::new().center_x())
                .s(Gap::new().y(32))
                .update_raw_el(|raw_el| raw_el.style("max-width", "1152px"))
                .item(
                    Row::new()
                        .s(Width::fill())
                        .update_raw_el(|raw_el| grid(raw_el, 240, 32).style("align-items", "start"))
                        .item(brand(theme))
                        .item(quick_links(theme))
                        .item(get_in_touch(theme)),
                )
                .item(bottom_bar(theme)),
        )
}

fn column_title(theme: &ThemeSwitch, text: &'static str) -> impl Element + use<> {
    El::new()
        .s(Font::new()
            .size(18)
            .weight(FontWeight::SemiBold)
            .color_signal(theme.heading_text()))
        .child(text)
}

fn brand(theme: &ThemeSwitch) -> impl Element + use<> {
    Column::new()
        .s(Gap::new().y(16))
        .item(
            El::new()
                .s(Font::new().size(24).weight(FontWeight::Bold))
                .child(gradient_text(PROFILE.name, ACCENT_GRADIENT)),
        )
        .item(paragraph(theme, FOOTER.blurb))
        .item(
            Row::new()
                .s(Gap::new().x(12))
                .items(FOOTER_SOCIALS.iter().map(|link| social_link(theme, link))),
        )
}

fn quick_links(theme: &ThemeSwitch) -> impl Element + use<> {
    Column::new()
        .s(Gap::new().y(12))
        .item(column_title(theme, "Quick Links"))
        .items(Section::NAV.into_iter().map(|section| {
            let hovered = Mutable::new(false);
            Button::new()
                .s(Font::new().size(15).color_signal(map_ref! {
                    let hovered = hovered.signal(),
                    let idle = theme.muted_text() =>
                    if *hovered { color!("#9333ea") } else { *idle }
                }))
                .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
                .label(section.title())
                .on_press(move || scroll::scroll_to_section(section))
        }))
}

fn get_in_touch(theme: &ThemeSwitch) -> impl Element + use<> {
    Column::new()
        .s(Gap::new().y(12))
        .item(column_title(theme, "Get In Touch"))
        .item(
            Link::new()
                .s(Font::new().size(15).color_signal(theme.muted_text()))
                .label(FOOTER.email)
                .to(format!("mailto:{}", FOOTER.email)),
        )
        .item(
            El::new()
                .s(Font::new().size(15).color_signal(theme.muted_text()))
                .child(FOOTER.availability),
        )
        .item(
            El::new()
                .s(Padding::new().top(8))
                .child(accent_button(FOOTER.call_to_action, || {
                    scroll::scroll_to_section(Section::Contact)
                })),
        )
}

fn bottom_bar(theme: &ThemeSwitch) -> impl Element + use<> {
    Row::new()
        .s(Width::fill())
        .s(Padding::new().top(24))
        .s(Gap::both(16))
        .multiline()
        .update_raw_el(|raw_el| raw_el.style_signal("border-top", theme.border()))
        .item(
            El::new()
                .s(Font::new().size(14).color_signal(theme.muted_text()))
                .child(FOOTER.copyright),
        )
        .item(
            Button::new()
                .s(Align::new().right())
                .s(Width::exact(40))
                .s(Height::exact(40))
                .s(RoundedCorners::all_max())
                .s(Font::new().size(18).center().color(color!("#ffffff")))
                .update_raw_el(|raw_el| {
                    raw_el
                        .attr("aria-label", "Back to top")
                        .style("background", ACCENT_GRADIENT)
                })
                .label("↑")
                .on_press(scroll::scroll_to_top),
        )
}
