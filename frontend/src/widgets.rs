use folio::content::{Heading, Icon, SocialLink};
use folio::reveal::Motion;
use folio::scroll::Section;
use folio_browser::reveal::Revealed;
use folio_browser::scroll;
use folio_browser::zoon::*;

use crate::theme::{ACCENT_GRADIENT, ThemeSwitch};

const CONTENT_MAX_WIDTH: &str = "1152px";

pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Github => "🐙",
        Icon::Linkedin => "💼",
        Icon::Mail => "✉️",
        Icon::Discord => "💬",
        Icon::Brain => "🧠",
        Icon::Cloud => "☁️",
        Icon::Code => "💻",
        Icon::Rocket => "🚀",
        Icon::Briefcase => "🧳",
        Icon::Award => "🏆",
        Icon::Paper => "📄",
    }
}

/// Anchored page section; `content` fades in the first time it scrolls into view.
pub fn section<E: Element>(section: Section, revealed: &Revealed, content: E) -> impl Element + use<E> {
    El::new()
        .s(Width::fill())
        .s(Padding::new().x(16).y(80))
        .update_raw_el(|raw_el| raw_el.attr("id", section.id()))
        .child(
            El::new()
                .s(Width::fill())
                .s(Align::new().center_x())
                .update_raw_el(|raw_el| {
                    revealed.section(raw_el.style("max-width", CONTENT_MAX_WIDTH), Motion::rise())
                })
                .child(content),
        )
}

/// Element that transitions in with `motion` once `revealed` flips.
pub fn reveal<E: Element>(revealed: &Revealed, motion: Motion, content: E) -> impl Element + use<E> {
    El::new()
        .update_raw_el(|raw_el| revealed.animate(raw_el, motion))
        .child(content)
}

pub fn gradient_text(text: &'static str, gradient: &'static str) -> impl Element + use<> {
    El::new().child(text).update_raw_el(move |raw_el| {
        raw_el
            .style("display", "inline-block")
            .style("background", gradient)
            .style("-webkit-background-clip", "text")
            .style("background-clip", "text")
            .style("color", "transparent")
    })
}

pub fn heading(theme: &ThemeSwitch, heading: &Heading) -> impl Element + use<> {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(16))
        .s(Padding::new().bottom(48))
        .item(
            Paragraph::new()
                .s(Font::new()
                    .size(40)
                    .weight(FontWeight::Bold)
                    .center()
                    .color_signal(theme.heading_text()))
                .content(heading.lead)
                .content(gradient_text(heading.accent, ACCENT_GRADIENT)),
        )
        .item(heading.subtitle.map(|subtitle| {
            Paragraph::new()
                .s(Font::new().size(18).center().color_signal(theme.muted_text()))
                .s(Align::new().center_x())
                .update_raw_el(|raw_el| raw_el.style("max-width", "640px"))
                .content(subtitle)
        }))
}

pub fn sub_heading(theme: &ThemeSwitch, text: &'static str) -> impl Element + use<> {
    El::new()
        .s(Padding::new().bottom(24))
        .s(Font::new()
            .size(24)
            .weight(FontWeight::SemiBold)
            .color_signal(theme.heading_text()))
        .child(text)
}

pub fn paragraph(theme: &ThemeSwitch, text: &'static str) -> impl Element + use<> {
    Paragraph::new()
        .s(Font::new().size(16).line_height(26).color_signal(theme.body_text()))
        .content(text)
}

/// Translucent rounded panel.
pub fn card<E: Element>(theme: &ThemeSwitch, content: E) -> impl Element + use<E> {
    let hovered = Mutable::new(false);
    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .s(Padding::all(24))
        .s(RoundedCorners::all(12))
        .s(Background::new().color_signal(map_ref! {
            let hovered = hovered.signal(),
            let idle = theme.card_background(),
            let lifted = theme.card_hover_background() =>
            if *hovered { *lifted } else { *idle }
        }))
        .s(Transform::with_signal_self(
            hovered.signal().map_true(|| Transform::new().move_up(4)),
        ))
        .update_raw_el(|raw_el| {
            raw_el
                .style_signal("border", theme.border())
                .style("backdrop-filter", "blur(8px)")
                .style("transition", "transform 0.3s ease, background-color 0.3s ease")
        })
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .child(content)
}

pub fn chip(theme: &ThemeSwitch, text: String) -> impl Element + use<> {
    El::new()
        .s(Padding::new().x(10).y(4))
        .s(RoundedCorners::all_max())
        .s(Font::new().size(13).color_signal(theme.body_text()))
        .s(Background::new().color_signal(theme.chip_background()))
        .child(text)
}

/// Turns a container into a responsive grid whose cells are at least
/// `min_cell_px` wide.
pub fn grid(
    raw_el: RawHtmlEl<web_sys::HtmlElement>,
    min_cell_px: u32,
    gap_px: u32,
) -> RawHtmlEl<web_sys::HtmlElement> {
    raw_el
        .style("display", "grid")
        .style(
            "grid-template-columns",
            &format!("repeat(auto-fit, minmax(min({min_cell_px}px, 100%), 1fr))"),
        )
        .style("gap", &format!("{gap_px}px"))
}

/// Off-site link opened in a new tab without an opener reference.
pub fn external_link<E: Element>(href: &'static str, label: E) -> impl Element + use<E> {
    Link::new()
        .label(label)
        .to(href)
        .new_tab(NewTab::new())
        .update_raw_el(|raw_el| raw_el.attr("rel", "noopener noreferrer"))
}

pub fn round_icon(theme: &ThemeSwitch, icon: Icon, label: &'static str) -> impl Element + use<> {
    let hovered = Mutable::new(false);
    El::new()
        .s(Width::exact(48))
        .s(Height::exact(48))
        .s(RoundedCorners::all_max())
        .s(Font::new().size(20).center())
        .s(Background::new().color_signal(map_ref! {
            let hovered = hovered.signal(),
            let idle = theme.chip_background() =>
            if *hovered { color!("#9333ea") } else { *idle }
        }))
        .s(Transform::with_signal_self(
            hovered.signal().map_true(|| Transform::new().scale(110)),
        ))
        .update_raw_el(|raw_el| {
            raw_el
                .attr("aria-label", label)
                .attr("title", label)
                .style("display", "flex")
                .style("align-items", "center")
                .style("justify-content", "center")
                .style("transition", "all 0.3s ease")
        })
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .child(glyph(icon))
}

/// Filled call-to-action button.
pub fn accent_button<F>(label: &'static str, on_press: F) -> impl Element + use<F>
where
    F: FnMut() + 'static,
{
    let hovered = Mutable::new(false);
    Button::new()
        .s(Padding::new().x(28).y(12))
        .s(RoundedCorners::all(10))
        .s(Font::new()
            .size(16)
            .weight(FontWeight::SemiBold)
            .color(color!("#ffffff")))
        .s(Transform::with_signal_self(
            hovered.signal().map_true(|| Transform::new().move_up(2)),
        ))
        .update_raw_el(|raw_el| raw_el.style("background", ACCENT_GRADIENT))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(label)
        .on_press(on_press)
}

/// Glyph on a rounded gradient tile.
pub fn icon_tile(icon: Icon, gradient: &str, size_px: u32) -> impl Element + use<> {
    El::new()
        .s(Width::exact(size_px))
        .s(Height::exact(size_px))
        .s(RoundedCorners::all(12))
        .s(Font::new().size(size_px / 2).center())
        .update_raw_el(|raw_el| {
            raw_el
                .style("background", gradient)
                .style("display", "flex")
                .style("align-items", "center")
                .style("justify-content", "center")
        })
        .child(glyph(icon))
}

/// Bold title over muted text, the usual card body.
pub fn titled(
    theme: &ThemeSwitch,
    title: &'static str,
    description: &'static str,
) -> impl Element + use<> {
    Column::new()
        .s(Gap::new().y(8))
        .item(
            Paragraph::new()
                .s(Font::new()
                    .size(18)
                    .weight(FontWeight::SemiBold)
                    .color_signal(theme.heading_text()))
                .content(title),
        )
        .item(
            Paragraph::new()
                .s(Font::new().size(14).line_height(22).color_signal(theme.muted_text()))
                .content(description),
        )
}

/// Round social badge: scrolls for `#section` links, opens a new tab for
/// off-site ones.
pub fn social_link(theme: &ThemeSwitch, link: &'static SocialLink) -> impl Element + use<> {
    let badge = round_icon(theme, link.icon, link.label);
    match link.section() {
        Some(section) => Button::new()
            .label(badge)
            .on_press(move || scroll::scroll_to_section(section))
            .unify(),
        None if link.is_external() => external_link(link.href, badge).unify(),
        None => Link::new().label(badge).to(link.href).unify(),
    }
}
