use folio::content::{TECH_STACK, TECH_STACK_HEADING, Tech, TechCategory};
use folio::reveal::{Entrance, Motion};
use folio_browser::reveal::Revealed;
use folio_browser::zoon::*;

use crate::theme::ThemeSwitch;
use crate::widgets::{heading, reveal};

/// Narrow screens fall back to this many columns.
const NARROW_COLUMNS: u32 = 3;

pub fn tech_stack(theme: &ThemeSwitch, wide: &Mutable<bool>) -> impl Element + use<> {
    let revealed = Revealed::new();
    El::new()
        .s(Width::fill())
        .s(Padding::new().x(16).y(80))
        .child(
            Column::new()
                .s(Width::fill())
                .s(Align::new().center_x())
                .s(Gap::new().y(48))
                .update_raw_el(|raw_el| {
                    revealed.section(raw_el.style("max-width", "1152px"), Motion::rise())
                })
                .item(heading(theme, &TECH_STACK_HEADING))
                .items(TECH_STACK.iter().enumerate().map(|(index, category)| {
                    reveal(
                        &revealed,
                        Motion::new(Entrance::Rise(30.), 600).stagger(0, 100, index),
                        category_block(theme, wide, &revealed, index, category),
                    )
                })),
        )
}

fn category_block(
    theme: &ThemeSwitch,
    wide: &Mutable<bool>,
    revealed: &Revealed,
    category_index: usize,
    category: &'static TechCategory,
) -> impl Element + use<> {
    let columns = category.columns();
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(32))
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new()
                    .size(24)
                    .weight(FontWeight::Bold)
                    .color_signal(theme.heading_text()))
                .child(category.title),
        )
        .item(
            Column::new()
                .s(Width::fill())
                .update_raw_el(|raw_el| {
                    raw_el
                        .style("display", "grid")
                        .style("gap", "16px")
                        .style_signal(
                            "grid-template-columns",
                            wide.signal().map(move |wide| {
                                let count = if wide { columns } else { NARROW_COLUMNS.min(columns) };
                                format!("repeat({count}, minmax(0, 1fr))")
                            }),
                        )
                })
                .items(category.technologies.iter().enumerate().map(|(index, tech)| {
                    let delay = category_index as u32 * 100 + index as u32 * 50;
                    reveal(
                        revealed,
                        Motion::new(Entrance::Grow(0.8), 500).delay(delay),
                        tech_card(theme, tech),
                    )
                })),
        )
}

fn tech_card(theme: &ThemeSwitch, tech: &'static Tech) -> impl Element + use<> {
    let hovered = Mutable::new(false);
    let glow = tech.gradient.from;
    Column::new()
        .s(Width::fill())
        .s(Padding::all(24))
        .s(Gap::new().y(12))
        .s(RoundedCorners::all(16))
        .s(Background::new().color_signal(map_ref! {
            let hovered = hovered.signal(),
            let idle = theme.card_background(),
            let lifted = theme.card_hover_background() =>
            if *hovered { *lifted } else { *idle }
        }))
        .s(Transform::with_signal_self(
            hovered
                .signal()
                .map_true(|| Transform::new().move_up(5).scale(105)),
        ))
        .update_raw_el(|raw_el| {
            raw_el
                .class("cursor-pointer")
                .style_signal("border", theme.border())
                .style("backdrop-filter", "blur(8px)")
                .style("transition", "all 0.3s ease")
                .style_signal(
                    "box-shadow",
                    hovered.signal().map_bool(
                        move || format!("0 16px 32px -16px {glow}"),
                        || "none".to_owned(),
                    ),
                )
        })
        .on_hovered_change({
            let hovered = hovered.clone();
            move |is_hovered| hovered.set_neq(is_hovered)
        })
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new().size(36))
                .s(Transform::with_signal_self(
                    hovered.signal().map_true(|| Transform::new().scale(110)),
                ))
                .child(tech.icon),
        )
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new()
                    .size(14)
                    .weight(FontWeight::SemiBold)
                    .center()
                    .color_signal(theme.heading_text()))
                .child(tech.name),
        )
}
