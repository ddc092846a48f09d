use folio::content::{SKILL_CATEGORIES, SKILLS_HEADING, SOFT_SKILLS, Skill};
use folio::reveal::{Entrance, Motion};
use folio::scroll::Section;
use folio_browser::reveal::Revealed;
use folio_browser::zoon::*;

use crate::theme::ThemeSwitch;
use crate::widgets::{card, grid, heading, reveal, section, sub_heading};

pub fn skills(theme: &ThemeSwitch) -> impl Element + use<> {
    let revealed = Revealed::new();
    let categories = Column::new()
        .s(Width::fill())
        .update_raw_el(|raw_el| grid(raw_el, 420, 48))
        .items(SKILL_CATEGORIES.iter().enumerate().map(|(index, category)| {
            reveal(
                &revealed,
                Motion::rise().stagger(0, 200, index),
                card(
                    theme,
                    Column::new()
                        .item(sub_heading(theme, category.title))
                        .item(
                            Row::new()
                                .s(Gap::both(16))
                                .multiline()
                                .items(category.skills.iter().enumerate().map(
                                    |(index, skill)| {
                                        reveal(
                                            &revealed,
                                            Motion::new(Entrance::Grow(0.8), 500)
                                                .stagger(0, 100, index),
                                            pill(theme, skill),
                                        )
                                    },
                                )),
                        ),
                ),
            )
        }));
    let soft_skills = Column::new()
        .s(Padding::new().top(64))
        .s(Align::new().center_x())
        .item(El::new().s(Align::new().center_x()).child(sub_heading(theme, "Soft Skills")))
        .item(
            Row::new()
                .s(Gap::both(16))
                .s(Align::new().center_x())
                .multiline()
                .items(SOFT_SKILLS.iter().enumerate().map(|(index, name)| {
                    reveal(
                        &revealed,
                        Motion::new(Entrance::Grow(0.8), 500).stagger(1000, 100, index),
                        pill(theme, &Skill { name: *name, level: 0, icons: &[] }),
                    )
                })),
        );
    section(
        Section::Skills,
        &revealed,
        Column::new()
            .s(Width::fill())
            .item(heading(theme, &SKILLS_HEADING))
            .item(categories)
            .item(reveal(&revealed, Motion::rise().delay(800), soft_skills)),
    )
}

fn pill(theme: &ThemeSwitch, skill: &Skill) -> impl Element + use<> {
    let hovered = Mutable::new(false);
    let name = skill.name;
    Row::new()
        .s(Padding::new().x(24).y(12))
        .s(Gap::new().x(8))
        .s(RoundedCorners::all_max())
        .s(Font::new()
            .size(16)
            .weight(FontWeight::SemiBold)
            .color_signal(theme.body_text()))
        .s(Background::new().color_signal(theme.card_hover_background()))
        .s(Transform::with_signal_self(
            hovered.signal().map_true(|| Transform::new().move_up(2)),
        ))
        .update_raw_el(|raw_el| {
            let raw_el = raw_el
                .class("cursor-pointer")
                .style("transition", "all 0.3s ease")
                .style_signal(
                    "border",
                    map_ref! {
                        let hovered = hovered.signal(),
                        let dark = theme.is_dark() =>
                        match (*hovered, *dark) {
                            (true, _) => "2px solid #a855f7",
                            (false, true) => "2px solid #4b5563",
                            (false, false) => "2px solid #d1d5db",
                        }
                    },
                );
            if skill.level > 0 {
                raw_el.attr("title", &format!("{}%", skill.level))
            } else {
                raw_el
            }
        })
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .items(skill.icons.iter().map(move |src| {
            Image::new()
                .s(Width::exact(24))
                .s(Height::exact(24))
                .url(*src)
                .description(name)
        }))
        .item(name)
}
