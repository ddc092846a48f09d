use folio::content::{HIGHLIGHTS, PROFILE};
use folio::reveal::{Entrance, Motion};
use folio::scroll::Section;
use folio_browser::reveal::Revealed;
use folio_browser::zoon::*;

use crate::theme::{BADGE_GRADIENT, ThemeSwitch};
use crate::widgets::{card, grid, heading, icon_tile, paragraph, reveal, section, titled};

pub fn about(theme: &ThemeSwitch) -> impl Element + use<> {
    let revealed = Revealed::new();
    let story = Column::new()
        .s(Gap::new().y(24))
        .items(PROFILE.about.iter().map(|text| paragraph(theme, text)));
    let highlights = Column::new()
        .update_raw_el(|raw_el| grid(raw_el, 200, 24))
        .items(HIGHLIGHTS.iter().enumerate().map(|(index, highlight)| {
            reveal(
                &revealed,
                Motion::new(Entrance::Rise(30.), 600).stagger(600, 100, index),
                card(
                    theme,
                    Column::new()
                        .s(Gap::new().y(12))
                        .item(icon_tile(highlight.icon, BADGE_GRADIENT, 48))
                        .item(titled(theme, highlight.title, highlight.description)),
                ),
            )
        }));
    section(
        Section::About,
        &revealed,
        Column::new()
            .s(Width::fill())
            .item(heading(theme, &PROFILE.about_heading))
            .item(
                Row::new()
                    .s(Width::fill())
                    .update_raw_el(|raw_el| grid(raw_el, 420, 64).style("align-items", "center"))
                    .item(reveal(
                        &revealed,
                        Motion::new(Entrance::Slide(-50.), 800).delay(200),
                        story,
                    ))
                    .item(reveal(
                        &revealed,
                        Motion::new(Entrance::Slide(50.), 800).delay(400),
                        highlights,
                    )),
            ),
    )
}
