use folio::content::{
    ACHIEVEMENTS, Achievement, CERTIFICATIONS, Certification, EXPERIENCE, EXPERIENCE_HEADING,
    Experience, Icon, Milestone, RESEARCH, Research, TIMELINE,
};
use folio::reveal::{Entrance, Motion};
use folio::scroll::Section;
use folio_browser::reveal::Revealed;
use folio_browser::zoon::*;

use crate::theme::{PROGRESS_GRADIENT, ThemeSwitch};
use crate::widgets::{card, chip, glyph, grid, heading, icon_tile, reveal, section};

const PURPLE_BLUE: &str = "linear-gradient(135deg, #a855f7, #3b82f6)";
const BLUE_TEAL: &str = "linear-gradient(135deg, #3b82f6, #14b8a6)";
const TEAL_GREEN: &str = "linear-gradient(135deg, #14b8a6, #22c55e)";
const ORANGE_RED: &str = "linear-gradient(135deg, #f97316, #ef4444)";

pub fn experience(theme: &ThemeSwitch) -> impl Element + use<> {
    let revealed = Revealed::new();
    section(
        Section::Experience,
        &revealed,
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(64))
            .item(heading(theme, &EXPERIENCE_HEADING))
            .item(group(
                theme,
                &revealed,
                Icon::Briefcase,
                "Professional Experience",
                200,
                Column::new().s(Gap::new().y(24)).items(
                    EXPERIENCE.iter().enumerate().map(|(index, job)| {
                        staggered(&revealed, 300, index, card(theme, job_card(theme, job)))
                    }),
                ),
            ))
            .item(group(
                theme,
                &revealed,
                Icon::Award,
                "Certifications",
                400,
                Column::new().s(Gap::new().y(24)).items(
                    CERTIFICATIONS.iter().enumerate().map(|(index, certification)| {
                        staggered(
                            &revealed,
                            500,
                            index,
                            card(theme, certification_card(theme, certification)),
                        )
                    }),
                ),
            ))
            .item(group(
                theme,
                &revealed,
                Icon::Paper,
                "Research & Publications",
                600,
                Column::new().s(Gap::new().y(24)).items(
                    RESEARCH.iter().enumerate().map(|(index, paper)| {
                        staggered(&revealed, 700, index, card(theme, research_card(theme, paper)))
                    }),
                ),
            ))
            .item(group(
                theme,
                &revealed,
                Icon::Award,
                "Achievements & Hackathons",
                800,
                Column::new()
                    .s(Width::fill())
                    .update_raw_el(|raw_el| grid(raw_el, 360, 24))
                    .items(ACHIEVEMENTS.iter().enumerate().map(|(index, achievement)| {
                        staggered(
                            &revealed,
                            900,
                            index,
                            card(theme, achievement_card(theme, achievement)),
                        )
                    })),
            ))
            .item(group(
                theme,
                &revealed,
                Icon::Rocket,
                "Learning Timeline",
                1000,
                timeline(theme, &revealed),
            )),
    )
}

fn staggered<E: Element>(
    revealed: &Revealed,
    base_ms: u32,
    index: usize,
    content: E,
) -> impl Element + use<E> {
    reveal(
        revealed,
        Motion::new(Entrance::Rise(30.), 600).stagger(base_ms, 100, index),
        content,
    )
}

fn group<E: Element>(
    theme: &ThemeSwitch,
    revealed: &Revealed,
    icon: Icon,
    title: &'static str,
    delay_ms: u32,
    content: E,
) -> impl Element + use<E> {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(32))
        .item(reveal(
            revealed,
            Motion::new(Entrance::Slide(-50.), 600).delay(delay_ms),
            Row::new()
                .s(Gap::new().x(12))
                .s(Font::new()
                    .size(24)
                    .weight(FontWeight::Bold)
                    .color_signal(theme.heading_text()))
                .item(glyph(icon))
                .item(title),
        ))
        .item(content)
}

fn title(theme: &ThemeSwitch, text: &'static str) -> impl Element + use<> {
    Paragraph::new()
        .s(Font::new()
            .size(20)
            .weight(FontWeight::Bold)
            .color_signal(theme.heading_text()))
        .content(text)
}

fn accent_line(text: String, color: Rgba) -> impl Element + use<> {
    El::new()
        .s(Font::new().size(15).weight(FontWeight::SemiBold).color(color))
        .child(text)
}

fn meta(text: &'static str) -> impl Element + use<> {
    El::new()
        .s(Font::new().size(14).color(color!("#6b7280")))
        .child(text)
}

fn body(theme: &ThemeSwitch, text: &'static str) -> impl Element + use<> {
    Paragraph::new()
        .s(Font::new().size(16).line_height(24).color_signal(theme.body_text()))
        .content(text)
}

fn chips(theme: &ThemeSwitch, labels: &'static [&'static str]) -> impl Element + use<> {
    Row::new()
        .s(Gap::both(8))
        .multiline()
        .items(labels.iter().map(|label| chip(theme, label.to_string())))
}

fn job_card(theme: &ThemeSwitch, job: &'static Experience) -> impl Element + use<> {
    Row::new()
        .s(Gap::new().x(24))
        .s(Align::new().top())
        .item(icon_tile(Icon::Briefcase, PURPLE_BLUE, 48))
        .item(
            Column::new()
                .s(Width::fill())
                .s(Gap::new().y(12))
                .item(
                    Row::new()
                        .s(Width::fill())
                        .multiline()
                        .item(
                            Column::new()
                                .item(title(theme, job.title))
                                .item(accent_line(job.company.to_owned(), color!("#9333ea"))),
                        )
                        .item(El::new().s(Align::new().right()).child(meta(job.duration))),
                )
                .item(body(theme, job.description))
                .item(
                    El::new()
                        .s(Font::new()
                            .size(16)
                            .weight(FontWeight::SemiBold)
                            .color_signal(theme.heading_text()))
                        .child("Key Achievements:"),
                )
                .item(
                    Column::new()
                        .s(Gap::new().y(4))
                        .items(job.achievements.iter().map(|achievement| {
                            Row::new()
                                .s(Gap::new().x(8))
                                .s(Font::new().size(14).color_signal(theme.body_text()))
                                .item(
                                    El::new()
                                        .s(Width::exact(6))
                                        .s(Height::exact(6))
                                        .s(RoundedCorners::all_max())
                                        .s(Background::new().color(color!("#9333ea"))),
                                )
                                .item(*achievement)
                        })),
                ),
        )
}

fn certification_card(theme: &ThemeSwitch, certification: &'static Certification) -> impl Element + use<> {
    Row::new()
        .s(Gap::new().x(24))
        .item(icon_tile(Icon::Award, BLUE_TEAL, 48))
        .item(
            Column::new()
                .s(Width::fill())
                .s(Gap::new().y(8))
                .item(
                    Row::new()
                        .s(Width::fill())
                        .multiline()
                        .item(title(theme, certification.title))
                        .item(El::new().s(Align::new().right()).child(meta(certification.year))),
                )
                .item(accent_line(certification.issuer.to_owned(), color!("#2563eb")))
                .item(body(theme, certification.description)),
        )
}

fn research_card(theme: &ThemeSwitch, paper: &'static Research) -> impl Element + use<> {
    Row::new()
        .s(Gap::new().x(24))
        .s(Align::new().top())
        .item(icon_tile(Icon::Paper, TEAL_GREEN, 48))
        .item(
            Column::new()
                .s(Width::fill())
                .s(Gap::new().y(12))
                .item(title(theme, paper.title))
                .item(accent_line(format!("Status: {}", paper.status), color!("#0d9488")))
                .item(body(theme, paper.description))
                .item(chips(theme, paper.keywords)),
        )
}

fn achievement_card(theme: &ThemeSwitch, achievement: &'static Achievement) -> impl Element + use<> {
    Row::new()
        .s(Gap::new().x(16))
        .s(Align::new().top())
        .item(icon_tile(Icon::Award, ORANGE_RED, 40))
        .item(
            Column::new()
                .s(Width::fill())
                .s(Gap::new().y(6))
                .item(
                    Paragraph::new()
                        .s(Font::new()
                            .size(16)
                            .weight(FontWeight::Bold)
                            .color_signal(theme.heading_text()))
                        .content(achievement.title)
                        .content(achievement.placement.map(|placement| {
                            El::new()
                                .s(Padding::new().left(8))
                                .s(Font::new().size(14).color(color!("#ea580c")))
                                .child(format!("({placement})"))
                        })),
                )
                .item(accent_line(
                    format!("{} • {}", achievement.kind, achievement.year),
                    color!("#ea580c"),
                ))
                .item(
                    Paragraph::new()
                        .s(Font::new().size(14).line_height(22).color_signal(theme.body_text()))
                        .content(achievement.description),
                ),
        )
}

fn timeline(theme: &ThemeSwitch, revealed: &Revealed) -> impl Element + use<> {
    Stack::new()
        .s(Width::fill())
        .layer(
            El::new()
                .s(Width::exact(2))
                .s(Height::fill())
                .update_raw_el(|raw_el| {
                    raw_el
                        .style("margin-left", "31px")
                        .style("background", PROGRESS_GRADIENT)
                }),
        )
        .layer(
            Column::new()
                .s(Width::fill())
                .s(Gap::new().y(48))
                .items(TIMELINE.iter().enumerate().map(|(index, milestone)| {
                    reveal(
                        revealed,
                        Motion::new(Entrance::Slide(-50.), 600).stagger(1100, 200, index),
                        milestone_row(theme, milestone),
                    )
                })),
        )
}

fn milestone_row(theme: &ThemeSwitch, milestone: &'static Milestone) -> impl Element + use<> {
    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(32))
        .s(Align::new().top())
        .item(
            El::new()
                .s(Width::exact(64))
                .s(Height::exact(64))
                .s(RoundedCorners::all_max())
                .s(Font::new()
                    .size(13)
                    .weight(FontWeight::Bold)
                    .center()
                    .color(color!("#ffffff")))
                .update_raw_el(|raw_el| {
                    raw_el
                        .style("flex-shrink", "0")
                        .style("background", PURPLE_BLUE)
                        .style("display", "flex")
                        .style("align-items", "center")
                        .style("justify-content", "center")
                })
                .child(milestone.year),
        )
        .item(card(
            theme,
            Column::new()
                .s(Gap::new().y(12))
                .item(title(theme, milestone.title))
                .item(body(theme, milestone.description))
                .item(chips(theme, milestone.technologies)),
        ))
}
