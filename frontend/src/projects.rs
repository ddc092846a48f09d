use folio::content::{MAJOR_PROJECTS, MINOR_PROJECTS, PROJECTS_HEADING, Project};
use folio::reveal::{Entrance, Motion};
use folio::scroll::Section;
use folio_browser::reveal::Revealed;
use folio_browser::zoon::*;

use crate::theme::{ACCENT_GRADIENT, ThemeSwitch};
use crate::widgets::{accent_button, chip, external_link, grid, heading, reveal, section, sub_heading};

#[derive(Clone)]
pub struct Projects {
    theme: ThemeSwitch,
    revealed: Revealed,
    selected: Mutable<Option<&'static Project>>,
}

impl Projects {
    pub fn new(theme: ThemeSwitch) -> Self {
        Self {
            theme,
            revealed: Revealed::new(),
            selected: Mutable::new(None),
        }
    }

    fn open(&self, project: &'static Project) {
        self.selected.set(Some(project));
    }

    fn close(&self) {
        self.selected.set(None);
    }

    pub fn root(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .item(section(
                Section::Projects,
                &self.revealed,
                Column::new()
                    .s(Width::fill())
                    .s(Gap::new().y(64))
                    .item(heading(&self.theme, &PROJECTS_HEADING))
                    .item(self.group("Major Projects", &MAJOR_PROJECTS, 300, 32, 200))
                    .item(self.group("Minor Projects", &MINOR_PROJECTS, 200, 24, 400)),
            ))
            .item_signal(self.selected.signal().map({
                let this = self.clone();
                move |project| project.map(|project| this.modal(project))
            }))
    }

    fn group(
        &self,
        title: &'static str,
        projects: &'static [Project],
        min_cell_px: u32,
        gap_px: u32,
        title_delay_ms: u32,
    ) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .item(reveal(
                &self.revealed,
                Motion::new(Entrance::Slide(-50.), 600).delay(title_delay_ms),
                sub_heading(&self.theme, title),
            ))
            .item(
                Column::new()
                    .s(Width::fill())
                    .update_raw_el(|raw_el| grid(raw_el, min_cell_px, gap_px))
                    .items(projects.iter().enumerate().map(|(index, project)| {
                        reveal(
                            &self.revealed,
                            Motion::new(Entrance::Rise(50.), 600).stagger(0, 100, index),
                            self.card(project),
                        )
                    })),
            )
    }

    fn card(&self, project: &'static Project) -> impl Element + use<> {
        let hovered = Mutable::new(false);
        Column::new()
            .s(Width::fill())
            .s(Height::fill())
            .s(RoundedCorners::all(16))
            .s(Clip::both())
            .s(Background::new().color_signal(self.theme.card_background()))
            .s(Transform::with_signal_self(
                hovered.signal().map_true(|| Transform::new().move_up(10)),
            ))
            .update_raw_el(|raw_el| {
                raw_el
                    .style_signal("border", self.theme.border())
                    .style("backdrop-filter", "blur(8px)")
                    .style("transition", "transform 0.3s ease")
            })
            .on_hovered_change({
                let hovered = hovered.clone();
                move |is_hovered| hovered.set_neq(is_hovered)
            })
            .item(self.card_image(project, hovered))
            .item(
                Column::new()
                    .s(Padding::all(24))
                    .s(Gap::new().y(12))
                    .item(
                        Paragraph::new()
                            .s(Font::new()
                                .size(20)
                                .weight(FontWeight::Bold)
                                .color_signal(self.theme.heading_text()))
                            .content(project.title),
                    )
                    .item(
                        Paragraph::new()
                            .s(Font::new()
                                .size(14)
                                .line_height(22)
                                .color_signal(self.theme.muted_text()))
                            .content(project.description),
                    )
                    .item(
                        Row::new()
                            .s(Gap::both(8))
                            .multiline()
                            .items(
                                project
                                    .visible_technologies()
                                    .iter()
                                    .map(|tech| chip(&self.theme, tech.to_string())),
                            )
                            .item(match project.hidden_technology_count() {
                                0 => None,
                                hidden => Some(chip(&self.theme, format!("+{hidden}"))),
                            }),
                    )
                    .item(self.card_action(project)),
            )
    }

    fn card_image(&self, project: &'static Project, hovered: Mutable<bool>) -> impl Element + use<> {
        Stack::new()
            .s(Width::fill())
            .s(Height::exact(192))
            .s(Clip::both())
            .layer(
                Image::new()
                    .s(Width::fill())
                    .s(Height::fill())
                    .s(Transform::with_signal_self(
                        hovered.signal().map_true(|| Transform::new().scale(110)),
                    ))
                    .update_raw_el(|raw_el| {
                        raw_el
                            .style("object-fit", "cover")
                            .style("transition", "transform 0.7s ease")
                    })
                    .url(project.image)
                    .description(project.title),
            )
            .layer(El::new().s(Width::fill()).s(Height::fill()).update_raw_el(|raw_el| {
                raw_el.style(
                    "background",
                    "linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent)",
                )
            }))
            .layer(project.has_details().then(|| {
                Row::new()
                    .s(Align::new().top().right())
                    .s(Padding::all(16))
                    .s(Gap::new().x(8))
                    .item(overlay_link(project.github, "🐙", "View code"))
                    .item(project.demo.map(|demo| overlay_link(demo, "↗", "Live demo")))
            }))
    }

    fn card_action(&self, project: &'static Project) -> impl Element + use<> {
        if project.has_details() {
            accent_button("▶ View Details", {
                let this = self.clone();
                move || this.open(project)
            })
            .unify()
        } else {
            external_link(
                project.github,
                El::new()
                    .s(Width::fill())
                    .s(Padding::new().y(8))
                    .s(RoundedCorners::all(8))
                    .s(Font::new()
                        .size(14)
                        .weight(FontWeight::Medium)
                        .center()
                        .color_signal(self.theme.body_text()))
                    .s(Background::new().color_signal(self.theme.chip_background()))
                    .child("🐙 Code"),
            )
            .unify()
        }
    }

    fn modal(&self, project: &'static Project) -> impl Element + use<> {
        Stack::new()
            .update_raw_el(|raw_el| {
                raw_el
                    .attr("role", "dialog")
                    .attr("aria-modal", "true")
                    .style("position", "fixed")
                    .style("inset", "0")
                    .style("z-index", "60")
            })
            .layer(
                El::new()
                    .s(Width::fill())
                    .s(Height::fill())
                    .s(Background::new().color(color!("rgba(0, 0, 0, 0.8)")))
                    .update_raw_el(|raw_el| raw_el.style("backdrop-filter", "blur(4px)"))
                    .on_click({
                        let this = self.clone();
                        move || this.close()
                    }),
            )
            .layer(
                Column::new()
                    .s(Align::center())
                    .s(Width::fill())
                    .s(RoundedCorners::all(16))
                    .s(Clip::both())
                    .s(Background::new().color_signal(self.theme.solid_surface()))
                    .s(Shadows::new([Shadow::new()
                        .color(color!("rgba(0, 0, 0, 0.5)"))
                        .y(24)
                        .blur(48)
                        .spread(-12)]))
                    .update_raw_el(|raw_el| {
                        raw_el
                            .style("max-width", "896px")
                            .style("max-height", "90vh")
                            .style("overflow-y", "auto")
                            .style("margin", "16px")
                    })
                    .item(
                        Stack::new()
                            .s(Width::fill())
                            .s(Height::exact(256))
                            .layer(
                                Image::new()
                                    .s(Width::fill())
                                    .s(Height::fill())
                                    .update_raw_el(|raw_el| raw_el.style("object-fit", "cover"))
                                    .url(project.image)
                                    .description(project.title),
                            )
                            .layer(
                                Button::new()
                                    .s(Align::new().top().right())
                                    .s(Padding::all(8))
                                    .s(RoundedCorners::all_max())
                                    .s(Font::new().size(18).color(color!("#ffffff")))
                                    .s(Background::new().color(color!("rgba(0, 0, 0, 0.5)")))
                                    .update_raw_el(|raw_el| {
                                        raw_el
                                            .attr("aria-label", "Close")
                                            .style("margin", "16px")
                                    })
                                    .label("✕")
                                    .on_press({
                                        let this = self.clone();
                                        move || this.close()
                                    }),
                            ),
                    )
                    .item(self.modal_body(project)),
            )
    }

    fn modal_body(&self, project: &'static Project) -> impl Element + use<> {
        Column::new()
            .s(Padding::all(32))
            .s(Gap::new().y(24))
            .item(
                Paragraph::new()
                    .s(Font::new()
                        .size(30)
                        .weight(FontWeight::Bold)
                        .color_signal(self.theme.heading_text()))
                    .content(project.title),
            )
            .item(
                Paragraph::new()
                    .s(Font::new()
                        .size(18)
                        .line_height(28)
                        .color_signal(self.theme.body_text()))
                    .content(project.long_description.unwrap_or(project.description)),
            )
            .item(
                Column::new()
                    .s(Gap::new().y(12))
                    .item(
                        El::new()
                            .s(Font::new()
                                .size(20)
                                .weight(FontWeight::SemiBold)
                                .color_signal(self.theme.heading_text()))
                            .child("Technologies Used"),
                    )
                    .item(
                        Row::new()
                            .s(Gap::both(8))
                            .multiline()
                            .items(
                                project
                                    .technologies
                                    .iter()
                                    .map(|tech| chip(&self.theme, tech.to_string())),
                            ),
                    ),
            )
            .item(
                Row::new()
                    .s(Gap::new().x(16))
                    .item(modal_link(project.github, "🐙 View Code", "#1f2937"))
                    .item(
                        project
                            .demo
                            .map(|demo| modal_link(demo, "↗ Live Demo", ACCENT_GRADIENT)),
                    ),
            )
    }
}

fn overlay_link(href: &'static str, glyph: &'static str, label: &'static str) -> impl Element + use<> {
    external_link(
        href,
        El::new()
            .s(Padding::all(8))
            .s(RoundedCorners::all_max())
            .s(Font::new().size(14).color(color!("#ffffff")))
            .s(Background::new().color(color!("rgba(0, 0, 0, 0.5)")))
            .update_raw_el(|raw_el| raw_el.attr("aria-label", label).attr("title", label))
            .child(glyph),
    )
}

fn modal_link(href: &'static str, label: &'static str, background: &'static str) -> impl Element + use<> {
    El::new().s(Width::fill()).child(external_link(
        href,
        El::new()
            .s(Width::fill())
            .s(Padding::new().y(12))
            .s(RoundedCorners::all(8))
            .s(Font::new()
                .size(16)
                .weight(FontWeight::SemiBold)
                .center()
                .color(color!("#ffffff")))
            .update_raw_el(|raw_el| raw_el.style("background", background))
            .child(label),
    ))
}
