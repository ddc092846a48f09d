use std::cell::RefCell;
use std::rc::Rc;

use folio::contact::{
    ContactForm, ContactTransport, Field, FormFields, FormStatus, RESULT_WINDOW_MS, SUCCESS_NOTICE,
};
use folio::content::{CONTACT_HEADING, CONTACT_INFO, CONTACT_SOCIALS, ContactInfo};
use folio::reveal::{Entrance, Motion};
use folio::scroll::Section;
use folio_browser::listener::EventListener;
use folio_browser::media;
use folio_browser::reveal::Revealed;
use folio_browser::transport::SimulatedTransport;
use folio_browser::zoon::wasm_bindgen::JsCast;
use folio_browser::zoon::{eprintln, println, *};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::theme::{ACCENT_GRADIENT, ThemeSwitch};
use crate::widgets::{card, grid, heading, icon_tile, reveal, section, social_link, sub_heading};

/// Contact details plus the message form.
#[derive(Clone)]
pub struct Contact {
    theme: ThemeSwitch,
    revealed: Revealed,
    form: Rc<RefCell<ContactForm>>,
    status: Mutable<FormStatus>,
    fields: Mutable<FormFields>,
    problem: Mutable<Option<String>>,
    transport: Rc<dyn ContactTransport>,
    rng: Rc<RefCell<SmallRng>>,
    in_flight: Rc<RefCell<Option<TaskHandle>>>,
}

impl Contact {
    pub fn new(theme: ThemeSwitch) -> Self {
        let rng = SmallRng::try_from_os_rng().unwrap_or_else(|error| {
            eprintln!("[CONTACT] no OS entropy ({error}), seeding from the clock");
            SmallRng::seed_from_u64(media::now_ms())
        });
        Self {
            theme,
            revealed: Revealed::new(),
            form: Rc::default(),
            status: Mutable::default(),
            fields: Mutable::default(),
            problem: Mutable::new(None),
            transport: Rc::new(SimulatedTransport::default()),
            rng: Rc::new(RefCell::new(rng)),
            in_flight: Rc::default(),
        }
    }

    /// Publishes the model state to the view.
    fn sync(&self) {
        let form = self.form.borrow();
        self.status.set_neq(form.status());
        self.fields.set_neq(form.fields().clone());
    }

    fn edit(&self, field: Field, value: String) {
        self.form.borrow_mut().update(field, value);
        self.problem.set_neq(None);
        self.sync();
    }

    fn submit(&self) {
        let submitted = {
            let mut rng = self.rng.borrow_mut();
            self.form.borrow_mut().submit(media::now_ms(), &mut *rng)
        };
        let (ticket, message) = match submitted {
            Ok(submitted) => submitted,
            Err(error) => {
                eprintln!("[CONTACT] submit refused: {error}");
                self.problem.set(Some(error.to_string()));
                return;
            }
        };
        self.sync();
        println!("[CONTACT] submitting {}", message.id);

        let this = self.clone();
        let task = Task::start_droppable(async move {
            let outcome = this.transport.send(message).await;
            let failure = outcome.as_ref().err().map(|error| error.to_string());
            if !this.form.borrow_mut().complete(ticket, outcome) {
                return;
            }
            if let Some(failure) = failure {
                eprintln!("[CONTACT] {failure}");
                this.problem.set(Some(failure));
            }
            this.sync();
            Timer::sleep(RESULT_WINDOW_MS).await;
            if this.form.borrow_mut().reset(ticket) {
                this.sync();
            }
        });
        // Replacing the handle cancels a previous result window
        *self.in_flight.borrow_mut() = Some(task);
    }

    fn teardown(&self) {
        self.form.borrow_mut().abandon();
        drop(self.in_flight.borrow_mut().take());
    }

    pub fn root(&self) -> impl Element + use<> {
        El::new()
            .s(Width::fill())
            .update_raw_el({
                let this = self.clone();
                move |raw_el| raw_el.after_remove(move |_| this.teardown())
            })
            .child(section(
                Section::Contact,
                &self.revealed,
                Column::new()
                    .s(Width::fill())
                    .item(heading(&self.theme, &CONTACT_HEADING))
                    .item(
                        Row::new()
                            .s(Width::fill())
                            .update_raw_el(|raw_el| {
                                grid(raw_el, 400, 48).style("align-items", "start")
                            })
                            .item(reveal(
                                &self.revealed,
                                Motion::new(Entrance::Slide(-50.), 800).delay(200),
                                self.details(),
                            ))
                            .item(reveal(
                                &self.revealed,
                                Motion::new(Entrance::Slide(50.), 800).delay(400),
                                card(&self.theme, self.form_panel()),
                            )),
                    ),
            ))
    }

    fn details(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(32))
            .item(
                Column::new()
                    .s(Gap::new().y(24))
                    .item(sub_heading(&self.theme, "Contact Information"))
                    .items(CONTACT_INFO.iter().map(|info| card(&self.theme, info_row(&self.theme, info)))),
            )
            .item(
                Column::new()
                    .item(sub_heading(&self.theme, "Follow Me"))
                    .item(
                        Row::new()
                            .s(Gap::new().x(16))
                            .items(CONTACT_SOCIALS.iter().map(|link| social_link(&self.theme, link))),
                    ),
            )
    }

    fn form_panel(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(24))
            .item(sub_heading(&self.theme, "Send a Message"))
            .item(
                Row::new()
                    .s(Width::fill())
                    .update_raw_el(|raw_el| grid(raw_el, 200, 24))
                    .item(self.input(Field::Name, "text"))
                    .item(self.input(Field::Email, "email")),
            )
            .item(self.input(Field::Subject, "text"))
            .item(self.message_area())
            .item(self.send_button())
            .item_signal(
                self.problem
                    .signal_cloned()
                    .map(|problem| problem.map(|problem| notice(problem, false))),
            )
            .item_signal(self.status.signal().map(|status| {
                (status == FormStatus::Success).then(|| notice(SUCCESS_NOTICE.to_owned(), true))
            }))
    }

    fn field_label(&self, field: Field) -> impl Element + use<> {
        El::new()
            .s(Padding::new().bottom(8))
            .s(Font::new()
                .size(14)
                .weight(FontWeight::Medium)
                .color_signal(self.theme.body_text()))
            .child(field.label())
    }

    fn field_text(&self, field: Field) -> impl Signal<Item = String> + use<> {
        self.fields.signal_ref(move |fields| fields.get(field).to_owned())
    }

    fn input(&self, field: Field, input_type: &'static str) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .item(self.field_label(field))
            .item(
                TextInput::new()
                    .s(Width::fill())
                    .s(Padding::new().x(16).y(12))
                    .s(RoundedCorners::all(8))
                    .s(Font::new().size(16).color_signal(self.theme.heading_text()))
                    .s(Background::new().color_signal(self.theme.chip_background()))
                    .update_raw_el(|raw_el| {
                        raw_el
                            .attr("type", input_type)
                            .attr("name", field.input_id())
                            .attr("required", "")
                            .style_signal("border", self.theme.border())
                    })
                    .id(field.input_id())
                    .label_hidden(field.label())
                    .placeholder(Placeholder::new(field.placeholder()))
                    .text_signal(self.field_text(field))
                    .on_change({
                        let this = self.clone();
                        move |text| this.edit(field, text)
                    }),
            )
    }

    fn message_area(&self) -> impl Element + use<> {
        let field = Field::Message;
        let listener: Rc<RefCell<Option<EventListener>>> = Rc::default();
        Column::new()
            .s(Width::fill())
            .item(self.field_label(field))
            .item(
                RawHtmlEl::new("textarea")
                    .attr("id", field.input_id())
                    .attr("name", field.input_id())
                    .attr("rows", "6")
                    .attr("required", "")
                    .attr("placeholder", field.placeholder())
                    .attr("aria-label", field.label())
                    .style("width", "100%")
                    .style("box-sizing", "border-box")
                    .style("padding", "12px 16px")
                    .style("border-radius", "8px")
                    .style("font-size", "16px")
                    .style("font-family", "inherit")
                    .style("resize", "none")
                    .style_signal("border", self.theme.border())
                    .style_signal("color", self.theme.pick("#ffffff", "#111827"))
                    .style_signal("background-color", self.theme.pick("#374151", "#f3f4f6"))
                    .prop_signal("value", self.field_text(field))
                    .after_insert({
                        let this = self.clone();
                        let listener = listener.clone();
                        move |element| {
                            let typing = EventListener::new(element.into(), "input", move |event| {
                                let value = event
                                    .target()
                                    .and_then(|target| target.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
                                    .map(|area| area.value());
                                if let Some(value) = value {
                                    this.edit(field, value);
                                }
                            });
                            *listener.borrow_mut() = Some(typing);
                        }
                    })
                    .after_remove(move |_| drop(listener.borrow_mut().take())),
            )
    }

    fn send_button(&self) -> impl Element + use<> {
        let hovered = Mutable::new(false);
        Button::new()
            .s(Width::fill())
            .s(Padding::new().y(16))
            .s(RoundedCorners::all(8))
            .s(Font::new()
                .size(16)
                .weight(FontWeight::SemiBold)
                .center()
                .color(color!("#ffffff")))
            .s(Transform::with_signal_self(map_ref! {
                let hovered = hovered.signal(),
                let status = self.status.signal() =>
                (*hovered && status.accepts_submit()).then(|| Transform::new().scale(102))
            }))
            .update_raw_el(|raw_el| {
                raw_el
                    .style("transition", "all 0.3s ease")
                    .style_signal("background", self.status.signal().map(status_background))
                    .style_signal(
                        "cursor",
                        self.status
                            .signal()
                            .map(|status| if status.accepts_submit() { "pointer" } else { "not-allowed" }),
                    )
                    .attr_signal(
                        "disabled",
                        self.status
                            .signal()
                            .map(|status| (!status.accepts_submit()).then_some("")),
                    )
            })
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .label_signal(self.status.signal().map(|status| {
                format!("{} {}", status_glyph(status), status.button_label())
            }))
            .on_press({
                let this = self.clone();
                move || this.submit()
            })
    }
}

fn status_background(status: FormStatus) -> &'static str {
    match status {
        FormStatus::Idle => ACCENT_GRADIENT,
        FormStatus::Sending => "#9ca3af",
        FormStatus::Success => "#22c55e",
        FormStatus::Error => "#ef4444",
    }
}

fn status_glyph(status: FormStatus) -> &'static str {
    match status {
        FormStatus::Idle => "➤",
        FormStatus::Sending => "⏳",
        FormStatus::Success => "✔",
        FormStatus::Error => "⚠",
    }
}

fn notice(text: String, success: bool) -> impl Element + use<> {
    let (background, border, color) = if success {
        ("rgba(34, 197, 94, 0.2)", "1px solid rgba(34, 197, 94, 0.3)", color!("#16a34a"))
    } else {
        ("rgba(239, 68, 68, 0.15)", "1px solid rgba(239, 68, 68, 0.3)", color!("#dc2626"))
    };
    El::new()
        .s(Width::fill())
        .s(Padding::all(16))
        .s(RoundedCorners::all(8))
        .s(Font::new().size(15).weight(FontWeight::Medium).center().color(color))
        .update_raw_el(|raw_el| {
            raw_el
                .attr("role", "status")
                .style("background", background)
                .style("border", border)
        })
        .child(text)
}

fn info_row(theme: &ThemeSwitch, info: &'static ContactInfo) -> impl Element + use<> {
    Row::new()
        .s(Gap::new().x(16))
        .item(icon_tile(info.icon, &info.gradient.css(135), 48))
        .item(
            Column::new()
                .s(Gap::new().y(4))
                .item(
                    El::new()
                        .s(Font::new()
                            .size(17)
                            .weight(FontWeight::SemiBold)
                            .color_signal(theme.heading_text()))
                        .child(info.title),
                )
                .item(
                    El::new()
                        .s(Font::new().size(15).weight(FontWeight::Medium).color(color!("#9333ea")))
                        .child(info.value),
                )
                .item(
                    El::new()
                        .s(Font::new().size(13).color_signal(theme.muted_text()))
                        .child(info.description),
                ),
        )
}
