//! Contact form timing, driven by a virtual clock

use folio::clock::VirtualClock;
use folio::contact::{
    ContactForm, Field, FormStatus, RESULT_WINDOW_MS, SENDING_WINDOW_MS, SubmitError, Ticket,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Delivered(Ticket),
    Failed(Ticket),
    Reset(Ticket),
}

struct Harness {
    form: ContactForm,
    clock: VirtualClock<Step>,
    rng: SmallRng,
}

impl Harness {
    fn new() -> Self {
        let mut form = ContactForm::new();
        for (field, value) in [
            (Field::Name, "Grace"),
            (Field::Email, "grace@example.com"),
            (Field::Subject, "Compilers"),
            (Field::Message, "Fancy a chat?"),
        ] {
            form.update(field, value);
        }
        Self {
            form,
            clock: VirtualClock::new(),
            rng: SmallRng::seed_from_u64(11),
        }
    }

    fn submit(&mut self, outcome_ok: bool) -> Ticket {
        let now = self.clock.now_ms();
        let (ticket, _message) = self.form.submit(now, &mut self.rng).unwrap();
        let step = if outcome_ok {
            Step::Delivered(ticket)
        } else {
            Step::Failed(ticket)
        };
        self.clock.schedule(u64::from(SENDING_WINDOW_MS), step);
        ticket
    }

    fn advance(&mut self, ms: u64) {
        for (_, step) in self.clock.advance_by(ms) {
            match step {
                Step::Delivered(ticket) => {
                    if self.form.complete(ticket, Ok(())) {
                        self.clock
                            .schedule(u64::from(RESULT_WINDOW_MS), Step::Reset(ticket));
                    }
                }
                Step::Failed(ticket) => {
                    let failure = Err(SubmitError::Unreachable("offline".into()));
                    if self.form.complete(ticket, failure) {
                        self.clock
                            .schedule(u64::from(RESULT_WINDOW_MS), Step::Reset(ticket));
                    }
                }
                Step::Reset(ticket) => {
                    self.form.reset(ticket);
                }
            }
        }
    }
}

#[test]
fn idle_sending_success_idle() {
    let mut harness = Harness::new();
    harness.submit(true);
    assert_eq!(harness.form.status(), FormStatus::Sending);

    harness.advance(1999);
    assert_eq!(harness.form.status(), FormStatus::Sending);
    assert_eq!(harness.form.fields().name, "Grace");

    // Fields are cleared exactly at the success transition
    harness.advance(1);
    assert_eq!(harness.form.status(), FormStatus::Success);
    assert!(harness.form.fields().is_empty());

    harness.advance(2999);
    assert_eq!(harness.form.status(), FormStatus::Success);
    harness.advance(1);
    assert_eq!(harness.form.status(), FormStatus::Idle);
    assert!(!harness.clock.has_pending_timers());
}

#[test]
fn failure_keeps_fields_then_returns_to_idle() {
    let mut harness = Harness::new();
    harness.submit(false);
    harness.advance(2000);
    assert_eq!(harness.form.status(), FormStatus::Error);
    assert_eq!(harness.form.status().button_label(), "Try Again");
    assert_eq!(harness.form.fields().subject, "Compilers");

    harness.advance(3000);
    assert_eq!(harness.form.status(), FormStatus::Idle);
}

#[test]
fn retry_from_error_invalidates_old_reset() {
    let mut harness = Harness::new();
    harness.submit(false);
    harness.advance(2000);
    assert_eq!(harness.form.status(), FormStatus::Error);

    // Retry while the error's reset timer is still pending
    harness.advance(500);
    harness.submit(true);
    harness.advance(2500);
    // The stale reset fired at 5000 ms and was ignored
    assert_eq!(harness.form.status(), FormStatus::Success);
}

#[test]
fn teardown_ignores_pending_completion() {
    let mut harness = Harness::new();
    harness.submit(true);
    harness.advance(1000);
    harness.form.abandon();

    harness.advance(10_000);
    assert_eq!(harness.form.status(), FormStatus::Idle);
    assert_eq!(harness.form.fields().email, "grace@example.com");
}
