//! Runs in a headless browser: `wasm-pack test --headless --firefox crates/folio-browser`

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use folio::contact::{ContactMessage, ContactTransport, FormFields};
use folio::storage::KeyValueStorage;
use folio::theme::{THEME_STORAGE_KEY, Theme, ThemeContext};
use folio_browser::render_loop::{RenderLoop, next_animation_frame};
use folio_browser::storage::LocalStorage;
use folio_browser::timer;
use folio_browser::transport::SimulatedTransport;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen_test::*;
use zoon::Timer;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_keeps_raw_strings() {
    let storage = LocalStorage;
    storage.remove(THEME_STORAGE_KEY).unwrap();

    let context = ThemeContext::load(Rc::new(storage), false);
    assert_eq!(context.toggle(), Ok(Theme::Dark));
    assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));

    storage.remove(THEME_STORAGE_KEY).unwrap();
}

#[wasm_bindgen_test]
async fn dropped_timer_never_fires() {
    let fired = Rc::new(Cell::new(false));
    let handle = timer::after(20, {
        let fired = fired.clone();
        move || fired.set(true)
    });
    drop(handle);
    Timer::sleep(60).await;
    assert!(!fired.get());
}

#[wasm_bindgen_test]
async fn render_loop_stops_on_drop() {
    let frames = Rc::new(Cell::new(0u32));
    let render_loop = RenderLoop::start({
        let frames = frames.clone();
        move |_| frames.set(frames.get() + 1)
    });
    for _ in 0..3 {
        next_animation_frame().await;
    }
    assert!(render_loop.is_running());
    drop(render_loop);

    let seen = frames.get();
    for _ in 0..3 {
        next_animation_frame().await;
    }
    assert_eq!(frames.get(), seen);
}

#[wasm_bindgen_test]
async fn render_loop_pauses_while_hidden_and_resumes() {
    let frames = Rc::new(Cell::new(0u32));
    let render_loop = RenderLoop::start({
        let frames = frames.clone();
        move |_| frames.set(frames.get() + 1)
    });
    for _ in 0..3 {
        next_animation_frame().await;
    }

    render_loop.pause();
    assert!(!render_loop.is_running());
    let paused_at = frames.get();
    for _ in 0..4 {
        next_animation_frame().await;
    }
    assert_eq!(frames.get(), paused_at);

    render_loop.resume();
    assert!(render_loop.is_running());
    // A second resume must not start a parallel loop
    render_loop.resume();
    for _ in 0..4 {
        next_animation_frame().await;
    }
    let resumed = frames.get() - paused_at;
    assert!(resumed > 0);
    assert!(resumed <= 5);
}

#[wasm_bindgen_test]
async fn simulated_transport_succeeds() {
    let mut rng = SmallRng::seed_from_u64(3);
    let fields = FormFields {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hi".into(),
        message: "Hello".into(),
    };
    let message = ContactMessage::new(fields, 0, &mut rng);
    let outcome = SimulatedTransport::with_delay(10).send(message).await;
    assert_eq!(outcome, Ok(()));
}
