//! Page-level state across reloads and timers

use std::rc::Rc;

use folio::clock::VirtualClock;
use folio::content::{LOADING_DELAY_MS, PROFILE};
use folio::network::{NODE_COUNT_BASE, NODE_COUNT_MAX, NetworkField, node_count};
use folio::reveal::RevealLatch;
use folio::storage::{KeyValueStorage, MemoryStorage};
use folio::theme::{THEME_STORAGE_KEY, Theme, ThemeContext};
use folio::typewriter::{TYPEWRITER_STEP_MS, Typewriter};
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[test]
fn theme_survives_reload() {
    let storage = MemoryStorage::new();

    let first_visit = ThemeContext::load(Rc::new(storage.clone()), true);
    assert_eq!(first_visit.theme(), Theme::Dark);
    first_visit.toggle().unwrap();

    // Platform still prefers dark, but the stored choice wins
    let reload = ThemeContext::load(Rc::new(storage.clone()), true);
    assert_eq!(reload.theme(), Theme::Light);
    assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn unrecognised_theme_value_loads_light() {
    // Platform prefers dark, yet a stored value that isn't `dark` wins
    for stored in ["\"dark\"", "sepia"] {
        let storage = MemoryStorage::with_entry(THEME_STORAGE_KEY, stored);
        let context = ThemeContext::load(Rc::new(storage), true);
        assert_eq!(context.theme(), Theme::Light);
    }
}

#[test]
fn loading_screen_cancelled_on_teardown() {
    let mut clock = VirtualClock::new();
    let loading = clock.schedule(u64::from(LOADING_DELAY_MS), "hide loading screen");
    clock.advance_by(1500);

    assert!(clock.cancel(loading));
    assert!(clock.advance_by(10_000).is_empty());
}

#[test]
fn typewriter_finishes_on_schedule() {
    let mut clock = VirtualClock::new();
    let mut typewriter = Typewriter::new(PROFILE.role);
    let step = u64::from(TYPEWRITER_STEP_MS);
    clock.schedule(step, ());

    while let Some(remaining) = clock.time_to_next_timer() {
        for _ in clock.advance_by(remaining) {
            if typewriter.advance() {
                clock.schedule(step, ());
            }
        }
    }

    assert_eq!(typewriter.visible_text(), "AI/ML & MLOps Enthusiast");
    // One extra tick notices the text is complete
    assert_eq!(clock.now_ms(), u64::from(typewriter.duration_ms()) + step);
}

#[test]
fn every_section_reveals_once() {
    let mut latches = vec![RevealLatch::new(); 7];
    let scroll_pass = [0.0, 0.04, 0.12, 0.6, 1.0, 0.3, 0.0, 0.8];
    let mut fired = vec![0; latches.len()];

    for _ in 0..3 {
        for (latch, count) in latches.iter_mut().zip(fired.iter_mut()) {
            for ratio in scroll_pass {
                if latch.observe(ratio) {
                    *count += 1;
                }
            }
        }
    }
    assert!(fired.iter().all(|count| *count == 1));
}

#[test]
fn node_count_tracks_viewport_growth() {
    let mut field = NetworkField::new(320., 480., SmallRng::seed_from_u64(5));
    let mut previous = field.nodes().len();
    for (width, height) in [(768., 1024.), (1280., 800.), (1920., 1080.), (3840., 2160.)] {
        field.resize(width, height);
        let len = field.nodes().len();
        assert_eq!(len, node_count(width, height));
        assert!(len >= previous);
        assert!((NODE_COUNT_BASE..=NODE_COUNT_MAX).contains(&len));
        previous = len;
    }
}
