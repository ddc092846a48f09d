//! Per-frame animation task.
//!
//! `RenderLoop` owns the task that awaits one `requestAnimationFrame` per
//! iteration. Dropping the loop cancels the task. While the document is
//! hidden the task is dropped too and restarted once it becomes visible.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures_channel::oneshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use zoon::{Task, TaskHandle, eprintln};

use crate::listener::EventListener;
use crate::media;

/// Pending `requestAnimationFrame`, cancelled if dropped before it fires.
struct FrameRequest {
    id: i32,
    _callback: Closure<dyn FnMut(f64)>,
}

impl Drop for FrameRequest {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}

/// Resolves with the timestamp (ms) of the next animation frame, or `None`
/// when frames can't be requested.
pub async fn next_animation_frame() -> Option<f64> {
    let window = web_sys::window()?;
    let (sender, receiver) = oneshot::channel();
    let callback = Closure::once(move |timestamp: f64| {
        let _ = sender.send(timestamp);
    });
    let id = window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()?;
    let _request = FrameRequest {
        id,
        _callback: callback,
    };
    receiver.await.ok()
}

struct LoopState {
    task: RefCell<Option<TaskHandle>>,
    running: Cell<bool>,
    on_frame: Rc<RefCell<dyn FnMut(f64)>>,
}

impl LoopState {
    fn resume(self: &Rc<Self>) {
        if self.running.replace(true) {
            return;
        }
        let on_frame = self.on_frame.clone();
        let state = Rc::downgrade(self);
        *self.task.borrow_mut() = Some(Task::start_droppable(async move {
            while let Some(timestamp) = next_animation_frame().await {
                (&mut *on_frame.borrow_mut())(timestamp);
            }
            eprintln!("[RENDER] animation frames unavailable, loop stopped");
            // The finished handle stays in the slot until the next resume
            if let Some(state) = state.upgrade() {
                state.running.set(false);
            }
        }));
    }

    fn pause(&self) {
        self.running.set(false);
        self.task.borrow_mut().take();
    }
}

pub struct RenderLoop {
    state: Rc<LoopState>,
    _visibility: Option<EventListener>,
}

impl RenderLoop {
    /// Calls `on_frame` with the frame timestamp (ms) once per display refresh.
    pub fn start(on_frame: impl FnMut(f64) + 'static) -> Self {
        let on_frame: Rc<RefCell<dyn FnMut(f64)>> = Rc::new(RefCell::new(on_frame));
        let state = Rc::new(LoopState {
            task: RefCell::new(None),
            running: Cell::new(false),
            on_frame,
        });
        if !media::document_hidden() {
            state.resume();
        }
        let visibility = EventListener::on_document("visibilitychange", {
            let state = Rc::downgrade(&state);
            move |_| {
                let Some(state) = state.upgrade() else {
                    return;
                };
                if media::document_hidden() {
                    state.pause();
                } else {
                    state.resume();
                }
            }
        });
        Self {
            state,
            _visibility: visibility,
        }
    }

    /// Stops requesting frames until `resume`. Called when the page is hidden.
    pub fn pause(&self) {
        self.state.pause();
    }

    /// Restarts a paused or stopped loop; a running loop is left alone.
    pub fn resume(&self) {
        self.state.resume();
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }
}
