//! The animated network background element.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio::network::{NetworkField, Point};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;
use zoon::{
    El, Element, Height, RawEl, RawHtmlEl, Styleable, UpdateRawEl, Width, eprintln, println,
};

use crate::canvas::{CanvasError, Painter};
use crate::listener::EventListener;
use crate::media;
use crate::render_loop::RenderLoop;

struct Scene {
    painter: Painter,
    field: NetworkField<SmallRng>,
}

impl Scene {
    fn fit_to_canvas(&mut self) {
        let (width, height) = canvas_size(self.painter.canvas());
        if let Err(error) = self
            .painter
            .resize(width, height, media::device_pixel_ratio())
        {
            eprintln!("[CANVAS] resize failed: {error}");
        }
        self.field.resize(width, height);
    }

    fn pointer_moved(&mut self, event: &web_sys::MouseEvent) {
        let rect = self.painter.canvas().get_bounding_client_rect();
        let x = f64::from(event.client_x()) - rect.left();
        let y = f64::from(event.client_y()) - rect.top();
        let inside = (0. ..=rect.width()).contains(&x) && (0. ..=rect.height()).contains(&y);
        self.field
            .set_pointer(inside.then(|| Point::new(x, y)));
    }
}

/// Running background: render loop plus window listeners.
struct Mounted {
    _render_loop: RenderLoop,
    _listeners: Vec<EventListener>,
}

fn canvas_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let (width, height) = (canvas.client_width(), canvas.client_height());
    if width > 0 && height > 0 {
        (f64::from(width), f64::from(height))
    } else {
        media::viewport_size()
    }
}

fn seeded_rng() -> SmallRng {
    SmallRng::try_from_os_rng().unwrap_or_else(|error| {
        eprintln!("[CANVAS] no OS entropy ({error}), seeding from the clock");
        SmallRng::seed_from_u64(media::now_ms())
    })
}

fn mount(element: web_sys::HtmlElement) -> Result<Mounted, CanvasError> {
    web_sys::window().ok_or(CanvasError::NoWindow)?;
    let canvas = element
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| CanvasError::NoContext)?;
    let painter = Painter::new(canvas.clone())?;
    let (width, height) = canvas_size(&canvas);
    let mut scene = Scene {
        painter,
        field: NetworkField::new(width, height, seeded_rng()),
    };
    scene.fit_to_canvas();
    println!("[CANVAS] {} nodes on {width}x{height}", scene.field.nodes().len());
    let scene = Rc::new(RefCell::new(scene));

    let listeners = [
        EventListener::on_window("resize", {
            let scene = scene.clone();
            move |_| scene.borrow_mut().fit_to_canvas()
        }),
        EventListener::on_window("mousemove", {
            let scene = scene.clone();
            move |event| {
                if let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() {
                    scene.borrow_mut().pointer_moved(event);
                }
            }
        }),
        EventListener::on_document("mouseleave", {
            let scene = scene.clone();
            move |_| scene.borrow_mut().field.set_pointer(None)
        }),
    ]
    .into_iter()
    .flatten()
    .collect();

    let failed = Cell::new(false);
    let render_loop = RenderLoop::start(move |timestamp| {
        let mut scene = scene.borrow_mut();
        let frame = scene.field.tick(timestamp / 1000.);
        if let Err(error) = scene.painter.paint(&frame) {
            if !failed.replace(true) {
                eprintln!("[CANVAS] {error}");
            }
        }
    });

    Ok(Mounted {
        _render_loop: render_loop,
        _listeners: listeners,
    })
}

/// Full-size decorative canvas; place it as the bottom layer of a `Stack`.
///
/// When no 2D context can be acquired the effect is skipped and the element
/// stays blank.
pub fn network_canvas() -> impl Element {
    let mounted: Rc<RefCell<Option<Mounted>>> = Rc::default();
    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(|raw_el| {
            raw_el
                .style("pointer-events", "none")
                .attr("aria-hidden", "true")
        })
        .child(
            RawHtmlEl::new("canvas")
                .style("display", "block")
                .style("width", "100%")
                .style("height", "100%")
                .after_insert({
                    let mounted = mounted.clone();
                    move |element| match mount(element) {
                        Ok(scene) => *mounted.borrow_mut() = Some(scene),
                        Err(error) => eprintln!("[CANVAS] {error}; background disabled"),
                    }
                })
                .after_remove(move |_| drop(mounted.borrow_mut().take())),
        )
}
