//! Paints `folio::network::Frame`s onto a 2D canvas.

use std::f64::consts::TAU;

use folio::network::{Dot, DotFill, Frame, HIGHLIGHT_COLOR, Link};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    NoWindow,
    NoContext,
    Draw(String),
}

impl std::fmt::Display for CanvasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CanvasError::NoWindow => write!(f, "no window available"),
            CanvasError::NoContext => write!(f, "2D canvas context unavailable"),
            CanvasError::Draw(reason) => write!(f, "canvas draw failed: {}", reason),
        }
    }
}

impl std::error::Error for CanvasError {}

impl From<JsValue> for CanvasError {
    fn from(error: JsValue) -> Self {
        CanvasError::Draw(error.as_string().unwrap_or_else(|| format!("{error:?}")))
    }
}

pub struct Painter {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl Painter {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, CanvasError> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(CanvasError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| CanvasError::NoContext)?;
        Ok(Self { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Sizes the backing store for `pixel_ratio` and resets the transform so
    /// drawing stays in CSS pixels.
    pub fn resize(&self, width: f64, height: f64, pixel_ratio: f64) -> Result<(), CanvasError> {
        self.canvas.set_width((width * pixel_ratio).round().max(0.) as u32);
        self.canvas.set_height((height * pixel_ratio).round().max(0.) as u32);
        self.context
            .set_transform(pixel_ratio, 0., 0., pixel_ratio, 0., 0.)?;
        Ok(())
    }

    pub fn paint(&self, frame: &Frame) -> Result<(), CanvasError> {
        self.context.clear_rect(0., 0., frame.width, frame.height);
        for link in &frame.links {
            self.link(link);
        }
        for dot in &frame.dots {
            self.dot(dot)?;
        }
        Ok(())
    }

    fn link(&self, link: &Link) {
        let ctx = &self.context;
        ctx.save();
        ctx.set_global_alpha(link.alpha);
        ctx.set_stroke_style_str(link.color);
        ctx.set_shadow_color(link.color);
        ctx.set_shadow_blur(link.glow);
        ctx.set_line_width(link.width);
        ctx.begin_path();
        ctx.move_to(link.from.x, link.from.y);
        ctx.line_to(link.to.x, link.to.y);
        ctx.stroke();
        ctx.restore();
    }

    fn dot(&self, dot: &Dot) -> Result<(), CanvasError> {
        let ctx = &self.context;
        let (x, y) = (dot.center.x, dot.center.y);
        ctx.save();
        ctx.set_shadow_color(dot.glow_color);
        ctx.set_shadow_blur(dot.glow);
        match dot.fill {
            DotFill::Gradient { extent, .. } => {
                let gradient = ctx.create_radial_gradient(x, y, 0., x, y, extent)?;
                for (offset, color) in dot.fill.stops() {
                    gradient.add_color_stop(offset as f32, color)?;
                }
                ctx.set_fill_style_canvas_gradient(&gradient);
            }
            DotFill::Highlight => ctx.set_fill_style_str(HIGHLIGHT_COLOR),
        }
        ctx.begin_path();
        let drawn = ctx.arc(x, y, dot.radius, 0., TAU);
        ctx.fill();
        ctx.restore();
        drawn.map_err(CanvasError::from)
    }
}
