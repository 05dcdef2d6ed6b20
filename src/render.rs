use crate::constants::{
    BACKGROUND, LABEL_FILL, LABEL_FONT_FAMILY, LABEL_SHADOW, LABEL_SHADOW_BLUR,
};
use crate::dom::js_err;
use bubbles_core::{BubbleApp, KeyValueStore, TextMeasure};
use std::cell::Cell;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn label_font(font_px: u32) -> String {
    format!("bold {}px {}", font_px, LABEL_FONT_FAMILY)
}

/// `measureText` on the live 2D context. Remembers the last font so repeated
/// queries at one size do not reset it.
pub struct CanvasMeasure<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
    font_px: Cell<u32>,
}

impl<'a> CanvasMeasure<'a> {
    pub fn new(ctx: &'a web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            font_px: Cell::new(0),
        }
    }
}

impl TextMeasure for CanvasMeasure<'_> {
    fn text_width(&self, text: &str, font_px: u32) -> f32 {
        if self.font_px.get() != font_px {
            self.ctx.set_font(&label_font(font_px));
            self.font_px.set(font_px);
        }
        self.ctx
            .measure_text(text)
            .map(|m| m.width() as f32)
            .unwrap_or(0.0)
    }
}

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, width: f64, height: f64, dpr: f64) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("not a 2d context: {:?}", e))?;
        Ok(Self {
            canvas,
            ctx,
            dpr,
            width,
            height,
        })
    }

    pub fn draw<S: KeyValueStore>(&self, app: &BubbleApp<S>) {
        let ctx = &self.ctx;
        _ = ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, self.width, self.height);

        for body in app.sim().bodies() {
            ctx.begin_path();
            _ = ctx.arc(
                body.position.x as f64,
                body.position.y as f64,
                body.radius as f64,
                0.0,
                TAU,
            );
            ctx.set_fill_style_str(&body.color.css());
            ctx.fill();
        }

        self.draw_labels(app);
    }

    fn draw_labels<S: KeyValueStore>(&self, app: &BubbleApp<S>) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_shadow_color(LABEL_SHADOW);
        ctx.set_shadow_blur(LABEL_SHADOW_BLUR);

        let measure = CanvasMeasure::new(ctx);
        let placed = app.labels(&measure);
        ctx.set_fill_style_str(LABEL_FILL);
        for p in &placed {
            ctx.set_font(&label_font(p.layout.font_px));
            for (line, pos) in p.layout.line_positions(p.body.position) {
                _ = ctx.fill_text(line, pos.x as f64, pos.y as f64);
            }
        }
        ctx.restore();
    }

    /// Release the drawing surface.
    pub fn release(&self) {
        self.canvas.set_width(0);
        self.canvas.set_height(0);
        self.canvas.remove();
    }
}
