use crate::style;
use anyhow::anyhow;
use field_core::{Glow, Rgba, Surface, Vec2, Viewport};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// A `<canvas>` with its 2D context, painted in CSS pixels.
pub struct Canvas2d {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
    // Resizing the canvas resets context state, so the cache is dropped in `fit`.
    last_fill: Option<Rgba>,
}

impl Canvas2d {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext('2d'): {e:?}"))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("getContext('2d') returned an unexpected object"))?;
        Ok(Self {
            canvas,
            ctx,
            dpr: 1.0,
            last_fill: None,
        })
    }

    /// Size the backing store to `viewport * dpr` and scale the context so
    /// drawing stays in CSS pixels.
    pub fn fit(&mut self, viewport: Viewport, dpr: f64) {
        let w_px = (viewport.width as f64 * dpr).round() as u32;
        let h_px = (viewport.height as f64 * dpr).round() as u32;
        self.canvas.set_width(w_px.max(1));
        self.canvas.set_height(h_px.max(1));
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.dpr = dpr;
        self.last_fill = None;
    }

    fn set_fill(&mut self, fill: Rgba) {
        if self.last_fill != Some(fill) {
            #[allow(deprecated)]
            self.ctx
                .set_fill_style(&JsValue::from_str(&style::css(fill)));
            self.last_fill = Some(fill);
        }
    }
}

impl Surface for Canvas2d {
    fn clear(&mut self) {
        self.ctx.save();
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.ctx.restore();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Rgba, glow: Option<Glow>) {
        if let Some(g) = glow {
            self.ctx.set_shadow_blur(style::shadow_blur_px(g.blur, self.dpr));
            self.ctx.set_shadow_color(&style::css(g.color));
        }
        self.set_fill(fill);
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
        if glow.is_some() {
            self.ctx.set_shadow_blur(0.0);
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Rgba, width: f32) {
        #[allow(deprecated)]
        self.ctx
            .set_stroke_style(&JsValue::from_str(&style::rgba(stroke)));
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
