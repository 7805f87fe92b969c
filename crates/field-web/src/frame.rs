use crate::constants::FRAME_STATS_INTERVAL_SEC;
use crate::paint::Canvas2d;
use field_core::schedule::{self, Scheduler};
use field_core::{Frame, Simulation, StopHandle, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` as a [`Scheduler`].
pub struct RafScheduler {
    window: web::Window,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl Scheduler for RafScheduler {
    type Token = i32;

    fn request(&self, callback: Box<dyn FnOnce()>) -> Option<i32> {
        // once_into_js frees the closure when it runs; a cancelled frame leaks it.
        let f = Closure::once_into_js(move || callback());
        match self
            .window
            .request_animation_frame(f.unchecked_ref::<js_sys::Function>())
        {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&self, token: i32) {
        _ = self.window.cancel_animation_frame(token);
    }
}

struct FrameStats {
    window_start: Instant,
    frames: u32,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
        }
    }

    fn record(&mut self, sim: &Simulation) {
        self.frames += 1;
        let elapsed = self.window_start.elapsed().as_secs_f32();
        if elapsed >= FRAME_STATS_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps, {} particles, {} links",
                self.frames as f32 / elapsed,
                sim.field().len(),
                sim.links().len()
            );
            *self = Self::new();
        }
    }
}

pub struct FrameContext {
    sim: Rc<RefCell<Simulation>>,
    background: Canvas2d,
    cursor: Canvas2d,
    frame: Frame,
    stats: FrameStats,
}

impl FrameContext {
    pub fn new(sim: Rc<RefCell<Simulation>>, background: Canvas2d, cursor: Canvas2d) -> Self {
        Self {
            sim,
            background,
            cursor,
            frame: Frame::new(),
            stats: FrameStats::new(),
        }
    }

    pub fn frame(&mut self) {
        let mut sim = self.sim.borrow_mut();
        sim.step(&mut self.frame);
        self.frame.paint(&mut self.background, &mut self.cursor);
        self.stats.record(&sim);
    }

    /// Refit both canvases and regrid the field.
    pub fn resize(&mut self, viewport: Viewport, dpr: f64) {
        self.background.fit(viewport, dpr);
        self.cursor.fit(viewport, dpr);
        self.sim.borrow_mut().resize(viewport);
    }
}

pub fn start_loop(window: web::Window, frame_ctx: Rc<RefCell<FrameContext>>) -> StopHandle {
    schedule::start(RafScheduler::new(window), move || {
        frame_ctx.borrow_mut().frame();
    })
}
