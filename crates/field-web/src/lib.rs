#![cfg(target_arch = "wasm32")]
use anyhow::{anyhow, Context};
use field_core::{Simulation, StopHandle, Theme};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod paint;
mod style;

use constants::{DEFAULT_BACKGROUND_CANVAS_ID, DEFAULT_CURSOR_CANVAS_ID, GRID_SPACING_ATTRIBUTE};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web starting");
    Ok(())
}

/// A mounted particle background: two canvases, their listeners and the
/// running frame loop. `unmount()` (or `free()` from JS) tears all of it down.
#[wasm_bindgen]
pub struct ParticleBackground {
    sim: Rc<RefCell<Simulation>>,
    document: web::Document,
    listeners: Vec<dom::Listener>,
    stop: Option<StopHandle>,
}

#[wasm_bindgen]
impl ParticleBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(
        background_id: &str,
        cursor_id: &str,
        theme: &str,
    ) -> Result<ParticleBackground, JsValue> {
        mount(background_id, cursor_id, theme).map_err(|e| {
            log::error!("[mount] {:#}", e);
            JsValue::from_str(&format!("{e:#}"))
        })
    }

    /// Switch palette; the field is rebuilt and the cursor trail forgotten.
    /// Unknown names select the default theme.
    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&mut self, theme: &str) {
        let theme = Theme::from_name(theme);
        self.sim.borrow_mut().set_theme(theme);
        dom::apply_document_theme(&self.document, theme);
    }

    pub fn theme(&self) -> String {
        self.sim.borrow().theme().name().to_owned()
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.sim.borrow().field().len()
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.stop.as_ref().is_some_and(StopHandle::is_running)
    }

    /// Stop the frame loop and detach listeners. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop.stop();
            log::info!("[mount] stopped");
        }
        self.listeners.clear();
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mount on the canvases with ids `particle-bg` and `particle-cursor`.
#[wasm_bindgen(js_name = mountDefault)]
pub fn mount_default(theme: &str) -> Result<ParticleBackground, JsValue> {
    ParticleBackground::new(DEFAULT_BACKGROUND_CANVAS_ID, DEFAULT_CURSOR_CANVAS_ID, theme)
}

fn mount(background_id: &str, cursor_id: &str, theme: &str) -> anyhow::Result<ParticleBackground> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow!("no window/document"))?;
    let background_canvas = dom::canvas_by_id(&document, background_id)?;
    let cursor_canvas = dom::canvas_by_id(&document, cursor_id)?;

    let config = config::field_config(
        background_canvas
            .get_attribute(GRID_SPACING_ATTRIBUTE)
            .as_deref(),
    );
    let theme = Theme::from_name(theme);
    let viewport = dom::viewport(&window);
    let sim = Simulation::new(config, viewport, theme, rand::random())
        .context("invalid field configuration")?;
    let sim = Rc::new(RefCell::new(sim));

    let dpr = dom::device_pixel_ratio(&window);
    let mut background = paint::Canvas2d::new(background_canvas).context("background canvas")?;
    let mut cursor = paint::Canvas2d::new(cursor_canvas).context("cursor canvas")?;
    background.fit(viewport, dpr);
    cursor.fit(viewport, dpr);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        sim.clone(),
        background,
        cursor,
    )));
    let listeners = events::wire(&window, &sim, &frame_ctx)?;
    let stop = frame::start_loop(window, frame_ctx);
    dom::apply_document_theme(&document, theme);

    log::info!(
        "[mount] {:.0}x{:.0} @{}x theme={} particles={}",
        viewport.width,
        viewport.height,
        dpr,
        theme,
        sim.borrow().field().len()
    );
    Ok(ParticleBackground {
        sim,
        document,
        listeners,
        stop: Some(stop),
    })
}
