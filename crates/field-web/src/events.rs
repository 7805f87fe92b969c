use crate::dom::{self, Listener};
use crate::frame::FrameContext;
use crate::input;
use field_core::Simulation;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach resize and pointer listeners to the window. Dropping the returned
/// listeners detaches them.
pub fn wire(
    window: &web::Window,
    sim: &Rc<RefCell<Simulation>>,
    frame_ctx: &Rc<RefCell<FrameContext>>,
) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![
        wire_resize(window, frame_ctx)?,
        wire_mousemove(window, sim)?,
        wire_mouseout(window, sim)?,
    ])
}

fn wire_resize(window: &web::Window, frame_ctx: &Rc<RefCell<FrameContext>>) -> anyhow::Result<Listener> {
    let frame_ctx = frame_ctx.clone();
    let win = window.clone();
    Listener::add(window, "resize", move |_ev: web::Event| {
        let viewport = dom::viewport(&win);
        let dpr = dom::device_pixel_ratio(&win);
        frame_ctx.borrow_mut().resize(viewport, dpr);
        log::debug!("[resize] {:.0}x{:.0} @{}x", viewport.width, viewport.height, dpr);
    })
}

fn wire_mousemove(window: &web::Window, sim: &Rc<RefCell<Simulation>>) -> anyhow::Result<Listener> {
    let sim = sim.clone();
    Listener::add(window, "mousemove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            sim.borrow_mut().pointer_moved(input::pointer_viewport_px(ev));
        }
    })
}

fn wire_mouseout(window: &web::Window, sim: &Rc<RefCell<Simulation>>) -> anyhow::Result<Listener> {
    let sim = sim.clone();
    Listener::add(window, "mouseout", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            if input::left_window(ev) {
                sim.borrow_mut().pointer_left();
            }
        }
    })
}
