use glam::Vec2;
use web_sys as web;

/// Pointer position in CSS pixels relative to the viewport, the coordinate
/// space the simulation runs in.
#[inline]
pub fn pointer_viewport_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// `mouseout` bubbles from every element; only a null `relatedTarget` means
/// the pointer left the window.
#[inline]
pub fn left_window(ev: &web::MouseEvent) -> bool {
    ev.related_target().is_none()
}
