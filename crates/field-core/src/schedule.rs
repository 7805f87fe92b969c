//! Single-threaded, self-rescheduling frame loop with an explicit stop handle.
//!
//! The host supplies a [`Scheduler`] (on the web: `requestAnimationFrame` /
//! `cancelAnimationFrame`). [`start`] requests the first frame; every frame
//! runs the tick and requests the next one. [`StopHandle::stop`] cancels the
//! pending request and guarantees the tick never runs again, even if the host
//! still delivers a callback it had already queued.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Host primitive for running a callback on the next display frame.
pub trait Scheduler {
    type Token: 'static;

    /// `None` means the host refused the request; the loop then stops.
    fn request(&self, callback: Box<dyn FnOnce()>) -> Option<Self::Token>;
    fn cancel(&self, token: Self::Token);
}

struct LoopShared<S: Scheduler> {
    scheduler: S,
    running: Cell<bool>,
    pending: Cell<Option<S::Token>>,
    tick: RefCell<Box<dyn FnMut()>>,
}

trait Halt {
    fn halt(&self);
    fn is_running(&self) -> bool;
}

impl<S: Scheduler> Halt for LoopShared<S> {
    fn halt(&self) {
        self.running.set(false);
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel(token);
        }
    }

    fn is_running(&self) -> bool {
        self.running.get()
    }
}

/// Owns a running loop. Stopping consumes the handle; dropping it also stops
/// the loop.
#[must_use = "dropping the handle stops the loop immediately"]
pub struct StopHandle {
    inner: Option<Rc<dyn Halt>>,
}

impl StopHandle {
    pub fn is_running(&self) -> bool {
        self.inner.as_ref().is_some_and(|l| l.is_running())
    }

    pub fn stop(mut self) {
        self.halt();
    }

    fn halt(&mut self) {
        if let Some(inner) = self.inner.take() {
            inner.halt();
        }
    }
}

impl Drop for StopHandle {
    fn drop(&mut self) {
        self.halt();
    }
}

pub fn start<S, F>(scheduler: S, tick: F) -> StopHandle
where
    S: Scheduler + 'static,
    F: FnMut() + 'static,
{
    let shared = Rc::new(LoopShared {
        scheduler,
        running: Cell::new(true),
        pending: Cell::new(None),
        tick: RefCell::new(Box::new(tick)),
    });
    schedule_next(&shared);
    StopHandle {
        inner: Some(shared),
    }
}

fn schedule_next<S: Scheduler + 'static>(shared: &Rc<LoopShared<S>>) {
    let weak: Weak<LoopShared<S>> = Rc::downgrade(shared);
    let requested = shared.scheduler.request(Box::new(move || {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        shared.pending.set(None);
        if !shared.running.get() {
            return;
        }
        {
            let mut tick = shared.tick.borrow_mut();
            (&mut **tick)();
        }
        // The tick may have stopped the loop.
        if shared.running.get() {
            schedule_next(&shared);
        }
    }));
    match requested {
        Some(token) => shared.pending.set(Some(token)),
        None => {
            log::warn!("[loop] frame request refused; stopping");
            shared.running.set(false);
        }
    }
}
