use crate::dom::{self, ButtonBox};
use instant::Instant;
use repel_core::{FrameLoop, TickOutcome};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub frame_loop: FrameLoop<ButtonBox>,
    pub button: web::HtmlElement,
}

impl FrameContext {
    pub fn frame(&mut self) {
        match self.frame_loop.tick(Instant::now()) {
            TickOutcome::Stepped(frame) => dom::apply_frame(&self.button, &frame),
            TickOutcome::Skipped | TickOutcome::Stopped => {}
        }
    }
}

/// Running `requestAnimationFrame` chain; `stop` cancels the pending frame
/// and drops the callback.
pub struct AnimationLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure's self-reference so it can be freed
        self.tick.borrow_mut().take();
    }
}

fn request_frame(closure: &Closure<dyn FnMut()>) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("[loop] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        if !frame_ctx_tick.borrow().frame_loop.is_running() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            pending_clone.set(request_frame(cb));
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = tick.borrow().as_ref() {
        pending.set(request_frame(cb));
    }
    AnimationLoop { tick, pending }
}
