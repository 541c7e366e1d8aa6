#![cfg(target_arch = "wasm32")]
use glam::Vec2;
use instant::Instant;
use repel_core::{EvadeParams, FrameLoop};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("repel-web starting");
    Ok(())
}

/// Top-left of a placeholder element, as `[x, y]`, for seeding the spawn point.
#[wasm_bindgen(js_name = placeholderOrigin)]
pub fn placeholder_origin(element_id: &str) -> Option<Vec<f64>> {
    dom::placeholder_origin(element_id).map(|p| vec![p.x as f64, p.y as f64])
}

struct Mounted {
    button: web_sys::HtmlElement,
    ctx: Rc<RefCell<frame::FrameContext>>,
    animation: frame::AnimationLoop,
    pointer: events::Listener,
    click: Option<events::Listener>,
}

impl Mounted {
    fn teardown(self) {
        self.animation.stop();
        self.pointer.release();
        if let Some(click) = self.click {
            click.release();
        }
        self.ctx.borrow_mut().frame_loop.stop();
        self.button.remove();
    }
}

/// Handle to a mounted evading button. Dropping it unmounts.
#[wasm_bindgen]
pub struct RepelButton {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl RepelButton {
    /// Mount a button labelled `label` (default "NO") that flees the pointer.
    #[wasm_bindgen(constructor)]
    pub fn new(
        label: Option<String>,
        on_click: Option<js_sys::Function>,
        initial_x: Option<f64>,
        initial_y: Option<f64>,
        class_name: Option<String>,
    ) -> Result<RepelButton, JsValue> {
        let initial = match (initial_x, initial_y) {
            (Some(x), Some(y)) => Some(Vec2::new(x as f32, y as f32)),
            _ => None,
        };
        mount(
            label.as_deref().unwrap_or(constants::DEFAULT_LABEL),
            on_click,
            initial,
            class_name.as_deref(),
        )
        .map(|mounted| RepelButton {
            mounted: Some(mounted),
        })
        .map_err(|e| {
            log::error!("mount error: {:?}", e);
            JsValue::from_str(&e.to_string())
        })
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Stop the frame loop, remove listeners and detach the button.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.teardown();
        }
    }
}

impl Drop for RepelButton {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn mount(
    label: &str,
    on_click: Option<js_sys::Function>,
    initial: Option<Vec2>,
    class_name: Option<&str>,
) -> anyhow::Result<Mounted> {
    let params = EvadeParams::default();
    params.validate()?;

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let spawn = initial.unwrap_or_else(|| repel_core::default_spawn_position(dom::viewport_size()));
    let button = dom::create_button(&document, label, class_name, spawn)?;

    let mut frame_loop = FrameLoop::new(params, dom::ButtonBox::new(button.clone()), Some(spawn));
    let (pointer, click) = match wire_listeners(&button, &frame_loop, on_click) {
        Ok(listeners) => listeners,
        Err(e) => {
            button.remove();
            return Err(e);
        }
    };
    frame_loop.start(Instant::now());

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        frame_loop,
        button: button.clone(),
    }));
    let animation = frame::start_loop(ctx.clone());
    log::info!("[mount] '{}' at ({:.0},{:.0})", label, spawn.x, spawn.y);

    Ok(Mounted {
        button,
        ctx,
        animation,
        pointer,
        click,
    })
}

fn wire_listeners(
    button: &web_sys::HtmlElement,
    frame_loop: &FrameLoop<dom::ButtonBox>,
    on_click: Option<js_sys::Function>,
) -> anyhow::Result<(events::Listener, Option<events::Listener>)> {
    let pointer = events::wire_pointermove(frame_loop.pointer())?;
    let click = match on_click {
        Some(f) => Some(events::wire_click(button, f)?),
        None => None,
    };
    Ok((pointer, click))
}
