use repel_core::PointerCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that can be removed again.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn add(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    /// Unregister now rather than whenever the listener is dropped.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref())
        {
            log::error!("[events] failed to remove {} listener: {:?}", self.kind, e);
        }
    }
}

/// Global pointer tracking: every move overwrites the cell.
pub fn wire_pointermove(pointer: PointerCell) -> anyhow::Result<Listener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    log::debug!("[pointer] tracking window pointermove");
    Listener::add(&window, "pointermove", move |ev: web::Event| {
        if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
            pointer.record(me.client_x() as f32, me.client_y() as f32);
        }
    })
}

/// Invoke the caller's callback on every click of `button`.
pub fn wire_click(
    button: &web::HtmlElement,
    on_click: js_sys::Function,
) -> anyhow::Result<Listener> {
    Listener::add(button, "click", move |_ev: web::Event| {
        log::info!("[click] repel button clicked");
        if let Err(e) = on_click.call0(&wasm_bindgen::JsValue::NULL) {
            log::error!("[click] callback error: {:?}", e);
        }
    })
}
