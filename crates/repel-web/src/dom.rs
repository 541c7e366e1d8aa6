use crate::constants::{BASE_CLASS, Z_INDEX};
use crate::style;
use glam::Vec2;
use repel_core::{BoxProvider, Frame, Rect};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Top-left of the element with `element_id`, measured from its bounding rect.
pub fn placeholder_origin(element_id: &str) -> Option<Vec2> {
    let el = window_document()?.get_element_by_id(element_id)?;
    let rect = el.get_bounding_client_rect();
    Some(Vec2::new(rect.left() as f32, rect.top() as f32))
}

/// Create the `<button>` and attach it to the page body at `position`.
pub fn create_button(
    document: &web::Document,
    label: &str,
    extra_class: Option<&str>,
    position: Vec2,
) -> anyhow::Result<web::HtmlElement> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    let button: web::HtmlElement = document
        .create_element("button")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    button
        .set_attribute("type", "button")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    button.set_class_name(&style::class_list(BASE_CLASS, extra_class));
    button.set_text_content(Some(label));

    let css = button.style();
    _ = css.set_property("position", "fixed");
    _ = css.set_property("margin", "0");
    _ = css.set_property("z-index", Z_INDEX);
    _ = css.set_property("will-change", "left, top, transform");
    place(&button, position, 1.0);

    body.append_child(&button)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(button)
}

pub fn apply_frame(button: &web::HtmlElement, frame: &Frame) {
    place(button, frame.position, frame.scale);
}

fn place(button: &web::HtmlElement, position: Vec2, scale: f32) {
    let css = button.style();
    _ = css.set_property("left", &style::px(position.x));
    _ = css.set_property("top", &style::px(position.y));
    _ = css.set_property("transform", &style::scale_transform(scale));
}

/// Live geometry of the mounted button.
///
/// Uses layout (offset) sizes, which ignore the visual scale transform.
pub struct ButtonBox {
    button: web::HtmlElement,
}

impl ButtonBox {
    pub fn new(button: web::HtmlElement) -> Self {
        Self { button }
    }
}

impl BoxProvider for ButtonBox {
    fn current_box(&self) -> Option<Rect> {
        if !self.button.is_connected() {
            return None;
        }
        let rect = Rect::new(
            self.button.offset_left() as f32,
            self.button.offset_top() as f32,
            self.button.offset_width() as f32,
            self.button.offset_height() as f32,
        );
        (!rect.is_empty()).then_some(rect)
    }

    fn viewport_size(&self) -> Vec2 {
        viewport_size()
    }
}

/// Window inner size in CSS pixels; zero when there is no window.
pub fn viewport_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(width as f32, height as f32)
}
