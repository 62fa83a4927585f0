use crate::core::constants::{FX_LAYER_SELECTOR, LABEL_ATTRIBUTE};
use crate::core::{PanelRect, Side};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn rect_of(el: &web::Element) -> PanelRect {
    let rect = el.get_bounding_client_rect();
    PanelRect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

#[inline]
pub fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn find_panel(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn fx_layer(panel: &web::Element) -> Option<web::Element> {
    panel.query_selector(FX_LAYER_SELECTOR).ok().flatten()
}

pub fn panel_label(panel: Option<&web::HtmlElement>, side: Side) -> String {
    panel
        .and_then(|el| el.get_attribute(LABEL_ATTRIBUTE))
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| side.default_label().to_string())
}

/// Fire-and-forget one-shot timer. Not cancellable; callbacks must tolerate
/// running after their element is gone.
pub fn set_timeout(delay_ms: i32, callback: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(callback);
    _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
}

#[inline]
pub fn add_mouse_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::MouseEvent)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Detach `el` if it is still in the tree; safe to call repeatedly.
#[inline]
pub fn remove_element(el: &web::Element) {
    if el.is_connected() {
        el.remove();
    }
}
