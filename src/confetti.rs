use crate::core::constants::CONFETTI_CLASS;
use crate::core::ConfettiBurst;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Append one `<span class="confetti">` per particle to `layer` and schedule
/// each for removal.
pub fn spawn(document: &web::Document, layer: &web::Element, burst: &ConfettiBurst) {
    let left = format!("{}px", burst.origin.x);
    let top = format!("{}px", burst.origin.y);
    for p in &burst.particles {
        let Ok(el) = document.create_element("span") else {
            continue;
        };
        el.set_class_name(CONFETTI_CLASS);
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            let style = html.style();
            _ = style.set_property("left", &left);
            _ = style.set_property("top", &top);
            for (name, value) in p.style_vars() {
                _ = style.set_property(name, &value);
            }
        }
        if layer.append_child(&el).is_err() {
            continue;
        }
        dom::set_timeout(burst.remove_after_ms, move || dom::remove_element(&el));
    }
    log::debug!("[confetti] {} pieces", burst.len());
}
