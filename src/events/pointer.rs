use crate::confetti;
use crate::core::{Side, Stage};
use crate::dom;
use crate::notice;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PanelWiring {
    pub side: Side,
    pub panel: web::HtmlElement,
    pub document: web::Document,
    pub stage: Rc<RefCell<Stage>>,
}

pub fn wire_panel_handlers(w: PanelWiring) {
    wire_mousemove(&w);
    wire_mouseleave(&w);
    wire_mouseenter(&w);
    wire_click(&w);
}

fn write_offset(panel: &web::HtmlElement, offset: Vec2) {
    let style = panel.style();
    _ = style.set_property("--mx", &format!("{:.3}", offset.x));
    _ = style.set_property("--my", &format!("{:.3}", offset.y));
}

fn wire_mousemove(w: &PanelWiring) {
    let w = w.clone();
    let target = w.panel.clone();
    dom::add_mouse_listener(&target, "mousemove", move |ev| {
        let rect = dom::rect_of(&w.panel);
        let offset = w
            .stage
            .borrow_mut()
            .pointer_move(w.side, dom::client_point(&ev), &rect);
        write_offset(&w.panel, offset);
    });
}

fn wire_mouseleave(w: &PanelWiring) {
    let w = w.clone();
    let target = w.panel.clone();
    dom::add_mouse_listener(&target, "mouseleave", move |_ev| {
        let offset = w.stage.borrow_mut().pointer_leave(w.side);
        write_offset(&w.panel, offset);
    });
}

fn wire_mouseenter(w: &PanelWiring) {
    let w = w.clone();
    let target = w.panel.clone();
    dom::add_mouse_listener(&target, "mouseenter", move |_ev| {
        if w.stage.borrow_mut().pointer_enter(w.side, instant::now()) {
            log::debug!("[hover] announced {}", w.side.name());
        }
    });
}

fn wire_click(w: &PanelWiring) {
    let w = w.clone();
    let target = w.panel.clone();
    dom::add_mouse_listener(&target, "click", move |ev| {
        let layer = dom::fx_layer(&w.panel);
        let layer_rect = layer.as_ref().map(dom::rect_of).unwrap_or_default();
        let outcome = w.stage.borrow_mut().click(
            w.side,
            dom::client_point(&ev),
            &layer_rect,
            instant::now(),
        );
        match &layer {
            Some(layer) => confetti::spawn(&w.document, layer, &outcome.burst),
            None => log::warn!("[click] {} has no effects layer", w.side.name()),
        }
        if let Some(n) = &outcome.notice {
            notice::show(&w.document, n);
        }
    });
}
