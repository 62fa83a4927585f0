use crate::core::constants::{NOTICE_CLASS, NOTICE_SHOWN_CLASS};
use crate::core::{Notice, NoticeStep};
use crate::dom;
use web_sys as web;

fn apply(el: &web::Element, step: NoticeStep) {
    match step {
        NoticeStep::Show if el.is_connected() => {
            _ = el.class_list().add_1(NOTICE_SHOWN_CLASS);
        }
        NoticeStep::Hide if el.is_connected() => {
            _ = el.class_list().remove_1(NOTICE_SHOWN_CLASS);
        }
        NoticeStep::Remove => dom::remove_element(el),
        _ => {}
    }
}

/// Append a toast to `<body>` and run it through its show/hide/remove steps.
pub fn show(document: &web::Document, notice: &Notice) {
    let Some(body) = document.body() else {
        log::warn!("[notice] no <body>");
        return;
    };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_class_name(NOTICE_CLASS);
    el.set_text_content(Some(&notice.text));
    if body.append_child(&el).is_err() {
        return;
    }
    for (delay_ms, step) in Notice::timeline() {
        let el = el.clone();
        dom::set_timeout(delay_ms, move || apply(&el, step));
    }
    log::debug!("[notice] \"{}\"", notice.text);
}
