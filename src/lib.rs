pub mod core;

#[cfg(target_arch = "wasm32")]
mod confetti;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod notice;
#[cfg(target_arch = "wasm32")]
mod speech;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::core::constants::{LEFT_PANEL_ID, RIGHT_PANEL_ID};
    use crate::core::{NoopSpeech, Side, Speech, Stage};
    use crate::{dom, events, speech};
    use rand::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    fn panel_id(side: Side) -> &'static str {
        match side {
            Side::Left => LEFT_PANEL_ID,
            Side::Right => RIGHT_PANEL_ID,
        }
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("six-seven starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let panels = Side::ALL.map(|side| dom::find_panel(&document, panel_id(side)));
        let labels = [
            dom::panel_label(panels[0].as_ref(), Side::Left),
            dom::panel_label(panels[1].as_ref(), Side::Right),
        ];

        let speech: Box<dyn Speech> = match speech::WebSpeech::detect(&window) {
            Some(s) => Box::new(s),
            None => {
                log::info!("[speech] unsupported, running silent");
                Box::new(NoopSpeech)
            }
        };
        let stage = Rc::new(RefCell::new(Stage::new(
            labels,
            speech,
            StdRng::from_entropy(),
        )));

        for (side, panel) in Side::ALL.into_iter().zip(panels) {
            let Some(panel) = panel else {
                log::warn!("missing #{}", panel_id(side));
                continue;
            };
            events::wire_panel_handlers(events::PanelWiring {
                side,
                panel,
                document: document.clone(),
                stage: stage.clone(),
            });
        }
        log::info!("[stage] panels wired");
        Ok(())
    }
}
