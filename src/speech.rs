use crate::core::{Speech, Utterance, VoiceInfo};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `window.speechSynthesis` behind the [`Speech`] trait.
pub struct WebSpeech {
    synth: web::SpeechSynthesis,
}

impl WebSpeech {
    /// `None` when the browser has no speech synthesis.
    pub fn detect(window: &web::Window) -> Option<Self> {
        let present = js_sys::Reflect::get(window, &JsValue::from_str("speechSynthesis"))
            .map(|v| !v.is_undefined() && !v.is_null())
            .unwrap_or(false);
        if !present {
            return None;
        }
        window.speech_synthesis().ok().map(|synth| Self { synth })
    }

    /// Call `speechSynthesis[name](args..)` through `Function::apply`, so a
    /// throwing platform comes back as `Err` instead of unwinding.
    fn invoke(&self, name: &str, args: &js_sys::Array) -> anyhow::Result<()> {
        let method = js_sys::Reflect::get(&self.synth, &JsValue::from_str(name))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| anyhow::anyhow!("speechSynthesis.{} is not callable", name))?;
        method
            .apply(&self.synth, args)
            .map_err(|e| anyhow::anyhow!("speechSynthesis.{}: {:?}", name, e))?;
        Ok(())
    }

    fn platform_voices(&self) -> Vec<web::SpeechSynthesisVoice> {
        self.synth
            .get_voices()
            .iter()
            .filter_map(|v| v.dyn_into::<web::SpeechSynthesisVoice>().ok())
            .collect()
    }
}

impl Speech for WebSpeech {
    fn cancel(&self) -> anyhow::Result<()> {
        self.invoke("cancel", &js_sys::Array::new())
    }

    fn voices(&self) -> Vec<VoiceInfo> {
        self.platform_voices()
            .iter()
            .map(|v| VoiceInfo {
                id: v.voice_uri(),
                lang: v.lang(),
            })
            .collect()
    }

    fn speak(&self, utterance: &Utterance) -> anyhow::Result<()> {
        let u = web::SpeechSynthesisUtterance::new_with_text(&utterance.text)
            .map_err(|e| anyhow::anyhow!("utterance rejected: {:?}", e))?;
        u.set_rate(utterance.params.rate);
        u.set_pitch(utterance.params.pitch);
        u.set_volume(utterance.params.volume);
        if let Some(id) = &utterance.voice {
            let voice = self
                .platform_voices()
                .into_iter()
                .find(|v| &v.voice_uri() == id);
            u.set_voice(voice.as_ref());
        }
        self.invoke("speak", &js_sys::Array::of1(&u))
    }
}
