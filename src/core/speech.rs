//! Best-effort text-to-speech.
//!
//! The platform capability sits behind the [`Speech`] trait so the stage can
//! run with [`NoopSpeech`] where speech is unsupported (and in tests).

use super::constants::{HOVER_SPEECH_PITCH, HOVER_SPEECH_RATE, HOVER_SPEECH_VOLUME};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeechParams {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for SpeechParams {
    fn default() -> Self {
        Self {
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

impl SpeechParams {
    pub fn hover() -> Self {
        Self {
            rate: HOVER_SPEECH_RATE,
            pitch: HOVER_SPEECH_PITCH,
            volume: HOVER_SPEECH_VOLUME,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoiceInfo {
    pub id: String,
    pub lang: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub params: SpeechParams,
    pub voice: Option<String>,
}

/// Platform speech backend. Failures are reported, and [`say`] drops them.
pub trait Speech {
    /// Drop anything queued or playing.
    fn cancel(&self) -> anyhow::Result<()>;
    fn voices(&self) -> Vec<VoiceInfo>;
    fn speak(&self, utterance: &Utterance) -> anyhow::Result<()>;
}

/// Stand-in for platforms without speech synthesis.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSpeech;

impl Speech for NoopSpeech {
    fn cancel(&self) -> anyhow::Result<()> {
        Ok(())
    }

    fn voices(&self) -> Vec<VoiceInfo> {
        Vec::new()
    }

    fn speak(&self, _utterance: &Utterance) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Matches tags such as `en`, `en-US`, `EN_gb`. Like the page's
/// case-insensitive `en(-|_)?` test, any tag containing "en" qualifies.
#[inline]
pub fn is_english(lang: &str) -> bool {
    lang.to_ascii_lowercase().contains("en")
}

pub fn pick_english_voice(voices: &[VoiceInfo]) -> Option<&VoiceInfo> {
    voices.iter().find(|v| is_english(&v.lang))
}

/// Word spoken for a panel label.
#[inline]
pub fn spoken_word(label: &str) -> &str {
    match label {
        "6" => "six",
        "7" => "seven",
        other => other,
    }
}

/// Speak `text`, replacing whatever is currently playing so triggers never
/// pile up. Backend errors are logged and otherwise ignored.
pub fn say(speech: &dyn Speech, text: &str, params: SpeechParams) {
    if let Err(e) = speech.cancel() {
        log::debug!("[speech] cancel failed: {:?}", e);
    }
    let voices = speech.voices();
    let voice = pick_english_voice(&voices).map(|v| v.id.clone());
    log::debug!("[speech] \"{}\" voice={:?}", text, voice);
    let utterance = Utterance {
        text: text.to_string(),
        params,
        voice,
    };
    if let Err(e) = speech.speak(&utterance) {
        log::debug!("[speech] speak failed: {:?}", e);
    }
}
