//! Speech synthesis capability contract
//!
//! Mirrors the recognition side: a host synthesis engine services
//! `SynthesisCommand`s and reports playback progress and voice inventory
//! changes back as events. Also home to the two pure policies the controller
//! applies before speaking: voice selection and narration sanitization.

use crossbeam_channel::{bounded, Receiver, Sender};
use serde::{Deserialize, Serialize};

/// A voice offered by the host synthesis engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceInfo {
    pub name: String,
    /// BCP-47 language tag, e.g. "en-IN"
    pub lang: String,
}

impl VoiceInfo {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// One narration request
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// None lets the engine pick its default voice
    pub voice: Option<VoiceInfo>,
    pub rate: f32,
    pub pitch: f32,
}

/// Commands sent to the synthesis engine
#[derive(Debug, Clone, PartialEq)]
pub enum SynthesisCommand {
    /// Narrate the utterance, replacing anything queued
    Speak(Utterance),
    /// Stop any in-progress narration
    Cancel,
}

/// Callbacks from the synthesis engine
#[derive(Debug, Clone)]
pub enum SynthesisEvent {
    /// Playback of the current utterance started
    Started,
    /// Playback finished or was cancelled
    Finished,
    /// The host voice inventory changed; may arrive at any time
    VoicesChanged(Vec<VoiceInfo>),
}

/// Channel bundle connecting the controller to a host synthesis engine
pub struct SynthesisChannel {
    command_tx: Sender<SynthesisCommand>,
    command_rx: Receiver<SynthesisCommand>,
    event_tx: Sender<SynthesisEvent>,
    event_rx: Receiver<SynthesisEvent>,
}

impl SynthesisChannel {
    pub fn new(capacity: usize) -> Self {
        let (command_tx, command_rx) = bounded(capacity);
        let (event_tx, event_rx) = bounded(capacity);

        Self {
            command_tx,
            command_rx,
            event_tx,
            event_rx,
        }
    }

    pub fn command_sender(&self) -> Sender<SynthesisCommand> {
        self.command_tx.clone()
    }

    pub fn command_receiver(&self) -> Receiver<SynthesisCommand> {
        self.command_rx.clone()
    }

    pub fn event_sender(&self) -> Sender<SynthesisEvent> {
        self.event_tx.clone()
    }

    pub fn event_receiver(&self) -> Receiver<SynthesisEvent> {
        self.event_rx.clone()
    }
}

/// Preferred narration languages, most preferred first
const VOICE_PREFERENCE: [&str; 3] = ["en-IN", "en-GB", "en-US"];

/// Pick a narration voice from the host inventory.
///
/// Preference order: Indian English, British English, American English.
/// Returns None when no preferred voice exists (including an empty
/// inventory), which leaves the engine's default voice in charge.
pub fn select_voice(voices: &[VoiceInfo]) -> Option<&VoiceInfo> {
    VOICE_PREFERENCE
        .iter()
        .find_map(|lang| voices.iter().find(|v| v.lang == *lang))
}

/// Prepare reply text for narration.
///
/// Strips leading list bullets, folds newlines into sentence-ending periods,
/// collapses repeated whitespace and trims. Pure; applied only to the copy
/// handed to the synthesis engine, never to the rendered text.
pub fn sanitize_for_narration(text: &str) -> String {
    let joined = text
        .lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix("- ")
                .or_else(|| line.strip_prefix('-'))
                .unwrap_or(line)
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(". ");

    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_voice_prefers_indian_english() {
        let voices = vec![
            VoiceInfo::new("Samantha", "en-US"),
            VoiceInfo::new("Rishi", "en-IN"),
            VoiceInfo::new("Daniel", "en-GB"),
        ];

        assert_eq!(select_voice(&voices).unwrap().name, "Rishi");
    }

    #[test]
    fn test_select_voice_fallback_order() {
        let voices = vec![
            VoiceInfo::new("Samantha", "en-US"),
            VoiceInfo::new("Daniel", "en-GB"),
        ];
        assert_eq!(select_voice(&voices).unwrap().lang, "en-GB");

        let voices = vec![VoiceInfo::new("Samantha", "en-US")];
        assert_eq!(select_voice(&voices).unwrap().lang, "en-US");
    }

    #[test]
    fn test_select_voice_empty_inventory() {
        assert_eq!(select_voice(&[]), None);

        let voices = vec![VoiceInfo::new("Amelie", "fr-FR")];
        assert_eq!(select_voice(&voices), None);
    }

    #[test]
    fn test_sanitize_folds_newlines_and_bullets() {
        let text = "Chandrayaan-3 landed near the lunar south pole.\n- First Indian soft landing";
        let spoken = sanitize_for_narration(text);
        assert_eq!(
            spoken,
            "Chandrayaan-3 landed near the lunar south pole.. First Indian soft landing"
        );
    }

    #[test]
    fn test_sanitize_keeps_interior_hyphens() {
        let spoken = sanitize_for_narration("Aditya-L1 studies the Sun");
        assert!(spoken.contains("Aditya-L1"));
    }

    #[test]
    fn test_sanitize_collapses_whitespace() {
        let spoken = sanitize_for_narration("  too   many\t spaces  ");
        assert_eq!(spoken, "too many spaces");
    }

    #[test]
    fn test_sanitize_drops_blank_lines() {
        let spoken = sanitize_for_narration("first\n\n\nsecond");
        assert_eq!(spoken, "first. second");
    }

    #[test]
    fn test_sanitize_empty_input() {
        assert_eq!(sanitize_for_narration(""), "");
        assert_eq!(sanitize_for_narration("  \n \n"), "");
    }
}
