//! Interaction controller
//!
//! Owns the conversation, the input buffer, the voice session state and the
//! voice-origin flag. All capability callbacks and backend events arrive
//! through channels and are drained by `poll_events`, which the UI calls
//! once per frame; user actions (send, mic press, reset, quick prompt) call
//! straight into the methods below. One controller instance exists per app
//! run; there is no ambient global state.

use crate::backend::{ChatCommand, ChatEvent, FALLBACK_REPLY};
use crate::config::AppConfig;
use crate::messages::{Conversation, Message};
use crate::speech::{
    sanitize_for_narration, select_voice, RecognitionCommand, RecognitionEvent, SynthesisCommand,
    SynthesisEvent, Utterance, VoiceAction, VoiceEvent, VoiceSession, VoiceState,
};
use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, warn};
use uuid::Uuid;

/// A quick-prompt shortcut shown on the welcome screen
#[derive(Debug, Clone, Copy)]
pub struct QuickPrompt {
    pub label: &'static str,
    pub prompt: &'static str,
}

/// Quick prompts offered when the conversation is empty
pub const QUICK_PROMPTS: [QuickPrompt; 4] = [
    QuickPrompt {
        label: "About ISRO",
        prompt: "Tell me about ISRO and its main objectives",
    },
    QuickPrompt {
        label: "Major Achievements",
        prompt: "What are ISROs major achievements?",
    },
    QuickPrompt {
        label: "Chandrayaan-3 Mission",
        prompt: "Tell me about Chandrayaan-3 mission and its achievements",
    },
    QuickPrompt {
        label: "Aditya-L1 Solar Mission",
        prompt: "What is Aditya L1 mission and its objectives?",
    },
];

/// Backend request the controller is still waiting on. Survives a reset:
/// the reply is appended to whatever view exists when it arrives.
#[derive(Debug, Clone, Copy)]
struct InflightRequest {
    request_id: Uuid,
    /// Whether the submission came from the recognition transcript; decides
    /// narration of the eventual reply (or fallback message)
    voice_origin: bool,
}

pub struct InteractionController {
    /// Conversation view (cheaply cloneable for the UI layer)
    pub conversation: Conversation,

    /// Current text input
    pub input_text: String,

    config: AppConfig,
    session: VoiceSession,

    /// Set when the recognition transcript fills the input; consumed into
    /// the in-flight request record by the next submission
    voice_query: bool,

    /// Cached host voice inventory, refreshed on VoicesChanged
    voices: Vec<crate::speech::VoiceInfo>,

    inflight: Vec<InflightRequest>,

    /// Channel to send backend requests
    pub chat_command_tx: Option<Sender<ChatCommand>>,
    /// Channel to receive backend replies
    pub chat_event_rx: Option<Receiver<ChatEvent>>,

    /// Channel to the recognition engine; None means the capability is
    /// unavailable and the mic stays disabled for the whole session
    pub recognition_command_tx: Option<Sender<RecognitionCommand>>,
    /// Channel to receive recognition callbacks
    pub recognition_event_rx: Option<Receiver<RecognitionEvent>>,

    /// Channel to the synthesis engine
    pub synthesis_command_tx: Option<Sender<SynthesisCommand>>,
    /// Channel to receive synthesis callbacks
    pub synthesis_event_rx: Option<Receiver<SynthesisEvent>>,
}

impl InteractionController {
    pub fn new(config: AppConfig) -> Self {
        Self {
            conversation: Conversation::new(),
            input_text: String::new(),
            config,
            session: VoiceSession::new(),
            voice_query: false,
            voices: Vec::new(),
            inflight: Vec::new(),
            chat_command_tx: None,
            chat_event_rx: None,
            recognition_command_tx: None,
            recognition_event_rx: None,
            synthesis_command_tx: None,
            synthesis_event_rx: None,
        }
    }

    pub fn voice_state(&self) -> VoiceState {
        self.session.state()
    }

    /// Whether the mic affordance should be offered at all
    pub fn mic_available(&self) -> bool {
        self.recognition_command_tx.is_some()
    }

    /// Whether a mic press is currently accepted (disabled while narrating)
    pub fn mic_enabled(&self) -> bool {
        self.mic_available() && !self.session.is_speaking()
    }

    pub fn is_voice_query(&self) -> bool {
        self.voice_query
    }

    /// Submit the current input. Entry point for the send button, plain
    /// Enter, and the recognition auto-submit.
    pub fn submit(&mut self) {
        let text = self.input_text.trim().to_string();
        if text.is_empty() {
            return;
        }

        self.conversation.push(Message::user(text.clone()));
        self.input_text.clear();

        // Any in-flight narration stops before a new request starts.
        let action = self.session.apply(VoiceEvent::SubmissionStarted);
        self.run_voice_action(action);

        let request_id = Uuid::new_v4();
        let voice_origin = std::mem::take(&mut self.voice_query);

        self.conversation.push_pending(request_id);
        self.inflight.push(InflightRequest {
            request_id,
            voice_origin,
        });

        debug!(%request_id, voice_origin, "Submitting message");

        let sent = match &self.chat_command_tx {
            Some(tx) => tx
                .send(ChatCommand::Send {
                    message: text,
                    request_id,
                })
                .is_ok(),
            None => false,
        };

        if !sent {
            warn!("No backend worker available; reporting failure");
            self.finish_request(request_id, None);
        }
    }

    /// Populate the input with a fixed prompt and submit it
    pub fn submit_quick_prompt(&mut self, prompt: &str) {
        self.input_text = prompt.to_string();
        self.submit();
    }

    /// Mic control press. While narrating this only cancels the narration;
    /// it never chains into listening.
    pub fn toggle_mic(&mut self) {
        if !self.mic_available() {
            return;
        }
        let action = self.session.apply(VoiceEvent::MicToggled);
        self.run_voice_action(action);
    }

    /// Clear the conversation back to the welcome placeholder. Cancels any
    /// narration but not in-flight backend requests; a late reply lands in
    /// the fresh view.
    pub fn reset(&mut self) {
        let action = self.session.apply(VoiceEvent::SubmissionStarted);
        self.run_voice_action(action);
        self.conversation.clear();
    }

    /// Drain all pending backend and capability events. Called once per
    /// frame by the UI.
    pub fn poll_events(&mut self) {
        let chat_events: Vec<ChatEvent> = self
            .chat_event_rx
            .as_ref()
            .map(|rx| rx.try_iter().collect())
            .unwrap_or_default();
        for event in chat_events {
            self.handle_chat_event(event);
        }

        let recognition_events: Vec<RecognitionEvent> = self
            .recognition_event_rx
            .as_ref()
            .map(|rx| rx.try_iter().collect())
            .unwrap_or_default();
        for event in recognition_events {
            self.handle_recognition_event(event);
        }

        let synthesis_events: Vec<SynthesisEvent> = self
            .synthesis_event_rx
            .as_ref()
            .map(|rx| rx.try_iter().collect())
            .unwrap_or_default();
        for event in synthesis_events {
            self.handle_synthesis_event(event);
        }
    }

    fn handle_chat_event(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::Reply { reply, request_id } => {
                self.finish_request(request_id, Some(reply));
            }
            ChatEvent::Failed { request_id } => {
                self.finish_request(request_id, None);
            }
            ChatEvent::Shutdown => {
                debug!("Backend worker shut down");
            }
        }
    }

    /// Replace the pending marker with the bot reply (or the fixed fallback
    /// message) and narrate it if the submission came from voice input.
    fn finish_request(&mut self, request_id: Uuid, reply: Option<String>) {
        let voice_origin = match self
            .inflight
            .iter()
            .position(|r| r.request_id == request_id)
        {
            Some(idx) => self.inflight.swap_remove(idx).voice_origin,
            None => {
                warn!(%request_id, "Reply for unknown request dropped");
                return;
            }
        };

        let text = reply.unwrap_or_else(|| FALLBACK_REPLY.to_string());

        self.conversation.resolve_pending(request_id);
        self.conversation.push(Message::bot(text.clone()));

        if voice_origin {
            self.narrate(&text);
        }
    }

    fn handle_recognition_event(&mut self, event: RecognitionEvent) {
        match event {
            RecognitionEvent::Transcript(transcript) => {
                debug!("Transcript: {}", transcript);
                let action = self.session.apply(VoiceEvent::TranscriptAccepted);
                self.run_voice_action(action);
                self.input_text = transcript;
                self.voice_query = true;
                self.submit();
            }
            RecognitionEvent::Error(reason) => {
                warn!("Speech recognition error: {}", reason);
                let action = self.session.apply(VoiceEvent::RecognitionError);
                self.run_voice_action(action);
                self.voice_query = false;
            }
            RecognitionEvent::Ended => {
                let action = self.session.apply(VoiceEvent::RecognitionEnded);
                self.run_voice_action(action);
            }
        }
    }

    fn handle_synthesis_event(&mut self, event: SynthesisEvent) {
        match event {
            SynthesisEvent::Started => {
                let action = self.session.apply(VoiceEvent::SynthesisStarted);
                self.run_voice_action(action);
            }
            SynthesisEvent::Finished => {
                let action = self.session.apply(VoiceEvent::SynthesisFinished);
                self.run_voice_action(action);
            }
            SynthesisEvent::VoicesChanged(voices) => {
                debug!("Voice inventory updated: {} voices", voices.len());
                self.voices = voices;
            }
        }
    }

    fn narrate(&mut self, text: &str) {
        let Some(tx) = &self.synthesis_command_tx else {
            return;
        };

        let spoken = sanitize_for_narration(text);
        if spoken.is_empty() {
            return;
        }

        let utterance = Utterance {
            text: spoken,
            voice: select_voice(&self.voices).cloned(),
            rate: self.config.speech_rate,
            pitch: self.config.speech_pitch,
        };

        if tx.send(SynthesisCommand::Speak(utterance)).is_err() {
            warn!("Synthesis engine is gone; reply shown as text only");
        }
    }

    fn run_voice_action(&mut self, action: Option<VoiceAction>) {
        match action {
            Some(VoiceAction::StartRecognition) => {
                if let Some(tx) = &self.recognition_command_tx {
                    let _ = tx.send(RecognitionCommand::Start {
                        lang: self.config.recognition_lang.clone(),
                    });
                }
            }
            Some(VoiceAction::StopRecognition) => {
                if let Some(tx) = &self.recognition_command_tx {
                    let _ = tx.send(RecognitionCommand::Stop);
                }
            }
            Some(VoiceAction::CancelSynthesis) => {
                if let Some(tx) = &self.synthesis_command_tx {
                    let _ = tx.send(SynthesisCommand::Cancel);
                }
            }
            None => {}
        }
    }
}
