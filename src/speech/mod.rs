//! Speech capability plumbing
//!
//! The actual recognition and synthesis engines live outside this crate and
//! plug in over command/event channels. This module provides:
//! - the channel contracts for both capabilities
//! - the voice session state machine (listening and speaking are mutually
//!   exclusive)
//! - the narration text sanitizer and voice selection policy

pub mod recognition;
pub mod session;
pub mod synthesis;

pub use recognition::{RecognitionChannel, RecognitionCommand, RecognitionEvent};
pub use session::{VoiceAction, VoiceEvent, VoiceSession, VoiceState};
pub use synthesis::{
    sanitize_for_narration, select_voice, SynthesisChannel, SynthesisCommand, SynthesisEvent,
    Utterance, VoiceInfo,
};
