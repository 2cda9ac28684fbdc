//! Voice session state machine
//!
//! Tracks whether the microphone is listening or a reply is being narrated.
//! Exactly one of the two can be active: starting one terminates the other.
//! Every mic press and every recognition/synthesis callback is funneled
//! through the single `apply` transition, which returns the side effect the
//! caller must perform on the capability channels.

/// Current voice activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoiceState {
    /// Neither listening nor speaking
    #[default]
    Idle,
    /// Microphone capture in progress
    Listening,
    /// A reply is being narrated
    Speaking,
}

/// Inputs to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceEvent {
    /// User pressed the mic control
    MicToggled,
    /// Recognition produced a transcript
    TranscriptAccepted,
    /// Recognition reported an error (no speech, permission denied, ...)
    RecognitionError,
    /// Recognition ended without any other callback
    RecognitionEnded,
    /// Synthesis engine started playing an utterance
    SynthesisStarted,
    /// Synthesis engine finished playing
    SynthesisFinished,
    /// A new submission or a reset began; in-flight narration must stop
    SubmissionStarted,
}

/// Side effect the caller must perform after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceAction {
    StartRecognition,
    StopRecognition,
    CancelSynthesis,
}

#[derive(Debug, Clone, Default)]
pub struct VoiceSession {
    state: VoiceState,
}

impl VoiceSession {
    pub fn new() -> Self {
        Self {
            state: VoiceState::Idle,
        }
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    pub fn is_listening(&self) -> bool {
        self.state == VoiceState::Listening
    }

    pub fn is_speaking(&self) -> bool {
        self.state == VoiceState::Speaking
    }

    /// Apply one event and return the side effect to perform, if any.
    pub fn apply(&mut self, event: VoiceEvent) -> Option<VoiceAction> {
        match (self.state, event) {
            // A mic press while narrating only stops the narration; it does
            // not start listening. A second press is needed for that.
            (VoiceState::Speaking, VoiceEvent::MicToggled) => {
                self.state = VoiceState::Idle;
                Some(VoiceAction::CancelSynthesis)
            }
            (VoiceState::Listening, VoiceEvent::MicToggled) => {
                self.state = VoiceState::Idle;
                Some(VoiceAction::StopRecognition)
            }
            (VoiceState::Idle, VoiceEvent::MicToggled) => {
                self.state = VoiceState::Listening;
                Some(VoiceAction::StartRecognition)
            }

            // The recognizer winds down on its own after any of these.
            (
                VoiceState::Listening,
                VoiceEvent::TranscriptAccepted
                | VoiceEvent::RecognitionError
                | VoiceEvent::RecognitionEnded,
            ) => {
                self.state = VoiceState::Idle;
                None
            }

            // Listening and speaking are mutually exclusive: narration
            // starting while the mic is open shuts the capture down.
            (VoiceState::Listening, VoiceEvent::SynthesisStarted) => {
                self.state = VoiceState::Speaking;
                Some(VoiceAction::StopRecognition)
            }
            (_, VoiceEvent::SynthesisStarted) => {
                self.state = VoiceState::Speaking;
                None
            }
            (VoiceState::Speaking, VoiceEvent::SynthesisFinished) => {
                self.state = VoiceState::Idle;
                None
            }
            (VoiceState::Speaking, VoiceEvent::SubmissionStarted) => {
                self.state = VoiceState::Idle;
                Some(VoiceAction::CancelSynthesis)
            }

            _ => None,
        }
    }
}
