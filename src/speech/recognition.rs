//! Speech recognition capability contract
//!
//! A host recognition engine takes the command receiver and event sender
//! side of a `RecognitionChannel` and drives them from its own thread. The
//! controller holds the other two endpoints. When the host has no engine to
//! offer, nothing is wired and the mic affordance stays disabled for the
//! whole session.

use crossbeam_channel::{bounded, Receiver, Sender};

/// Commands sent to the recognition engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionCommand {
    /// Begin a single capture session
    Start {
        /// BCP-47 language tag the engine should recognize, e.g. "en-US"
        lang: String,
    },
    /// Abort the current capture session
    Stop,
}

/// Callbacks from the recognition engine
#[derive(Debug, Clone)]
pub enum RecognitionEvent {
    /// Best transcript for the captured speech
    Transcript(String),
    /// Capture failed (no speech detected, permission denied, ...)
    Error(String),
    /// Capture ended; fired after either outcome
    Ended,
}

/// Channel bundle connecting the controller to a host recognition engine
pub struct RecognitionChannel {
    command_tx: Sender<RecognitionCommand>,
    command_rx: Receiver<RecognitionCommand>,
    event_tx: Sender<RecognitionEvent>,
    event_rx: Receiver<RecognitionEvent>,
}

impl RecognitionChannel {
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

    /// Controller side: send Start/Stop
    pub fn command_sender(&self) -> Sender<RecognitionCommand> {
        self.command_tx.clone()
    }

    /// Engine side: receive Start/Stop
    pub fn command_receiver(&self) -> Receiver<RecognitionCommand> {
        self.command_rx.clone()
    }

    /// Engine side: report transcripts and errors
    pub fn event_sender(&self) -> Sender<RecognitionEvent> {
        self.event_tx.clone()
    }

    /// Controller side: poll engine callbacks
    pub fn event_receiver(&self) -> Receiver<RecognitionEvent> {
        self.event_rx.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_round_trip() {
        let channel = RecognitionChannel::new(4);

        channel
            .command_sender()
            .send(RecognitionCommand::Start {
                lang: "en-US".to_string(),
            })
            .unwrap();
        assert_eq!(
            channel.command_receiver().recv().unwrap(),
            RecognitionCommand::Start {
                lang: "en-US".to_string()
            }
        );

        channel
            .event_sender()
            .send(RecognitionEvent::Transcript("hello".to_string()))
            .unwrap();
        match channel.event_receiver().recv().unwrap() {
            RecognitionEvent::Transcript(text) => assert_eq!(text, "hello"),
            _ => panic!("Wrong variant"),
        }
    }
}
