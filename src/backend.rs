//! Chat backend client
//!
//! Channel-based worker for the remote `/chat` endpoint. The UI thread sends
//! `ChatCommand`s and polls `ChatEvent`s; a worker thread owns a tokio
//! runtime and a reqwest client. Successful replies are held back until the
//! configured pacing floor has elapsed so the typing indicator stays visible
//! for a beat; failures surface immediately.
//!
//! There is no retry and no cancellation: a request outlives a conversation
//! reset and its reply is delivered to whatever view exists when it lands.

use crate::config::AppConfig;
use crate::{Result, VyomError};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Fixed user-visible message substituted for any backend failure
pub const FALLBACK_REPLY: &str =
    "Sorry, I encountered an error while processing your request. Please try again.";

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    reply: String,
}

/// Commands sent to the backend worker
#[derive(Debug, Clone)]
pub enum ChatCommand {
    /// Post a user message to the backend
    Send {
        /// The raw message text
        message: String,
        /// Request ID for matching the eventual event
        request_id: Uuid,
    },

    /// Shut down the worker
    Shutdown,
}

/// Events emitted by the backend worker
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// The backend answered with a reply
    Reply { reply: String, request_id: Uuid },

    /// Transport failure or non-success HTTP status
    Failed { request_id: Uuid },

    /// Worker has shut down
    Shutdown,
}

/// Backend pipeline with channel-based communication
pub struct ChatBackend {
    config: AppConfig,
    command_tx: Sender<ChatCommand>,
    command_rx: Receiver<ChatCommand>,
    event_tx: Sender<ChatEvent>,
    event_rx: Receiver<ChatEvent>,
}

impl ChatBackend {
    pub fn new(config: AppConfig) -> Self {
        let (command_tx, command_rx) = bounded(config.channel_capacity);
        let (event_tx, event_rx) = bounded(config.channel_capacity);

        Self {
            config,
            command_tx,
            command_rx,
            event_tx,
            event_rx,
        }
    }

    /// Get a sender for commands
    pub fn command_sender(&self) -> Sender<ChatCommand> {
        self.command_tx.clone()
    }

    /// Get a receiver for events
    pub fn event_receiver(&self) -> Receiver<ChatEvent> {
        self.event_rx.clone()
    }

    /// Start the worker thread that services chat requests
    pub fn start_worker(self) -> Result<std::thread::JoinHandle<()>> {
        let config = self.config.clone();
        let command_rx = self.command_rx.clone();
        let event_tx = self.event_tx.clone();

        let handle = std::thread::Builder::new()
            .name("chat-backend".to_string())
            .spawn(move || {
                info!("Chat backend worker starting");

                let runtime = match Runtime::new() {
                    Ok(rt) => rt,
                    Err(e) => {
                        error!("Failed to create tokio runtime: {}", e);
                        let _ = event_tx.send(ChatEvent::Shutdown);
                        return;
                    }
                };

                let client = match reqwest::Client::builder()
                    .timeout(Duration::from_secs(config.request_timeout_secs))
                    .build()
                {
                    Ok(client) => client,
                    Err(e) => {
                        error!("Failed to build HTTP client: {}", e);
                        let _ = event_tx.send(ChatEvent::Shutdown);
                        return;
                    }
                };

                let pacing_floor = Duration::from_millis(config.reply_delay_ms);

                loop {
                    match command_rx.recv() {
                        Ok(ChatCommand::Send {
                            message,
                            request_id,
                        }) => {
                            debug!("Posting request {} to {}", request_id, config.endpoint);
                            let started = Instant::now();

                            let result = runtime.block_on(request_reply(
                                &client,
                                &config.endpoint,
                                &message,
                            ));

                            match result {
                                Ok(reply) => {
                                    // Pacing floor: keep the typing indicator
                                    // visible for at least the configured
                                    // delay before committing the reply.
                                    let elapsed = started.elapsed();
                                    if elapsed < pacing_floor {
                                        std::thread::sleep(pacing_floor - elapsed);
                                    }

                                    debug!(
                                        "Request {} answered with {} chars",
                                        request_id,
                                        reply.len()
                                    );
                                    let _ = event_tx.send(ChatEvent::Reply { reply, request_id });
                                }
                                Err(e) => {
                                    warn!("Request {} failed: {}", request_id, e);
                                    let _ = event_tx.send(ChatEvent::Failed { request_id });
                                }
                            }
                        }

                        Ok(ChatCommand::Shutdown) => {
                            info!("Chat backend worker shutting down");
                            let _ = event_tx.send(ChatEvent::Shutdown);
                            break;
                        }

                        Err(e) => {
                            error!("Command channel error: {}", e);
                            break;
                        }
                    }
                }

                info!("Chat backend worker stopped");
            })?;

        Ok(handle)
    }
}

async fn request_reply(client: &reqwest::Client, endpoint: &str, message: &str) -> Result<String> {
    let response = client
        .post(endpoint)
        .json(&ChatRequest { message })
        .send()
        .await
        .map_err(|e| VyomError::BackendError(e.to_string()))?
        .error_for_status()
        .map_err(|e| VyomError::BackendError(e.to_string()))?;

    let body: ChatResponse = response
        .json()
        .await
        .map_err(|e| VyomError::BackendError(e.to_string()))?;

    Ok(body.reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_creation() {
        let backend = ChatBackend::new(AppConfig::default());

        let _cmd_tx = backend.command_sender();
        let _event_rx = backend.event_receiver();
    }

    #[test]
    fn test_request_wire_format() {
        let body = serde_json::to_string(&ChatRequest {
            message: "Tell me about Chandrayaan-3",
        })
        .unwrap();
        assert_eq!(body, r#"{"message":"Tell me about Chandrayaan-3"}"#);
    }

    #[test]
    fn test_response_wire_format() {
        let parsed: ChatResponse =
            serde_json::from_str(r#"{"reply":"Hello from the backend"}"#).unwrap();
        assert_eq!(parsed.reply, "Hello from the backend");
    }

    #[test]
    fn test_command_variants() {
        let cmd = ChatCommand::Send {
            message: "Hello".to_string(),
            request_id: Uuid::new_v4(),
        };

        match cmd {
            ChatCommand::Send { message, .. } => assert_eq!(message, "Hello"),
            _ => panic!("Wrong variant"),
        }

        match ChatCommand::Shutdown {
            ChatCommand::Shutdown => {}
            _ => panic!("Wrong variant"),
        }
    }
}
