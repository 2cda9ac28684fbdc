//! Application configuration
//!
//! Centralized settings for the backend endpoint, UX pacing, and narration.

/// Configuration for the chat client
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// URL of the chat backend endpoint
    pub endpoint: String,

    /// Minimum visible delay before a successful reply replaces the typing
    /// indicator, in milliseconds. A UX pacing floor, not a timeout.
    pub reply_delay_ms: u64,

    /// Request timeout for the backend call, in seconds
    pub request_timeout_secs: u64,

    /// Language hint passed to the speech recognition engine
    pub recognition_lang: String,

    /// Narration speech rate (1.0 = normal)
    pub speech_rate: f32,

    /// Narration pitch (1.0 = normal)
    pub speech_pitch: f32,

    /// Capacity for worker command/event channels
    pub channel_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000/chat".to_string(),
            reply_delay_ms: 500,
            request_timeout_secs: 30,
            recognition_lang: "en-US".to_string(),
            speech_rate: 1.0,
            speech_pitch: 1.0,
            channel_capacity: 16,
        }
    }
}

impl AppConfig {
    /// Create a config pointing at the given backend endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the reply pacing floor
    pub fn with_reply_delay_ms(mut self, delay_ms: u64) -> Self {
        self.reply_delay_ms = delay_ms;
        self
    }

    /// Set the backend request timeout
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Set the recognition language
    pub fn with_recognition_lang(mut self, lang: impl Into<String>) -> Self {
        self.recognition_lang = lang.into();
        self
    }

    /// Set the narration rate and pitch
    pub fn with_narration(mut self, rate: f32, pitch: f32) -> Self {
        self.speech_rate = rate;
        self.speech_pitch = pitch;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.reply_delay_ms, 500);
        assert_eq!(config.recognition_lang, "en-US");
        assert!((config.speech_rate - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_config_builder() {
        let config = AppConfig::new("http://example.com/chat")
            .with_reply_delay_ms(250)
            .with_recognition_lang("en-IN")
            .with_narration(1.2, 0.9);

        assert_eq!(config.endpoint, "http://example.com/chat");
        assert_eq!(config.reply_delay_ms, 250);
        assert_eq!(config.recognition_lang, "en-IN");
        assert!((config.speech_pitch - 0.9).abs() < f32::EPSILON);
    }
}
