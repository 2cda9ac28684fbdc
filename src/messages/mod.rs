pub mod conversation;
pub mod types;

pub use conversation::{Conversation, ConversationEntry};
pub use types::{Message, Sender};
