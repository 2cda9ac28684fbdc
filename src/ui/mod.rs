//! egui user interface for the chat client

pub mod app;
pub mod components;
pub mod theme;

pub use app::VyomApp;
pub use theme::Theme;
