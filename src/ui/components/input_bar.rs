//! Input bar component
//!
//! Text input with Enter-to-send, the mic control, and the send button. The
//! mic button is disabled while the recognition capability is missing; a
//! press during narration only stops the narration.

use crate::controller::InteractionController;
use crate::speech::VoiceState;
use crate::ui::theme::Theme;
use egui::{self, Key, RichText, Vec2};

pub struct InputBar<'a> {
    controller: &'a mut InteractionController,
    theme: &'a Theme,
}

impl<'a> InputBar<'a> {
    /// Stable widget id for the text field, so focus survives submissions
    pub const INPUT_ID: &'static str = "chat_input";

    pub fn new(controller: &'a mut InteractionController, theme: &'a Theme) -> Self {
        Self { controller, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    self.show_mic_button(ui);
                    ui.add_space(self.theme.spacing_sm);
                    self.show_text_input(ui);
                    ui.add_space(self.theme.spacing_sm);
                    self.show_send_button(ui);
                });
            });
    }

    fn show_mic_button(&mut self, ui: &mut egui::Ui) {
        let state = self.controller.voice_state();
        let available = self.controller.mic_available();

        let (icon, tooltip, color) = if !available {
            (
                "🎤",
                "Speech recognition is not supported on this system",
                self.theme.text_muted,
            )
        } else {
            match state {
                VoiceState::Idle => ("🎤", "Ask by voice", self.theme.text_secondary),
                VoiceState::Listening => ("⏹", "Stop listening", self.theme.listening),
                VoiceState::Speaking => ("🔇", "Stop narration", self.theme.text_muted),
            }
        };

        let mut button = egui::Button::new(RichText::new(icon).size(20.0).color(color))
            .min_size(Vec2::splat(44.0))
            .rounding(self.theme.button_rounding);

        if state == VoiceState::Listening {
            button = button.fill(self.theme.listening.gamma_multiply(0.2));
        }

        let response = ui.add_enabled(available, button);
        let button_rect = response.rect;

        if response.clicked() {
            self.controller.toggle_mic();
        }
        response.on_hover_text(tooltip);

        // Pulsing ring while listening
        if state == VoiceState::Listening {
            let t = ui.ctx().input(|i| i.time);
            let pulse = ((t * 3.0).sin() * 0.5 + 0.5) as f32;

            let painter = ui.painter();
            let center = button_rect.center();
            let radius = button_rect.width() / 2.0 + 2.0 + pulse * 3.0;

            painter.circle_stroke(
                center,
                radius,
                egui::Stroke::new(
                    2.0 * pulse,
                    self.theme.listening.gamma_multiply(1.0 - pulse * 0.5),
                ),
            );

            ui.ctx().request_repaint();
        }
    }

    fn show_text_input(&mut self, ui: &mut egui::Ui) {
        let listening = self.controller.voice_state() == VoiceState::Listening;

        let hint = if listening {
            "Listening..."
        } else {
            "Ask anything about ISRO and space exploration..."
        };

        let available_width = ui.available_width() - 60.0;

        let text_edit = egui::TextEdit::singleline(&mut self.controller.input_text)
            .id(egui::Id::new(Self::INPUT_ID))
            .hint_text(hint)
            .desired_width(available_width)
            .font(egui::TextStyle::Body)
            .margin(egui::Margin::symmetric(12.0, 8.0));

        let response = ui.add_enabled(!listening, text_edit);

        // Plain Enter sends; Shift+Enter is reserved for newlines. The
        // field drops focus on the Enter frame, so the gate is lost_focus.
        let enter_pressed = ui.input(|i| i.key_pressed(Key::Enter));
        let shift_held = ui.input(|i| i.modifiers.shift);

        if response.lost_focus()
            && enter_pressed
            && !shift_held
            && !self.controller.input_text.trim().is_empty()
        {
            self.controller.submit();
            response.request_focus();
        }
    }

    fn show_send_button(&mut self, ui: &mut egui::Ui) {
        let can_send = !self.controller.input_text.trim().is_empty();

        let button_color = if can_send {
            self.theme.primary
        } else {
            self.theme.text_muted
        };

        let button = egui::Button::new(RichText::new("➤").size(18.0).color(egui::Color32::WHITE))
            .min_size(Vec2::splat(44.0))
            .rounding(self.theme.button_rounding)
            .fill(button_color);

        let response = ui.add_enabled(can_send, button);

        if response.clicked() {
            self.controller.submit();
        }

        response.on_hover_text("Send message (Enter)");
    }
}
