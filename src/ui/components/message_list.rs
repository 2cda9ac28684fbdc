//! Message list component
//!
//! Renders the conversation: the welcome screen with quick-prompt shortcuts
//! while the conversation is empty, then message bubbles and the typing
//! indicator. Bot replies go through the markup transform; user messages
//! are rendered literally.

use crate::controller::{InteractionController, QUICK_PROMPTS};
use crate::messages::{ConversationEntry, Message};
use crate::render::{format_reply, Block, Inline};
use crate::ui::theme::Theme;
use egui::{self, Align, Color32, RichText};

pub struct MessageList<'a> {
    controller: &'a mut InteractionController,
    theme: &'a Theme,
}

impl<'a> MessageList<'a> {
    pub fn new(controller: &'a mut InteractionController, theme: &'a Theme) -> Self {
        Self { controller, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        let entries = self.controller.conversation.entries();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.add_space(self.theme.spacing);

                    if entries.is_empty() {
                        self.show_welcome_screen(ui);
                    } else {
                        for entry in &entries {
                            match entry {
                                ConversationEntry::Message(message) => {
                                    self.show_message(ui, message);
                                }
                                ConversationEntry::Pending(_) => {
                                    self.show_typing_indicator(ui);
                                }
                            }
                            ui.add_space(self.theme.spacing_sm);
                        }
                    }

                    ui.add_space(self.theme.spacing);
                });
            });
    }

    fn show_welcome_screen(&mut self, ui: &mut egui::Ui) {
        let mut clicked_prompt = None;

        ui.vertical_centered(|ui| {
            ui.add_space(80.0);

            ui.label(
                RichText::new("Vyom Space Assistant")
                    .size(24.0)
                    .color(self.theme.text_primary),
            );

            ui.add_space(self.theme.spacing);

            ui.label(
                RichText::new(
                    "Your guide to Indian space exploration. Ask me anything about ISRO, \
                     space missions, satellites, and more.",
                )
                .size(14.0)
                .color(self.theme.text_muted),
            );

            ui.add_space(self.theme.spacing_lg);

            ui.horizontal_wrapped(|ui| {
                for quick in QUICK_PROMPTS {
                    let card = egui::Button::new(
                        RichText::new(quick.label)
                            .size(14.0)
                            .color(self.theme.text_primary),
                    )
                    .fill(self.theme.bg_secondary)
                    .rounding(self.theme.card_rounding);

                    if ui.add(card).on_hover_text(quick.prompt).clicked() {
                        clicked_prompt = Some(quick.prompt);
                    }
                }
            });
        });

        if let Some(prompt) = clicked_prompt {
            self.controller.submit_quick_prompt(prompt);
        }
    }

    fn show_message(&self, ui: &mut egui::Ui, message: &Message) {
        let is_user = message.is_user();
        let bubble_color = if is_user {
            self.theme.user_bubble
        } else {
            self.theme.bot_bubble
        };
        let text_color = if is_user {
            Color32::WHITE
        } else {
            self.theme.text_primary
        };
        let align = if is_user { Align::RIGHT } else { Align::LEFT };

        ui.with_layout(egui::Layout::top_down(align), |ui| {
            ui.label(
                RichText::new(if is_user { "You" } else { "Vyom" })
                    .size(12.0)
                    .color(self.theme.text_muted),
            );

            ui.add_space(2.0);

            let max_width = ui.available_width() * 0.75;

            egui::Frame::none()
                .fill(bubble_color)
                .rounding(self.theme.card_rounding)
                .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                .show(ui, |ui| {
                    ui.set_max_width(max_width);

                    if is_user {
                        // User input is never interpreted as markup.
                        ui.label(RichText::new(&message.text).color(text_color));
                    } else {
                        self.show_formatted_reply(ui, &message.text, text_color);
                    }
                });

            let time_str = message.timestamp.format("%H:%M").to_string();
            ui.label(
                RichText::new(time_str)
                    .size(10.0)
                    .color(self.theme.text_muted),
            );
        });
    }

    fn show_formatted_reply(&self, ui: &mut egui::Ui, text: &str, text_color: Color32) {
        for block in format_reply(text) {
            match block {
                Block::Paragraph(spans) => {
                    self.show_spans(ui, &spans, text_color, None);
                }
                Block::Bullet(spans) => {
                    self.show_spans(ui, &spans, text_color, Some("•"));
                }
                Block::CodeBlock(code) => {
                    egui::Frame::none()
                        .fill(self.theme.bg_tertiary)
                        .rounding(self.theme.button_rounding)
                        .inner_margin(egui::Margin::same(8.0))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(code)
                                    .monospace()
                                    .color(self.theme.text_secondary),
                            );
                        });
                }
            }
        }
    }

    fn show_spans(
        &self,
        ui: &mut egui::Ui,
        spans: &[Inline],
        text_color: Color32,
        bullet: Option<&str>,
    ) {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            if let Some(glyph) = bullet {
                ui.label(RichText::new(format!("{glyph} ")).color(text_color));
            }

            for span in spans {
                match span {
                    Inline::Text(text) => {
                        ui.label(RichText::new(text).color(text_color));
                    }
                    Inline::Code(code) => {
                        ui.label(
                            RichText::new(code)
                                .monospace()
                                .background_color(self.theme.bg_tertiary)
                                .color(self.theme.text_secondary),
                        );
                    }
                    Inline::Link(url) => {
                        // Opens in the system browser.
                        ui.hyperlink_to(url, url);
                    }
                }
            }
        });
    }

    fn show_typing_indicator(&self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::top_down(Align::LEFT), |ui| {
            egui::Frame::none()
                .fill(self.theme.bot_bubble)
                .rounding(self.theme.card_rounding)
                .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for i in 0..3 {
                            let t = ui.ctx().input(|input| input.time);
                            let alpha = ((t * 3.0 + i as f64 * 0.5).sin() * 0.5 + 0.5) as f32;
                            ui.label(
                                RichText::new("●")
                                    .size(10.0)
                                    .color(self.theme.text_muted.gamma_multiply(alpha)),
                            );
                        }
                    });
                });
        });

        ui.ctx().request_repaint();
    }
}
