//! Main application struct and eframe integration

use crate::controller::InteractionController;
use crate::speech::VoiceState;
use crate::ui::components::{InputBar, MessageList};
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, RichText, TopBottomPanel};

/// Main application window
pub struct VyomApp {
    controller: InteractionController,
    theme: Theme,
}

impl VyomApp {
    pub fn new(cc: &eframe::CreationContext<'_>, controller: InteractionController) -> Self {
        let theme = Theme::dark();
        theme.apply(&cc.egui_ctx);

        Self { controller, theme }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_secondary)
                    .inner_margin(12.0),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Vyom")
                            .size(20.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );

                    ui.label(
                        RichText::new("Space Assistant")
                            .size(14.0)
                            .color(self.theme.text_muted),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("🗑").on_hover_text("Clear chat").clicked() {
                            self.controller.reset();
                        }
                    });
                });
            });
    }

    fn show_input_area(&mut self, ctx: &egui::Context) {
        TopBottomPanel::bottom("input_area")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                InputBar::new(&mut self.controller, &self.theme).show(ui);
            });
    }

    fn show_content(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.bg_primary))
            .show(ctx, |ui| {
                MessageList::new(&mut self.controller, &self.theme).show(ui);
            });
    }
}

impl eframe::App for VyomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll_events();

        self.show_header(ctx);
        self.show_input_area(ctx);
        self.show_content(ctx);

        // Keep polling while anything is in flight.
        if self.controller.conversation.has_pending()
            || self.controller.voice_state() != VoiceState::Idle
        {
            ctx.request_repaint();
        }
    }
}
