//! Input bar keyboard behavior tests
//!
//! Runs the input bar through a headless egui context so the real focus
//! cycle is exercised: the text field surrenders focus on the Enter frame,
//! and the submit gate has to account for that.

use egui::{CentralPanel, Event, Id, Key, Modifiers, RawInput};
use vyom::backend::ChatCommand;
use vyom::config::AppConfig;
use vyom::controller::InteractionController;
use vyom::ui::components::InputBar;
use vyom::ui::Theme;

fn run_frame(
    ctx: &egui::Context,
    input: RawInput,
    controller: &mut InteractionController,
    theme: &Theme,
) {
    let _ = ctx.run(input, |ctx| {
        CentralPanel::default().show(ctx, |ui| {
            InputBar::new(controller, theme).show(ui);
        });
    });
}

fn key_event(key: Key, modifiers: Modifiers) -> Event {
    Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

/// Controller with the chat command channel wired to a local receiver
fn wired_controller() -> (
    InteractionController,
    crossbeam_channel::Receiver<ChatCommand>,
) {
    let (tx, rx) = crossbeam_channel::bounded(4);
    let mut controller = InteractionController::new(AppConfig::default());
    controller.chat_command_tx = Some(tx);
    (controller, rx)
}

fn focus_input(ctx: &egui::Context) {
    ctx.memory_mut(|m| m.request_focus(Id::new(InputBar::INPUT_ID)));
}

#[test]
fn plain_enter_submits_focused_input() {
    let ctx = egui::Context::default();
    let theme = Theme::dark();
    let (mut controller, command_rx) = wired_controller();
    controller.input_text = "Tell me about ISRO".to_string();

    run_frame(&ctx, RawInput::default(), &mut controller, &theme);
    focus_input(&ctx);
    run_frame(&ctx, RawInput::default(), &mut controller, &theme);

    let mut input = RawInput::default();
    input.events.push(key_event(Key::Enter, Modifiers::NONE));
    run_frame(&ctx, input, &mut controller, &theme);

    let messages = controller.conversation.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, "Tell me about ISRO");
    assert!(controller.input_text.is_empty());

    match command_rx.try_recv().unwrap() {
        ChatCommand::Send { message, .. } => assert_eq!(message, "Tell me about ISRO"),
        other => panic!("Unexpected command: {other:?}"),
    }
}

#[test]
fn shift_enter_does_not_submit() {
    let ctx = egui::Context::default();
    let theme = Theme::dark();
    let (mut controller, command_rx) = wired_controller();
    controller.input_text = "draft".to_string();

    run_frame(&ctx, RawInput::default(), &mut controller, &theme);
    focus_input(&ctx);
    run_frame(&ctx, RawInput::default(), &mut controller, &theme);

    let mut input = RawInput::default();
    input.modifiers = Modifiers::SHIFT;
    input.events.push(key_event(Key::Enter, Modifiers::SHIFT));
    run_frame(&ctx, input, &mut controller, &theme);

    assert!(controller.conversation.is_empty());
    assert_eq!(controller.input_text, "draft");
    assert!(command_rx.try_recv().is_err());
}

#[test]
fn enter_with_empty_input_does_nothing() {
    let ctx = egui::Context::default();
    let theme = Theme::dark();
    let (mut controller, command_rx) = wired_controller();

    run_frame(&ctx, RawInput::default(), &mut controller, &theme);
    focus_input(&ctx);
    run_frame(&ctx, RawInput::default(), &mut controller, &theme);

    let mut input = RawInput::default();
    input.events.push(key_event(Key::Enter, Modifiers::NONE));
    run_frame(&ctx, input, &mut controller, &theme);

    assert!(controller.conversation.is_empty());
    assert!(command_rx.try_recv().is_err());
}
