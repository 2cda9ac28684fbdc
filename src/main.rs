use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vyom::backend::ChatBackend;
use vyom::config::AppConfig;
use vyom::controller::InteractionController;
use vyom::ui::VyomApp;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vyom=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vyom space assistant");

    let config = match std::env::var("VYOM_ENDPOINT") {
        Ok(endpoint) => AppConfig::new(endpoint),
        Err(_) => AppConfig::default(),
    };

    let backend = ChatBackend::new(config.clone());
    let mut controller = InteractionController::new(config);
    controller.chat_command_tx = Some(backend.command_sender());
    controller.chat_event_rx = Some(backend.event_receiver());
    let _backend_worker = backend.start_worker()?;

    // Speech engines are host capabilities; none are bundled here. With no
    // recognition channel wired the mic stays disabled and the app runs
    // text-only.
    info!("No speech engine wired; voice input disabled");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Vyom"),
        ..Default::default()
    };

    eframe::run_native(
        "Vyom",
        native_options,
        Box::new(|cc| Ok(Box::new(VyomApp::new(cc, controller)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
