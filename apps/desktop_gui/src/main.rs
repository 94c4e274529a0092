mod config;
mod controller;
mod sink_bridge;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::config::load_settings;
use crate::controller::events::UiEvent;
use crate::sink_bridge::commands::SinkCommand;

#[derive(Parser, Debug)]
struct Cli {
    /// Settings file; missing file falls back to defaults.
    #[arg(long, default_value = "intake.toml")]
    config: std::path::PathBuf,
    /// Open the request modal for this service slug at startup.
    #[arg(long)]
    service: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let settings = load_settings(&cli.config);

    let (cmd_tx, cmd_rx) = bounded::<SinkCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    sink_bridge::runtime::launch(cmd_rx, ui_tx);

    let window_title = settings.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window_title.clone())
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([860.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        &window_title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ui::IntakeApp::new(
                settings,
                cmd_tx,
                ui_rx,
                cli.service,
            )))
        }),
    )
}
