mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::config::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::PlaytimeApp;

#[derive(Parser, Debug)]
struct Args {
    /// Directory API base url. Overrides playtime.toml and PLAYTIME_API_URL.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    let mut settings = load_settings();
    if let Some(api_url) = args.api_url {
        settings.api_base_url = api_url;
    }
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(settings.api_base_url.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PlayTime Machine Control")
            .with_inner_size([720.0, 860.0])
            .with_min_inner_size([480.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "PlayTime Machine Control",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(PlaytimeApp::new(
                cmd_tx,
                ui_rx,
                settings.api_base_url,
            )))
        }),
    )
}
