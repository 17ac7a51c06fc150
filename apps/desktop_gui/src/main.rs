mod backend_bridge;
mod controller;
mod ui;

use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::AppCommand;
use crate::backend_bridge::runtime;
use crate::controller::events::UiEvent;
use crate::ui::DesktopGuiApp;

/// LearnHub - a course marketplace demo with an in-process catalog and a
/// simulated checkout.
#[derive(Debug, Parser)]
#[command(name = "learnhub")]
struct Args {
    /// Tracing filter, e.g. `info` or `session_core=debug`.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_filter))
        .init();

    let catalog = Arc::new(shared::Catalog::builtin().context("loading builtin course catalog")?);

    let (cmd_tx, cmd_rx) = bounded::<AppCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    runtime::launch(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("LearnHub")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([980.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "LearnHub",
        options,
        Box::new(move |_cc| Ok(Box::new(DesktopGuiApp::new(cmd_tx, ui_rx, catalog)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop shell exited with an error: {err}"))
}
