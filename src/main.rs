//! REPR//LAB - Digital Representation Lab.
//!
//! Interactive visualizer for binary/hex/decimal values, two's complement,
//! endianness, UTF-8 byte layout and image pixel colors.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use eframe::egui;
use tracing_subscriber::EnvFilter;

use reprlab::app::LabApp;
use reprlab::config::Config;

// =============================================================================
// Entry Point
// =============================================================================

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }
    tracing::info!(width = %config.width, tool = config.tool.name(), "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([720.0, 520.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Digital Representation Lab",
        options,
        Box::new(move |cc| Ok(Box::new(LabApp::new(cc, config)))),
    )
}
