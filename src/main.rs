use clap::Parser;

mod backend;
mod config;
mod draw;
mod input;
mod ui;
mod util;

#[derive(Parser, Debug)]
#[command(name = "waydraw")]
#[command(version, about = "Freehand drawing pad for Wayland compositors")]
struct Cli {}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let _cli = Cli::parse();

    // Check for Wayland environment
    if std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a Wayland compositor (Hyprland, Sway, etc.).");
        return Err(anyhow::anyhow!("Wayland environment required"));
    }

    log::info!("Starting drawing pad...");
    log::info!("Controls:");
    log::info!("  - Draw: drag on the canvas");
    log::info!("  - Colors: click a swatch, or press C to cycle");
    log::info!("  - Thickness: toolbar buttons, Up/+ and Down/-");
    log::info!("  - Undo: U or Ctrl+Z, or the toolbar button");
    log::info!("  - Clear all: R, or the toolbar button");
    log::info!("  - Exit: Escape or Ctrl+Q");
    log::info!("");

    backend::run_wayland()?;

    log::info!("Drawing pad closed.");

    Ok(())
}
