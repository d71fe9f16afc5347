#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Default window size; the row layout needs tablet-class width.
pub const WINDOW_WIDTH: f64 = 1100.0;
pub const WINDOW_HEIGHT: f64 = 800.0;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Server display name shown under the team name, set from command line
static SERVER_DISPLAY_NAME: OnceLock<String> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tempo")
    })
}

/// Get the configured server display name.
pub fn get_server_display_name() -> String {
    SERVER_DISPLAY_NAME
        .get()
        .cloned()
        .unwrap_or_else(|| "Community Server".to_string())
}

/// Tempo - desktop chat client
#[derive(Parser, Debug)]
#[command(name = "tempo-desktop")]
#[command(about = "Tempo - desktop chat client")]
struct Args {
    /// Data directory for local state (use different dirs for multiple instances)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Server display name shown in the channel list header
    #[arg(short, long)]
    server_name: Option<String>,

    /// Instance number (shorthand for a numbered data dir)
    #[arg(short, long)]
    instance: Option<u8>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = if let Some(dir) = args.data_dir {
        dir
    } else {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        match args.instance {
            Some(1) | None => base.join("tempo"),
            Some(n) => base.join(format!("tempo-{}", n)),
        }
    };

    let _ = DATA_DIR.set(data_dir.clone());
    if let Some(server_name) = args.server_name {
        let _ = SERVER_DISPLAY_NAME.set(server_name);
    }

    tracing::info!("Starting Tempo with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Tempo")
            .with_inner_size(dioxus::desktop::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
