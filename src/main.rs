#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Records API base URL, set from command line
static API_URL: OnceLock<String> = OnceLock::new();

const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Get the records API base URL (set from command line or default)
pub fn get_api_url() -> String {
    API_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Daylog - diet & exercise journal
#[derive(Parser, Debug)]
#[command(name = "daylog-desktop")]
#[command(about = "Daylog - a diet and exercise journal")]
struct Args {
    /// Base URL of the records API (falls back to $DAYLOG_API_URL)
    #[arg(short, long)]
    api_url: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let api_url = args
        .api_url
        .or_else(|| std::env::var("DAYLOG_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    // Store API base globally
    let _ = API_URL.set(api_url.clone());

    // Phone-ish portrait window
    let window_width = 480.0;
    let window_height = 860.0;

    tracing::info!("Starting daylog against records API at {}", api_url);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Daylog")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
