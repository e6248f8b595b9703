//! MRI QA client - Main entry point
//!
//! Initializes application-level logging and launches the iced UI.

use mriqa_core::logging::{init_tracing, LogLevel};

mod app;
mod handlers;
mod pages;
mod theme;

use app::App;

fn main() -> iced::Result {
    init_tracing(LogLevel::Info);

    tracing::info!("MRI QA client starting");
    tracing::info!("Core version: {}", mriqa_core::version());
    tracing::info!("Backend: {}", mriqa_core::client::BACKEND_BASE);

    iced::application(App::new, App::update, App::view)
        .title(App::TITLE)
        .theme(App::theme)
        .window_size(iced::Size::new(1000.0, 760.0))
        .run()
}
