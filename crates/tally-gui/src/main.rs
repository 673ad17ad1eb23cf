//! Tally - Desktop Calculator.
//!
//! A small MVVM calculator: the view-model in `tally_core` owns all state
//! and notifies its subscribers on every change; this binary hosts the
//! Iced view that renders the state and dispatches user input.

use iced::Size;
use iced::window;

use tally_gui::app::App;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Tally");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(380.0, 320.0),
            min_size: Some(Size::new(320.0, 280.0)),
            ..Default::default()
        })
        .run()
}
