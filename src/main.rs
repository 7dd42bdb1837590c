mod api;
mod app;
mod application;
mod bridge;
mod domain;
mod logging;
mod platform;
mod ui;
mod utils;

fn main() -> iced::Result {
    logging::init();

    iced::daemon(app::OverlayApp::new, app::update, app::view)
        .title(app::title)
        .style(app::style)
        .subscription(app::subscription)
        .run()
}
