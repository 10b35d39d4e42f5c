mod app;
mod events;
mod logging;
mod surface;
mod ui;

pub use app::run_app;
