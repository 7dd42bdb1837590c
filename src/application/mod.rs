pub mod download_service;
pub mod window_controller;

pub use download_service::AssetDownloadService;
pub use window_controller::WindowController;
