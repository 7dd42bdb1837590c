pub mod error;
pub mod model;

pub use error::{DialogError, DownloadError, HotkeyError};
pub use model::{DownloadOutcome, OverlayConfig, WindowSpec};
