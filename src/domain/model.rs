use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const CANCELED_MESSAGE: &str = "Download canceled";

/// Result of `download_asset` as seen by the presentation layer.
///
/// Serializes as `{success, path}` on success and `{success, message}` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DownloadOutcome {
    pub fn saved(path: PathBuf) -> Self {
        Self {
            success: true,
            path: Some(path),
            message: None,
        }
    }

    pub fn canceled() -> Self {
        Self::failed(CANCELED_MESSAGE)
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            path: None,
            message: Some(message.into()),
        }
    }

    pub fn is_canceled(&self) -> bool {
        !self.success && self.message.as_deref() == Some(CANCELED_MESSAGE)
    }
}

/// Fixed attributes of the overlay window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub frameless: bool,
    pub transparent: bool,
    pub resizable: bool,
    pub skip_taskbar: bool,
    pub always_on_top: bool,
    pub initially_visible: bool,
    pub hide_on_blur: bool,
}

impl From<&OverlayConfig> for WindowSpec {
    fn from(config: &OverlayConfig) -> Self {
        Self {
            title: config.title.clone(),
            width: config.width,
            height: config.height,
            frameless: true,
            transparent: true,
            resizable: false,
            skip_taskbar: true,
            always_on_top: true,
            initially_visible: false,
            hide_on_blur: true,
        }
    }
}

/// Configuration for the overlay shell
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    /// Toggle binding in global-hotkey syntax
    pub hotkey: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            title: "Asset Overlay".to_string(),
            width: 800.0,
            height: 600.0,
            hotkey: "CmdOrCtrl+Space".to_string(),
        }
    }
}
