//! The narrow interface between the orchestration side and the overlay's
//! presentation layer.

/// Calls the presentation layer may make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeRequest {
    /// Fire-and-forget; nothing is returned.
    HideWindow,
    /// Answered with a `DownloadOutcome`.
    DownloadAsset { url: String, filename: String },
}

/// Notifications pushed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationEvent {
    WindowShown,
    WindowHidden,
}

impl PresentationEvent {
    pub fn channel(self) -> &'static str {
        match self {
            PresentationEvent::WindowShown => "window-shown",
            PresentationEvent::WindowHidden => "window-hidden",
        }
    }
}
