use iced::{
    border,
    widget::{button, column, container, row, text, text_input, Space},
    Color, Element, Length,
};

use crate::bridge::{BridgeRequest, PresentationEvent};
use crate::domain::DownloadOutcome;
use crate::utils::filename_from_url;

const IDLE_MESSAGE: &str = "Paste an asset URL to download";

/// Presentation layer rendered inside the overlay window
pub struct OverlayView {
    pub url: String,
    pub filename: String,
    pub status_message: String,
    pub is_downloading: bool,
    filename_edited: bool,
}

impl Default for OverlayView {
    fn default() -> Self {
        Self {
            url: String::new(),
            filename: String::new(),
            status_message: IDLE_MESSAGE.to_string(),
            is_downloading: false,
            filename_edited: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum OverlayMessage {
    UrlChanged(String),
    FilenameChanged(String),
    DownloadPressed,
    HidePressed,
}

impl OverlayView {
    /// Applies a UI message; returns the bridge call it turns into, if any.
    pub fn update(&mut self, message: OverlayMessage) -> Option<BridgeRequest> {
        match message {
            OverlayMessage::UrlChanged(url) => {
                if !self.filename_edited {
                    self.filename = if url.trim().is_empty() {
                        String::new()
                    } else {
                        filename_from_url(&url)
                    };
                }
                self.url = url;
                None
            }
            OverlayMessage::FilenameChanged(filename) => {
                self.filename_edited = !filename.is_empty();
                self.filename = filename;
                None
            }
            OverlayMessage::DownloadPressed => {
                let url = self.url.trim();
                if url.is_empty() || self.is_downloading {
                    return None;
                }

                let filename = match self.filename.trim() {
                    "" => filename_from_url(url),
                    name => name.to_string(),
                };
                let request = BridgeRequest::DownloadAsset {
                    url: url.to_string(),
                    filename,
                };

                self.is_downloading = true;
                self.status_message = "Please select save location...".to_string();
                Some(request)
            }
            OverlayMessage::HidePressed => Some(BridgeRequest::HideWindow),
        }
    }

    pub fn on_presentation_event(&mut self, event: PresentationEvent) {
        match event {
            PresentationEvent::WindowShown => {
                // Last result is stale once the overlay is summoned again
                if !self.is_downloading {
                    self.status_message = IDLE_MESSAGE.to_string();
                }
            }
            PresentationEvent::WindowHidden => {}
        }
    }

    pub fn on_download_finished(&mut self, outcome: &DownloadOutcome) {
        self.is_downloading = false;
        self.status_message = match (&outcome.path, &outcome.message) {
            (Some(path), _) if outcome.success => format!("Saved: {}", path.display()),
            _ if outcome.is_canceled() => "Download canceled".to_string(),
            (_, Some(message)) => format!("Download failed: {}", message),
            (_, None) => "Download failed".to_string(),
        };
    }

    pub fn view(&self) -> Element<'_, OverlayMessage> {
        let download = button("Download")
            .on_press_maybe((!self.is_downloading).then_some(OverlayMessage::DownloadPressed))
            .padding([10, 20]);
        let hide = button("Hide")
            .on_press(OverlayMessage::HidePressed)
            .padding([10, 20]);

        let panel = column![
            text("Asset Overlay").size(28),
            Space::new().height(Length::Fixed(10.0)),
            text("Asset URL:").size(16),
            text_input("https://...", &self.url)
                .on_input(OverlayMessage::UrlChanged)
                .on_submit(OverlayMessage::DownloadPressed)
                .padding(10),
            text("Save as:").size(16),
            text_input("download", &self.filename)
                .on_input(OverlayMessage::FilenameChanged)
                .padding(10),
            Space::new().height(Length::Fixed(10.0)),
            text(&self.status_message).size(14),
            Space::new().height(Length::Fill),
            row![download, hide].spacing(10),
        ]
        .padding(24)
        .spacing(10);

        container(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| {
                container::Style::default()
                    .background(Color::from_rgba(0.09, 0.09, 0.11, 0.94))
                    .border(border::rounded(14.0))
            })
            .into()
    }
}
