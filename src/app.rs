use crate::api::{AssetClient, ClientConfig};
use crate::application::{AssetDownloadService, WindowController};
use crate::bridge::{BridgeRequest, PresentationEvent};
use crate::domain::{DownloadOutcome, OverlayConfig, WindowSpec};
use crate::platform::hotkey::{bind_toggle_hotkey, hotkey_presses};
use crate::platform::{
    GlobalHotkeyRegistrar, HotkeyRegistrar, IcedSurface, IcedWindowFactory, RfdSaveDialog,
};
use crate::ui::{OverlayMessage, OverlayView};
use iced::theme::Style;
use iced::{window, Color, Element, Subscription, Task, Theme};
use log::{debug, error, info};

pub struct OverlayApp {
    config: OverlayConfig,
    controller: WindowController<IcedWindowFactory>,
    downloads: AssetDownloadService,
    hotkeys: Option<GlobalHotkeyRegistrar>,
    toggle_hotkey: Option<u32>,
    view: OverlayView,
}

impl OverlayApp {
    pub fn new() -> (Self, Task<Message>) {
        let config = OverlayConfig::default();

        let mut controller = WindowController::new(IcedWindowFactory, WindowSpec::from(&config));
        controller.ensure_created();

        // Without a hotkey backend the overlay still starts, just unreachable
        let mut hotkeys = GlobalHotkeyRegistrar::new()
            .map_err(|e| error!("Failed to register global shortcut: {}", e))
            .ok();
        let toggle_hotkey = hotkeys
            .as_mut()
            .and_then(|registrar| bind_toggle_hotkey(registrar, &config.hotkey));

        let mut app = Self {
            config,
            controller,
            downloads: AssetDownloadService::new(
                RfdSaveDialog,
                AssetClient::new(ClientConfig::default()),
            ),
            hotkeys,
            toggle_hotkey,
            view: OverlayView::default(),
        };

        let task = app.window_tasks();
        (app, task)
    }

    fn window_tasks(&mut self) -> Task<Message> {
        self.controller
            .surface_mut()
            .map(IcedSurface::take_tasks)
            .unwrap_or_else(Task::none)
    }

    fn handle_bridge(&mut self, request: BridgeRequest) -> Task<Message> {
        match request {
            BridgeRequest::HideWindow => {
                self.controller.hide();
                Task::none()
            }
            BridgeRequest::DownloadAsset { url, filename } => {
                let downloads = self.downloads.clone();

                // Runs on the tokio executor; the update loop stays responsive
                Task::perform(
                    async move { downloads.download_asset(&url, &filename).await },
                    Message::DownloadFinished,
                )
            }
        }
    }

    fn shutdown(&mut self) -> Task<Message> {
        info!("Overlay window gone, exiting");
        if let Some(hotkeys) = self.hotkeys.as_mut() {
            hotkeys.unregister_all();
        }
        iced::exit()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Ui(OverlayMessage),
    /// Notification from the window controller to the overlay view
    Presentation(PresentationEvent),
    /// Id of a pressed global hotkey
    Hotkey(u32),
    Window(window::Id, window::Event),
    DownloadFinished(DownloadOutcome),
}

pub fn update(app: &mut OverlayApp, message: Message) -> Task<Message> {
    let task = match message {
        Message::Ui(ui_msg) => match app.view.update(ui_msg) {
            Some(request) => app.handle_bridge(request),
            None => Task::none(),
        },
        Message::Presentation(event) => {
            debug!("Delivering {}", event.channel());
            app.view.on_presentation_event(event);
            Task::none()
        }
        Message::Hotkey(id) => {
            if app.toggle_hotkey == Some(id) {
                if !app.controller.has_window() {
                    info!("Reopening overlay window");
                }
                app.controller.activate();
            }
            Task::none()
        }
        Message::Window(id, window::Event::Unfocused) => {
            app.controller.handle_focus_lost(id);
            Task::none()
        }
        Message::Window(id, window::Event::Closed) => {
            // macOS apps outlive their windows; the next hotkey press reopens it
            if app.controller.handle_closed(id) && !cfg!(target_os = "macos") {
                return app.shutdown();
            }
            Task::none()
        }
        Message::Window(..) => Task::none(),
        Message::DownloadFinished(outcome) => {
            app.view.on_download_finished(&outcome);
            Task::none()
        }
    };

    Task::batch([task, app.window_tasks()])
}

pub fn view(app: &OverlayApp, _window: window::Id) -> Element<'_, Message> {
    app.view.view().map(Message::Ui)
}

pub fn title(app: &OverlayApp, _window: window::Id) -> String {
    app.config.title.clone()
}

pub fn style(_app: &OverlayApp, theme: &Theme) -> Style {
    Style {
        background_color: Color::TRANSPARENT,
        text_color: theme.palette().text,
    }
}

pub fn subscription(_app: &OverlayApp) -> Subscription<Message> {
    Subscription::batch([
        Subscription::run(hotkey_presses).map(Message::Hotkey),
        window::events().map(|(id, event)| Message::Window(id, event)),
    ])
}
