use iced::window::{self, Level, Mode, Position};
use iced::{Point, Size, Task};

use super::{OverlaySurface, SurfaceFactory};
use crate::app::Message;
use crate::bridge::PresentationEvent;
use crate::domain::WindowSpec;

/// Overlay window driven through iced window tasks.
///
/// Operations are queued and run in order once the shell drains them with
/// [`IcedSurface::take_tasks`] at the end of an update.
pub struct IcedSurface {
    id: window::Id,
    size: Size,
    visible: bool,
    pending: Vec<Task<Message>>,
}

impl IcedSurface {
    pub fn take_tasks(&mut self) -> Task<Message> {
        self.pending.drain(..).fold(Task::none(), Task::chain)
    }
}

impl OverlaySurface for IcedSurface {
    type Id = window::Id;

    fn id(&self) -> window::Id {
        self.id
    }

    fn center(&mut self) {
        let id = self.id;
        let size = self.size;

        self.pending
            .push(window::monitor_size(id).then(move |monitor| match monitor {
                Some(monitor) => window::move_to(
                    id,
                    Point::new(
                        ((monitor.width - size.width) / 2.0).max(0.0),
                        ((monitor.height - size.height) / 2.0).max(0.0),
                    ),
                ),
                None => Task::none(),
            }));
    }

    fn show(&mut self) {
        self.pending.push(window::set_mode(self.id, Mode::Windowed));
        self.visible = true;
    }

    fn focus(&mut self) {
        self.pending.push(window::gain_focus(self.id));
    }

    fn hide(&mut self) {
        self.pending.push(window::set_mode(self.id, Mode::Hidden));
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn emit(&mut self, event: PresentationEvent) {
        self.pending.push(Task::done(Message::Presentation(event)));
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IcedWindowFactory;

impl SurfaceFactory for IcedWindowFactory {
    type Surface = IcedSurface;

    fn create(&mut self, spec: &WindowSpec) -> IcedSurface {
        let (id, open) = window::open(window_settings(spec));

        IcedSurface {
            id,
            size: Size::new(spec.width, spec.height),
            visible: spec.initially_visible,
            pending: vec![open.discard()],
        }
    }
}

pub fn window_settings(spec: &WindowSpec) -> window::Settings {
    #[allow(unused_mut)]
    let mut settings = window::Settings {
        size: Size::new(spec.width, spec.height),
        position: Position::Centered,
        visible: spec.initially_visible,
        resizable: spec.resizable,
        decorations: !spec.frameless,
        transparent: spec.transparent,
        level: if spec.always_on_top {
            Level::AlwaysOnTop
        } else {
            Level::Normal
        },
        ..Default::default()
    };

    // Only Windows exposes taskbar exclusion through iced
    #[cfg(target_os = "windows")]
    {
        settings.platform_specific.skip_taskbar = spec.skip_taskbar;
    }

    settings
}
