use log::{debug, info};

use crate::bridge::PresentationEvent;
use crate::domain::WindowSpec;
use crate::platform::{OverlaySurface, SurfaceFactory};

type SurfaceId<F> = <<F as SurfaceFactory>::Surface as OverlaySurface>::Id;

/// Owns the single overlay window and its visibility.
///
/// Visibility is always read from the surface, never mirrored here.
pub struct WindowController<F: SurfaceFactory> {
    factory: F,
    spec: WindowSpec,
    surface: Option<F::Surface>,
}

impl<F: SurfaceFactory> WindowController<F> {
    pub fn new(factory: F, spec: WindowSpec) -> Self {
        Self {
            factory,
            spec,
            surface: None,
        }
    }

    /// Creates the window if none exists. Returns whether one was created.
    pub fn ensure_created(&mut self) -> bool {
        if self.surface.is_some() {
            return false;
        }

        let mut surface = self.factory.create(&self.spec);
        surface.center();
        info!("Created overlay window {:?}", surface.id());
        self.surface = Some(surface);
        true
    }

    pub fn show(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.center();
            surface.show();
            surface.focus();
            surface.emit(PresentationEvent::WindowShown);
            debug!("Overlay shown");
        }
    }

    pub fn hide(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.hide();
            surface.emit(PresentationEvent::WindowHidden);
            debug!("Overlay hidden");
        }
    }

    pub fn toggle(&mut self) {
        if self.is_visible() {
            self.hide();
        } else {
            self.show();
        }
    }

    /// Hotkey entry point: brings back a window the platform destroyed, then toggles.
    pub fn activate(&mut self) {
        self.ensure_created();
        self.toggle();
    }

    pub fn handle_focus_lost(&mut self, id: SurfaceId<F>) {
        if !self.spec.hide_on_blur || self.window_id() != Some(id) {
            return;
        }

        if self.is_visible() {
            self.hide();
        }
    }

    /// Forgets the window once the platform closed it. Returns whether it was ours.
    pub fn handle_closed(&mut self, id: SurfaceId<F>) -> bool {
        if self.window_id() != Some(id) {
            return false;
        }

        info!("Overlay window {:?} closed", id);
        self.surface = None;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.surface.as_ref().is_some_and(|s| s.is_visible())
    }

    pub fn has_window(&self) -> bool {
        self.surface.is_some()
    }

    pub fn window_id(&self) -> Option<SurfaceId<F>> {
        self.surface.as_ref().map(|s| s.id())
    }

    pub fn surface_mut(&mut self) -> Option<&mut F::Surface> {
        self.surface.as_mut()
    }
}
