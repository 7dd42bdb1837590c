//! Host capabilities consumed by the core: the save dialog, the global hotkey
//! hook and the native overlay window. Each sits behind a small trait so the
//! controller and the download service run against fakes in tests.

pub mod dialog;
pub mod hotkey;
pub mod window;

use std::fmt::Debug;
use std::future::Future;
use std::path::PathBuf;

use crate::bridge::PresentationEvent;
use crate::domain::{DialogError, HotkeyError, WindowSpec};

pub use dialog::RfdSaveDialog;
pub use hotkey::GlobalHotkeyRegistrar;
pub use window::{IcedSurface, IcedWindowFactory};

pub trait SaveDialog {
    /// `Ok(None)` when the user dismissed the dialog.
    fn choose_save_path(
        &self,
        suggested_filename: &str,
    ) -> impl Future<Output = Result<Option<PathBuf>, DialogError>> + Send;
}

pub trait HotkeyRegistrar {
    /// Returns the id carried by press events of this binding.
    fn register(&mut self, binding: &str) -> Result<u32, HotkeyError>;
    fn unregister_all(&mut self);
}

/// A live overlay window. Owns its visibility; callers never track it separately.
pub trait OverlaySurface {
    type Id: Copy + Eq + Debug;

    fn id(&self) -> Self::Id;
    fn center(&mut self);
    fn show(&mut self);
    fn focus(&mut self);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;
    /// Fire-and-forget notification to the presentation layer.
    fn emit(&mut self, event: PresentationEvent);
}

pub trait SurfaceFactory {
    type Surface: OverlaySurface;

    /// Builds the window hidden, with the presentation content loaded.
    fn create(&mut self, spec: &WindowSpec) -> Self::Surface;
}
