use futures::Stream;
use global_hotkey::hotkey::HotKey;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use log::{error, info, warn};

use super::HotkeyRegistrar;
use crate::domain::HotkeyError;

/// System-wide hotkeys through the global-hotkey crate.
///
/// Must be created on the main thread. Everything it registered is released
/// on drop.
pub struct GlobalHotkeyRegistrar {
    manager: GlobalHotKeyManager,
    registered: Vec<HotKey>,
}

impl GlobalHotkeyRegistrar {
    pub fn new() -> Result<Self, HotkeyError> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| HotkeyError::Unavailable(e.to_string()))?;

        Ok(Self {
            manager,
            registered: Vec::new(),
        })
    }
}

impl HotkeyRegistrar for GlobalHotkeyRegistrar {
    fn register(&mut self, binding: &str) -> Result<u32, HotkeyError> {
        let hotkey = binding
            .parse::<HotKey>()
            .map_err(|e| HotkeyError::InvalidBinding {
                binding: binding.to_string(),
                reason: e.to_string(),
            })?;

        self.manager
            .register(hotkey)
            .map_err(|e| HotkeyError::Registration {
                binding: binding.to_string(),
                reason: e.to_string(),
            })?;

        self.registered.push(hotkey);
        Ok(hotkey.id())
    }

    fn unregister_all(&mut self) {
        if self.registered.is_empty() {
            return;
        }

        if let Err(e) = self.manager.unregister_all(&self.registered) {
            warn!("Failed to unregister global shortcuts: {}", e);
        }
        self.registered.clear();
    }
}

impl Drop for GlobalHotkeyRegistrar {
    fn drop(&mut self) {
        self.unregister_all();
    }
}

/// Registers the toggle binding. A failure (e.g. another process owns the
/// combination) is logged and the overlay simply has no hotkey.
pub fn bind_toggle_hotkey<R: HotkeyRegistrar>(registrar: &mut R, binding: &str) -> Option<u32> {
    match registrar.register(binding) {
        Ok(id) => {
            info!("Registered global shortcut {}", binding);
            Some(id)
        }
        Err(e) => {
            error!("Failed to register global shortcut: {}", e);
            None
        }
    }
}

/// Ids of pressed hotkeys, in the order the OS delivered them.
pub fn hotkey_presses() -> impl Stream<Item = u32> {
    futures::stream::unfold((), |()| async {
        loop {
            let event = tokio::task::spawn_blocking(|| GlobalHotKeyEvent::receiver().recv())
                .await
                .ok()?
                .ok()?;

            if event.state() == HotKeyState::Pressed {
                return Some((event.id(), ()));
            }
        }
    })
}
