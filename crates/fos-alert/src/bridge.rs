//! Foreground-return bridge
//!
//! After a denied alert sends the user to the system settings, the bridge
//! waits for the app to become active again, then reports the fresh status
//! through the permission callback. Fires at most once.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use url::Url;

use crate::host::{Host, ObserverId};
use crate::permission::Permission;
use crate::AlertError;

/// Bridge state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BridgeState {
    #[default]
    Idle,
    AwaitingForeground(ObserverId),
    /// Callback delivered; terminal
    Resolved,
}

/// One-shot settings round trip for a single alert
#[derive(Clone)]
pub struct ForegroundBridge {
    state: Rc<Cell<BridgeState>>,
    permission: Rc<dyn Permission>,
    host: Rc<dyn Host>,
}

impl ForegroundBridge {
    pub fn new(permission: Rc<dyn Permission>, host: Rc<dyn Host>) -> Self {
        Self {
            state: Rc::new(Cell::new(BridgeState::Idle)),
            permission,
            host,
        }
    }

    pub fn state(&self) -> BridgeState {
        self.state.get()
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self.state.get(), BridgeState::AwaitingForeground(_))
    }

    /// Send the user to `settings_url` and start waiting for the app to come back.
    ///
    /// On any failure no observer is left registered and the bridge stays idle.
    pub fn begin(&self, settings_url: Option<&str>) -> Result<(), AlertError> {
        if self.state.get() != BridgeState::Idle {
            return Err(AlertError::AlreadyAwaiting);
        }

        let Some(raw) = settings_url else {
            tracing::warn!("No settings URL configured; staying on the dialog");
            return Err(AlertError::SettingsUnavailable("no settings URL configured".into()));
        };
        let url = Url::parse(raw).inspect_err(|e| {
            tracing::warn!("Invalid settings URL {:?}: {}", raw, e);
        })?;

        let bridge = self.clone();
        let id = self.host.observe_foreground(Rc::new(move || bridge.on_foreground()));
        self.state.set(BridgeState::AwaitingForeground(id));

        if let Err(e) = self.host.open_url(&url) {
            tracing::warn!("Failed to open settings: {}", e);
            self.host.remove_observer(id);
            self.state.set(BridgeState::Idle);
            return Err(e);
        }

        tracing::info!(
            "Opened {} for {} permission, waiting for foreground",
            url,
            self.permission.permission_type()
        );
        Ok(())
    }

    /// App became active again
    pub fn on_foreground(&self) {
        let BridgeState::AwaitingForeground(id) = self.state.get() else {
            tracing::debug!("Ignoring foreground event in state {:?}", self.state.get());
            return;
        };

        // Unregister before the callback so a re-entrant event cannot fire twice
        self.state.set(BridgeState::Resolved);
        self.host.remove_observer(id);

        let status = self.permission.status();
        tracing::info!(
            "Back from settings: {} permission is {}",
            self.permission.permission_type(),
            status
        );
        (self.permission.callback())(status);
    }
}

impl fmt::Debug for ForegroundBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForegroundBridge")
            .field("state", &self.state.get())
            .finish_non_exhaustive()
    }
}
