//! Headless host
//!
//! In-process `Host` and `Permission` implementations with no UI. Dialogs are
//! queued instead of drawn and the foreground event is fired by hand, which is
//! what tests and the demo binary need.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use url::Url;

use crate::dialog::Dialog;
use crate::host::{ForegroundHandler, Host, ObserverId};
use crate::permission::{Callback, Permission, PermissionStatus, PermissionType};
use crate::AlertError;

/// Host without a window
#[derive(Default)]
pub struct HeadlessHost {
    dialogs: RefCell<VecDeque<Dialog>>,
    opened: RefCell<Vec<String>>,
    observers: RefCell<Vec<(ObserverId, ForegroundHandler)>>,
    next_id: Cell<u64>,
    open_fails: Cell<bool>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `open_url` fail, as on a device without a settings page
    pub fn set_settings_available(&self, available: bool) {
        self.open_fails.set(!available);
    }

    /// Oldest shown dialog still waiting for the user
    pub fn take_dialog(&self) -> Option<Dialog> {
        self.dialogs.borrow_mut().pop_front()
    }

    pub fn pending_dialogs(&self) -> usize {
        self.dialogs.borrow().len()
    }

    /// Titles of the queued dialogs, oldest first
    pub fn dialog_titles(&self) -> Vec<Option<String>> {
        self.dialogs.borrow().iter().map(|d| d.title.clone()).collect()
    }

    pub fn opened_urls(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Fire the app-became-active event; returns how many handlers ran
    pub fn become_active(&self) -> usize {
        // Handlers may remove themselves, so run them off a snapshot
        let handlers: Vec<ForegroundHandler> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, h)| h.clone())
            .collect();

        for handler in &handlers {
            handler();
        }
        handlers.len()
    }
}

impl Host for HeadlessHost {
    fn show_dialog(&self, dialog: Dialog) {
        tracing::debug!("Showing dialog {:?}", dialog.title);
        self.dialogs.borrow_mut().push_back(dialog);
    }

    fn open_url(&self, url: &Url) -> Result<(), AlertError> {
        if self.open_fails.get() {
            return Err(AlertError::SettingsUnavailable(format!("cannot open {url}")));
        }
        self.opened.borrow_mut().push(url.as_str().to_string());
        Ok(())
    }

    fn observe_foreground(&self, handler: ForegroundHandler) -> ObserverId {
        let id = ObserverId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.observers.borrow_mut().push((id, handler));
        id
    }

    fn remove_observer(&self, id: ObserverId) {
        self.observers.borrow_mut().retain(|(oid, _)| *oid != id);
    }
}

impl fmt::Debug for HeadlessHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessHost")
            .field("pending_dialogs", &self.pending_dialogs())
            .field("opened", &self.opened.borrow())
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// Permission with a settable status that records its callback invocations.
///
/// `request_authorization` parks the callback until `resolve_prompt` is
/// called, like an OS prompt waiting for the user.
pub struct SimulatedPermission {
    permission_type: PermissionType,
    status: Cell<PermissionStatus>,
    received: Rc<RefCell<Vec<PermissionStatus>>>,
    callback: Callback,
    pending_prompt: RefCell<Option<Callback>>,
    requests: Cell<u32>,
    own_callback_requested: Cell<bool>,
}

impl SimulatedPermission {
    pub fn new(permission_type: PermissionType, status: PermissionStatus) -> Self {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        let callback: Callback =
            Rc::new(move |status: PermissionStatus| sink.borrow_mut().push(status));

        Self {
            permission_type,
            status: Cell::new(status),
            received,
            callback,
            pending_prompt: RefCell::new(None),
            requests: Cell::new(0),
            own_callback_requested: Cell::new(false),
        }
    }

    pub fn set_status(&self, status: PermissionStatus) {
        self.status.set(status);
    }

    /// Statuses delivered to the callback, in order
    pub fn callback_statuses(&self) -> Vec<PermissionStatus> {
        self.received.borrow().clone()
    }

    pub fn authorization_requests(&self) -> u32 {
        self.requests.get()
    }

    /// Whether the last request carried this permission's own callback
    pub fn requested_with_own_callback(&self) -> bool {
        self.own_callback_requested.get()
    }

    pub fn has_pending_prompt(&self) -> bool {
        self.pending_prompt.borrow().is_some()
    }

    /// Answer the OS prompt; returns false if none was pending
    pub fn resolve_prompt(&self, status: PermissionStatus) -> bool {
        let Some(callback) = self.pending_prompt.borrow_mut().take() else {
            return false;
        };
        self.status.set(status);
        callback(status);
        true
    }
}

impl Permission for SimulatedPermission {
    fn status(&self) -> PermissionStatus {
        self.status.get()
    }

    fn permission_type(&self) -> PermissionType {
        self.permission_type.clone()
    }

    fn callback(&self) -> Callback {
        self.callback.clone()
    }

    fn request_authorization(&self, callback: Callback) {
        self.requests.set(self.requests.get() + 1);
        self.own_callback_requested.set(Rc::ptr_eq(&callback, &self.callback));
        tracing::debug!("Authorization requested for {}", self.permission_type);
        *self.pending_prompt.borrow_mut() = Some(callback);
    }
}

impl fmt::Debug for SimulatedPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatedPermission")
            .field("type", &self.permission_type)
            .field("status", &self.status.get())
            .field("received", &self.received.borrow())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observers_fire_until_removed() {
        let host = HeadlessHost::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let id = host.observe_foreground(Rc::new(move || counter.set(counter.get() + 1)));

        assert_eq!(host.become_active(), 1);
        host.remove_observer(id);
        assert_eq!(host.become_active(), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_prompt_resolution() {
        let permission =
            SimulatedPermission::new(PermissionType::Camera, PermissionStatus::NotDetermined);
        assert!(!permission.resolve_prompt(PermissionStatus::Authorized));

        permission.request_authorization(permission.callback());
        assert!(permission.has_pending_prompt());
        assert!(permission.requested_with_own_callback());

        assert!(permission.resolve_prompt(PermissionStatus::Authorized));
        assert_eq!(permission.status(), PermissionStatus::Authorized);
        assert_eq!(permission.callback_statuses(), vec![PermissionStatus::Authorized]);
    }
}
