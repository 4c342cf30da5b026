//! Host environment
//!
//! What alerts need from the application shell: a place to show dialogs,
//! a way to open the system settings, and the app-became-active event.

use std::rc::Rc;

use url::Url;

use crate::dialog::Dialog;
use crate::AlertError;

/// Foreground observer handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u64);

/// Called when the app becomes active again
pub type ForegroundHandler = Rc<dyn Fn()>;

/// Application shell services
pub trait Host {
    /// Show a dialog. The toolkit calls back through `Dialog::choose`.
    fn show_dialog(&self, dialog: Dialog);

    /// Open a URL, e.g. this app's page in the system settings
    fn open_url(&self, url: &Url) -> Result<(), AlertError>;

    /// Register a handler for the next app-became-active events
    fn observe_foreground(&self, handler: ForegroundHandler) -> ObserverId;

    /// Remove a foreground handler; unknown ids are ignored
    fn remove_observer(&self, id: ObserverId);
}
