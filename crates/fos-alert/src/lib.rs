//! fOS Alert - Permission Alert Dialogs
//!
//! Dialogs that tell the user about the state of a device permission and
//! route their choice back to the permission's callback.
//!
//! # Variants
//! - Disabled: capability is off at the OS level; a single OK action
//! - Denied: offers a trip to Settings, reports back once the app is active again
//! - PrePermission: primes the user, then triggers the real OS prompt
//!
//! # Example
//! ```rust,ignore
//! use fos_alert::{AlertConfig, PermissionAlert, Presenter, UiScheduler};
//!
//! let presenter = Presenter::new(UiScheduler::new());
//! let alert = PermissionAlert::denied(permission, host, &AlertConfig::new("Widr"));
//! alert.present(&presenter);
//! ```

mod alert;
mod bridge;
mod config;
mod content;
mod dialog;
mod error;
mod host;
pub mod headless;
pub mod localize;
mod permission;
mod presenter;

pub use alert::PermissionAlert;
pub use bridge::{BridgeState, ForegroundBridge};
pub use config::AlertConfig;
pub use content::{AlertContent, AlertVariant};
pub use dialog::{build_dialog, ActionHandler, ActionStyle, AlertHandlers, Dialog, DialogAction};
pub use error::AlertError;
pub use host::{ForegroundHandler, Host, ObserverId};
pub use localize::{Locale, Localizer, StringTable};
pub use permission::{Callback, Permission, PermissionStatus, PermissionType};
pub use presenter::{Presenter, UiScheduler};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
