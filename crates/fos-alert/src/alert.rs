//! Permission Alert
//!
//! One alert per request: built from a variant and a permission, optionally
//! edited, then handed to the presenter. The alert wires the user's choice
//! back into the permission callback.

use std::rc::Rc;

use crate::bridge::ForegroundBridge;
use crate::config::AlertConfig;
use crate::content::{AlertContent, AlertVariant};
use crate::dialog::{build_dialog, ActionHandler, AlertHandlers, Dialog};
use crate::host::Host;
use crate::localize::Localizer;
use crate::permission::Permission;
use crate::presenter::Presenter;

/// Alert about one permission
pub struct PermissionAlert {
    variant: AlertVariant,
    permission: Rc<dyn Permission>,
    host: Rc<dyn Host>,
    content: AlertContent,
    settings_url: Option<String>,
}

impl PermissionAlert {
    /// Create an alert with copy from the config's built-in string table
    pub fn new(
        variant: AlertVariant,
        permission: Rc<dyn Permission>,
        host: Rc<dyn Host>,
        config: &AlertConfig,
    ) -> Self {
        Self::with_localizer(variant, permission, host, config, &config.localizer())
    }

    /// Create an alert with copy from `localizer`
    pub fn with_localizer(
        variant: AlertVariant,
        permission: Rc<dyn Permission>,
        host: Rc<dyn Host>,
        config: &AlertConfig,
        localizer: &dyn Localizer,
    ) -> Self {
        let content = variant.content(&permission.permission_type(), localizer, &config.app_name);
        Self {
            variant,
            permission,
            host,
            content,
            settings_url: config.settings_url.clone(),
        }
    }

    pub fn disabled(
        permission: Rc<dyn Permission>,
        host: Rc<dyn Host>,
        config: &AlertConfig,
    ) -> Self {
        Self::new(AlertVariant::Disabled, permission, host, config)
    }

    pub fn denied(
        permission: Rc<dyn Permission>,
        host: Rc<dyn Host>,
        config: &AlertConfig,
    ) -> Self {
        Self::new(AlertVariant::Denied, permission, host, config)
    }

    pub fn pre_permission(
        permission: Rc<dyn Permission>,
        host: Rc<dyn Host>,
        config: &AlertConfig,
    ) -> Self {
        Self::new(AlertVariant::PrePermission, permission, host, config)
    }

    pub fn variant(&self) -> AlertVariant {
        self.variant
    }

    pub fn content(&self) -> &AlertContent {
        &self.content
    }

    /// Edit the copy before presenting
    pub fn content_mut(&mut self) -> &mut AlertContent {
        &mut self.content
    }

    pub fn set_title(&mut self, title: &str) {
        self.content.title = Some(title.to_string());
    }

    pub fn set_message(&mut self, message: &str) {
        self.content.message = Some(message.to_string());
    }

    pub fn set_cancel_label(&mut self, label: &str) {
        self.content.cancel_label = Some(label.to_string());
    }

    /// Settings label for denied alerts, confirm label for pre-permission alerts
    pub fn set_primary_label(&mut self, label: &str) {
        self.content.primary_label = Some(label.to_string());
    }

    /// Schedule the alert on the UI thread; the outcome arrives via the permission callback
    pub fn present(self, presenter: &Presenter) {
        presenter.present(self);
    }

    /// Build the dialog, consuming the alert
    pub fn into_dialog(self) -> Dialog {
        let handlers = AlertHandlers {
            cancel: self.cancel_handler(),
            primary: self.primary_handler(),
        };
        build_dialog(self.variant, &self.content, handlers)
    }

    /// Build the dialog and give it to the host
    pub(crate) fn show(self) {
        let host = self.host.clone();
        host.show_dialog(self.into_dialog());
    }

    fn cancel_handler(&self) -> ActionHandler {
        let permission = self.permission.clone();
        Box::new(move || {
            let status = permission.status();
            tracing::debug!(
                "Alert cancelled, {} permission is {}",
                permission.permission_type(),
                status
            );
            (permission.callback())(status);
            Ok(())
        })
    }

    fn primary_handler(&self) -> Option<ActionHandler> {
        match self.variant {
            AlertVariant::Disabled => None,
            AlertVariant::Denied => {
                let bridge = ForegroundBridge::new(self.permission.clone(), self.host.clone());
                let settings_url = self.settings_url.clone();
                let handler: ActionHandler =
                    Box::new(move || bridge.begin(settings_url.as_deref()));
                Some(handler)
            }
            AlertVariant::PrePermission => {
                let permission = self.permission.clone();
                let handler: ActionHandler = Box::new(move || {
                    tracing::debug!("Requesting {} authorization", permission.permission_type());
                    permission.request_authorization(permission.callback());
                    Ok(())
                });
                Some(handler)
            }
        }
    }
}
