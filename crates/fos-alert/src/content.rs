//! Alert content and variants
//!
//! Each variant fixes which copy an alert shows and which actions it offers
//! for one permission-status scenario.

use crate::localize::{fill, resolve, Localizer};
use crate::permission::{PermissionStatus, PermissionType};

/// Text shown by an alert
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertContent {
    pub title: Option<String>,
    pub message: Option<String>,
    pub cancel_label: Option<String>,
    /// Second action label: "Settings" for denied alerts, "Confirm" for
    /// pre-permission alerts, unused for disabled alerts
    pub primary_label: Option<String>,
}

/// Alert scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertVariant {
    /// Capability is turned off at the OS level; nothing to remediate
    Disabled,
    /// User declined earlier; offers a trip to Settings
    Denied,
    /// Status not determined yet; primes the user before the OS prompt
    PrePermission,
}

impl AlertVariant {
    /// Variant a caller would usually pick for `status`.
    ///
    /// Authorized permissions need no alert.
    pub fn for_status(status: PermissionStatus) -> Option<Self> {
        match status {
            PermissionStatus::Disabled => Some(Self::Disabled),
            PermissionStatus::Denied => Some(Self::Denied),
            PermissionStatus::NotDetermined => Some(Self::PrePermission),
            PermissionStatus::Authorized => None,
        }
    }

    /// String-table prefix
    pub fn key(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Denied => "denied",
            Self::PrePermission => "pre-permission",
        }
    }

    /// Localized copy for `permission_type`
    pub fn content(
        &self,
        permission_type: &PermissionType,
        localizer: &dyn Localizer,
        app_name: &str,
    ) -> AlertContent {
        let type_id = permission_type.id();
        let field = |name: &str| {
            resolve(localizer, self.key(), type_id, name).map(|t| fill(&t, app_name, type_id))
        };

        match self {
            Self::Disabled => AlertContent {
                title: field("title"),
                message: field("message"),
                cancel_label: field("cancel"),
                primary_label: None,
            },
            Self::Denied => AlertContent {
                title: field("title"),
                message: field("message"),
                cancel_label: field("cancel"),
                primary_label: field("primary"),
            },
            Self::PrePermission => AlertContent {
                title: field("title"),
                message: None,
                cancel_label: field("cancel"),
                primary_label: field("primary"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localize::StringTable;

    const VARIANTS: [AlertVariant; 3] = [
        AlertVariant::Disabled,
        AlertVariant::Denied,
        AlertVariant::PrePermission,
    ];

    #[test]
    fn test_every_type_gets_title_and_cancel() {
        let tables = [StringTable::english(), StringTable::french(), StringTable::new()];
        let mut types = PermissionType::builtin().to_vec();
        types.push(PermissionType::Custom("heart-rate".into()));

        for table in &tables {
            for variant in VARIANTS {
                for ty in &types {
                    let content = variant.content(ty, table, "Widr");
                    let title = content.title.as_deref();
                    let cancel = content.cancel_label.as_deref();
                    assert!(title.is_some_and(|t| !t.is_empty()), "{variant:?} {ty}");
                    assert!(cancel.is_some_and(|t| !t.is_empty()), "{variant:?} {ty}");
                }
            }
        }
    }

    #[test]
    fn test_disabled_contacts_copy() {
        let content = AlertVariant::Disabled.content(
            &PermissionType::Contacts,
            &StringTable::english(),
            "Widr",
        );
        assert_eq!(content.title.as_deref(), Some("Widr does not have access to your contacts"));
        assert_eq!(content.cancel_label.as_deref(), Some("OK"));
        assert!(content.primary_label.is_none());
    }

    #[test]
    fn test_denied_labels() {
        let content = AlertVariant::Denied.content(
            &PermissionType::Notifications,
            &StringTable::english(),
            "Widr",
        );
        assert_eq!(content.cancel_label.as_deref(), Some("Cancel"));
        assert_eq!(content.primary_label.as_deref(), Some("Settings"));
        assert!(content.message.unwrap().contains("Settings"));
    }

    #[test]
    fn test_pre_permission_has_no_message() {
        let content = AlertVariant::PrePermission.content(
            &PermissionType::Camera,
            &StringTable::english(),
            "Widr",
        );
        assert_eq!(content.title.as_deref(), Some("Widr would like to access camera"));
        assert!(content.message.is_none());
        assert_eq!(content.primary_label.as_deref(), Some("Confirm"));
    }

    #[test]
    fn test_unknown_type_is_interpolated_verbatim() {
        let ty = PermissionType::Custom("com.example.Heart_Rate".into());
        for variant in [AlertVariant::Disabled, AlertVariant::Denied] {
            let content = variant.content(&ty, &StringTable::english(), "Widr");
            assert!(content.title.unwrap().contains("com.example.Heart_Rate"));
            assert!(content.message.unwrap().contains("com.example.Heart_Rate"));
        }
    }

    #[test]
    fn test_placeholder_text_in_names_is_kept_literally() {
        let camera = PermissionType::Custom("camera".into());
        let table = StringTable::english();
        let content = AlertVariant::Denied.content(&camera, &table, "My {permission} App");
        assert_eq!(
            content.title.as_deref(),
            Some("My {permission} App does not have access to camera")
        );

        let odd = PermissionType::Custom("x{app}y".into());
        let content = AlertVariant::PrePermission.content(&odd, &StringTable::english(), "Widr");
        assert_eq!(content.title.as_deref(), Some("Widr would like to access x{app}y"));
    }

    #[test]
    fn test_french_copy() {
        let content =
            AlertVariant::Denied.content(&PermissionType::Contacts, &StringTable::french(), "Widr");
        assert_eq!(content.title.as_deref(), Some("Widr n'a pas accès à vos contacts"));
        assert_eq!(content.cancel_label.as_deref(), Some("Annuler"));
        assert_eq!(content.primary_label.as_deref(), Some("Réglages"));
    }

    #[test]
    fn test_for_status() {
        assert_eq!(
            AlertVariant::for_status(PermissionStatus::Denied),
            Some(AlertVariant::Denied)
        );
        assert_eq!(
            AlertVariant::for_status(PermissionStatus::NotDetermined),
            Some(AlertVariant::PrePermission)
        );
        assert_eq!(
            AlertVariant::for_status(PermissionStatus::Disabled),
            Some(AlertVariant::Disabled)
        );
        assert_eq!(AlertVariant::for_status(PermissionStatus::Authorized), None);
    }
}
