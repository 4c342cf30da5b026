//! Permission Model
//!
//! Status and type vocabulary for OS-guarded capabilities, plus the
//! `Permission` trait the alerts talk to.

use std::fmt;
use std::rc::Rc;

/// Permission status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PermissionStatus {
    #[default]
    NotDetermined,
    Authorized,
    Denied,
    Disabled,
}

impl PermissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotDetermined => "not-determined",
            Self::Authorized => "authorized",
            Self::Denied => "denied",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permission types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PermissionType {
    Contacts,
    LocationAlways,
    LocationWhenInUse,
    Notifications,
    Microphone,
    Camera,
    Photos,
    Reminders,
    Events,
    Bluetooth,
    Motion,
    SpeechRecognition,
    MediaLibrary,
    Siri,
    /// Capability without a dedicated variant, identified by its raw name
    Custom(String),
}

impl PermissionType {
    pub fn from_id(s: &str) -> Self {
        match s {
            "contacts" => Self::Contacts,
            "location-always" => Self::LocationAlways,
            "location-when-in-use" => Self::LocationWhenInUse,
            "notifications" => Self::Notifications,
            "microphone" => Self::Microphone,
            "camera" => Self::Camera,
            "photos" => Self::Photos,
            "reminders" => Self::Reminders,
            "events" => Self::Events,
            "bluetooth" => Self::Bluetooth,
            "motion" => Self::Motion,
            "speech-recognition" => Self::SpeechRecognition,
            "media-library" => Self::MediaLibrary,
            "siri" => Self::Siri,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Raw identifier, used both as string-table key and as fallback display text
    pub fn id(&self) -> &str {
        match self {
            Self::Contacts => "contacts",
            Self::LocationAlways => "location-always",
            Self::LocationWhenInUse => "location-when-in-use",
            Self::Notifications => "notifications",
            Self::Microphone => "microphone",
            Self::Camera => "camera",
            Self::Photos => "photos",
            Self::Reminders => "reminders",
            Self::Events => "events",
            Self::Bluetooth => "bluetooth",
            Self::Motion => "motion",
            Self::SpeechRecognition => "speech-recognition",
            Self::MediaLibrary => "media-library",
            Self::Siri => "siri",
            Self::Custom(name) => name,
        }
    }

    /// All built-in types (excludes `Custom`)
    pub fn builtin() -> &'static [PermissionType] {
        BUILTIN_TYPES
    }
}

impl fmt::Display for PermissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

const BUILTIN_TYPES: &[PermissionType] = &[
    PermissionType::Contacts,
    PermissionType::LocationAlways,
    PermissionType::LocationWhenInUse,
    PermissionType::Notifications,
    PermissionType::Microphone,
    PermissionType::Camera,
    PermissionType::Photos,
    PermissionType::Reminders,
    PermissionType::Events,
    PermissionType::Bluetooth,
    PermissionType::Motion,
    PermissionType::SpeechRecognition,
    PermissionType::MediaLibrary,
    PermissionType::Siri,
];

/// Status callback owned by the permission
pub type Callback = Rc<dyn Fn(PermissionStatus)>;

/// An OS-guarded capability.
///
/// Implementations live with the platform layer. Alerts only read the status
/// and type, fire the callback, or ask the platform to run its own prompt.
pub trait Permission {
    /// Current status, read fresh on every call
    fn status(&self) -> PermissionStatus;

    /// Which capability this is
    fn permission_type(&self) -> PermissionType;

    /// The single callback slot for the current decision sequence
    fn callback(&self) -> Callback;

    /// Trigger the OS prompt; `callback` receives the resulting status
    fn request_authorization(&self, callback: Callback);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ids_round_trip_through_from_id() {
        for ty in PermissionType::builtin() {
            assert_eq!(&PermissionType::from_id(ty.id()), ty);
        }
    }

    #[test]
    fn test_unknown_id_is_custom() {
        let ty = PermissionType::from_id("heart-rate");
        assert_eq!(ty, PermissionType::Custom("heart-rate".into()));
        assert_eq!(ty.to_string(), "heart-rate");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(PermissionStatus::NotDetermined.to_string(), "not-determined");
        assert_eq!(PermissionStatus::default(), PermissionStatus::NotDetermined);
    }
}
