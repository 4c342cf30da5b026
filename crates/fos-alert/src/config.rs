//! Alert Configuration

use serde::{Deserialize, Serialize};

use crate::localize::{Locale, StringTable};
use crate::AlertError;

/// Alert configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Display name of the host application
    pub app_name: String,

    /// URL that opens this app's page in the system settings
    pub settings_url: Option<String>,

    /// Locale of the built-in string table
    pub locale: Locale,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            app_name: "fOS".to_string(),
            settings_url: Some("app-settings:".to_string()),
            locale: Locale::English,
        }
    }
}

impl AlertConfig {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_settings_url(mut self, url: Option<&str>) -> Self {
        self.settings_url = url.map(String::from);
        self
    }

    /// Load from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, AlertError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Built-in string table for the configured locale
    pub fn localizer(&self) -> StringTable {
        StringTable::for_locale(self.locale)
    }
}
