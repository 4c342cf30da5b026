//! Localization
//!
//! Keyed string templates for alert copy. Keys have the form
//! `{variant}.{type}.{field}`, where `type` is a permission identifier or
//! `default`, and `field` is one of `title`, `message`, `cancel`, `primary`.
//! Templates may contain `{app}` and `{permission}` placeholders.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Looks up localized templates by key
pub trait Localizer {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Built-in locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
}

const ENGLISH: &[(&str, &str)] = &[
    ("disabled.contacts.title", "{app} does not have access to your contacts"),
    (
        "disabled.contacts.message",
        "Access to contacts is turned off on this device. Turn it on in Settings to connect with the people you know.",
    ),
    ("disabled.notifications.title", "{app} does not have access to your notifications"),
    (
        "disabled.notifications.message",
        "Notifications are turned off on this device. Turn them on in Settings to hear about requests from your contacts and news that concerns you.",
    ),
    ("disabled.default.title", "{app} does not have access to {permission}"),
    (
        "disabled.default.message",
        "{permission} is turned off on this device. {app} needs it to work properly.",
    ),
    ("disabled.default.cancel", "OK"),

    ("denied.contacts.title", "{app} does not have access to your contacts"),
    ("denied.contacts.message", "Please enable access to your contacts in Settings."),
    ("denied.notifications.title", "{app} does not have access to your notifications"),
    ("denied.notifications.message", "Please enable notifications in Settings."),
    ("denied.default.title", "{app} does not have access to {permission}"),
    ("denied.default.message", "Please enable access to {permission} in Settings."),
    ("denied.default.cancel", "Cancel"),
    ("denied.default.primary", "Settings"),

    ("pre-permission.default.title", "{app} would like to access {permission}"),
    ("pre-permission.default.cancel", "Cancel"),
    ("pre-permission.default.primary", "Confirm"),
];

const FRENCH: &[(&str, &str)] = &[
    ("disabled.contacts.title", "{app} n'a pas accès à vos contacts"),
    (
        "disabled.contacts.message",
        "L'application requiert l'accès aux contacts de votre appareil pour vous connecter à vos proches. Pour autoriser l'accès, appuyez sur Réglages et activez les contacts.",
    ),
    ("disabled.notifications.title", "{app} n'a pas accès à vos notifications"),
    (
        "disabled.notifications.message",
        "L'application requiert l'accès aux notifications pour vous informer des demandes de vos proches et des dernières actualités vous concernant.",
    ),
    ("disabled.default.title", "{app} n'a pas accès à {permission}"),
    (
        "disabled.default.message",
        "L'application requiert {permission} pour une utilisation optimale. Pour autoriser l'accès, appuyez sur Réglages et activez ce service.",
    ),
    ("disabled.default.cancel", "OK"),

    ("denied.contacts.title", "{app} n'a pas accès à vos contacts"),
    (
        "denied.contacts.message",
        "L'application requiert l'accès aux contacts de votre appareil pour vous connecter à vos proches. Pour autoriser l'accès, appuyez sur Réglages et activez les contacts.",
    ),
    ("denied.notifications.title", "{app} n'a pas accès à vos notifications"),
    (
        "denied.notifications.message",
        "L'application requiert l'accès aux notifications pour vous informer des demandes de vos proches et des dernières actualités vous concernant.",
    ),
    ("denied.default.title", "{app} n'a pas accès à {permission}"),
    (
        "denied.default.message",
        "L'application requiert {permission} pour une utilisation optimale. Pour autoriser l'accès, appuyez sur Réglages et activez ce service.",
    ),
    ("denied.default.cancel", "Annuler"),
    ("denied.default.primary", "Réglages"),

    ("pre-permission.default.title", "{app} souhaite accéder à {permission}"),
    ("pre-permission.default.cancel", "Annuler"),
    ("pre-permission.default.primary", "Autoriser"),
];

/// In-memory string table
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    entries: HashMap<String, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn english() -> Self {
        Self::from_pairs(ENGLISH)
    }

    pub fn french() -> Self {
        Self::from_pairs(FRENCH)
    }

    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::English => Self::english(),
            Locale::French => Self::french(),
        }
    }

    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { entries }
    }

    /// Add or replace a template
    pub fn insert(&mut self, key: &str, template: &str) {
        self.entries.insert(key.to_string(), template.to_string());
    }

    pub fn with(mut self, key: &str, template: &str) -> Self {
        self.insert(key, template);
        self
    }
}

impl Localizer for StringTable {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// Substitute `{app}` and `{permission}` in a template.
///
/// Single left-to-right pass: substituted text is never scanned again.
pub fn fill(template: &str, app: &str, permission: &str) -> String {
    let mut out = String::with_capacity(template.len() + app.len() + permission.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];
        if let Some(after) = rest.strip_prefix("{app}") {
            out.push_str(app);
            rest = after;
        } else if let Some(after) = rest.strip_prefix("{permission}") {
            out.push_str(permission);
            rest = after;
        } else {
            out.push('{');
            rest = &rest[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Resolve one field of alert copy.
///
/// Tries the type-specific key, then the variant default, first in
/// `localizer` and then in the built-in English table. Empty templates
/// count as missing.
pub fn resolve(
    localizer: &dyn Localizer,
    variant: &str,
    type_id: &str,
    field: &str,
) -> Option<String> {
    let specific = format!("{variant}.{type_id}.{field}");
    let fallback = format!("{variant}.default.{field}");

    let found = localizer
        .lookup(&specific)
        .filter(|s| !s.is_empty())
        .or_else(|| localizer.lookup(&fallback).filter(|s| !s.is_empty()));
    if found.is_some() {
        return found;
    }

    tracing::debug!("No localized copy for {}, using built-in English", specific);
    builtin_english(&specific).or_else(|| builtin_english(&fallback))
}

fn builtin_english(key: &str) -> Option<String> {
    ENGLISH
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
}
