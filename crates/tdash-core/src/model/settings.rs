//! Settings panels: flat key/value maps scoped under a section.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings section key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsSection {
    Account,
    Notifications,
    Appearance,
    Privacy,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 4] = [
        Self::Account,
        Self::Notifications,
        Self::Appearance,
        Self::Privacy,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "account" => Some(Self::Account),
            "notifications" => Some(Self::Notifications),
            "appearance" => Some(Self::Appearance),
            "privacy" => Some(Self::Privacy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Notifications => "notifications",
            Self::Appearance => "appearance",
            Self::Privacy => "privacy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Notifications => "Notifications",
            Self::Appearance => "Appearance",
            Self::Privacy => "Privacy & Security",
        }
    }
}

/// A toggle, or a choice out of a fixed list of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Choice { selected: String, options: Vec<String> },
}

impl SettingValue {
    /// A choice setting. `selected` is added to `options` when missing.
    pub fn choice(selected: &str, options: &[&str]) -> Self {
        let mut options: Vec<String> = options.iter().map(|o| o.to_string()).collect();
        if !options.iter().any(|o| o == selected) {
            options.insert(0, selected.to_string());
        }
        Self::Choice {
            selected: selected.to_string(),
            options,
        }
    }

    /// Allowed options of a choice; `None` for toggles.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::Bool(_) => None,
            Self::Choice { options, .. } => Some(options),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("on"),
            Self::Bool(false) => f.write_str("off"),
            Self::Choice { selected, .. } => f.write_str(selected),
        }
    }
}

/// All settings sections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    sections: BTreeMap<SettingsSection, BTreeMap<String, SettingValue>>,
}

impl Settings {
    pub fn new(sections: BTreeMap<SettingsSection, BTreeMap<String, SettingValue>>) -> Self {
        Self { sections }
    }

    pub fn section(&self, section: SettingsSection) -> Option<&BTreeMap<String, SettingValue>> {
        self.sections.get(&section)
    }

    pub fn get(&self, section: SettingsSection, key: &str) -> Option<&SettingValue> {
        self.sections.get(&section)?.get(key)
    }

    /// Flip a boolean setting. Returns whether anything changed; unknown
    /// keys and non-boolean values are left alone.
    pub fn toggle(&mut self, section: SettingsSection, key: &str) -> bool {
        match self.sections.get_mut(&section).and_then(|s| s.get_mut(key)) {
            Some(SettingValue::Bool(value)) => {
                *value = !*value;
                debug!(section = section.as_str(), key, value = *value, "Setting toggled");
                true
            }
            _ => {
                debug!(section = section.as_str(), key, "Toggle ignored");
                false
            }
        }
    }

    /// Select one of the options of an existing choice setting. Returns
    /// whether anything changed; unknown keys, boolean values and choices
    /// outside the option list are left alone.
    pub fn select(&mut self, section: SettingsSection, key: &str, choice: &str) -> bool {
        match self.sections.get_mut(&section).and_then(|s| s.get_mut(key)) {
            Some(SettingValue::Choice { selected, options })
                if options.iter().any(|o| o == choice) =>
            {
                *selected = choice.to_string();
                debug!(section = section.as_str(), key, choice, "Setting selected");
                true
            }
            Some(SettingValue::Choice { .. }) => {
                debug!(section = section.as_str(), key, choice, "Choice not among options");
                false
            }
            _ => {
                debug!(section = section.as_str(), key, "Select ignored");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        let mut notifications = BTreeMap::new();
        notifications.insert("email".to_string(), SettingValue::Bool(true));
        let mut appearance = BTreeMap::new();
        appearance.insert(
            "theme".to_string(),
            SettingValue::choice("dark", &["light", "dark", "system"]),
        );

        let mut sections = BTreeMap::new();
        sections.insert(SettingsSection::Notifications, notifications);
        sections.insert(SettingsSection::Appearance, appearance);
        Settings::new(sections)
    }

    #[test]
    fn test_toggle_flips_bool() {
        let mut s = settings();
        assert!(s.toggle(SettingsSection::Notifications, "email"));
        assert_eq!(
            s.get(SettingsSection::Notifications, "email"),
            Some(&SettingValue::Bool(false))
        );
    }

    #[test]
    fn test_toggle_ignores_unknown_and_choice() {
        let mut s = settings();
        let before = s.clone();
        assert!(!s.toggle(SettingsSection::Notifications, "sms"));
        assert!(!s.toggle(SettingsSection::Appearance, "theme"));
        assert!(!s.toggle(SettingsSection::Privacy, "twoFactor"));
        assert_eq!(s, before);
    }

    #[test]
    fn test_select_choice() {
        let mut s = settings();
        assert!(s.select(SettingsSection::Appearance, "theme", "light"));
        assert_eq!(
            s.get(SettingsSection::Appearance, "theme").map(ToString::to_string),
            Some("light".to_string())
        );
        assert!(!s.select(SettingsSection::Notifications, "email", "x"));
    }

    #[test]
    fn test_select_rejects_choice_outside_options() {
        let mut s = settings();
        let before = s.clone();
        assert!(!s.select(SettingsSection::Appearance, "theme", "neon"));
        assert!(!s.select(SettingsSection::Appearance, "theme", "Light"));
        assert_eq!(s, before);
    }

    #[test]
    fn test_choice_keeps_selected_among_options() {
        let value = SettingValue::choice("UTC+0", &["UTC-5", "UTC+1"]);
        assert_eq!(value.to_string(), "UTC+0");
        assert_eq!(value.options().map(<[String]>::len), Some(3));
        assert_eq!(SettingValue::Bool(true).options(), None);
    }
}
