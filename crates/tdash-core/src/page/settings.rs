//! Settings panels. The active section is the view's tab.

use tracing::debug;

use crate::context::{AppContext, Theme};
use crate::model::{SettingValue, Settings, SettingsSection};
use crate::view_state::ViewState;

#[derive(Debug, Clone)]
pub struct SettingsPage {
    pub settings: Settings,
    pub view: ViewState,
}

impl SettingsPage {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            view: ViewState::new(&[], SettingsSection::Account.as_str()),
        }
    }

    /// Switch section. Unknown section names leave the current one shown.
    pub fn select_section(&mut self, name: &str) -> bool {
        match SettingsSection::parse(name) {
            Some(section) => {
                self.view.set_tab(section.as_str());
                true
            }
            None => {
                debug!(section = name, "Unknown settings section ignored");
                false
            }
        }
    }

    pub fn active_section(&self) -> SettingsSection {
        SettingsSection::parse(self.view.active_tab()).unwrap_or(SettingsSection::Account)
    }

    pub fn entries(&self) -> Vec<(&str, &SettingValue)> {
        self.settings
            .section(self.active_section())
            .map(|s| s.iter().map(|(k, v)| (k.as_str(), v)).collect())
            .unwrap_or_default()
    }

    pub fn toggle(&mut self, section: SettingsSection, key: &str) -> bool {
        self.settings.toggle(section, key)
    }

    /// Select a choice. Choosing `appearance.theme` also switches the
    /// application theme when the choice is `light` or `dark`.
    pub fn select(
        &mut self,
        section: SettingsSection,
        key: &str,
        choice: &str,
        ctx: &mut AppContext,
    ) -> bool {
        let changed = self.settings.select(section, key, choice);
        if changed && section == SettingsSection::Appearance && key == "theme" {
            if let Some(theme) = Theme::parse(choice) {
                ctx.theme = theme;
                debug!(theme = theme.as_str(), "Theme applied from settings");
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_sections() {
        let mut page = SettingsPage::new(seed::settings());
        assert_eq!(page.active_section(), SettingsSection::Account);
        assert!(page.select_section("privacy"));
        assert_eq!(page.active_section(), SettingsSection::Privacy);
        assert!(!page.select_section("billing"));
        assert_eq!(page.active_section(), SettingsSection::Privacy);
        assert_eq!(page.entries().len(), 4);
    }

    #[test]
    fn test_theme_choice_updates_context() {
        let mut page = SettingsPage::new(seed::settings());
        let mut ctx = AppContext::default();
        assert!(page.select(SettingsSection::Appearance, "theme", "light", &mut ctx));
        assert_eq!(ctx.theme, Theme::Light);

        assert!(page.select(SettingsSection::Appearance, "theme", "system", &mut ctx));
        assert_eq!(ctx.theme, Theme::Light);
    }

    #[test]
    fn test_unlisted_theme_leaves_context_alone() {
        let mut page = SettingsPage::new(seed::settings());
        let mut ctx = AppContext::default();
        let before = ctx.theme;
        assert!(!page.select(SettingsSection::Appearance, "theme", "neon", &mut ctx));
        assert_eq!(ctx.theme, before);
        assert_eq!(
            page.settings.get(SettingsSection::Appearance, "theme").map(ToString::to_string),
            Some("dark".to_string())
        );
    }
}
