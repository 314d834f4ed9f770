//! Profile settings modal: profile, security and appearance tabs.

use tracing::info;

use crate::context::{AppContext, Theme};
use crate::error::DashResult;
use crate::forms::{PasswordChange, ProfileForm};
use crate::view_state::{ModalId, ViewState};

pub const TABS: &[&str] = &["profile", "security", "appearance"];

#[derive(Debug, Clone)]
pub struct ProfileSettingsPage {
    pub view: ViewState,
    pub profile: ProfileForm,
}

impl ProfileSettingsPage {
    pub fn new(profile: ProfileForm) -> Self {
        Self {
            view: ViewState::new(&[], TABS[0]),
            profile,
        }
    }

    pub fn open(&mut self) {
        self.view.open_modal(ModalId::ProfileSettings, None);
    }

    /// Switch tab. Unknown tabs are ignored.
    pub fn select_tab(&mut self, tab: &str) -> bool {
        if !TABS.contains(&tab) {
            return false;
        }
        self.view.set_tab(tab);
        true
    }

    /// Save the profile tab and close the modal.
    pub fn save_profile(&mut self, form: ProfileForm) -> DashResult<()> {
        form.validate()?;
        info!(name = %form.name, "Profile saved");
        self.profile = form;
        self.view.close_modal(ModalId::ProfileSettings);
        Ok(())
    }

    /// Validate a password change and close the modal. Nothing is stored.
    pub fn change_password(&mut self, change: &PasswordChange) -> DashResult<()> {
        change.validate()?;
        info!("Password change accepted");
        self.view.close_modal(ModalId::ProfileSettings);
        Ok(())
    }

    pub fn select_theme(&mut self, theme: Theme, ctx: &mut AppContext) {
        ctx.theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ProfileForm {
        ProfileForm {
            name: "Shubham Shrestha".to_string(),
            email: "shubham@example.com".to_string(),
            role: "Project Manager".to_string(),
        }
    }

    #[test]
    fn test_tabs() {
        let mut page = ProfileSettingsPage::new(profile());
        assert_eq!(page.view.active_tab(), "profile");
        assert!(page.select_tab("security"));
        assert!(!page.select_tab("billing"));
        assert_eq!(page.view.active_tab(), "security");
    }

    #[test]
    fn test_save_closes_only_when_valid() {
        let mut page = ProfileSettingsPage::new(profile());
        page.open();
        let bad = ProfileForm {
            email: "broken".to_string(),
            ..profile()
        };
        assert!(page.save_profile(bad).is_err());
        assert!(page.view.is_modal_open(ModalId::ProfileSettings));

        let good = ProfileForm {
            role: "Director".to_string(),
            ..profile()
        };
        page.save_profile(good).unwrap();
        assert_eq!(page.profile.role, "Director");
        assert!(!page.view.is_modal_open(ModalId::ProfileSettings));
    }
}
