//! Profile settings command.

use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;

use tdash_core::context::Theme;
use tdash_core::forms::{PasswordChange, ProfileForm};
use tdash_core::page::ProfileSettingsPage;
use tdash_core::seed;

use super::Session;
use crate::output;

#[derive(Args)]
pub struct ProfileArgs {
    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New email address
    #[arg(long)]
    pub email: Option<String>,

    /// New role
    #[arg(long)]
    pub role: Option<String>,

    /// Change the password: current, new and confirmation
    #[arg(long, num_args = 3, value_names = ["CURRENT", "NEW", "CONFIRM"])]
    pub password: Option<Vec<String>>,

    /// Theme (light, dark)
    #[arg(long)]
    pub theme: Option<String>,
}

pub fn execute(args: ProfileArgs, mut session: Session) -> Result<()> {
    let mut page = ProfileSettingsPage::new(seed::profile());

    if args.name.is_some() || args.email.is_some() || args.role.is_some() {
        page.open();
        let current = page.profile.clone();
        let form = ProfileForm {
            name: args.name.unwrap_or(current.name),
            email: args.email.unwrap_or(current.email),
            role: args.role.unwrap_or(current.role),
        };
        page.save_profile(form)?;
        output::success("Profile saved");
    }

    if let Some(values) = args.password {
        page.open();
        page.select_tab("security");
        let [current, new, confirm]: [String; 3] = values
            .try_into()
            .map_err(|_| anyhow!("--password takes exactly three values"))?;
        page.change_password(&PasswordChange { current, new, confirm })?;
        output::success("Password changed");
    }

    if let Some(theme) = &args.theme {
        let theme = Theme::parse(theme)
            .ok_or_else(|| anyhow!("Unknown theme '{}'. Valid: light, dark", theme))?;
        page.select_tab("appearance");
        page.select_theme(theme, &mut session.ctx);
        output::success(&format!("Theme set to {}", theme.as_str()));
    }

    println!();
    println!("{}", "Profile".bold());
    println!("  {} {}", output::pad_right("Name", 8), page.profile.name);
    println!("  {} {}", output::pad_right("Email", 8), page.profile.email);
    println!("  {} {}", output::pad_right("Role", 8), page.profile.role);
    println!("  {} {}", output::pad_right("Theme", 8), session.ctx.theme.as_str());
    Ok(())
}
