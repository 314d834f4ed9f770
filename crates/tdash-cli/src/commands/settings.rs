//! Settings command.

use anyhow::{anyhow, bail, Result};
use clap::Args;

use tdash_core::model::SettingsSection;
use tdash_core::page::SettingsPage;
use tdash_core::seed;

use super::Session;
use crate::output;

#[derive(Args)]
pub struct SettingsArgs {
    /// Section to show (account, notifications, appearance, privacy)
    #[arg(long)]
    pub section: Option<String>,

    /// Flip a boolean setting, e.g. `notifications.email`
    #[arg(long)]
    pub toggle: Option<String>,

    /// Choose a value, e.g. `appearance.theme=light`
    #[arg(long)]
    pub select: Option<String>,
}

/// Split `section.key` into its parts.
fn parse_key(s: &str) -> Result<(SettingsSection, &str)> {
    let (section, key) = s
        .split_once('.')
        .ok_or_else(|| anyhow!("Expected section.key, got '{}'", s))?;
    let section = SettingsSection::parse(section).ok_or_else(|| {
        anyhow!(
            "Unknown section '{}'. Valid sections: {}",
            section,
            SettingsSection::ALL.map(|s| s.as_str()).join(", ")
        )
    })?;
    Ok((section, key))
}

pub fn execute(args: SettingsArgs, mut session: Session) -> Result<()> {
    let mut page = SettingsPage::new(seed::settings());

    if let Some(section) = &args.section {
        if !page.select_section(section) {
            bail!(
                "Unknown section '{}'. Valid sections: {}",
                section,
                SettingsSection::ALL.map(|s| s.as_str()).join(", ")
            );
        }
    }

    if let Some(target) = &args.toggle {
        let (section, key) = parse_key(target)?;
        if !page.toggle(section, key) {
            bail!("'{}' is not a switch", target);
        }
        page.select_section(section.as_str());
        output::success(&format!("Toggled {}", target));
    }

    if let Some(assignment) = &args.select {
        let (target, choice) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected section.key=value, got '{}'", assignment))?;
        let (section, key) = parse_key(target)?;
        if !page.select(section, key, choice, &mut session.ctx) {
            match page.settings.get(section, key).and_then(|v| v.options()) {
                Some(options) => bail!(
                    "'{}' is not an option for {}. Valid options: {}",
                    choice,
                    target,
                    options.join(", ")
                ),
                None => bail!("'{}' is not a choice", target),
            }
        }
        page.select_section(section.as_str());
        output::success(&format!("Set {} to {}", target, choice));
    }

    println!();
    output::print_settings(page.active_section(), &page.entries());
    tracing::debug!(theme = session.ctx.theme.as_str(), "Active theme");
    Ok(())
}
