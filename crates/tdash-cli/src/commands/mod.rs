//! CLI command definitions and handlers.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use tdash_core::config::{DashConfig, CONFIG_ENV, CONFIG_FILE};
use tdash_core::context::AppContext;
use tdash_core::view_state::{ViewState, ALL_FILTER};

pub mod calendar;
pub mod dashboard;
pub mod inbox;
pub mod notifications;
pub mod profile;
pub mod settings;
pub mod tasks;
pub mod team;

/// Task Dashboard - tasks, calendar, team and inbox in the terminal
#[derive(Parser)]
#[command(name = "tdash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stats, progress, recent tasks and activity
    Dashboard,

    /// Task list
    Tasks(tasks::TasksArgs),

    /// Notification feed
    Notifications(notifications::NotificationsArgs),

    /// Inbox messages
    Inbox(inbox::InboxArgs),

    /// Team roster and chat
    Team(team::TeamArgs),

    /// Month calendar
    Calendar(calendar::CalendarArgs),

    /// Settings panels
    Settings(settings::SettingsArgs),

    /// Profile, password and theme
    Profile(profile::ProfileArgs),
}

/// Configuration and application context shared by every command.
pub struct Session {
    pub config: DashConfig,
    pub ctx: AppContext,
}

impl Session {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => dirs::config_dir().map(|d| d.join("tdash").join(CONFIG_FILE)),
        };
        let config = match &path {
            Some(p) => DashConfig::load(p)?,
            None => DashConfig::default(),
        };
        debug!(path = ?path, theme = config.theme.as_str(), "Session loaded");
        let ctx = AppContext::from_config(&config);
        Ok(Self { config, ctx })
    }

    /// Filter for `view`: the flag if given, else the configured default.
    pub fn filter_for<'a>(&'a self, view: &str, flag: Option<&'a str>) -> Option<&'a str> {
        flag.or_else(|| self.config.default_filter(view))
    }
}

/// Apply a filter key coming from the command line. Unknown keys are
/// rejected here with the list of valid ones.
pub fn apply_filter(view: &mut ViewState, tag: Option<&str>) -> Result<()> {
    let Some(tag) = tag else {
        return Ok(());
    };
    let normalized = tag.trim().to_lowercase();
    if !view.is_known_filter(&normalized) {
        warn!(filter = tag, "Unknown filter rejected");
        bail!(
            "Unknown filter '{}'. Valid filters: {}, {}",
            tag,
            ALL_FILTER,
            view.known_filters().join(", ")
        );
    }
    view.set_filter(&normalized);
    Ok(())
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let session = Session::load(self.config.as_deref())?;

        match self.command {
            Commands::Dashboard => dashboard::execute(&session),
            Commands::Tasks(args) => tasks::execute(args, &session),
            Commands::Notifications(args) => notifications::execute(args, &session),
            Commands::Inbox(args) => inbox::execute(args, &session),
            Commands::Team(args) => team::execute(args, &session),
            Commands::Calendar(args) => calendar::execute(args, &session),
            Commands::Settings(args) => settings::execute(args, session),
            Commands::Profile(args) => profile::execute(args, session),
        }
    }
}
