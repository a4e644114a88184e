mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use unitlog_core::{
    PlaceholderAppearance, SettingsStore, get_all_activity_types, get_theme, resolve_preference,
    validate_all,
};
use unitlog_protocol::{ThemeName, ThemePreference};

use output::{NamedTheme, ResolvedActivity, write_json, write_line};

/// Inspect unitlog design tokens and activity types.
///
/// Examples:
///   unitlog theme dark                 # Dark theme tokens as JSON
///   unitlog activities --theme light   # Activity types with light colors
///   unitlog validate                   # Check both palettes
///   unitlog preference set system      # Follow the device appearance
#[derive(Parser, Debug)]
#[command(name = "unitlog", version, about)]
struct Cli {
    /// Settings file to read and write the theme preference from
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a theme as JSON. Defaults to the stored preference.
    Theme {
        /// light, dark or system
        preference: Option<ThemePreference>,
    },
    /// Print every activity type with colors resolved for a theme.
    Activities {
        /// light, dark or system. Defaults to the stored preference.
        #[arg(long)]
        theme: Option<ThemePreference>,
    },
    /// Validate the built-in palettes.
    Validate,
    /// Read or change the stored theme preference.
    Preference {
        #[command(subcommand)]
        action: PreferenceAction,
    },
}

#[derive(Subcommand, Debug)]
enum PreferenceAction {
    Get,
    Set { preference: ThemePreference },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = cli
        .store
        .map_or_else(SettingsStore::default_location, SettingsStore::new);
    debug!(path = %store.path().display(), "using settings store");

    match cli.command {
        Command::Theme { preference } => {
            let name = resolve(preference, &store);
            write_json(&NamedTheme {
                name,
                theme: get_theme(name),
            })
        }
        Command::Activities { theme } => {
            let theme = get_theme(resolve(theme, &store));
            let activities: Vec<ResolvedActivity> = get_all_activity_types()
                .iter()
                .map(|&kind| ResolvedActivity::resolve(kind, theme))
                .collect();
            write_json(&activities)
        }
        Command::Validate => {
            validate_all().context("palette validation failed")?;
            write_line(&format!("ok: {} themes valid", ThemeName::ALL.len()))
        }
        Command::Preference { action } => match action {
            PreferenceAction::Get => write_line(store.load().theme.as_str()),
            PreferenceAction::Set { preference } => {
                store
                    .update(|settings| settings.theme = preference)
                    .with_context(|| format!("writing {}", store.path().display()))?;
                info!(%preference, "theme preference saved");
                write_line(preference.as_str())
            }
        },
    }
}

/// An explicit preference wins over the stored one.
fn resolve(preference: Option<ThemePreference>, store: &SettingsStore) -> ThemeName {
    let preference = preference.unwrap_or_else(|| store.load().theme);
    resolve_preference(preference, &PlaceholderAppearance)
}
