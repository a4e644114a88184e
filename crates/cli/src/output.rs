use std::io::{Write, stdout};

use anyhow::Result;
use serde::Serialize;
use unitlog_core::{ActivityTypeExt, Theme};
use unitlog_protocol::{ActivityType, Color, ThemeName};

/// A theme together with the name it resolved to.
#[derive(Serialize)]
pub struct NamedTheme<'a> {
    pub name: ThemeName,
    #[serde(flatten)]
    pub theme: &'a Theme,
}

/// An activity type with its colors resolved against one theme.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedActivity {
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub icon: &'static str,
    pub translation_key: &'static str,
    pub color: Color,
    pub background_color: Color,
    pub gradient: [Color; 2],
}

impl ResolvedActivity {
    pub fn resolve(kind: ActivityType, theme: &Theme) -> Self {
        Self {
            kind,
            icon: kind.icon(),
            translation_key: kind.translation_key(),
            color: kind.color(theme),
            background_color: kind.background_color(theme),
            gradient: kind.gradient(theme),
        }
    }
}

/// Write `value` to stdout as pretty JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut out = stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_line(line: &str) -> Result<()> {
    writeln!(stdout().lock(), "{line}")?;
    Ok(())
}
