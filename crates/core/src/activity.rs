//! Activity-type registry: icon, translation key and theme colors for each
//! [`ActivityType`].
//!
//! The typed API on [`ActivityTypeExt`] is total over the enum. The
//! `get_activity_type_*` functions take raw tags (as they arrive from the
//! backend or a route parameter) and fall back to generic values for tags
//! outside the set instead of failing.

use serde::Serialize;
use unitlog_protocol::{ActivityType, Color, ColorSlot};

use crate::theme::Theme;

/// Alpha applied to an activity color to produce its background tint.
pub const BACKGROUND_TINT_ALPHA: u8 = 0x20;

pub const FALLBACK_ICON: &str = "flag-outline";
pub const FALLBACK_TRANSLATION_KEY: &str = "activity.type";

/// Display metadata for one activity type.
///
/// Colors are stored as slots rather than resolved values, so the table is
/// plain data and does not depend on any particular theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTypeConfig {
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub icon: &'static str,
    pub translation_key: &'static str,
    pub color_slot: ColorSlot,
    /// Tinted with [`BACKGROUND_TINT_ALPHA`] when resolved.
    pub background_slot: ColorSlot,
}

/// The registry, in the same order as [`ActivityType::ALL`].
pub static ACTIVITY_TYPES: [ActivityTypeConfig; 3] = [
    ActivityTypeConfig {
        kind: ActivityType::Training,
        icon: "school-outline",
        translation_key: "activity.types.training",
        color_slot: ColorSlot::Info,
        background_slot: ColorSlot::Info,
    },
    ActivityTypeConfig {
        kind: ActivityType::Exercise,
        icon: "fitness-outline",
        translation_key: "activity.types.exercise",
        color_slot: ColorSlot::Warning,
        background_slot: ColorSlot::Warning,
    },
    ActivityTypeConfig {
        kind: ActivityType::Operation,
        icon: "shield-checkmark-outline",
        translation_key: "activity.types.operation",
        color_slot: ColorSlot::Error,
        background_slot: ColorSlot::Error,
    },
];

/// Theme-aware display helpers for [`ActivityType`].
pub trait ActivityTypeExt: Copy {
    fn config(self) -> &'static ActivityTypeConfig;

    fn icon(self) -> &'static str {
        self.config().icon
    }

    fn translation_key(self) -> &'static str {
        self.config().translation_key
    }

    fn color(self, theme: &Theme) -> Color {
        theme.colors.get(self.config().color_slot)
    }

    fn background_color(self, theme: &Theme) -> Color {
        theme
            .colors
            .get(self.config().background_slot)
            .with_alpha(BACKGROUND_TINT_ALPHA)
    }

    /// `[start, end]` colors for a directional gradient.
    fn gradient(self, theme: &Theme) -> [Color; 2];
}

impl ActivityTypeExt for ActivityType {
    fn config(self) -> &'static ActivityTypeConfig {
        match self {
            ActivityType::Training => &ACTIVITY_TYPES[0],
            ActivityType::Exercise => &ACTIVITY_TYPES[1],
            ActivityType::Operation => &ACTIVITY_TYPES[2],
        }
    }

    fn gradient(self, theme: &Theme) -> [Color; 2] {
        let c = &theme.colors;
        match self {
            ActivityType::Training => [c.info, c.warning],
            ActivityType::Exercise => [c.warning, c.primary],
            ActivityType::Operation => [c.error, c.primary_dark],
        }
    }
}

fn lookup(tag: &str) -> Option<ActivityType> {
    tag.parse().ok()
}

/// Activity color for `tag`, or the theme's primary color for unknown tags.
pub fn get_activity_type_color(tag: &str, theme: &Theme) -> Color {
    match lookup(tag) {
        Some(kind) => kind.color(theme),
        None => theme.colors.primary,
    }
}

/// Translucent tint of [`get_activity_type_color`].
///
/// Hex colors print as the base color followed by `20`.
pub fn get_activity_type_background_color(tag: &str, theme: &Theme) -> Color {
    match lookup(tag) {
        Some(kind) => kind.background_color(theme),
        None => theme.colors.primary.with_alpha(BACKGROUND_TINT_ALPHA),
    }
}

pub fn get_activity_type_icon(tag: &str) -> &'static str {
    lookup(tag).map_or(FALLBACK_ICON, ActivityTypeExt::icon)
}

pub fn get_activity_type_translation_key(tag: &str) -> &'static str {
    lookup(tag).map_or(FALLBACK_TRANSLATION_KEY, ActivityTypeExt::translation_key)
}

pub fn get_all_activity_types() -> &'static [ActivityType] {
    ActivityType::ALL
}

/// Gradient for `tag`; unknown tags get the theme's generic gradient.
pub fn get_activity_type_gradient(tag: &str, theme: &Theme) -> [Color; 2] {
    match lookup(tag) {
        Some(kind) => kind.gradient(theme),
        None => [theme.colors.gradient_start, theme.colors.gradient_end],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{DARK, LIGHT};

    #[test]
    fn registry_order_matches_enum() {
        let kinds: Vec<ActivityType> = ACTIVITY_TYPES.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, ActivityType::ALL);
        for kind in ActivityType::ALL {
            assert_eq!(kind.config().kind, *kind);
        }
    }

    #[test]
    fn color_slots_per_type() {
        assert_eq!(ActivityType::Training.color(&LIGHT), LIGHT.colors.info);
        assert_eq!(ActivityType::Exercise.color(&DARK), DARK.colors.warning);
        assert_eq!(ActivityType::Operation.color(&DARK), DARK.colors.error);
    }

    #[test]
    fn background_is_color_with_suffix() {
        for theme in [&LIGHT, &DARK] {
            for kind in ActivityType::ALL {
                let base = kind.color(theme).to_string();
                assert_eq!(kind.background_color(theme).to_string(), format!("{base}20"));
            }
        }
    }

    #[test]
    fn unknown_tag_falls_back() {
        assert_eq!(get_activity_type_color("patrol", &LIGHT), LIGHT.colors.primary);
        assert_eq!(
            get_activity_type_background_color("", &DARK).to_string(),
            format!("{}20", DARK.colors.primary)
        );
        assert_eq!(get_activity_type_icon("unknown"), "flag-outline");
        assert_eq!(get_activity_type_translation_key("unknown"), "activity.type");
        assert_eq!(
            get_activity_type_gradient("unknown", &LIGHT),
            [LIGHT.colors.gradient_start, LIGHT.colors.gradient_end]
        );
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(get_activity_type_icon("Training"), FALLBACK_ICON);
        assert_eq!(get_activity_type_icon("training"), "school-outline");
    }

    #[test]
    fn config_serializes_as_plain_data() {
        let json = serde_json::to_value(ActivityType::Exercise.config()).unwrap_or_default();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "exercise",
                "icon": "fitness-outline",
                "translationKey": "activity.types.exercise",
                "colorSlot": "warning",
                "backgroundSlot": "warning",
            })
        );
    }
}
