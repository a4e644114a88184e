//! Theme registry: the two built-in themes and how a name or stored
//! preference resolves to one.
//!
//! Both themes are `static` items. Lookups hand out `&'static Theme`, so the
//! same name always yields the same reference and callers may compare themes
//! with [`std::ptr::eq`] to detect a change.

mod palette;
pub mod tokens;

pub use palette::{DARK_COLORS, LIGHT_COLORS, ThemeColors};
pub use tokens::{Animation, BorderRadius, Shadows, Spacing, Typography};

use serde::Serialize;
use unitlog_protocol::{ThemeName, ThemePreference};

/// A color palette paired with the shared layout tokens.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(skip)]
    name: ThemeName,
    pub colors: ThemeColors,
    pub spacing: &'static Spacing,
    pub typography: &'static Typography,
    pub border_radius: &'static BorderRadius,
    pub shadows: &'static Shadows,
    pub animation: &'static Animation,
}

impl Theme {
    pub fn name(&self) -> ThemeName {
        self.name
    }

    /// Same theme with a replaced palette.
    #[cfg(test)]
    pub(crate) fn with_colors(&self, colors: ThemeColors) -> Theme {
        Theme { colors, ..*self }
    }
}

pub static LIGHT: Theme = Theme {
    name: ThemeName::Light,
    colors: LIGHT_COLORS,
    spacing: &tokens::SPACING,
    typography: &tokens::TYPOGRAPHY,
    border_radius: &tokens::BORDER_RADIUS,
    shadows: &tokens::SHADOWS,
    animation: &tokens::ANIMATION,
};

pub static DARK: Theme = Theme {
    name: ThemeName::Dark,
    colors: DARK_COLORS,
    spacing: &tokens::SPACING,
    typography: &tokens::TYPOGRAPHY,
    border_radius: &tokens::BORDER_RADIUS,
    shadows: &tokens::SHADOWS,
    animation: &tokens::ANIMATION,
};

pub fn get_theme(name: ThemeName) -> &'static Theme {
    match name {
        ThemeName::Light => &LIGHT,
        ThemeName::Dark => &DARK,
    }
}

/// The theme the device currently prefers.
///
/// Placeholder: always `Light` until a host appearance query is wired in
/// through [`SystemAppearance`].
pub fn get_system_theme() -> ThemeName {
    ThemeName::Light
}

/// Source of the device's light/dark appearance.
pub trait SystemAppearance {
    fn current(&self) -> ThemeName;
}

/// Appearance source backed by [`get_system_theme`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAppearance;

impl SystemAppearance for PlaceholderAppearance {
    fn current(&self) -> ThemeName {
        get_system_theme()
    }
}

/// Resolve a stored preference to a concrete theme name.
pub fn resolve_preference(
    preference: ThemePreference,
    appearance: &impl SystemAppearance,
) -> ThemeName {
    match preference {
        ThemePreference::Light => ThemeName::Light,
        ThemePreference::Dark => ThemeName::Dark,
        ThemePreference::System => appearance.current(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedAppearance(ThemeName);

    impl SystemAppearance for FixedAppearance {
        fn current(&self) -> ThemeName {
            self.0
        }
    }

    #[test]
    fn lookup_returns_same_reference() {
        for name in ThemeName::ALL {
            assert!(std::ptr::eq(get_theme(*name), get_theme(*name)));
            assert_eq!(get_theme(*name).name(), *name);
        }
        assert!(!std::ptr::eq(
            get_theme(ThemeName::Light),
            get_theme(ThemeName::Dark)
        ));
    }

    #[test]
    fn themes_share_token_subtrees() {
        let light = get_theme(ThemeName::Light);
        let dark = get_theme(ThemeName::Dark);
        assert!(std::ptr::eq(light.spacing, dark.spacing));
        assert!(std::ptr::eq(light.typography, dark.typography));
        assert!(std::ptr::eq(light.border_radius, dark.border_radius));
        assert!(std::ptr::eq(light.shadows, dark.shadows));
        assert!(std::ptr::eq(light.animation, dark.animation));
    }

    #[test]
    fn system_theme_is_light_placeholder() {
        assert_eq!(get_system_theme(), ThemeName::Light);
        assert_eq!(PlaceholderAppearance.current(), ThemeName::Light);
    }

    #[test]
    fn explicit_preference_ignores_appearance() {
        let dark_device = FixedAppearance(ThemeName::Dark);
        assert_eq!(
            resolve_preference(ThemePreference::Light, &dark_device),
            ThemeName::Light
        );
        assert_eq!(
            resolve_preference(ThemePreference::Dark, &PlaceholderAppearance),
            ThemeName::Dark
        );
    }

    #[test]
    fn system_preference_follows_appearance() {
        let dark_device = FixedAppearance(ThemeName::Dark);
        assert_eq!(
            resolve_preference(ThemePreference::System, &dark_device),
            ThemeName::Dark
        );
        assert_eq!(
            resolve_preference(ThemePreference::System, &PlaceholderAppearance),
            ThemeName::Light
        );
    }

    #[test]
    fn serializes_six_fields() {
        let value = serde_json::to_value(get_theme(ThemeName::Dark)).unwrap_or_default();
        let obj = value.as_object().cloned().unwrap_or_default();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "animation",
                "borderRadius",
                "colors",
                "shadows",
                "spacing",
                "typography"
            ]
        );
    }
}
