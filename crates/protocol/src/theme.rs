use crate::tag::tag_enum;

tag_enum! {
    /// Semantic color slots every theme palette defines.
    ///
    /// Slots are named for their role, not their hue, so the same slot maps to
    /// different literal colors in each theme. Tags match the camelCase keys a
    /// serialized palette uses.
    pub enum ColorSlot("color slot") {
        Primary => "primary",
        PrimaryLight => "primaryLight",
        PrimaryDark => "primaryDark",
        Secondary => "secondary",
        Accent => "accent",

        Background => "background",
        Surface => "surface",
        SurfaceElevated => "surfaceElevated",
        Card => "card",

        TextPrimary => "textPrimary",
        TextSecondary => "textSecondary",
        TextTertiary => "textTertiary",
        TextInverse => "textInverse",

        Border => "border",
        BorderLight => "borderLight",
        Divider => "divider",

        // Status
        Success => "success",
        Warning => "warning",
        Error => "error",
        Info => "info",

        Overlay => "overlay",
        Shadow => "shadow",

        GradientStart => "gradientStart",
        GradientEnd => "gradientEnd",

        // Tab bar
        TabBarBackground => "tabBarBackground",
        TabBarActive => "tabBarActive",
        TabBarInactive => "tabBarInactive",

        InputBackground => "inputBackground",
    }
}

tag_enum! {
    /// Name of one of the built-in themes.
    pub enum ThemeName("theme name") {
        Light => "light",
        Dark => "dark",
    }
}

tag_enum! {
    /// A user's stored appearance choice. `System` defers to the device.
    pub enum ThemePreference("theme preference") {
        Light => "light",
        Dark => "dark",
        System => "system",
    }
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self::System
    }
}

impl From<ThemeName> for ThemePreference {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Self::Light,
            ThemeName::Dark => Self::Dark,
        }
    }
}
