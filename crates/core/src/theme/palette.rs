use serde::Serialize;
use unitlog_protocol::{Color, ColorSlot};

/// One color per semantic slot.
///
/// Both palettes are values of this one struct, so a slot missing from either
/// table is a compile error rather than a runtime gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,
    pub secondary: Color,
    pub accent: Color,

    pub background: Color,
    pub surface: Color,
    pub surface_elevated: Color,
    pub card: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub text_inverse: Color,

    pub border: Color,
    pub border_light: Color,
    pub divider: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    pub overlay: Color,
    pub shadow: Color,

    pub gradient_start: Color,
    pub gradient_end: Color,

    pub tab_bar_background: Color,
    pub tab_bar_active: Color,
    pub tab_bar_inactive: Color,

    pub input_background: Color,
}

impl ThemeColors {
    pub const fn get(&self, slot: ColorSlot) -> Color {
        use ColorSlot::*;
        match slot {
            Primary => self.primary,
            PrimaryLight => self.primary_light,
            PrimaryDark => self.primary_dark,
            Secondary => self.secondary,
            Accent => self.accent,

            Background => self.background,
            Surface => self.surface,
            SurfaceElevated => self.surface_elevated,
            Card => self.card,

            TextPrimary => self.text_primary,
            TextSecondary => self.text_secondary,
            TextTertiary => self.text_tertiary,
            TextInverse => self.text_inverse,

            Border => self.border,
            BorderLight => self.border_light,
            Divider => self.divider,

            Success => self.success,
            Warning => self.warning,
            Error => self.error,
            Info => self.info,

            Overlay => self.overlay,
            Shadow => self.shadow,

            GradientStart => self.gradient_start,
            GradientEnd => self.gradient_end,

            TabBarBackground => self.tab_bar_background,
            TabBarActive => self.tab_bar_active,
            TabBarInactive => self.tab_bar_inactive,

            InputBackground => self.input_background,
        }
    }

    /// Every `(slot, color)` pair in slot declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorSlot, Color)> + '_ {
        ColorSlot::ALL.iter().map(|&slot| (slot, self.get(slot)))
    }
}

pub const LIGHT_COLORS: ThemeColors = ThemeColors {
    primary: Color::hex(0x2563EB),
    primary_light: Color::hex(0x60A5FA),
    primary_dark: Color::hex(0x1D4ED8),
    secondary: Color::hex(0x64748B),
    accent: Color::hex(0xF97316),

    background: Color::hex(0xFFFFFF),
    surface: Color::hex(0xF8FAFC),
    surface_elevated: Color::hex(0xFFFFFF),
    card: Color::hex(0xFFFFFF),

    text_primary: Color::hex(0x0F172A),
    text_secondary: Color::hex(0x475569),
    text_tertiary: Color::hex(0x94A3B8),
    text_inverse: Color::hex(0xFFFFFF),

    border: Color::hex(0xE2E8F0),
    border_light: Color::hex(0xF1F5F9),
    divider: Color::hex(0xE2E8F0),

    success: Color::hex(0x16A34A),
    warning: Color::hex(0xD97706),
    error: Color::hex(0xDC2626),
    info: Color::hex(0x0284C7),

    overlay: Color::rgba(15, 23, 42, 0.5),
    shadow: Color::rgba(0, 0, 0, 0.1),

    gradient_start: Color::hex(0x2563EB),
    gradient_end: Color::hex(0x7C3AED),

    tab_bar_background: Color::hex(0xFFFFFF),
    tab_bar_active: Color::hex(0x2563EB),
    tab_bar_inactive: Color::hex(0x94A3B8),

    input_background: Color::hex(0xF1F5F9),
};

pub const DARK_COLORS: ThemeColors = ThemeColors {
    primary: Color::hex(0x2563EB),
    primary_light: Color::hex(0x3B82F6),
    primary_dark: Color::hex(0x1E40AF),
    secondary: Color::hex(0x94A3B8),
    accent: Color::hex(0xFB923C),

    background: Color::hex(0x0B1120),
    surface: Color::hex(0x111827),
    surface_elevated: Color::hex(0x1F2937),
    card: Color::hex(0x1E293B),

    text_primary: Color::hex(0xF8FAFC),
    text_secondary: Color::hex(0xCBD5E1),
    text_tertiary: Color::hex(0x64748B),
    text_inverse: Color::hex(0x0F172A),

    border: Color::hex(0x334155),
    border_light: Color::hex(0x1E293B),
    divider: Color::hex(0x1F2937),

    success: Color::hex(0x22C55E),
    warning: Color::hex(0xF59E0B),
    error: Color::hex(0xEF4444),
    info: Color::hex(0x38BDF8),

    overlay: Color::rgba(0, 0, 0, 0.7),
    shadow: Color::rgba(0, 0, 0, 0.4),

    gradient_start: Color::hex(0x1D4ED8),
    gradient_end: Color::hex(0x6D28D9),

    tab_bar_background: Color::hex(0x111827),
    tab_bar_active: Color::hex(0x3B82F6),
    tab_bar_inactive: Color::hex(0x64748B),

    input_background: Color::hex(0x1E293B),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_matches_fields() {
        assert_eq!(LIGHT_COLORS.get(ColorSlot::Info), LIGHT_COLORS.info);
        assert_eq!(
            DARK_COLORS.get(ColorSlot::PrimaryDark),
            DARK_COLORS.primary_dark
        );
        assert_eq!(
            DARK_COLORS.get(ColorSlot::InputBackground),
            DARK_COLORS.input_background
        );
    }

    #[test]
    fn iter_covers_every_slot_once() {
        let slots: Vec<ColorSlot> = LIGHT_COLORS.iter().map(|(slot, _)| slot).collect();
        assert_eq!(slots, ColorSlot::ALL);
    }

    #[test]
    fn serialized_keys_are_slot_tags() {
        let value = serde_json::to_value(DARK_COLORS).unwrap_or_default();
        let keys: Vec<&str> = value
            .as_object()
            .map(|obj| obj.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(keys.len(), ColorSlot::ALL.len());
        for slot in ColorSlot::ALL {
            assert!(keys.contains(&slot.as_str()), "missing key {slot}");
        }
    }
}
