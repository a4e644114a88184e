//! Layout tokens shared by every theme.
//!
//! These subtrees are theme-independent: each theme holds a `&'static`
//! reference to the single instance below rather than its own copy.

use serde::Serialize;
use unitlog_protocol::Color;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spacing {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_sizes: FontSizes,
    pub font_weights: FontWeights,
    pub line_heights: LineHeights,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontSizes {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
}

/// Weights are kept as the numeric strings native text styles expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontWeights {
    pub regular: &'static str,
    pub medium: &'static str,
    pub semibold: &'static str,
    pub bold: &'static str,
}

/// Multipliers of the font size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineHeights {
    pub tight: f32,
    pub normal: f32,
    pub relaxed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BorderRadius {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    /// Large enough to turn any control into a pill or circle.
    pub full: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadows {
    pub sm: Shadow,
    pub md: Shadow,
    pub lg: Shadow,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub shadow_color: Color,
    pub shadow_offset: ShadowOffset,
    pub shadow_opacity: f32,
    pub shadow_radius: f32,
    /// Android elevation, used where the platform ignores shadow properties.
    pub elevation: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadowOffset {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Animation {
    pub duration: Durations,
    pub easing: Easings,
}

/// Durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Durations {
    pub fast: u32,
    pub normal: u32,
    pub slow: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Easings {
    pub ease_in: CubicBezier,
    pub ease_out: CubicBezier,
    pub ease_in_out: CubicBezier,
}

/// Control points `(x1, y1, x2, y2)` of a CSS-style timing curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubicBezier(pub f32, pub f32, pub f32, pub f32);

pub static SPACING: Spacing = Spacing {
    xs: 4.0,
    sm: 8.0,
    md: 16.0,
    lg: 24.0,
    xl: 32.0,
    xxl: 48.0,
};

pub static TYPOGRAPHY: Typography = Typography {
    font_sizes: FontSizes {
        xs: 12.0,
        sm: 14.0,
        md: 16.0,
        lg: 18.0,
        xl: 20.0,
        xxl: 24.0,
        xxxl: 32.0,
    },
    font_weights: FontWeights {
        regular: "400",
        medium: "500",
        semibold: "600",
        bold: "700",
    },
    line_heights: LineHeights {
        tight: 1.2,
        normal: 1.5,
        relaxed: 1.75,
    },
};

pub static BORDER_RADIUS: BorderRadius = BorderRadius {
    sm: 4.0,
    md: 8.0,
    lg: 12.0,
    xl: 16.0,
    full: 9999.0,
};

pub static SHADOWS: Shadows = Shadows {
    sm: Shadow {
        shadow_color: Color::hex(0x000000),
        shadow_offset: ShadowOffset {
            width: 0.0,
            height: 1.0,
        },
        shadow_opacity: 0.05,
        shadow_radius: 2.0,
        elevation: 1,
    },
    md: Shadow {
        shadow_color: Color::hex(0x000000),
        shadow_offset: ShadowOffset {
            width: 0.0,
            height: 2.0,
        },
        shadow_opacity: 0.1,
        shadow_radius: 4.0,
        elevation: 3,
    },
    lg: Shadow {
        shadow_color: Color::hex(0x000000),
        shadow_offset: ShadowOffset {
            width: 0.0,
            height: 4.0,
        },
        shadow_opacity: 0.15,
        shadow_radius: 8.0,
        elevation: 6,
    },
};

pub static ANIMATION: Animation = Animation {
    duration: Durations {
        fast: 150,
        normal: 300,
        slow: 500,
    },
    easing: Easings {
        ease_in: CubicBezier(0.4, 0.0, 1.0, 1.0),
        ease_out: CubicBezier(0.0, 0.0, 0.2, 1.0),
        ease_in_out: CubicBezier(0.4, 0.0, 0.2, 1.0),
    },
};
