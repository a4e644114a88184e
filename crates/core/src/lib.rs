//! Design tokens and activity-type display metadata for unitlog clients.
//!
//! Everything here except [`settings`] is immutable static data behind pure
//! lookup functions, safe to call from any thread without coordination.

pub mod activity;
pub mod settings;
pub mod theme;
pub mod validate;

pub use activity::{
    ACTIVITY_TYPES, ActivityTypeConfig, ActivityTypeExt, get_activity_type_background_color,
    get_activity_type_color, get_activity_type_gradient, get_activity_type_icon,
    get_activity_type_translation_key, get_all_activity_types,
};
pub use settings::{Settings, SettingsError, SettingsStore};
pub use theme::{
    PlaceholderAppearance, SystemAppearance, Theme, ThemeColors, get_system_theme, get_theme,
    resolve_preference,
};
pub use validate::{ValidationError, is_valid_color, validate_all, validate_theme};
