use thiserror::Error;
use tracing::warn;
use unitlog_protocol::{Color, ColorSlot, ThemeName};

use crate::theme::{Theme, get_theme};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{theme}: {slot} has invalid color {value}")]
    InvalidColor {
        theme: ThemeName,
        slot: String,
        value: serde_json::Value,
    },
    #[error("{theme}: missing color slot {slot}")]
    MissingSlot { theme: ThemeName, slot: ColorSlot },
    #[error("{theme}: unexpected color slot {slot}")]
    UnexpectedSlot { theme: ThemeName, slot: String },
    #[error("{theme}: colors did not serialize to an object")]
    NotAnObject { theme: ThemeName },
    #[error("serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Whether `value` is `#rrggbb` or `rgba(r, g, b, a)`.
pub fn is_valid_color(value: &str) -> bool {
    value.parse::<Color>().is_ok_and(Color::is_palette_form)
}

/// Check a theme's palette as it is seen by consumers: serialized.
///
/// The key set must be exactly the [`ColorSlot`] tags and every value must be a
/// string accepted by [`is_valid_color`].
pub fn validate_theme(theme: &Theme) -> Result<(), ValidationError> {
    let name = theme.name();
    let value = serde_json::to_value(theme.colors)?;
    let Some(colors) = value.as_object() else {
        return Err(ValidationError::NotAnObject { theme: name });
    };

    for slot in ColorSlot::ALL {
        if !colors.contains_key(slot.as_str()) {
            return Err(ValidationError::MissingSlot {
                theme: name,
                slot: *slot,
            });
        }
    }

    for (key, color) in colors {
        if key.parse::<ColorSlot>().is_err() {
            return Err(ValidationError::UnexpectedSlot {
                theme: name,
                slot: key.clone(),
            });
        }
        if !color.as_str().is_some_and(is_valid_color) {
            return Err(ValidationError::InvalidColor {
                theme: name,
                slot: key.clone(),
                value: color.clone(),
            });
        }
    }

    Ok(())
}

/// Validate every built-in theme, stopping at the first failure.
pub fn validate_all() -> Result<(), ValidationError> {
    for name in ThemeName::ALL {
        validate_theme(get_theme(*name)).inspect_err(|err| {
            warn!(theme = %name, %err, "theme failed validation");
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_palette_forms() {
        assert!(is_valid_color("#0F172A"));
        assert!(is_valid_color("#0f172a"));
        assert!(is_valid_color("rgba(0, 0, 0, 0.5)"));
        assert!(is_valid_color("rgba(255,255,255,1)"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!is_valid_color("#0F172A20"));
        assert!(!is_valid_color("#FFF"));
        assert!(!is_valid_color("rgb(0, 0, 0)"));
        assert!(!is_valid_color("black"));
        assert!(!is_valid_color("transparent"));
    }

    #[test]
    fn built_in_themes_validate() {
        assert!(validate_all().is_ok());
    }

    #[test]
    fn tinted_color_in_palette_is_rejected() {
        let mut colors = crate::theme::LIGHT_COLORS;
        colors.card = colors.card.with_alpha(0x20);
        let theme = crate::theme::LIGHT.with_colors(colors);
        match validate_theme(&theme) {
            Err(ValidationError::InvalidColor { slot, .. }) => assert_eq!(slot, "card"),
            other => panic!("expected invalid card color, got {other:?}"),
        }
    }
}
