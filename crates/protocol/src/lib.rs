mod tag;

pub mod color;
pub mod contract;
pub mod theme;

pub use color::{Color, ParseColorError};
pub use contract::{ActivityType, ActivityVisibility, ReactionType};
pub use tag::UnknownVariant;
pub use theme::{ColorSlot, ThemeName, ThemePreference};
