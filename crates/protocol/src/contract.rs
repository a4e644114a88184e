//! Closed enumerations shared with the persistence backend.
//!
//! Tags are the backend's literal enum values; a row carrying a value outside
//! these sets fails to deserialize rather than silently mapping elsewhere.

use crate::tag::tag_enum;

tag_enum! {
    /// Category of a logged unit activity.
    pub enum ActivityType("activity type") {
        Training => "training",
        Exercise => "exercise",
        Operation => "operation",
    }
}

tag_enum! {
    /// Who may see an activity.
    pub enum ActivityVisibility("activity visibility") {
        Private => "private",
        Unit => "unit",
        Public => "public",
    }
}

tag_enum! {
    /// Reaction a member can leave on an activity.
    pub enum ReactionType("reaction type") {
        Respect => "respect",
        Strong => "strong",
        Teamwork => "teamwork",
        Impressive => "impressive",
    }
}
