//! Talent name to Discord user association.

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Links a talent's display name in the schedule to a Discord user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserMapping {
    pub talent_name: String,
    pub user_id: u64,
}

impl UserMapping {
    /// Converts an entity model to a user mapping at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(UserMapping)` - The converted mapping
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored user id is not a valid snowflake
    pub fn from_entity(entity: entity::user_mapping::Model) -> Result<Self, AppError> {
        Ok(Self {
            talent_name: entity.talent_name,
            user_id: parse_u64_from_string(entity.user_id)?,
        })
    }
}
