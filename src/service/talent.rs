//! Talent directory lookups against the guild.

use sea_orm::DatabaseConnection;

use crate::{
    data::user_mapping::UserMappingRepository,
    error::AppError,
    model::user_mapping::UserMapping,
    platform::ChatPlatform,
    util::text::same_name,
};

/// A schedule name resolved to a current guild member.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTalent {
    /// Name as stored in the talent directory.
    pub talent_name: String,
    /// Mention tag, e.g. `<@1234>`.
    pub mention: String,
}

pub struct TalentDirectory<'a> {
    db: &'a DatabaseConnection,
    platform: &'a dyn ChatPlatform,
}

impl<'a> TalentDirectory<'a> {
    pub fn new(db: &'a DatabaseConnection, platform: &'a dyn ChatPlatform) -> Self {
        Self { db, platform }
    }

    /// Resolves talent names to guild members.
    ///
    /// Names without a mapping, and mappings whose user has left the guild, are skipped.
    ///
    /// # Arguments
    /// - `talent_names` - Names from `resolve_talent_set`, in role order
    ///
    /// # Returns
    /// - `Ok(Vec<ResolvedTalent>)` - Resolved talent in the order of `talent_names`
    /// - `Err(AppError)` - Database error loading the mappings
    pub async fn resolve(&self, talent_names: &[String]) -> Result<Vec<ResolvedTalent>, AppError> {
        let mappings = UserMappingRepository::new(self.db)
            .find_by_talent_names_in(talent_names)
            .await?;

        let mut resolved = Vec::with_capacity(mappings.len());
        for name in talent_names {
            let Some(mapping) = mappings
                .iter()
                .find(|mapping| same_name(&mapping.talent_name, name))
            else {
                continue;
            };

            match self.platform.member_mention(mapping.user_id).await {
                Some(mention) => resolved.push(ResolvedTalent {
                    talent_name: mapping.talent_name.clone(),
                    mention,
                }),
                None => tracing::debug!(
                    "Talent {} is mapped to {} who is not a guild member",
                    mapping.talent_name,
                    mapping.user_id
                ),
            }
        }

        Ok(resolved)
    }

    /// Links a talent name to a Discord user, replacing any previous link for the name.
    pub async fn link(&self, talent_name: &str, user_id: u64) -> Result<UserMapping, AppError> {
        let mapping = UserMappingRepository::new(self.db)
            .upsert(talent_name.trim(), user_id)
            .await?;

        tracing::info!("Mapped talent {} to user {}", mapping.talent_name, user_id);

        Ok(mapping)
    }
}

/// Mentions joined for the content line of a schedule message, empty when nobody resolved.
pub fn mention_string(talent: &[ResolvedTalent]) -> String {
    talent
        .iter()
        .map(|talent| talent.mention.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
