//! Reactions recognised on posted schedule messages.

use serenity::all::ReactionType;

/// Regional indicator Y.
pub const CONFIRM_EMOJI: &str = "\u{1F1FE}";
/// Regional indicator N.
pub const DECLINE_EMOJI: &str = "\u{1F1F3}";
/// Squared FREE.
pub const FREE_EMOJI: &str = "\u{1F193}";

/// What a reaction on a schedule message means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionKind {
    /// Talent confirms they will attend.
    Confirm,
    /// Talent cannot attend.
    Decline,
    /// Reacting user is available for the slot. Recognised and logged, nothing is recorded.
    Free,
}

impl ReactionKind {
    pub fn from_emoji(emoji: &str) -> Option<Self> {
        match emoji {
            CONFIRM_EMOJI => Some(Self::Confirm),
            DECLINE_EMOJI => Some(Self::Decline),
            FREE_EMOJI => Some(Self::Free),
            _ => None,
        }
    }

    /// Maps a Discord reaction; custom guild emoji are never recognised.
    pub fn from_reaction(reaction: &ReactionType) -> Option<Self> {
        match reaction {
            ReactionType::Unicode(emoji) => Self::from_emoji(emoji),
            _ => None,
        }
    }
}
