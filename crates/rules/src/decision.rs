// ABOUTME: The hide-decision vocabulary shared by the classifier and the sweep engine.
// ABOUTME: Defines RuleKind, its fixed evaluation order, and display names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A filtering rule, doubling as the reason an item was hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Item links out to a playlist.
    PlaylistLink,
    /// Item is a suggestion-nudge block, not real content.
    NudgeBlock,
    /// Item is gated to channel members.
    MembersOnly,
    /// View count is below the configured minimum.
    LowViews,
    /// Live viewer count is below the configured minimum.
    LowLiveViewers,
    /// Upload is older than the configured month threshold.
    Stale,
    /// Item carries watched progress.
    Watched,
}

/// Rule evaluation order. First match wins; the per-context policy selects
/// a subset but never reorders.
pub const CANONICAL_ORDER: [RuleKind; 7] = [
    RuleKind::PlaylistLink,
    RuleKind::NudgeBlock,
    RuleKind::MembersOnly,
    RuleKind::LowViews,
    RuleKind::LowLiveViewers,
    RuleKind::Stale,
    RuleKind::Watched,
];

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RuleKind::PlaylistLink => "playlist_link",
            RuleKind::NudgeBlock => "nudge_block",
            RuleKind::MembersOnly => "members_only",
            RuleKind::LowViews => "low_views",
            RuleKind::LowLiveViewers => "low_live_viewers",
            RuleKind::Stale => "stale",
            RuleKind::Watched => "watched",
        };
        write!(f, "{}", s)
    }
}
