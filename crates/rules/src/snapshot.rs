// ABOUTME: Host-independent projection of one rendered feed item.
// ABOUTME: Carries everything the classifier reads, with no DOM types attached.

use serde::{Deserialize, Serialize};

/// Everything the classifier needs to know about one feed item.
/// Snapshots have no persisted identity; the engine rebuilds them from the
/// live tree on every pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    /// Whitespace-normalized text content of the whole item.
    pub text: String,
    /// Texts of metadata spans tagged with textual roles (newer layout).
    /// Empty when the layout exposes no labeled spans.
    pub metadata_lines: Vec<String>,
    /// Outbound link targets, resolved against the page URL where possible.
    pub link_targets: Vec<String>,
    /// A recognized membership badge element is present.
    pub has_membership_badge: bool,
    /// A recognized suggestion-nudge sub-element is present.
    pub has_nudge: bool,
    /// Rendered width of the widest watched-progress indicator, when one is
    /// present. None means no indicator was found.
    pub watched_progress: Option<f64>,
}

impl ItemSnapshot {
    /// Returns true if a watched-progress indicator was present with a
    /// rendered width greater than zero. A zero-width bar means the item was
    /// never started.
    pub fn is_watched(&self) -> bool {
        self.watched_progress.map(|w| w > 0.0).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watched_requires_positive_width() {
        let mut item = ItemSnapshot::default();
        assert!(!item.is_watched());

        item.watched_progress = Some(0.0);
        assert!(!item.is_watched());

        item.watched_progress = Some(37.5);
        assert!(item.is_watched());
    }
}
