// ABOUTME: Page-context detection and the declarative per-context rule policy.
// ABOUTME: Maps each page type to the subset of rules evaluated there.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::decision::{RuleKind, CANONICAL_ORDER};

/// The kind of page the engine is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageContext {
    /// The home feed and any generic listing (search, subscriptions, ...).
    #[default]
    Feed,
    /// A channel's dedicated uploads listing.
    ChannelListing,
}

impl PageContext {
    /// Detects the context from a page URL. Channel listings are the
    /// `/videos` tab under `/@name`, `/channel/<id>`, `/c/<name>`, or
    /// `/user/<name>`; everything else, including unparsable URLs, is the
    /// generic feed.
    pub fn from_url(url: &str) -> Self {
        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(_) => return PageContext::Feed,
        };

        let segments: Vec<&str> = match parsed.path_segments() {
            Some(segments) => segments.filter(|s| !s.is_empty()).collect(),
            None => return PageContext::Feed,
        };

        let is_channel_root = match segments.first() {
            Some(first) if first.starts_with('@') => segments.len() == 2,
            Some(&"channel") | Some(&"c") | Some(&"user") => segments.len() == 3,
            _ => false,
        };

        if is_channel_root && segments.last() == Some(&"videos") {
            PageContext::ChannelListing
        } else {
            PageContext::Feed
        }
    }
}

/// Declarative map from page context to the rule subset evaluated there.
/// The subset never reorders evaluation: precedence stays canonical. A
/// context missing from the map gets the empty subset, hiding nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulePolicy {
    #[serde(default)]
    pub contexts: HashMap<PageContext, Vec<RuleKind>>,
}

impl Default for RulePolicy {
    fn default() -> Self {
        let mut contexts = HashMap::new();
        contexts.insert(PageContext::Feed, CANONICAL_ORDER.to_vec());
        contexts.insert(PageContext::ChannelListing, vec![RuleKind::MembersOnly]);
        Self { contexts }
    }
}

impl RulePolicy {
    /// Returns true if the rule is part of the context's subset.
    pub fn allows(&self, context: PageContext, kind: RuleKind) -> bool {
        self.contexts
            .get(&context)
            .map(|rules| rules.contains(&kind))
            .unwrap_or(false)
    }

    /// Returns the context's rule subset in canonical evaluation order,
    /// regardless of how the configuration listed it.
    pub fn rules_for(&self, context: PageContext) -> Vec<RuleKind> {
        CANONICAL_ORDER
            .iter()
            .copied()
            .filter(|kind| self.allows(context, *kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_channel_listing_urls() {
        for url in [
            "https://www.youtube.com/@somecreator/videos",
            "https://www.youtube.com/channel/UC123abc/videos",
            "https://www.youtube.com/c/SomeCreator/videos",
            "https://www.youtube.com/user/somecreator/videos",
        ] {
            assert_eq!(PageContext::from_url(url), PageContext::ChannelListing);
        }
    }

    #[test]
    fn test_feed_urls() {
        for url in [
            "https://www.youtube.com/",
            "https://www.youtube.com/feed/subscriptions",
            "https://www.youtube.com/results?search_query=rust",
            "https://www.youtube.com/@somecreator",
            "https://www.youtube.com/@somecreator/playlists",
            "not a url",
        ] {
            assert_eq!(PageContext::from_url(url), PageContext::Feed);
        }
    }

    #[test]
    fn test_default_policy_subsets() {
        let policy = RulePolicy::default();

        assert_eq!(policy.rules_for(PageContext::Feed), CANONICAL_ORDER.to_vec());
        assert_eq!(
            policy.rules_for(PageContext::ChannelListing),
            vec![RuleKind::MembersOnly]
        );
        assert!(!policy.allows(PageContext::ChannelListing, RuleKind::LowViews));
    }

    #[test]
    fn test_missing_context_gets_empty_subset() {
        let policy = RulePolicy {
            contexts: HashMap::new(),
        };
        assert!(policy.rules_for(PageContext::Feed).is_empty());
        assert!(!policy.allows(PageContext::Feed, RuleKind::Watched));
    }

    #[test]
    fn test_shuffled_configuration_keeps_canonical_order() {
        let mut contexts = HashMap::new();
        contexts.insert(
            PageContext::Feed,
            vec![RuleKind::Watched, RuleKind::PlaylistLink, RuleKind::LowViews],
        );
        let policy = RulePolicy { contexts };

        assert_eq!(
            policy.rules_for(PageContext::Feed),
            vec![RuleKind::PlaylistLink, RuleKind::LowViews, RuleKind::Watched]
        );
    }

    #[test]
    fn test_policy_serde_roundtrip() {
        let policy = RulePolicy::default();
        let json = serde_json::to_string(&policy).expect("serialize");
        let parsed: RulePolicy = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, policy);
    }
}
