// ABOUTME: The sweep orchestrator running one classification pass over a surface.
// ABOUTME: Attaches pages, gates on the manifest, and reports per-rule collapse counts.

use std::collections::HashMap;

use tidyfeed_rules::{classify, RuleKind};

use crate::error::SweepError;
use crate::options::{Options, SweeperBuilder};
use crate::page::FeedPage;
use crate::surface::Surface;

/// Counts from one sweep pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassSummary {
    /// Items enumerated on the surface.
    pub scanned: usize,
    /// Items newly collapsed this pass.
    pub collapsed: usize,
    /// Items that matched again but were collapsed already.
    pub already_collapsed: usize,
    /// Items no rule matched.
    pub kept: usize,
    /// Newly collapsed items broken down by the rule that fired.
    pub by_rule: HashMap<RuleKind, usize>,
}

/// The decluttering engine. Holds the settings, layout profile, and
/// manifest; each call to `sweep` runs one linear pass over a surface.
#[derive(Debug, Clone)]
pub struct Sweeper {
    opts: Options,
}

impl Sweeper {
    /// Create a Sweeper from explicit options.
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    /// Create a SweeperBuilder for fluent configuration.
    pub fn builder() -> SweeperBuilder {
        SweeperBuilder::new()
    }

    /// The options the sweeper was built with.
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Whether the manifest covers this URL.
    pub fn applies_to(&self, url: &str) -> bool {
        self.opts.manifest.matches_url(url)
    }

    /// Parses a page against the sweeper's layout profile.
    pub fn attach(&self, html: &str, url: &str) -> Result<FeedPage, SweepError> {
        FeedPage::parse(html, url, self.opts.profile.clone())
    }

    /// Runs one full classification pass: every item currently on the
    /// surface is snapshotted and classified, and matches are collapsed.
    /// Items whose cell is collapsed already are counted, not re-collapsed.
    pub fn sweep<S: Surface>(&self, surface: &mut S) -> PassSummary {
        let context = surface.context();
        let mut summary = PassSummary::default();
        for handle in surface.items() {
            summary.scanned += 1;
            let snapshot = match surface.snapshot(handle) {
                Some(snapshot) => snapshot,
                None => continue,
            };
            match classify(&snapshot, &self.opts.settings, context) {
                Some(kind) => {
                    if surface.collapse(handle) {
                        summary.collapsed += 1;
                        *summary.by_rule.entry(kind).or_insert(0) += 1;
                        tracing::debug!("collapsed item: {}", kind);
                    } else {
                        summary.already_collapsed += 1;
                    }
                }
                None => summary.kept += 1,
            }
        }
        tracing::debug!(
            "sweep pass: scanned {} collapsed {} kept {}",
            summary.scanned,
            summary.collapsed,
            summary.kept
        );
        summary
    }
}

impl Default for Sweeper {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FEED_URL: &str = "https://www.youtube.com/";

    const FEED_HTML: &str = r#"<html><body>
<ytd-rich-item-renderer id="fresh">
  <yt-lockup-view-model>
    <a href="/watch?v=aaa">Video A</a>
    <yt-content-metadata-view-model>
      <span role="text">500K views</span>
      <span role="text">3 days ago</span>
    </yt-content-metadata-view-model>
  </yt-lockup-view-model>
</ytd-rich-item-renderer>
<ytd-rich-item-renderer id="unpopular">
  <yt-lockup-view-model>
    <a href="/watch?v=bbb">Video B</a>
    <yt-content-metadata-view-model>
      <span role="text">812 views</span>
      <span role="text">2 days ago</span>
    </yt-content-metadata-view-model>
  </yt-lockup-view-model>
</ytd-rich-item-renderer>
<ytd-rich-item-renderer id="old">
  <yt-lockup-view-model>
    <a href="/watch?v=ccc">Video C</a>
    <yt-content-metadata-view-model>
      <span role="text">900K views</span>
      <span role="text">7 months ago</span>
    </yt-content-metadata-view-model>
  </yt-lockup-view-model>
</ytd-rich-item-renderer>
</body></html>"#;

    #[test]
    fn test_sweep_collapses_matching_items() {
        let sweeper = Sweeper::default();
        let mut page = sweeper.attach(FEED_HTML, FEED_URL).unwrap();

        let summary = sweeper.sweep(&mut page);
        assert_eq!(summary.scanned, 3);
        assert_eq!(summary.collapsed, 2);
        assert_eq!(summary.kept, 1);
        assert_eq!(summary.by_rule.get(&RuleKind::LowViews), Some(&1));
        assert_eq!(summary.by_rule.get(&RuleKind::Stale), Some(&1));

        let out = page.render();
        assert!(out.contains("<ytd-rich-item-renderer id=\"fresh\">"));
        assert!(out.contains("id=\"unpopular\" style=\"display:none"));
        assert!(out.contains("id=\"old\" style=\"display:none"));
    }

    #[test]
    fn test_second_sweep_reports_already_collapsed() {
        let sweeper = Sweeper::default();
        let mut page = sweeper.attach(FEED_HTML, FEED_URL).unwrap();

        sweeper.sweep(&mut page);
        let first = page.render();

        let second = sweeper.sweep(&mut page);
        assert_eq!(second.collapsed, 0);
        assert_eq!(second.already_collapsed, 2);
        assert_eq!(second.kept, 1);
        assert!(second.by_rule.is_empty());

        assert_eq!(page.render(), first);
    }

    #[test]
    fn test_builder_tunes_thresholds() {
        let sweeper = Sweeper::builder()
            .min_views(Some(1_000_000.0))
            .max_age_months(None)
            .build();
        assert_eq!(sweeper.options().settings.min_views, Some(1_000_000.0));
        assert_eq!(sweeper.options().settings.max_age_months, None);
        let mut page = sweeper.attach(FEED_HTML, FEED_URL).unwrap();

        let summary = sweeper.sweep(&mut page);
        // Every view count is under a million; the age rule is off.
        assert_eq!(summary.collapsed, 3);
        assert_eq!(summary.by_rule.get(&RuleKind::LowViews), Some(&3));
    }

    #[test]
    fn test_applies_to_follows_the_manifest() {
        let sweeper = Sweeper::default();
        assert!(sweeper.applies_to("https://www.youtube.com/feed/subscriptions"));
        assert!(!sweeper.applies_to("https://example.com/"));
    }
}
