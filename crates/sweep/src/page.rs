// ABOUTME: Parsed feed page with item enumeration, snapshot projection, and the visibility mutator.
// ABOUTME: Implements Surface over a scraper document plus a collapse overlay set.

use std::collections::HashSet;

use ego_tree::NodeId;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use tidyfeed_rules::{ItemSnapshot, PageContext};

use crate::error::SweepError;
use crate::layout::LayoutProfile;
use crate::render::render_with_overlay;
use crate::selectors::get_or_compile;
use crate::surface::Surface;

/// Width declaration at the start of an inline style or after a separator.
/// Anchored so `min-width` and friends do not count.
static WIDTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:^|;)\s*width\s*:\s*([0-9]*\.?[0-9]+)").unwrap());

/// One parsed feed page. Holds the document, the detected context, the
/// layout profile in force, and the set of collapsed cells. The tree is
/// never mutated; collapses are an overlay applied when rendering.
#[derive(Debug)]
pub struct FeedPage {
    doc: Html,
    url: Url,
    context: PageContext,
    profile: LayoutProfile,
    collapsed: HashSet<NodeId>,
}

impl FeedPage {
    /// Parses a page and binds it to a layout profile. The profile is
    /// validated first so a bad selector surfaces here, not mid-pass.
    pub fn parse(html: &str, url: &str, profile: LayoutProfile) -> Result<Self, SweepError> {
        profile.validate()?;
        let parsed_url = Url::parse(url).map_err(SweepError::url)?;
        let context = PageContext::from_url(url);
        Ok(FeedPage {
            doc: Html::parse_document(html),
            url: parsed_url,
            context,
            profile,
            collapsed: HashSet::new(),
        })
    }

    /// The context the page URL was detected as.
    pub fn context(&self) -> PageContext {
        self.context
    }

    /// The page URL links are resolved against.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Enumerates feed items in document order. An item nested inside
    /// another matched item is folded into its ancestor rather than listed
    /// twice.
    pub fn items(&self) -> Vec<NodeId> {
        let selectors = compile_all(&self.profile.items);
        let mut matched: HashSet<NodeId> = HashSet::new();
        let mut out = Vec::new();
        for node in self.doc.tree.root().descendants() {
            let el = match ElementRef::wrap(node) {
                Some(el) => el,
                None => continue,
            };
            if !matches_any(&selectors, &el) {
                continue;
            }
            matched.insert(node.id());
            if node.ancestors().any(|a| matched.contains(&a.id())) {
                continue;
            }
            out.push(node.id());
        }
        out
    }

    /// Projects one item into its host-independent snapshot. Returns `None`
    /// when the handle does not resolve to an element.
    pub fn snapshot(&self, id: NodeId) -> Option<ItemSnapshot> {
        let node = self.doc.tree.get(id)?;
        let el = ElementRef::wrap(node)?;

        let text = normalize_whitespace(&el.text().collect::<Vec<_>>().join(" "));
        let metadata_lines = self.metadata_lines(&el);
        let link_targets = self.link_targets(&el);
        let has_membership_badge = self.any_match_within(&el, &self.profile.membership_badges);
        let has_nudge = self.nudge_present(&el);
        let watched_progress = self.watched_progress(&el);

        Some(ItemSnapshot {
            text,
            metadata_lines,
            link_targets,
            has_membership_badge,
            has_nudge,
            watched_progress,
        })
    }

    /// Collapses the item's grid cell (or the item itself when no cell
    /// ancestor matches). Returns true when this call newly collapsed it.
    pub fn collapse(&mut self, id: NodeId) -> bool {
        let target = self.collapse_target(id);
        self.collapsed.insert(target)
    }

    /// Whether the item's collapse target is already collapsed.
    pub fn is_collapsed(&self, id: NodeId) -> bool {
        self.collapsed.contains(&self.collapse_target(id))
    }

    /// Serializes the document with the collapse overlay applied.
    pub fn render(&self) -> String {
        render_with_overlay(&self.doc, &self.collapsed)
    }

    /// The nearest self-or-ancestor matching a grid-cell selector, falling
    /// back to the item itself. Collapsing the cell rather than the inner
    /// item is what lets the grid re-flow.
    fn collapse_target(&self, id: NodeId) -> NodeId {
        let node = match self.doc.tree.get(id) {
            Some(node) => node,
            None => return id,
        };
        let selectors = compile_all(&self.profile.cells);
        if selectors.is_empty() {
            return id;
        }
        let mut current = Some(node);
        while let Some(candidate) = current {
            if let Some(el) = ElementRef::wrap(candidate) {
                if matches_any(&selectors, &el) {
                    return candidate.id();
                }
            }
            current = candidate.parent();
        }
        id
    }

    /// Texts of the metadata spans under the item. Selector alternatives
    /// are tried in profile order; the first one yielding any non-empty
    /// line wins, matching how labeled spans shadow the raw blob.
    fn metadata_lines(&self, el: &ElementRef) -> Vec<String> {
        for css in &self.profile.metadata_spans {
            let selector = match get_or_compile(css) {
                Some(selector) => selector,
                None => continue,
            };
            let lines: Vec<String> = el
                .select(&selector)
                .map(|span| normalize_whitespace(&span.text().collect::<Vec<_>>().join(" ")))
                .filter(|line| !line.is_empty())
                .collect();
            if !lines.is_empty() {
                return lines;
            }
        }
        Vec::new()
    }

    /// Outbound link targets under the item, resolved against the page URL.
    /// Targets the page URL cannot resolve are kept raw for the classifier
    /// to judge.
    fn link_targets(&self, el: &ElementRef) -> Vec<String> {
        let mut seen: HashSet<NodeId> = HashSet::new();
        let mut targets = Vec::new();
        for css in &self.profile.links {
            let selector = match get_or_compile(css) {
                Some(selector) => selector,
                None => continue,
            };
            for link in el.select(&selector) {
                if !seen.insert(link.id()) {
                    continue;
                }
                let href = match link.attr("href") {
                    Some(href) => href.trim(),
                    None => continue,
                };
                if href.is_empty() {
                    continue;
                }
                match self.url.join(href) {
                    Ok(resolved) => targets.push(resolved.to_string()),
                    Err(_) => targets.push(href.to_string()),
                }
            }
        }
        targets
    }

    /// True when the item is itself a nudge block or contains one.
    fn nudge_present(&self, el: &ElementRef) -> bool {
        for css in &self.profile.nudges {
            let selector = match get_or_compile(css) {
                Some(selector) => selector,
                None => continue,
            };
            if selector.matches(el) || el.select(&selector).next().is_some() {
                return true;
            }
        }
        false
    }

    /// The largest watched-progress width found under the item, read from
    /// the indicator's inline style. `None` when no indicator is present;
    /// an indicator without a parsable width reads as zero (not started).
    fn watched_progress(&self, el: &ElementRef) -> Option<f64> {
        let mut progress: Option<f64> = None;
        for css in &self.profile.watched_markers {
            let selector = match get_or_compile(css) {
                Some(selector) => selector,
                None => continue,
            };
            for marker in el.select(&selector) {
                let width = marker
                    .attr("style")
                    .and_then(inline_width)
                    .unwrap_or(0.0);
                progress = Some(match progress {
                    Some(current) if current >= width => current,
                    _ => width,
                });
            }
        }
        progress
    }

    fn any_match_within(&self, el: &ElementRef, selectors: &[String]) -> bool {
        selectors.iter().any(|css| {
            get_or_compile(css)
                .map(|selector| el.select(&selector).next().is_some())
                .unwrap_or(false)
        })
    }
}

impl Surface for FeedPage {
    type Handle = NodeId;

    fn context(&self) -> PageContext {
        self.context
    }

    fn items(&self) -> Vec<NodeId> {
        FeedPage::items(self)
    }

    fn snapshot(&self, handle: NodeId) -> Option<ItemSnapshot> {
        FeedPage::snapshot(self, handle)
    }

    fn collapse(&mut self, handle: NodeId) -> bool {
        FeedPage::collapse(self, handle)
    }

    fn is_collapsed(&self, handle: NodeId) -> bool {
        FeedPage::is_collapsed(self, handle)
    }
}

fn compile_all(selectors: &[String]) -> Vec<Selector> {
    selectors
        .iter()
        .filter_map(|css| get_or_compile(css))
        .collect()
}

fn matches_any(selectors: &[Selector], el: &ElementRef) -> bool {
    selectors.iter().any(|selector| selector.matches(el))
}

/// Normalizes whitespace by collapsing runs into single spaces.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extracts the width value from an inline style declaration.
fn inline_width(style: &str) -> Option<f64> {
    let caps = WIDTH_RE.captures(style)?;
    caps.get(1)?.as_str().parse::<f64>().ok()
}
