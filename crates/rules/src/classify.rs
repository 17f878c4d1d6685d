// ABOUTME: The ordered first-match-wins item classifier.
// ABOUTME: Applies the context's active rule subset to one snapshot per pass.

use crate::age::is_older_than_months;
use crate::context::PageContext;
use crate::decision::{RuleKind, CANONICAL_ORDER};
use crate::markers::{has_membership_marker, is_playlist_target};
use crate::metrics::{extract_metric, MetricKind};
use crate::settings::Settings;
use crate::snapshot::ItemSnapshot;

/// Classifies one feed item. Returns the first rule that matched in
/// canonical order, or None to keep the item. A rule whose toggle is off or
/// that sits outside the context's policy subset is skipped, never
/// evaluated.
pub fn classify(
    item: &ItemSnapshot,
    settings: &Settings,
    context: PageContext,
) -> Option<RuleKind> {
    for kind in CANONICAL_ORDER {
        if !settings.rule_active(context, kind) {
            continue;
        }
        if rule_matches(kind, item, settings) {
            return Some(kind);
        }
    }
    None
}

fn rule_matches(kind: RuleKind, item: &ItemSnapshot, settings: &Settings) -> bool {
    match kind {
        RuleKind::PlaylistLink => item
            .link_targets
            .iter()
            .any(|target| is_playlist_target(target)),
        RuleKind::NudgeBlock => item.has_nudge,
        RuleKind::MembersOnly => {
            item.has_membership_badge || has_membership_marker(&item.text)
        }
        RuleKind::LowViews => below_threshold(item, MetricKind::Views, settings.min_views),
        RuleKind::LowLiveViewers => {
            below_threshold(item, MetricKind::Watching, settings.min_live_viewers)
        }
        RuleKind::Stale => settings
            .max_age_months
            .map(|months| is_older_than_months(&item.text, months))
            .unwrap_or(false),
        RuleKind::Watched => item.is_watched(),
    }
}

/// Extracts a displayed count from the snapshot. When the layout captured
/// labeled metadata spans, only those are searched; the raw text blob is
/// consulted only when no spans were captured at all. This keeps unrelated
/// numbers elsewhere in the card (titles, descriptions) from posing as a
/// count.
pub fn item_metric(item: &ItemSnapshot, kind: MetricKind) -> Option<f64> {
    if item.metadata_lines.is_empty() {
        return extract_metric(&item.text, kind);
    }
    item.metadata_lines
        .iter()
        .find_map(|line| extract_metric(line, kind))
}

fn below_threshold(item: &ItemSnapshot, kind: MetricKind, minimum: Option<f64>) -> bool {
    let minimum = match minimum {
        Some(minimum) => minimum,
        None => return false,
    };
    match item_metric(item, kind) {
        Some(value) => value < minimum,
        None => false,
    }
}
