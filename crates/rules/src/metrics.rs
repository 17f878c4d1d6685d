// ABOUTME: Abbreviated count extraction for view and live-viewer metrics.
// ABOUTME: Parses "12K views" / "3.4M watching" style text into a scaled magnitude.

use once_cell::sync::Lazy;
use regex::Regex;

static VIEWS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([\d,.]+)\s*(K|M)?\s*views").unwrap());
static WATCHING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([\d,.]+)\s*(K|M)?\s*watching").unwrap());

/// Which displayed count to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Regular upload view count ("123K views").
    Views,
    /// Live stream concurrent viewers ("1.2K watching").
    Watching,
}

impl MetricKind {
    fn regex(self) -> &'static Regex {
        match self {
            MetricKind::Views => &VIEWS_RE,
            MetricKind::Watching => &WATCHING_RE,
        }
    }
}

/// Extracts a displayed count from free text.
/// Matches a numeric token, an optional K/M magnitude suffix, and the metric
/// keyword, case-insensitively. Thousands separators are stripped before
/// conversion; K scales by 1,000 and M by 1,000,000. Returns None when the
/// keyword is absent or the numeric token does not convert, which is distinct
/// from a present count of zero.
pub fn extract_metric(text: &str, kind: MetricKind) -> Option<f64> {
    let caps = kind.regex().captures(text)?;

    let token = caps[1].replace(',', "");
    let value: f64 = token.parse().ok()?;

    let scale = match caps.get(2).map(|m| m.as_str()) {
        Some(s) if s.eq_ignore_ascii_case("k") => 1_000.0,
        Some(s) if s.eq_ignore_ascii_case("m") => 1_000_000.0,
        _ => 1.0,
    };

    Some(value * scale)
}
