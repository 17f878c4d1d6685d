// ABOUTME: Relative-age label parsing for feed item timestamps.
// ABOUTME: Judges "<n> <unit> ago" text against a month threshold using fixed ratios.

use once_cell::sync::Lazy;
use regex::Regex;

static AGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s+(second|minute|hour|day|week|month|year)s?\s+ago").unwrap()
});

/// Judges whether a relative-age label marks an item at least `months` old.
/// Looks for the first "<n> <unit> ago" phrase; unit is one of
/// second/minute/hour/day/week/month/year, singular or plural.
/// Months compare the raw integer; years are always old enough; the other
/// units convert with fixed ratios (week/4, day/30, hour/720, minute/43200,
/// second/2592000). No match returns false, so an unreadable label never
/// hides an item.
pub fn is_older_than_months(text: &str, months: u32) -> bool {
    let caps = match AGE_RE.captures(text) {
        Some(caps) => caps,
        None => return false,
    };

    let value: f64 = match caps[1].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    let unit = caps[2].to_lowercase();
    let threshold = f64::from(months);

    match unit.as_str() {
        "month" => value >= threshold,
        "year" => true,
        "week" => value / 4.0 >= threshold,
        "day" => value / 30.0 >= threshold,
        "hour" => value / 720.0 >= threshold,
        "minute" => value / 43_200.0 >= threshold,
        "second" => value / 2_592_000.0 >= threshold,
        _ => false,
    }
}
