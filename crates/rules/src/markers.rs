// ABOUTME: Text and link markers consumed by the classifier.
// ABOUTME: Detects membership-gating phrases and playlist link targets.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use url::Url;

// Phrases the host renders on membership-gated cards
const MEMBERSHIP_MARKERS: &[&str] = &["members only", "members first", "exclusive access"];

static MEMBERSHIP_AC: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(MEMBERSHIP_MARKERS)
        .unwrap()
});

/// Returns true if the text carries a membership-gating phrase.
pub fn has_membership_marker(text: &str) -> bool {
    MEMBERSHIP_AC.is_match(text)
}

/// Returns true if a link target encodes a playlist identifier, either as a
/// non-empty `list` query parameter or as the dedicated playlist path.
/// Relative targets are resolved against a placeholder host; unparsable
/// targets return false.
pub fn is_playlist_target(target: &str) -> bool {
    let url = match parse_maybe_relative(target) {
        Some(url) => url,
        None => return false,
    };

    if url.path() == "/playlist" {
        return true;
    }

    url.query_pairs().any(|(key, value)| key == "list" && !value.is_empty())
}

fn parse_maybe_relative(target: &str) -> Option<Url> {
    match Url::parse(target) {
        Ok(url) => Some(url),
        Err(_) => Url::parse("https://relative.invalid")
            .ok()?
            .join(target)
            .ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_phrases_match_case_insensitively() {
        assert!(has_membership_marker("Members only"));
        assert!(has_membership_marker("MEMBERS ONLY early stream"));
        assert!(has_membership_marker("Get exclusive access to perks"));
        assert!(has_membership_marker("members first premiere"));
    }

    #[test]
    fn test_plain_text_has_no_marker() {
        assert!(!has_membership_marker("New video for everyone"));
        assert!(!has_membership_marker(""));
        assert!(!has_membership_marker("remember the members of the band"));
    }

    #[test]
    fn test_playlist_query_parameter() {
        assert!(is_playlist_target(
            "https://www.youtube.com/watch?v=abc123&list=PLxyz"
        ));
        assert!(is_playlist_target("/watch?v=abc123&list=PLxyz"));
    }

    #[test]
    fn test_playlist_path() {
        assert!(is_playlist_target("/playlist?list=PLxyz"));
        assert!(is_playlist_target("https://www.youtube.com/playlist"));
    }

    #[test]
    fn test_plain_watch_link_is_not_playlist() {
        assert!(!is_playlist_target("/watch?v=abc123"));
        assert!(!is_playlist_target("https://www.youtube.com/@somechannel"));
    }

    #[test]
    fn test_empty_list_parameter_is_not_playlist() {
        assert!(!is_playlist_target("/watch?v=abc123&list="));
    }

    #[test]
    fn test_garbage_target_fails_open() {
        assert!(!is_playlist_target(""));
        assert!(!is_playlist_target("not a url at all \u{0000}"));
    }
}
