// ABOUTME: Installation manifest declaring where and when the engine runs.
// ABOUTME: Holds URL match patterns, the run stage, and requested permission grants.

use serde::{Deserialize, Serialize};
use url::Url;

/// Stage of page load the engine should start at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunStage {
    /// Before the document begins rendering.
    DocumentStart,
    /// After the document has been parsed.
    DocumentEnd,
    /// After the initial page structure is ready.
    #[default]
    DocumentIdle,
}

/// Declarative installation metadata: which pages the engine applies to,
/// when it starts, and what permissions it requests (none).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Script name shown to the user.
    pub name: String,
    /// URL patterns the engine applies to, with `*` wildcards.
    #[serde(default)]
    pub match_patterns: Vec<String>,
    /// Load stage the engine starts at.
    #[serde(default)]
    pub run_at: RunStage,
    /// Requested permission grants. Empty: the engine asks for nothing.
    #[serde(default)]
    pub grants: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Manifest {
            name: "tidyfeed".to_string(),
            match_patterns: vec!["https://www.youtube.com/*".to_string()],
            run_at: RunStage::DocumentIdle,
            grants: Vec::new(),
        }
    }
}

impl Manifest {
    /// Whether any match pattern covers the URL. The URL is normalized
    /// first when it parses, so `https://host` and `https://host/` agree.
    pub fn matches_url(&self, url: &str) -> bool {
        let normalized = match Url::parse(url) {
            Ok(parsed) => parsed.to_string(),
            Err(_) => url.to_string(),
        };
        self.match_patterns
            .iter()
            .any(|pattern| glob_match(pattern, &normalized))
    }
}

/// Anchored glob match: `*` spans any run of characters, everything else is
/// literal. A pattern without `*` must match exactly.
fn glob_match(pattern: &str, url: &str) -> bool {
    let segments: Vec<&str> = pattern.split('*').collect();
    if segments.len() == 1 {
        return pattern == url;
    }
    let mut pos = 0;
    for (i, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            continue;
        }
        if i == 0 {
            if !url.starts_with(segment) {
                return false;
            }
            pos = segment.len();
        } else if i == segments.len() - 1 {
            return url[pos..].ends_with(segment);
        } else {
            match url[pos..].find(segment) {
                Some(found) => pos += found + segment.len(),
                None => return false,
            }
        }
    }
    true
}
