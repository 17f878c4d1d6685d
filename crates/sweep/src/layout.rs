// ABOUTME: Layout profile data model and builtin profile loader.
// ABOUTME: Externalizes the host page's selector contract into serde-loadable JSON.

//! Layout profiles for host-page structure.
//!
//! The markup of the host feed is an external, versioned dependency the
//! engine does not control. Every selector the engine relies on lives in a
//! `LayoutProfile` rather than in code, so a markup change is a data update.
//! A builtin profile for the current video-site layout ships embedded; callers
//! may load their own from JSON.

use serde::{Deserialize, Serialize};

use crate::error::SweepError;
use crate::selectors::get_or_compile;

/// Embedded JSON for the current video-site feed layout.
const BUILTIN_PROFILE_JSON: &str = include_str!("../data/youtube.json");

/// Selector sets describing one host feed layout.
///
/// Each field holds alternatives tried in order; an element matching any
/// entry counts. Empty lists disable the corresponding detection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LayoutProfile {
    /// Human-readable profile name, reported in logs.
    pub name: String,
    /// Selectors matching one feed item.
    #[serde(default)]
    pub items: Vec<String>,
    /// Selectors matching the grid-cell ancestors that own layout flow.
    #[serde(default)]
    pub cells: Vec<String>,
    /// Selectors for metadata spans with textual roles (view counts, ages).
    #[serde(default)]
    pub metadata_spans: Vec<String>,
    /// Selectors for outbound link elements within an item.
    #[serde(default)]
    pub links: Vec<String>,
    /// Selectors for membership badge elements.
    #[serde(default)]
    pub membership_badges: Vec<String>,
    /// Selectors matching nudge blocks (suggestion inserts posing as items).
    #[serde(default)]
    pub nudges: Vec<String>,
    /// Selectors for watched-progress indicator segments.
    #[serde(default)]
    pub watched_markers: Vec<String>,
}

impl LayoutProfile {
    /// Loads a profile from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, SweepError> {
        let profile: LayoutProfile = serde_json::from_str(json).map_err(SweepError::profile)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Checks that the profile can drive a sweep: at least one item selector,
    /// and every selector compiles. Reports the first selector that does not.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.items.is_empty() {
            return Err(SweepError::profile("no item selectors"));
        }
        for css in self.all_selectors() {
            if get_or_compile(css).is_none() {
                return Err(SweepError::selector(css));
            }
        }
        Ok(())
    }

    /// Iterates every selector string in the profile, in field order.
    pub fn all_selectors(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .chain(self.cells.iter())
            .chain(self.metadata_spans.iter())
            .chain(self.links.iter())
            .chain(self.membership_badges.iter())
            .chain(self.nudges.iter())
            .chain(self.watched_markers.iter())
            .map(String::as_str)
    }
}

/// Loads the builtin profile for the current video-site layout.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed or fails validation.
pub fn builtin_profile() -> LayoutProfile {
    LayoutProfile::from_json(BUILTIN_PROFILE_JSON).expect("failed to parse builtin layout profile")
}
