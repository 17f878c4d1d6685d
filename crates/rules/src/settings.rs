// ABOUTME: The immutable Settings record driving the classifier.
// ABOUTME: Rule toggles, numeric thresholds, per-context policy, and JSON loading.

use serde::{Deserialize, Serialize};

use crate::context::{PageContext, RulePolicy};
use crate::decision::RuleKind;
use crate::error::ConfigError;

/// Filtering configuration, constructed once and passed by reference.
/// A `None` numeric threshold disables the corresponding rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Hide membership-gated items.
    pub hide_members_only: bool,
    /// Hide uploads with fewer views than this.
    pub min_views: Option<f64>,
    /// Hide live streams with fewer concurrent viewers than this.
    pub min_live_viewers: Option<f64>,
    /// Hide uploads at least this many months old.
    pub max_age_months: Option<u32>,
    /// Hide items with watched progress.
    pub hide_watched: bool,
    /// Hide playlist items.
    pub hide_playlists: bool,
    /// Hide suggestion-nudge blocks.
    pub hide_nudges: bool,
    /// Which rules run on which page context.
    pub policy: RulePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hide_members_only: true,
            min_views: Some(100_000.0),
            min_live_viewers: Some(100_000.0),
            max_age_months: Some(1),
            hide_watched: true,
            hide_playlists: true,
            hide_nudges: true,
            policy: RulePolicy::default(),
        }
    }
}

impl Settings {
    /// Loads settings from JSON. Missing fields take their defaults; present
    /// fields are validated.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json).map_err(ConfigError::parse)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks numeric thresholds for usable values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            ("min_views", self.min_views),
            ("min_live_viewers", self.min_live_viewers),
        ];
        for (name, value) in thresholds {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(ConfigError::invalid(format!(
                        "{} must be finite and non-negative, got {}",
                        name, v
                    )));
                }
            }
        }

        if self.max_age_months == Some(0) {
            return Err(ConfigError::invalid(
                "max_age_months must be at least 1 when set; use null to disable",
            ));
        }

        Ok(())
    }

    /// Returns true if the rule's own toggle is on.
    pub fn rule_enabled(&self, kind: RuleKind) -> bool {
        match kind {
            RuleKind::PlaylistLink => self.hide_playlists,
            RuleKind::NudgeBlock => self.hide_nudges,
            RuleKind::MembersOnly => self.hide_members_only,
            RuleKind::LowViews => self.min_views.is_some(),
            RuleKind::LowLiveViewers => self.min_live_viewers.is_some(),
            RuleKind::Stale => self.max_age_months.is_some(),
            RuleKind::Watched => self.hide_watched,
        }
    }

    /// Returns true if the rule should be evaluated at all in the given
    /// context: its toggle is on and the context's policy includes it.
    pub fn rule_active(&self, context: PageContext, kind: RuleKind) -> bool {
        self.rule_enabled(kind) && self.policy.allows(context, kind)
    }
}
