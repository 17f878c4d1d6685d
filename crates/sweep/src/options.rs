// ABOUTME: Configuration options for the sweep engine including Options and SweeperBuilder.
// ABOUTME: SweeperBuilder provides a fluent API for constructing Sweeper instances.

use tidyfeed_rules::Settings;

use crate::layout::{builtin_profile, LayoutProfile};
use crate::manifest::Manifest;
use crate::sweep::Sweeper;

/// Configuration options for the sweeper.
#[derive(Debug, Clone)]
pub struct Options {
    pub settings: Settings,
    pub profile: LayoutProfile,
    pub manifest: Manifest,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            profile: builtin_profile(),
            manifest: Manifest::default(),
        }
    }
}

/// Builder for constructing Sweeper instances with custom configuration.
#[derive(Debug, Clone)]
pub struct SweeperBuilder {
    opts: Options,
}

impl SweeperBuilder {
    /// Create a new SweeperBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Replace the whole settings record.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.opts.settings = settings;
        self
    }

    /// Use a custom layout profile.
    pub fn profile(mut self, profile: LayoutProfile) -> Self {
        self.opts.profile = profile;
        self
    }

    /// Use a custom installation manifest.
    pub fn manifest(mut self, manifest: Manifest) -> Self {
        self.opts.manifest = manifest;
        self
    }

    /// Set the view-count floor. `None` disables the rule.
    pub fn min_views(mut self, min_views: Option<f64>) -> Self {
        self.opts.settings.min_views = min_views;
        self
    }

    /// Set the live-viewer floor. `None` disables the rule.
    pub fn min_live_viewers(mut self, min_live_viewers: Option<f64>) -> Self {
        self.opts.settings.min_live_viewers = min_live_viewers;
        self
    }

    /// Set the age ceiling in months. `None` disables the rule.
    pub fn max_age_months(mut self, max_age_months: Option<u32>) -> Self {
        self.opts.settings.max_age_months = max_age_months;
        self
    }

    /// Toggle hiding of already-watched items.
    pub fn hide_watched(mut self, hide: bool) -> Self {
        self.opts.settings.hide_watched = hide;
        self
    }

    /// Build the Sweeper with the configured options.
    pub fn build(self) -> Sweeper {
        Sweeper::new(self.opts)
    }
}

impl Default for SweeperBuilder {
    fn default() -> Self {
        Self::new()
    }
}
