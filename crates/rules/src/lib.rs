// ABOUTME: Core decluttering rules library for tidyfeed.
// ABOUTME: Provides age/metric parsing, marker matching, and the item classifier.

pub mod age;
pub mod classify;
pub mod context;
pub mod decision;
pub mod error;
pub mod markers;
pub mod metrics;
pub mod settings;
pub mod snapshot;

pub use age::is_older_than_months;
pub use classify::{classify, item_metric};
pub use context::{PageContext, RulePolicy};
pub use decision::{RuleKind, CANONICAL_ORDER};
pub use error::ConfigError;
pub use markers::{has_membership_marker, is_playlist_target};
pub use metrics::{extract_metric, MetricKind};
pub use settings::Settings;
pub use snapshot::ItemSnapshot;
