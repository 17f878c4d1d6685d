// ABOUTME: Main library entry point for the tidyfeed sweep engine.
// ABOUTME: Re-exports the public API: Sweeper, SweeperBuilder, FeedPage, ChangeWatcher, Manifest.

//! tidyfeed-sweep - the DOM engine that declutters a video-feed page.
//!
//! This crate parses a feed page, classifies every item against the rules in
//! `tidyfeed-rules`, and collapses the matches so the grid re-flows. A
//! `ChangeWatcher` coalesces mutation bursts into single re-classification
//! passes as the page grows.
//!
//! # Example
//!
//! ```no_run
//! use tidyfeed_rules::Settings;
//! use tidyfeed_sweep::{declutter_html, SweepError};
//!
//! fn main() -> Result<(), SweepError> {
//!     let html = "<html><body>feed markup</body></html>";
//!     let cleaned = declutter_html(html, "https://www.youtube.com/", &Settings::default())?;
//!     println!("{}", cleaned);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod layout;
pub mod manifest;
pub mod options;
pub mod page;
pub mod render;
pub mod selectors;
pub mod surface;
pub mod sweep;
pub mod watch;

pub use crate::error::SweepError;
pub use crate::layout::{builtin_profile, LayoutProfile};
pub use crate::manifest::{Manifest, RunStage};
pub use crate::options::{Options, SweeperBuilder};
pub use crate::page::FeedPage;
pub use crate::surface::Surface;
pub use crate::sweep::{PassSummary, Sweeper};
pub use crate::watch::{ChangeWatcher, MutationBatch, MutationKind};

use tidyfeed_rules::Settings;

/// Declutters one page in a single call: builds a default sweeper with the
/// given settings, runs one pass, and renders the result. A URL the manifest
/// does not cover returns the input unchanged.
pub fn declutter_html(html: &str, url: &str, settings: &Settings) -> Result<String, SweepError> {
    let sweeper = Sweeper::builder().settings(settings.clone()).build();
    if !sweeper.applies_to(url) {
        return Ok(html.to_string());
    }
    let mut page = sweeper.attach(html, url)?;
    sweeper.sweep(&mut page);
    Ok(page.render())
}
