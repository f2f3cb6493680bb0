//! Explicit session context with cancel-and-replace request handling
//!
//! The matcher holds no module-level state. A [`MatchSession`] is created
//! at session start, owns the configuration for its lifetime, and is closed
//! at session end. Each extraction request gets a [`RequestToken`];
//! starting a new request supersedes every earlier token, so when a user
//! submits a second photo while the first is still being processed, only
//! the latest result is ever delivered.

use std::sync::atomic::{AtomicU64, Ordering};

use image::RgbaImage;

use crate::catalog::Catalog;
use crate::color::extract::extract_dominant_colors;
use crate::config::MatcherConfig;
use crate::error::{MatchError, Result};
use crate::matching::match_products;
use crate::MatchReport;

/// Token identifying one extraction request within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Session-scoped matcher state
///
/// Tokens are monotonically increasing; only the most recently issued one
/// is live. A closed session has no live token.
#[derive(Debug)]
pub struct MatchSession {
    config: MatcherConfig,
    next_token: AtomicU64,
    current_token: AtomicU64,
}

// current_token == 0 means no live request (tokens start at 1)
const NO_REQUEST: u64 = 0;

impl MatchSession {
    /// Create a session with the given configuration
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            config,
            next_token: AtomicU64::new(NO_REQUEST),
            current_token: AtomicU64::new(NO_REQUEST),
        }
    }

    /// The session's configuration
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Start a new request, superseding any request still in flight
    pub fn begin_request(&self) -> RequestToken {
        let token = self.next_token.fetch_add(1, Ordering::SeqCst) + 1;
        self.current_token.store(token, Ordering::SeqCst);
        RequestToken(token)
    }

    /// Whether a token still identifies the live request
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current_token.load(Ordering::SeqCst) == token.0
    }

    /// Run the full pipeline for one request: extract, then match
    ///
    /// Extraction completes before matching starts, since matching depends
    /// on its output. The token is checked before work begins and again
    /// after the pixel scan, so a request superseded mid-scan is dropped
    /// without matching against the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Superseded`] if a newer request replaced this
    /// one.
    pub fn run_request(
        &self,
        token: RequestToken,
        image: &RgbaImage,
        catalog: &Catalog,
        exclude_id: Option<&str>,
    ) -> Result<MatchReport> {
        if !self.is_current(token) {
            return Err(MatchError::Superseded);
        }

        let detected_colors = extract_dominant_colors(image, &self.config);

        if !self.is_current(token) {
            return Err(MatchError::Superseded);
        }

        let matches = match_products(
            &detected_colors,
            catalog.products(),
            exclude_id,
            &self.config.matching,
        );

        Ok(MatchReport {
            detected_colors,
            matches,
        })
    }

    /// End the session: all outstanding tokens become invalid
    pub fn close(&self) {
        self.current_token.store(NO_REQUEST, Ordering::SeqCst);
    }
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}
