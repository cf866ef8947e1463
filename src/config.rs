//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Tuning knobs for summarization.

use crate::result::{SummaryError, SummaryResult};

/// Default number of values at or below which a slice is summarized sequentially.
pub const DEFAULT_CUTOFF: usize = 5;

/// Configuration for a [`Summarizer`](crate::Summarizer).
///
/// # Examples
///
/// ```rust
/// use rangesummary::SummarizerConfig;
///
/// let config = SummarizerConfig::default().with_cutoff(64).with_threads(4);
/// assert_eq!(config.cutoff(), 64);
/// assert_eq!(config.threads(), Some(4));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummarizerConfig {
    cutoff: usize,
    threads: Option<usize>,
}

impl SummarizerConfig {
    /// Sets the slice length at or below which summarization stops splitting.
    #[must_use]
    pub fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Runs summarization on a dedicated pool of `threads` workers instead of the global pool.
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Slice length at or below which summarization stops splitting.
    #[must_use]
    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    /// Size of the dedicated worker pool, or `None` for the global pool.
    #[must_use]
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Checks that every setting is usable.
    pub fn validate(&self) -> SummaryResult<()> {
        if self.cutoff == 0 {
            return Err(SummaryError::InvalidConfig(
                "cutoff must be at least 1".to_string(),
            ));
        }
        if self.threads == Some(0) {
            return Err(SummaryError::InvalidConfig(
                "threads must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        SummarizerConfig {
            cutoff: DEFAULT_CUTOFF,
            threads: None,
        }
    }
}
