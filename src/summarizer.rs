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

//! Implementation of a memoizing collect-and-summarize object.

use crate::config::SummarizerConfig;
use crate::parse::parse;
use crate::result::SummaryResult;
use crate::task::SummarizeTask;
use rayon::slice::ParallelSliceMut;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Holds a textual list of integers and summarizes it at most once.
///
/// Every call that touches the cached summary holds the instance lock for its whole duration,
/// so at most one summarization runs per instance at a time. The first call to
/// [`summarize_collection`](Summarizer::summarize_collection) computes and caches the result;
/// later calls return the cached summary whatever values they are given, until
/// [`set_original`](Summarizer::set_original) or [`reset`](Summarizer::reset) clears it.
///
/// # Examples
///
/// ```rust
/// use rangesummary::Summarizer;
///
/// let summarizer = Summarizer::new("1,3,6,7,8,12,13,14,15,21,22,23,24,31");
/// assert_eq!(summarizer.summarize().unwrap(), "1, 3, 6-8, 12-15, 21-24, 31");
///
/// // The first result is kept.
/// assert_eq!(summarizer.summarize_collection(&[1, 2]), "1, 3, 6-8, 12-15, 21-24, 31");
/// ```
pub struct Summarizer {
    original: String,
    config: SummarizerConfig,
    pool: Option<ThreadPool>,
    summary: Mutex<Option<String>>,
}

impl Summarizer {
    /// Creates a summarizer over `original` using the default configuration and the global
    /// worker pool.
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            config: SummarizerConfig::default(),
            pool: None,
            summary: Mutex::new(None),
        }
    }

    /// Creates a summarizer over `original` with the given configuration.
    ///
    /// A dedicated worker pool is started when the configuration names a thread count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangesummary::{Summarizer, SummarizerConfig};
    ///
    /// let config = SummarizerConfig::default().with_cutoff(2).with_threads(2);
    /// let summarizer = Summarizer::with_config("5, 4, 3, 9", config).unwrap();
    /// assert_eq!(summarizer.summarize().unwrap(), "3-5, 9");
    ///
    /// let config = SummarizerConfig::default().with_cutoff(0);
    /// assert!(Summarizer::with_config("1", config).is_err());
    /// ```
    pub fn with_config(
        original: impl Into<String>,
        config: SummarizerConfig,
    ) -> SummaryResult<Self> {
        config.validate()?;
        let pool = match config.threads() {
            Some(threads) => {
                log::debug!("Starting summarizer pool with {threads} threads");
                Some(ThreadPoolBuilder::new().num_threads(threads).build()?)
            }
            None => None,
        };
        Ok(Self {
            original: original.into(),
            config,
            pool,
            summary: Mutex::new(None),
        })
    }

    /// The text this summarizer was created with.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Replaces the stored text and discards any cached summary.
    pub fn set_original(&mut self, original: impl Into<String>) {
        self.original = original.into();
        *self
            .summary
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Parses a comma delimited list of integers while holding the instance lock.
    pub fn collect(&self, input: &str) -> SummaryResult<Vec<i64>> {
        let _summary = self.lock();
        parse(input)
    }

    /// Summarizes `values`, or returns the cached summary if one has already been computed.
    ///
    /// `values` need not be sorted.
    pub fn summarize_collection(&self, values: &[i64]) -> String {
        let mut summary = self.lock();
        if let Some(cached) = summary.as_ref() {
            log::debug!("Returning cached summary");
            return cached.clone();
        }

        log::debug!("Summarizing {} values", values.len());
        let computed = match &self.pool {
            Some(pool) => pool.install(|| self.compute(values)),
            None => self.compute(values),
        };
        summary.insert(computed).clone()
    }

    /// Parses the stored text and summarizes it.
    pub fn summarize(&self) -> SummaryResult<String> {
        if let Some(cached) = self.cached() {
            return Ok(cached);
        }
        let values = self.collect(&self.original)?;
        Ok(self.summarize_collection(&values))
    }

    /// The cached summary, if one has been computed.
    #[must_use]
    pub fn cached(&self) -> Option<String> {
        self.lock().clone()
    }

    /// Discards any cached summary.
    pub fn reset(&self) {
        *self.lock() = None;
    }

    fn compute(&self, values: &[i64]) -> String {
        let mut sorted = values.to_vec();
        sorted.par_sort_unstable();
        SummarizeTask::new(&sorted, self.config.cutoff())
            .compute()
            .to_string()
    }

    // The guarded value is only ever replaced whole, so a poisoned lock still holds a
    // consistent cache.
    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.summary.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
