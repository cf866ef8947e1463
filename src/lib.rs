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

//! # RangeSummary
//!
//! A Rust library that turns an unordered collection of integers into a compact, human-readable
//! list of ranges. Consecutive values collapse into `start-end` ranges, isolated values are
//! written as plain numbers, and groups are separated by `", "`.
//!
//! ```text
//! {1, 3, 6, 7, 8, 12, 13, 14, 15, 21, 22, 23, 24, 31}  =>  "1, 3, 6-8, 12-15, 21-24, 31"
//! ```
//!
//! ## Key Features
//!
//! - **Fork-join Evaluation**: Large inputs are split in half recursively and both halves are
//!   summarized in parallel on a rayon worker pool
//! - **Boundary Merge**: Partial summaries are combined by looking only at the last range of the
//!   left half and the first range of the right half
//! - **Typed Partial Results**: Intermediate summaries are lists of [`RangeToken`]s, rendered to
//!   text once at the end
//! - **Memoization**: [`Summarizer`] computes its summary once and serves the cached result to
//!   every later caller
//!
//! ## Usage Examples
//!
//! ### Summarizing Values
//!
//! ```rust
//! use rangesummary::summarize;
//!
//! let values = [31, 1, 3, 6, 7, 8, 12, 13, 14, 15, 21, 22, 23, 24];
//! assert_eq!(summarize(&values, false), "1, 3, 6-8, 12-15, 21-24, 31");
//!
//! // Duplicates never extend a range.
//! assert_eq!(summarize(&[7, 7, 7], true), "7");
//! ```
//!
//! ### Merging Rendered Summaries
//!
//! ```rust
//! use rangesummary::merge;
//!
//! // Adjacent boundary ranges fuse into one.
//! assert_eq!(merge("1, 6-8", "9-12, 15").unwrap(), "1, 6-12, 15");
//!
//! // A shared boundary value is kept once.
//! assert_eq!(merge("1, 6-8", "8, 15").unwrap(), "1, 6-8, 15");
//! ```
//!
//! ### Summarizing Text
//!
//! ```rust
//! use rangesummary::{Summarizer, SummarizerConfig};
//!
//! let config = SummarizerConfig::default().with_cutoff(16);
//! let summarizer = Summarizer::with_config("4, 2, 3, 10", config).unwrap();
//! assert_eq!(summarizer.summarize().unwrap(), "2-4, 10");
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return `SummaryResult<T>` which can contain the following errors:
//!
//! - `SummaryError::Parse`: A value in a delimited list is not an integer
//! - `SummaryError::InvalidSummaryFormat`: A summary passed to [`merge`] is empty or malformed
//! - `SummaryError::InvalidConfig`: A configuration value is zero
//! - `SummaryError::ThreadPool`: A dedicated worker pool could not be started
//!
//! ## Thread Safety
//!
//! [`Summarizer`] is `Send` and `Sync`. Calls on one instance are serialized by an internal lock,
//! while the summarization itself runs in parallel.
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod config;
mod merger;
mod parse;
mod result;
mod summarizer;
mod summary;
mod task;
mod token;

pub use self::config::{DEFAULT_CUTOFF, SummarizerConfig};
pub use self::merger::merge;
pub use self::parse::parse;
pub use self::result::{SummaryError, SummaryResult};
pub use self::summarizer::Summarizer;
pub use self::summary::Summary;
pub use self::task::{SummarizeTask, summarize, summarize_sorted};
pub use self::token::RangeToken;
