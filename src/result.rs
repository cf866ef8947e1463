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

//! Error types and results for the RangeSummary library.

use std::num::ParseIntError;

/// A specialized Result type for RangeSummary operations.
pub type SummaryResult<T> = Result<T, SummaryError>;

/// Errors that can occur during RangeSummary operations.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    /// A token of a delimited integer list is not a base-10 integer.
    #[error("Unable to parse {token:?} as an integer")]
    Parse {
        /// The offending token, after trimming.
        token: String,
        /// The underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// A summary string is empty or does not follow the `a, b-c, ...` grammar.
    #[error("Invalid summary format: {0}")]
    InvalidSummaryFormat(String),
    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// A dedicated worker pool could not be started.
    #[error("Unable to build worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
