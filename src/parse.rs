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

//! Parsing of comma delimited integer lists.

use crate::result::{SummaryError, SummaryResult};

/// Delimiter between values of an input list.
const DELIMITER: char = ',';

/// Parses a comma delimited list of base-10 signed integers.
///
/// Whitespace around each value is ignored. Blank input yields an empty list.
///
/// # Errors
///
/// Returns [`SummaryError::Parse`] for the first value that is empty or not an integer.
///
/// # Examples
///
/// ```rust
/// use rangesummary::parse;
///
/// assert_eq!(parse("3, 1,2").unwrap(), vec![3, 1, 2]);
/// assert_eq!(parse("  ").unwrap(), Vec::<i64>::new());
/// assert!(parse("1, two").is_err());
/// ```
pub fn parse(text: &str) -> SummaryResult<Vec<i64>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(DELIMITER)
        .map(str::trim)
        .map(|token| {
            token.parse::<i64>().map_err(|source| SummaryError::Parse {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}
