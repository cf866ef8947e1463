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

//! Boundary merge of two rendered summaries.

use crate::result::{SummaryError, SummaryResult};
use crate::summary::{SEPARATOR, Summary};
use crate::token::RangeToken;

/// Merges two rendered summaries into one, looking only at the last token of `left` and the
/// first token of `right`.
///
/// Every value in `left` must be less than or equal to every value in `right`. When the two
/// boundary tokens touch or share a value they are fused into a single token, otherwise the
/// summaries are joined with `", "`. Text outside the two boundary tokens is copied verbatim and
/// never parsed.
///
/// # Errors
///
/// Returns [`SummaryError::InvalidSummaryFormat`] if either summary is empty, if a boundary token
/// is not a number or an ascending `a-b` range, or if the boundary tokens are out of order.
///
/// # Examples
///
/// ```rust
/// use rangesummary::merge;
///
/// assert_eq!(merge("1, 3, 6-8", "9-11, 14").unwrap(), "1, 3, 6-11, 14");
/// assert_eq!(merge("1, 3", "3, 5").unwrap(), "1, 3, 5");
/// assert_eq!(merge("1, 3", "7").unwrap(), "1, 3, 7");
/// assert!(merge("", "7").is_err());
/// ```
pub fn merge(left: &str, right: &str) -> SummaryResult<String> {
    if left.is_empty() || right.is_empty() {
        return Err(SummaryError::InvalidSummaryFormat(
            "cannot merge an empty summary".to_string(),
        ));
    }

    let (head, last) = match left.rfind(SEPARATOR) {
        Some(at) => (&left[..at], &left[at + SEPARATOR.len()..]),
        None => ("", left),
    };
    let (first, tail) = match right.find(SEPARATOR) {
        Some(at) => (&right[..at], &right[at + SEPARATOR.len()..]),
        None => (right, ""),
    };
    let last = last.parse::<RangeToken>()?;
    let first = first.parse::<RangeToken>()?;
    if first.start() < last.end() {
        return Err(SummaryError::InvalidSummaryFormat(format!(
            "{first} does not follow {last}"
        )));
    }

    let boundary = Summary::from(last).merge(Summary::from(first)).to_string();
    log::trace!("Merged boundary {last} | {first} into {boundary}");

    let mut merged = String::with_capacity(left.len() + right.len() + SEPARATOR.len());
    for part in [head, boundary.as_str(), tail] {
        if part.is_empty() {
            continue;
        }
        if !merged.is_empty() {
            merged.push_str(SEPARATOR);
        }
        merged.push_str(part);
    }
    Ok(merged)
}
