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

//! Typed partial summaries and their boundary merge.

use crate::result::{SummaryError, SummaryResult};
use crate::token::RangeToken;
use std::fmt;
use std::str::FromStr;

/// Separator placed between rendered tokens.
pub(crate) const SEPARATOR: &str = ", ";

/// An ordered list of disjoint, non-adjacent [`RangeToken`]s in ascending order.
///
/// `Summary` is the unit produced for each half of a split input and merged back together.
/// Merging only ever looks at the last token of the left summary and the first token of the
/// right one, and the result renders to text only once at the end.
///
/// # Examples
///
/// ```rust
/// use rangesummary::Summary;
///
/// let left: Summary = "1, 3, 6-8".parse().unwrap();
/// let right: Summary = "9, 12-15".parse().unwrap();
///
/// assert_eq!(left.merge(right).to_string(), "1, 3, 6-9, 12-15");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    tokens: Vec<RangeToken>,
}

impl Summary {
    /// Creates an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Summary { tokens: Vec::new() }
    }

    /// Returns `true` if the summary covers no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens of this summary in ascending order.
    #[must_use]
    pub fn tokens(&self) -> &[RangeToken] {
        &self.tokens
    }

    /// Number of distinct integers represented by this summary.
    #[must_use]
    pub fn value_count(&self) -> u64 {
        self.tokens
            .iter()
            .map(RangeToken::value_count)
            .fold(0, u64::saturating_add)
    }

    /// Appends a token that lies strictly after every token already present.
    pub(crate) fn push(&mut self, token: RangeToken) {
        self.tokens.push(token);
    }

    /// Merges a summary whose values are all greater than or equal to the values of `self`.
    ///
    /// If the last token of `self` and the first token of `other` touch (`max + 1 == min`) or
    /// share a value (`max == min`) they are fused into one token, otherwise the two lists are
    /// simply concatenated.
    #[must_use]
    pub fn merge(mut self, mut other: Summary) -> Summary {
        let (Some(last), Some(first)) = (
            self.tokens.last().copied(),
            other.tokens.first().copied(),
        ) else {
            return if self.is_empty() { other } else { self };
        };
        if let Some(fused) = last.fuse(first) {
            self.tokens.pop();
            other.tokens[0] = fused;
        }
        self.tokens.append(&mut other.tokens);
        self
    }
}

impl From<RangeToken> for Summary {
    fn from(token: RangeToken) -> Self {
        Summary {
            tokens: vec![token],
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.tokens.iter();
        if let Some(token) = tokens.next() {
            write!(f, "{token}")?;
            for token in tokens {
                write!(f, "{SEPARATOR}{token}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Summary {
    type Err = SummaryError;

    /// Parses a complete rendered summary. The empty string is the empty summary.
    ///
    /// Tokens must be ascending and separated by gaps, exactly as summarization renders them.
    fn from_str(text: &str) -> SummaryResult<Self> {
        let mut summary = Summary::new();
        if text.is_empty() {
            return Ok(summary);
        }
        for part in text.split(SEPARATOR) {
            if part.trim() != part {
                return Err(SummaryError::InvalidSummaryFormat(format!(
                    "{text:?} is not separated by {SEPARATOR:?}"
                )));
            }
            let token = part.parse::<RangeToken>()?;
            if let Some(last) = summary.tokens.last()
                && token.start() <= last.end().saturating_add(1)
            {
                return Err(SummaryError::InvalidSummaryFormat(format!(
                    "{token} does not follow {last} in {text:?}"
                )));
            }
            summary.tokens.push(token);
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(text: &str) -> Summary {
        text.parse().unwrap()
    }

    #[test]
    fn test_display() {
        assert_eq!(Summary::new().to_string(), "");
        assert_eq!(Summary::from(RangeToken::singleton(5)).to_string(), "5");
        assert_eq!(
            summary("1, 3, 6-8, 12-15, 21-24, 31").to_string(),
            "1, 3, 6-8, 12-15, 21-24, 31"
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in ["1,3", "1,  3", " 1", "1, ", "3, 1", "1-3, 4", "1-3, 2-5", "1, 1"] {
            assert!(text.parse::<Summary>().is_err(), "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_value_count() {
        assert_eq!(Summary::new().value_count(), 0);
        assert_eq!(summary("1, 3, 6-8, 12-15, 21-24, 31").value_count(), 14);
    }

    #[test]
    fn test_merge_disjoint() {
        let merged = summary("1, 3").merge(summary("6-8, 12"));
        assert_eq!(merged.to_string(), "1, 3, 6-8, 12");
    }

    #[test]
    fn test_merge_adjacent() {
        assert_eq!(summary("1-3").merge(summary("4-6")).to_string(), "1-6");
        assert_eq!(summary("1-3").merge(summary("4")).to_string(), "1-4");
        assert_eq!(summary("3").merge(summary("4-6")).to_string(), "3-6");
        assert_eq!(summary("3").merge(summary("4")).to_string(), "3-4");
        assert_eq!(summary("1, 3").merge(summary("4, 9")).to_string(), "1, 3-4, 9");
    }

    #[test]
    fn test_merge_overlapping() {
        assert_eq!(summary("1-3").merge(summary("3-6")).to_string(), "1-6");
        assert_eq!(summary("1-3").merge(summary("3")).to_string(), "1-3");
        assert_eq!(summary("3").merge(summary("3-6")).to_string(), "3-6");
        assert_eq!(summary("7").merge(summary("7")).to_string(), "7");
        assert_eq!(summary("1, 7").merge(summary("7, 9")).to_string(), "1, 7, 9");
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(Summary::new().merge(summary("1-3")), summary("1-3"));
        assert_eq!(summary("1-3").merge(Summary::new()), summary("1-3"));
        assert!(Summary::new().merge(Summary::new()).is_empty());
    }
}
