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

//! A single rendered group of a summary.

use crate::result::{SummaryError, SummaryResult};
use std::fmt;
use std::str::FromStr;

/// A maximal run of consecutive integers `start..=end`.
///
/// A token with `start == end` renders as a bare number (`"7"`), any other token renders as
/// `"start-end"` (`"6-8"`).
///
/// # Examples
///
/// ```rust
/// use rangesummary::RangeToken;
///
/// assert_eq!(RangeToken::new(6, 8).to_string(), "6-8");
/// assert_eq!(RangeToken::singleton(7).to_string(), "7");
/// assert_eq!("12-15".parse::<RangeToken>().unwrap(), RangeToken::new(12, 15));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RangeToken {
    start: i64,
    end: i64,
}

impl RangeToken {
    /// Creates a token covering `start..=end`. The bounds are reordered if given backwards.
    #[must_use]
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Creates a token holding a single value.
    #[must_use]
    pub fn singleton(value: i64) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    /// Lowest value of the run.
    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Highest value of the run.
    #[must_use]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Returns `true` if this token renders without range notation.
    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.start == self.end
    }

    /// Number of integers covered by this token. Saturates for the full `i64` domain.
    #[must_use]
    pub fn value_count(&self) -> u64 {
        self.end.abs_diff(self.start).saturating_add(1)
    }

    /// Joins `next` onto the end of this token when the two touch or overlap.
    ///
    /// Returns `None` when a gap separates them.
    pub(crate) fn fuse(self, next: RangeToken) -> Option<RangeToken> {
        if next.start <= self.end.saturating_add(1) && next.end >= self.start.saturating_sub(1) {
            Some(RangeToken::new(
                self.start.min(next.start),
                self.end.max(next.end),
            ))
        } else {
            None
        }
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_singleton() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl FromStr for RangeToken {
    type Err = SummaryError;

    /// Parses `"v"` or `"a-b"` with `a < b`. Whitespace anywhere in the token is rejected.
    fn from_str(text: &str) -> SummaryResult<Self> {
        let bound = |part: &str| {
            part.parse::<i64>().map_err(|_| {
                SummaryError::InvalidSummaryFormat(format!("{text:?} is not a range token"))
            })
        };

        // A leading '-' is the sign of the lower bound, never the separator.
        match text.get(1..).and_then(|rest| rest.find('-')) {
            Some(offset) => {
                let (start, end) = (bound(&text[..=offset])?, bound(&text[offset + 2..])?);
                if start < end {
                    Ok(RangeToken { start, end })
                } else {
                    Err(SummaryError::InvalidSummaryFormat(format!(
                        "{text:?} is not an ascending range"
                    )))
                }
            }
            None => Ok(RangeToken::singleton(bound(text)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(RangeToken::singleton(31).to_string(), "31");
        assert_eq!(RangeToken::new(21, 24).to_string(), "21-24");
        assert_eq!(RangeToken::new(-5, -3).to_string(), "-5--3");
        assert_eq!(RangeToken::new(-2, 2).to_string(), "-2-2");
    }

    #[test]
    fn test_new_reorders_bounds() {
        assert_eq!(RangeToken::new(8, 6), RangeToken::new(6, 8));
    }

    #[test]
    fn test_parse() {
        assert_eq!("7".parse::<RangeToken>().unwrap(), RangeToken::singleton(7));
        assert_eq!("6-8".parse::<RangeToken>().unwrap(), RangeToken::new(6, 8));
        assert_eq!("-5".parse::<RangeToken>().unwrap(), RangeToken::singleton(-5));
        assert_eq!("-5--3".parse::<RangeToken>().unwrap(), RangeToken::new(-5, -3));
        assert_eq!("-2-2".parse::<RangeToken>().unwrap(), RangeToken::new(-2, 2));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in [
            "", "-", "a", "1-", "-1-", "3-3", "8-6", "1-2-3", "1,2", " 7", "7 ", " 6-8 ", "6 -8",
            "6- 8",
        ] {
            assert!(
                matches!(
                    text.parse::<RangeToken>(),
                    Err(SummaryError::InvalidSummaryFormat(_))
                ),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_value_count() {
        assert_eq!(RangeToken::singleton(5).value_count(), 1);
        assert_eq!(RangeToken::new(1, 1000).value_count(), 1000);
        assert_eq!(RangeToken::new(i64::MIN, i64::MAX).value_count(), u64::MAX);
    }

    #[test]
    fn test_fuse() {
        let left = RangeToken::new(6, 8);
        assert_eq!(left.fuse(RangeToken::new(9, 12)), Some(RangeToken::new(6, 12)));
        assert_eq!(left.fuse(RangeToken::singleton(8)), Some(left));
        assert_eq!(left.fuse(RangeToken::new(8, 10)), Some(RangeToken::new(6, 10)));
        assert_eq!(left.fuse(RangeToken::singleton(10)), None);
        assert_eq!(
            RangeToken::singleton(i64::MAX).fuse(RangeToken::singleton(i64::MAX)),
            Some(RangeToken::singleton(i64::MAX))
        );
    }
}
