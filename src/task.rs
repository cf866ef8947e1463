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

//! Recursive fork-join summarization of sorted integer slices.

use crate::config::DEFAULT_CUTOFF;
use crate::summary::Summary;
use crate::token::RangeToken;
use rayon::slice::ParallelSliceMut;

/// Summarizes an ascending slice by splitting it in half until the pieces are no longer than
/// the cutoff, scanning those pieces sequentially and merging the partial summaries back
/// together.
///
/// The two halves of every split are independent and are evaluated with [`rayon::join`], so a
/// task runs on whichever rayon pool it is called from.
///
/// # Examples
///
/// ```rust
/// use rangesummary::SummarizeTask;
///
/// let values = [1, 3, 6, 7, 8, 12, 13, 14, 15, 21, 22, 23, 24, 31];
/// let summary = SummarizeTask::new(&values, 3).compute();
///
/// assert_eq!(summary.to_string(), "1, 3, 6-8, 12-15, 21-24, 31");
/// assert_eq!(summary, SummarizeTask::new(&values, 3).sequential());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SummarizeTask<'a> {
    values: &'a [i64],
    cutoff: usize,
}

impl<'a> SummarizeTask<'a> {
    /// Creates a task over `values`, which must already be in ascending order.
    ///
    /// A `cutoff` of zero is treated as one.
    #[must_use]
    pub fn new(values: &'a [i64], cutoff: usize) -> Self {
        SummarizeTask {
            values,
            cutoff: cutoff.max(1),
        }
    }

    /// Computes the summary, splitting and running both halves in parallel above the cutoff.
    #[must_use]
    pub fn compute(&self) -> Summary {
        if self.values.len() <= self.cutoff {
            return self.sequential();
        }

        // The left half takes the middle element of odd-length slices.
        let (left, right) = self.values.split_at(self.values.len().div_ceil(2));
        log::trace!(
            "Splitting {} values into {} and {}",
            self.values.len(),
            left.len(),
            right.len()
        );

        let (left, right) = rayon::join(
            || self.subtask(left).compute(),
            || self.subtask(right).compute(),
        );
        left.merge(right)
    }

    /// Computes the summary with a single left to right scan and no splitting.
    #[must_use]
    pub fn sequential(&self) -> Summary {
        let mut summary = Summary::new();
        let Some((&first, rest)) = self.values.split_first() else {
            return summary;
        };

        let mut range_min = first;
        let mut range_check = first;
        for &value in rest {
            if range_check.checked_add(1) == Some(value) {
                range_check = value;
            } else if value != range_check {
                summary.push(RangeToken::new(range_min, range_check));
                range_min = value;
                range_check = value;
            }
        }
        summary.push(RangeToken::new(range_min, range_check));
        summary
    }

    fn subtask(&self, values: &'a [i64]) -> Self {
        SummarizeTask {
            values,
            cutoff: self.cutoff,
        }
    }
}

/// Summarizes an ascending slice with the default cutoff.
#[must_use]
pub fn summarize_sorted(values: &[i64]) -> Summary {
    SummarizeTask::new(values, DEFAULT_CUTOFF).compute()
}

/// Summarizes a collection of integers into ranges such as `"1, 3, 6-8"`.
///
/// Unless `already_sorted` is set the values are sorted first. Passing unsorted values with
/// `already_sorted` set produces an unspecified grouping.
///
/// # Examples
///
/// ```rust
/// use rangesummary::summarize;
///
/// assert_eq!(summarize(&[8, 3, 1, 7, 6], false), "1, 3, 6-8");
/// assert_eq!(summarize(&[], false), "");
/// assert_eq!(summarize(&[5], true), "5");
/// ```
#[must_use]
pub fn summarize(values: &[i64], already_sorted: bool) -> String {
    if already_sorted {
        summarize_sorted(values).to_string()
    } else {
        let mut sorted = values.to_vec();
        sorted.par_sort_unstable();
        summarize_sorted(&sorted).to_string()
    }
}
