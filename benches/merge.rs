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

use criterion::{BenchmarkId, Criterion, black_box};
use rangesummary::{merge, summarize};

pub fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    // Merge cost should track the boundary tokens, not the number of groups.
    for groups in [10i64, 1_000, 100_000].iter() {
        let left_values: Vec<i64> = (0..*groups).map(|i| i * 3).collect();
        let right_values: Vec<i64> = (0..*groups).map(|i| groups * 3 - 2 + i * 3).collect();
        let left = summarize(&left_values, true);
        let right = summarize(&right_values, true);

        group.bench_with_input(
            BenchmarkId::new("adjacent", groups),
            &(left.as_str(), right.as_str()),
            |b, &(left, right)| {
                b.iter(|| black_box(merge(left, right).unwrap()));
            },
        );
    }

    group.bench_function("disjoint_singletons", |b| {
        b.iter(|| black_box(merge(black_box("1, 3"), black_box("7, 9")).unwrap()));
    });

    group.finish();
}
