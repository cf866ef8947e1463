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

use criterion::{criterion_group, criterion_main};

mod merge;

criterion_group!(
    summarize,
    summarize::bench_sequential_vs_parallel,
    summarize::bench_cutoff,
    summarize::bench_summarizer
);
criterion_group!(merge, merge::bench_merge);
criterion_main!(summarize, merge);
