// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{ObservableExt, Subject};
use cascade_stream::combine_latest;
use criterion::{BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

pub fn bench_combine_latest(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine_latest");
    let sizes = [100usize, 1000usize, 10000];
    let source_counts = [2usize, 4usize, 8usize];

    for &size in &sizes {
        for &sources in &source_counts {
            let id = BenchmarkId::from_parameter(format!("m{size}_s{sources}"));
            group.throughput(Throughput::Elements((size * sources) as u64));

            group.bench_with_input(id, &(size, sources), |bencher, &(size, sources)| {
                // Setup: create subjects and subscribe (not timed)
                let setup = || {
                    let subjects: Vec<Subject<usize, ()>> =
                        (0..sources).map(|_| Subject::new()).collect();
                    let subscription = combine_latest(subjects.clone())
                        .observe_next(|values| {
                            black_box(values);
                        });
                    (subjects, subscription)
                };

                bencher.iter_with_setup(setup, |(subjects, subscription)| {
                    for value in 0..size {
                        for subject in &subjects {
                            let _ = subject.next(value);
                        }
                    }
                    subscription.dispose();
                });
            });
        }
    }

    group.finish();
}
