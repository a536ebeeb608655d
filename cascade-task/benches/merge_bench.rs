// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{ObservableExt, Subject, Task};
use cascade_task::MergeExt;
use criterion::{BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

pub fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    let sizes = [100usize, 1000usize];
    let inner_counts = [2usize, 8usize, 32usize];

    for &size in &sizes {
        for &inners in &inner_counts {
            let id = BenchmarkId::from_parameter(format!("m{size}_i{inners}"));
            group.throughput(Throughput::Elements((size * inners) as u64));

            group.bench_with_input(id, &(size, inners), |bencher, &(size, inners)| {
                // Setup: create the outer and inner subjects and subscribe (not timed)
                let setup = || {
                    let outer: Subject<Task<usize, ()>, ()> = Subject::new();
                    let subjects: Vec<Subject<usize, ()>> =
                        (0..inners).map(|_| Subject::new()).collect();
                    let subscription = outer.clone().merge().observe_next(|value| {
                        black_box(value);
                    });
                    for subject in &subjects {
                        let _ = outer.next(Task::from_signal(subject.clone().into_signal()));
                    }
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
