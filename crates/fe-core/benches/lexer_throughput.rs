// Copyright 2026 the fe-lang authors
// SPDX-License-Identifier: Apache-2.0

//! Front-end throughput benchmarks over synthetic FE programs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use fe_core::source_analysis::{parse_source, tokenize};

/// Builds a program of `blocks` repeated declaration/loop/function blocks,
/// mixing Latin and Japanese tokens the way real FE sources do.
fn synthetic_program(blocks: usize) -> String {
    let mut source = String::new();
    for i in 0..blocks {
        source.push_str(&format!(
            "整数型: value{i} ← {i} * 2 + 1\n\
             for i ← 1 to {i} step 2 do\n\
                 if value{i} % 2 = 0 and i ≠ 0 then\n\
                     writeLine(\"value\\t{i}\")\n\
                 endif\n\
             endfor\n\
             function helper{i}(整数型: n): 整数型\n\
                 return n * value{i}\n\
             endfunction\n",
        ));
    }
    source
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for blocks in [10, 100, 1_000] {
        let source = synthetic_program(blocks);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(format!("{blocks}_blocks"), |b| {
            b.iter(|| tokenize(black_box(&source)).unwrap());
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_source");
    for blocks in [10, 100, 1_000] {
        let source = synthetic_program(blocks);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(format!("{blocks}_blocks"), |b| {
            b.iter(|| parse_source(black_box(&source)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_parse);
criterion_main!(benches);
