use std::hint::black_box;

use bencher::BenchInput;
use criterion::{criterion_group, criterion_main, Criterion};
use micro_message::normalize::{normalize_header_name, normalize_uri_path, normalize_uri_query};

static PATHS: [BenchInput; 3] = [
    BenchInput::small("plain", "/api/v1/users/42/profile"),
    BenchInput::medium("escaped", "/files/%E6%97%A5%E6%9C%AC/report%202024.pdf"),
    BenchInput::medium("raw", "/files/日本/report 2024 (final) [v2].pdf"),
];

static QUERIES: [BenchInput; 2] = [
    BenchInput::small("single", "?page=2"),
    BenchInput::large("mixed", "?q=micro http&lang=zh-CN,zh;q=0.9&redirect=/login?next=%2Fhome&tags[]=a&tags[]=b"),
];

static HEADERS: [BenchInput; 2] =
    [BenchInput::small("canonical", "content-type"), BenchInput::small("env_style", "HTTP_X_FORWARDED_FOR")];

fn bench_all(criterion: &mut Criterion, group_name: &str, inputs: &[BenchInput], normalize: fn(&str) -> String) {
    let mut group = criterion.benchmark_group(group_name);

    for input in inputs {
        group.throughput(input.throughput());
        group.bench_with_input(input.id(), input, |b, input| b.iter(|| black_box(normalize(black_box(input.content())))));
    }

    group.finish();
}

fn benchmark_uri_path(criterion: &mut Criterion) {
    bench_all(criterion, "normalize_uri_path", &PATHS, normalize_uri_path);
}

fn benchmark_uri_query(criterion: &mut Criterion) {
    bench_all(criterion, "normalize_uri_query", &QUERIES, normalize_uri_query);
}

fn benchmark_header_name(criterion: &mut Criterion) {
    bench_all(criterion, "normalize_header_name", &HEADERS, normalize_header_name);
}

criterion_group!(normalize, benchmark_uri_path, benchmark_uri_query, benchmark_header_name);
criterion_main!(normalize);
