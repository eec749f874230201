//! CPE 파싱 벤치마크
//!
//! 방언 판별, 2.2/2.3 파싱, 직렬화 성능을 측정합니다.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use cpekit_core::{ParserConfig, parse, parse_with, to_uri_string};

const CPE22_SHORT: &str = "cpe:/a:hiox_india:guest_book:4.0/";
const CPE22_PACKED: &str = "cpe:/a:adobe:reader:9.0:-:~ed~sw~tsw~thw~other:en";
const CPE23_PLAIN: &str = "cpe:2.3:o:microsoft:windows_server_2012:r2:-:-:*:standard:*:*:*";
const CPE23_ESCAPED: &str = "cpe:2.3:a:disney:where\\'s_my_perry?_free:1.5.1:*:*:*:*:android:*:*";

fn bench_parse_uri(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_uri");

    group.throughput(Throughput::Elements(1));
    group.bench_function("short", |b| b.iter(|| parse(black_box(CPE22_SHORT)).unwrap()));
    group.bench_function("packed_edition", |b| {
        b.iter(|| parse(black_box(CPE22_PACKED)).unwrap())
    });

    group.finish();
}

fn bench_parse_formatted(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_formatted");

    group.throughput(Throughput::Elements(1));
    group.bench_function("plain", |b| b.iter(|| parse(black_box(CPE23_PLAIN)).unwrap()));
    group.bench_function("escaped", |b| {
        b.iter(|| parse(black_box(CPE23_ESCAPED)).unwrap())
    });

    group.finish();
}

fn bench_parse_with_options(c: &mut Criterion) {
    let config = ParserConfig {
        ignore_prefix_case: true,
        ..Default::default()
    };

    let mut group = c.benchmark_group("parse_with_options");

    group.throughput(Throughput::Elements(1));
    group.bench_function("ignore_prefix_case", |b| {
        b.iter(|| parse_with(black_box(CPE23_PLAIN), black_box(&config)).unwrap())
    });

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let cpe = parse(CPE22_PACKED).unwrap();

    let mut group = c.benchmark_group("serialize");

    group.throughput(Throughput::Elements(1));
    group.bench_function("to_uri_string", |b| {
        b.iter(|| to_uri_string(black_box(&cpe)).unwrap())
    });

    group.finish();
}

fn bench_parse_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_scaling");

    // vendor 필드 길이에 따른 선형 스케일 확인
    for size in [16, 256, 1024].iter() {
        let input = format!("cpe:2.3:a:{}:p:1:*:*:*:*:*:*:*", "v".repeat(*size));
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse(black_box(&input)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_uri,
    bench_parse_formatted,
    bench_parse_with_options,
    bench_serialize,
    bench_parse_scaling
);
criterion_main!(benches);
