use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use texture_swizzle::{deswizzle, swizzle, BlockFormat, ImageGeometry, Platform};

// 2048x2048 BC3 is 4MB of blocks.
const IMAGE: ImageGeometry = ImageGeometry::new(2048, 2048);
const BC3: BlockFormat = BlockFormat::new(4, 4, 16);

fn criterion_benchmark(c: &mut Criterion) {
    let size = BC3.data_size(IMAGE);
    let input: Vec<u8> = (0..size).map(|x| (x % 251) as u8).collect();
    let mut output = vec![0u8; size];

    let cases = [
        ("nsw mode 0", Platform::NintendoSwitch, Some(0)),
        ("nsw mode 4", Platform::NintendoSwitch, Some(4)),
        ("ps4", Platform::PlayStation4, None),
    ];

    let mut group = c.benchmark_group("BC3 2048x2048 Deswizzle");
    group.throughput(Throughput::Bytes(size as u64));
    for (name, platform, mode) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| {
                deswizzle(
                    black_box(input),
                    black_box(&mut output),
                    platform,
                    mode,
                    IMAGE,
                    BC3,
                )
                .unwrap()
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("BC3 2048x2048 Swizzle");
    group.throughput(Throughput::Bytes(size as u64));
    for (name, platform, mode) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| {
                swizzle(
                    black_box(input),
                    black_box(&mut output),
                    platform,
                    mode,
                    IMAGE,
                    BC3,
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
