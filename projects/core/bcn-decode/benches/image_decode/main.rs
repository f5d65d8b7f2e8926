use bcn_decode::{decode, required_destination_size, required_source_size};
use bcn_decode::{DecodeSettings, DestinationFormat, EncodeFormat};
use bcn_decode_common::allocate::{allocate_align_64, allocate_zeroed_align_64};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

const WIDTH: u32 = 2048;
const HEIGHT: u32 = 2048;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode Image (2048x2048)");
    let dst_size = required_destination_size(WIDTH, HEIGHT).unwrap();
    let mut output = allocate_zeroed_align_64(dst_size).unwrap();
    group.throughput(Throughput::Bytes(dst_size as u64));

    for format in [
        EncodeFormat::Raw,
        EncodeFormat::Bc1,
        EncodeFormat::Bc2,
        EncodeFormat::Bc3,
        EncodeFormat::Bc4,
        EncodeFormat::Bc5,
    ] {
        let src_size = required_source_size(WIDTH, HEIGHT, format).unwrap();
        let mut input = allocate_align_64(src_size).unwrap();
        for (x, byte) in input.as_mut_slice().iter_mut().enumerate() {
            *byte = (x.wrapping_mul(0x9E37_79B9) >> 13) as u8;
        }

        for (name, settings) in [
            ("rgba", DecodeSettings::default()),
            (
                "bgra_flipped",
                DecodeSettings {
                    destination_format: DestinationFormat::Bgra,
                    flip_vertically: true,
                },
            ),
        ] {
            group.bench_with_input(
                BenchmarkId::new(format!("{format:?}"), name),
                &settings,
                |b, &settings| {
                    b.iter(|| {
                        decode(
                            output.as_mut_slice(),
                            input.as_slice(),
                            WIDTH,
                            HEIGHT,
                            format,
                            settings,
                        )
                    })
                },
            );
        }
    }

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
