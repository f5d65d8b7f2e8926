use bcn_decode::util::{decode_bc1_block, decode_bc3_block, decode_bc5_block};
use bcn_decode_common::allocate::allocate_align_64;
use bcn_decode_common::decoded_4x4_block::Decoded4x4Block;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

// 8MB of blocks per format
const INPUT_SIZE: usize = 8388608;

/// Fills `data` with varied blocks: fixed endpoints, indices derived from the block index.
fn fill_blocks(data: &mut [u8], block_size: usize) {
    for (block_idx, block) in data.chunks_exact_mut(block_size).enumerate() {
        for (x, byte) in block.iter_mut().enumerate() {
            *byte = ((block_idx * (x + 1)) % 255) as u8;
        }
        // Alternate the order of the leading endpoint bytes so both palette modes appear.
        let (first, second) = if block_idx % 2 == 0 { (0xF8, 0x40) } else { (0x40, 0xF8) };
        block[0] = first;
        block[1] = second;
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode Blocks (BCn -> RGBA8888)");
    group.throughput(Throughput::Bytes(INPUT_SIZE as u64));

    let mut input = allocate_align_64(INPUT_SIZE).unwrap();
    let input = input.as_mut_slice();

    let mut output: Vec<Decoded4x4Block> = vec![Decoded4x4Block::default(); INPUT_SIZE / 8];

    fill_blocks(input, 8);
    group.bench_function("decode_bc1_block", |b| {
        b.iter(|| {
            for (block, out) in input.chunks_exact(8).zip(output.iter_mut()) {
                if let Ok(block) = block.try_into() {
                    *out = decode_bc1_block(block);
                }
            }
        })
    });

    fill_blocks(input, 16);
    group.bench_function("decode_bc3_block", |b| {
        b.iter(|| {
            for (block, out) in input.chunks_exact(16).zip(output.iter_mut()) {
                if let Ok(block) = block.try_into() {
                    *out = decode_bc3_block(block);
                }
            }
        })
    });

    group.bench_function("decode_bc5_block", |b| {
        b.iter(|| {
            for (block, out) in input.chunks_exact(16).zip(output.iter_mut()) {
                if let Ok(block) = block.try_into() {
                    *out = decode_bc5_block(block);
                }
            }
        })
    });

    group.bench_function("has_identical_pixels", |b| {
        b.iter(|| {
            output
                .iter()
                .filter(|block| block.has_identical_pixels())
                .count()
        })
    });

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
