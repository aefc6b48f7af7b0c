use core_text::GapBuffer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn typing_at_one_spot(c: &mut Criterion) {
    c.bench_function("gap_sequential_typing_10k", |b| {
        b.iter(|| {
            let mut buffer = GapBuffer::new(1);
            for i in 0..10_000usize {
                let p = buffer.point();
                buffer.insert(p, b'a' + (i % 26) as u8);
            }
            black_box(buffer.len())
        })
    });
}

fn alternating_far_jumps(c: &mut Criterion) {
    let seed = vec![b'x'; 64 * 1024];
    c.bench_function("gap_far_jump_inserts_64k", |b| {
        b.iter(|| {
            let mut buffer = GapBuffer::from_bytes(&seed);
            for i in 0..200usize {
                let at = if i % 2 == 0 { 0 } else { buffer.len() };
                buffer.insert(at, b'!');
            }
            black_box(buffer.len())
        })
    });
}

criterion_group!(benches, typing_at_one_spot, alternating_far_jumps);
criterion_main!(benches);
