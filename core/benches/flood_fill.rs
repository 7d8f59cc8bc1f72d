use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, config) in [
        ("10x10x10", GameConfig::new_unchecked(10, 10, 10)),
        ("16x30x99", GameConfig::new_unchecked(16, 30, 99)),
        ("255x255 half", GameConfig::new_unchecked(255, 255, 32512)),
    ] {
        group.bench_function(name, |b| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                RandomBoardGenerator::new(seed).generate(black_box(config))
            })
        });
    }
    group.finish();
}

fn bench_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal");

    let empty = Board::from_mine_coords((255, 255), &[]).unwrap();
    group.bench_function("255x255 empty cascade", |b| {
        b.iter_batched(
            || empty.clone(),
            |mut board| board.reveal(black_box((127, 127))),
            BatchSize::LargeInput,
        )
    });

    let sparse = RandomBoardGenerator::new(7)
        .generate(GameConfig::new_unchecked(255, 255, 2000))
        .unwrap();
    let start = sparse
        .cells()
        .find(|cell| !cell.is_mine() && cell.neighboring_mines() == 0)
        .map(|cell| cell.coords())
        .unwrap();
    group.bench_function("255x255 sparse cascade", |b| {
        b.iter_batched(
            || sparse.clone(),
            |mut board| board.reveal(black_box(start)),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_reveal);
criterion_main!(benches);
