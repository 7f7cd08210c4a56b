use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use wordgrid::dictionary::Dictionary;
use wordgrid::finder::find_words;
use wordgrid::grid::Grid;
use wordgrid::pathfinder::{PathFinder, StartPolicy};
use wordgrid::scorer::Scorer;

fn setup_dictionary() -> Dictionary {
    // Every two- to four-letter string over a small alphabet.
    let alphabet = ['A', 'E', 'I', 'N', 'R', 'S', 'T'];
    let mut words = Vec::new();
    for &a in &alphabet {
        for &b in &alphabet {
            words.push(format!("{}{}", a, b));
            for &c in &alphabet {
                words.push(format!("{}{}{}", a, b, c));
                for &d in &alphabet {
                    words.push(format!("{}{}{}{}", a, b, c, d));
                }
            }
        }
    }
    words.into_iter().collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(42);
    let letters: String = (0..25)
        .map(|_| ['A', 'E', 'I', 'N', 'R', 'S', 'T'][rng.usize(..7)])
        .collect();
    let grid = Grid::parse(&letters, 5).unwrap();
    let dictionary = setup_dictionary();
    let scorer = Scorer::default();
    let finder = PathFinder::new(StartPolicy::Strict, None);

    c.bench_function("trace_single_word", |b| {
        b.iter(|| finder.trace(black_box("RESIN"), black_box(&grid)))
    });

    c.bench_function("find_words_5x5", |b| {
        b.iter(|| find_words(black_box(&grid), black_box(&dictionary), &scorer))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
