use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{place_food, Config, GameState, SimpleRng};
use tui_snake::types::Cell;

fn bench_step(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let config = Config {
        cols: 50,
        rows: 50,
        initial_length: 3,
    };
    let base = GameState::new(config, &mut rng);
    let mut state = base.clone();

    c.bench_function("step_50x50", |b| {
        b.iter(|| {
            if state.game_over() {
                state = base.clone();
            }
            state.step(black_box(&mut rng));
        })
    });
}

fn bench_place_food(c: &mut Criterion) {
    // Snake occupying the top half of a 20x20 board.
    let snake: Vec<Cell> = (0..10)
        .flat_map(|y| (0..20).map(move |x| Cell::new(x, y)))
        .collect();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("place_food_half_full", |b| {
        b.iter(|| place_food(black_box(20), black_box(20), black_box(&snake), &mut rng))
    });
}

fn bench_new_state(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("new_default_state", |b| {
        b.iter(|| GameState::new(black_box(Config::default()), &mut rng))
    });
}

criterion_group!(benches, bench_step, bench_place_food, bench_new_state);
criterion_main!(benches);
