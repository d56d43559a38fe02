use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use snake_core::game::{Board, BoardSettings, Direction};

/// Direction plan that walks the default 17x15 board: a run-in to the
/// top-left corner, then an endless loop along the outer ring. The ring is
/// longer than the snake can grow in a short session, so the game mostly
/// stays alive and keeps eating.
fn build_plan() -> (Vec<Direction>, Vec<Direction>) {
    let mut prefix = vec![Direction::Left; 12];
    prefix.extend(vec![Direction::Up; 7]);

    let mut cycle = vec![Direction::Right; 16];
    cycle.extend(vec![Direction::Down; 14]);
    cycle.extend(vec![Direction::Left; 16]);
    cycle.extend(vec![Direction::Up; 14]);

    (prefix, cycle)
}

fn direction_at(step: usize, prefix: &[Direction], cycle: &[Direction]) -> Direction {
    if step < prefix.len() {
        prefix[step]
    } else {
        cycle[(step - prefix.len()) % cycle.len()]
    }
}

fn run_ticks(total: usize) {
    let (prefix, cycle) = build_plan();
    let mut board = Board::new(BoardSettings::default(), 12345).unwrap();
    board.start();

    let mut step = 0;
    for _ in 0..total {
        let direction = direction_at(step, &prefix, &cycle);
        step += 1;

        let applied = board.move_snake(direction);
        if !applied || !board.game_state().is_running() {
            board.reset_board();
            step = 0;
        }
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("board");
    group.sampling_mode(SamplingMode::Flat);
    group.bench_function("move_snake_10k_ticks", |b| b.iter(|| run_ticks(10_000)));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
