criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        solving_random_fool,
        solving_fixed_fool,
        solving_fixed_weighted_fool,
        replaying_solved_game,
        packing_ownership_state,
}

fn solving_random_fool(c: &mut criterion::Criterion) {
    c.bench_function("solve a random distribution", |b| {
        b.iter(|| Solver::new(Config::random()))
    });
}

fn solving_fixed_fool(c: &mut criterion::Criterion) {
    let config = Config::parse("0110100101101001", "0", None, Variant::Fool).expect("valid");
    c.bench_function("solve a 16-card distribution", |b| {
        b.iter(|| Solver::new(config.clone()))
    });
}

fn solving_fixed_weighted_fool(c: &mut criterion::Criterion) {
    let weights = "3,-1,2,-2,1,1,-3,2,1,-1,2,3";
    let config = Config::parse("011010010110", "1", Some(weights), Variant::WeightedDrawFool).expect("valid");
    c.bench_function("solve a 12-card weighted distribution", |b| {
        b.iter(|| Solver::new(config.clone()))
    });
}

fn replaying_solved_game(c: &mut criterion::Criterion) {
    let config = Config::parse("0110100101101001", "0", None, Variant::Fool).expect("valid");
    let ref solver = Solver::new(config).expect("valid");
    c.bench_function("auto play a solved 16-card game", |b| {
        b.iter(|| {
            let mut game = Playback::from(solver.clone());
            while game.auto().is_ok() {}
        })
    });
}

fn packing_ownership_state(c: &mut criterion::Criterion) {
    let owners = (0..MAX_CARDS).map(|_| Player::random()).collect::<Vec<Player>>();
    c.bench_function("pack a 63-card ownership sequence", |b| {
        b.iter(|| State::from(owners.as_slice()))
    });
}

use fool::Arbitrary;
use fool::Config;
use fool::MAX_CARDS;
use fool::Player;
use fool::Playback;
use fool::Solver;
use fool::State;
use fool::Variant;
