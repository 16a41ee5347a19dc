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
        generating_normal_pool,
        computing_bank_offer,
        playing_robot_session,
}

fn generating_normal_pool(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("generate a Normal Pool", |b| {
        b.iter(|| Pool::generate(Mode::Normal, rng))
    });
}

fn computing_bank_offer(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let mut board = Board::new(Pool::generate(Mode::Normal, rng), 1).expect("held in range");
    for id in 2..=4 {
        board.open(id).expect("valid elimination");
    }
    c.bench_function("calculate a round 4 Offer", |b| b.iter(|| board.offer()));
}

fn playing_robot_session(c: &mut criterion::Criterion) {
    c.bench_function("play a full Robot Session", |b| {
        b.iter(|| {
            let robot = Robot::new(SmallRng::seed_from_u64(1), f64::INFINITY);
            Session::new(Mode::Normal, SmallRng::seed_from_u64(0), robot)
                .run()
                .expect("robot game")
        })
    });
}

use dealornodeal::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
