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
        evaluating_five_cards,
        evaluating_three_cards,
        analyzing_a_starting_hand,
        playing_one_hand,
        running_one_session,
}

fn evaluating_five_cards(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 5-card hand", |b| {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let mut deck = Deck::new();
        b.iter(|| {
            deck.reset();
            let cards = [
                deck.draw(rng),
                deck.draw(rng),
                deck.draw(rng),
                deck.draw(rng),
                deck.draw(rng),
            ];
            evaluate(&cards)
        })
    });
}

fn evaluating_three_cards(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 3-card bonus hand", |b| {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let mut deck = Deck::new();
        b.iter(|| {
            deck.reset();
            let cards = [deck.draw(rng), deck.draw(rng), deck.draw(rng)];
            evaluate_trio(&cards)
        })
    });
}

fn analyzing_a_starting_hand(c: &mut criterion::Criterion) {
    c.bench_function("analyze a 3-card starting hand", |b| {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut deck = Deck::new();
        b.iter(|| {
            deck.reset();
            let cards = [deck.draw(rng), deck.draw(rng), deck.draw(rng)];
            HandAnalysis::from(cards.as_slice())
        })
    });
}

fn playing_one_hand(c: &mut criterion::Criterion) {
    c.bench_function("play one full hand", |b| {
        let ref mut rng = SmallRng::seed_from_u64(4);
        let mut engine = Engine::new(Paytable::standard(), BonusPaytable::standard(), 0);
        let context = StrategyContext {
            bankroll: 1_000.0,
            profit: 0.0,
            streak: 0,
            hands: 0,
            base_bet: 10.0,
            min_bet: 5.0,
            max_bet: 500.0,
        };
        b.iter(|| engine.play(rng, &Basic, &context, 10.0, 1.0))
    });
}

fn running_one_session(c: &mut criterion::Criterion) {
    c.bench_function("run a 500-hand session", |b| {
        let config = SessionConfig {
            bankroll: 1_000_000.0,
            max_hands: Some(500),
            ..SessionConfig::default()
        };
        b.iter(|| {
            let ref mut rng = SmallRng::seed_from_u64(5);
            let mut session = Session::new(
                config.clone(),
                Box::new(Basic),
                Box::new(Flat::new(10.0).unwrap()),
                Box::new(Never),
            )
            .unwrap();
            session.run(rng, 0, 5)
        })
    });
}

use letitride::betting::flat::Flat;
use letitride::cards::deck::Deck;
use letitride::evaluation::analysis::HandAnalysis;
use letitride::evaluation::evaluator::evaluate;
use letitride::evaluation::trio::evaluate_trio;
use letitride::game::engine::Engine;
use letitride::game::paytable::{BonusPaytable, Paytable};
use letitride::session::config::SessionConfig;
use letitride::session::session::Session;
use letitride::strategy::basic::Basic;
use letitride::strategy::bonus::Never;
use letitride::strategy::context::StrategyContext;
use rand::rngs::SmallRng;
use rand::SeedableRng;
