use pokerbot::Arbitrary;
use pokerbot::cards::*;
use pokerbot::compiler::*;
use pokerbot::config::Config;
use pokerbot::gameplay::*;
use pokerbot::opponents::Tendencies;
use pokerbot::patterns::*;
use pokerbot::runtime::Runtime;
use std::collections::BTreeMap;
use std::sync::Arc;

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
        evaluating_river_hand,
        classifying_flop_texture,
        extracting_hand_batch,
        compiling_rule_set,
        deciding_compiled_spot,
}

/// Seven distinct random cards.
fn seven() -> Hand {
    let mut hand = Hand::empty();
    while hand.size() < 7 {
        hand = Hand::add(hand, Hand::from(Card::random()));
    }
    hand
}

/// Heads-up flop bet that takes the pot, on a random flop.
fn steal(id: HandId) -> Record {
    let cards = Vec::<Card>::from(seven());
    let hero = Hole::from((cards[0], cards[1]));
    let flop = Board::try_from(Hand::from(&cards[2..5])).expect("three cards");
    let blinds = vec![
        Ply::from((Street::Pref, 0, Action::Blind(1))),
        Ply::from((Street::Pref, 1, Action::Blind(2))),
        Ply::from((Street::Pref, 0, Action::Call(1))),
        Ply::from((Street::Pref, 1, Action::Check)),
    ];
    Record {
        id,
        players: BTreeMap::from([(0, "hero".into()), (1, "villain".into())]),
        steps: vec![Step::from((
            GameState::new(Street::Flop, 0, 2, 98, 4)
                .with_board(flop)
                .with_hole(hero)
                .with_history(blinds),
            Action::Raise(3),
        ))],
        outcome: Outcome {
            invested: BTreeMap::from([(0, 5), (1, 2)]),
            payouts: BTreeMap::from([(0, 7)]),
            ..Outcome::default()
        },
    }
}

fn evaluating_river_hand(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card Hand", |b| {
        let hand = seven();
        b.iter(|| evaluate(hand))
    });
}

fn classifying_flop_texture(c: &mut criterion::Criterion) {
    c.bench_function("classify a Flop Texture", |b| {
        let board = Board::try_from(Hand::from(&Vec::<Card>::from(seven())[..3])).expect("three cards");
        b.iter(|| Texture::from(board))
    });
}

fn extracting_hand_batch(c: &mut criterion::Criterion) {
    let hands = (0..1000).map(steal).collect::<Vec<_>>();
    c.bench_function("extract 1000 Records", |b| {
        b.iter(|| extract(&hands, &Config::default()))
    });
}

fn compiling_rule_set(c: &mut criterion::Criterion) {
    let patterns = extract(&(0..1000).map(steal).collect::<Vec<_>>(), &Config::default());
    c.bench_function("compile a RuleSet", |b| {
        b.iter(|| compile(&patterns, &Config::default()))
    });
}

fn deciding_compiled_spot(c: &mut criterion::Criterion) {
    let hands = (0..1000).map(steal).collect::<Vec<_>>();
    let rules = compile(&extract(&hands, &Config::default()), &Config::default());
    let runtime = Runtime::new(
        Arc::new(Library::new(rules)),
        Arc::new(Tendencies::default()),
        Config::default(),
    );
    let state = hands[0].steps[0].state.clone();
    c.bench_function("decide a compiled spot", |b| {
        b.iter(|| runtime.decide(&state, "villain"))
    });
}
