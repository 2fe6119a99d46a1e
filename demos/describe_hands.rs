//! Classifies hands given as symbol strings.
//!
//! ```text
//! cargo run --example describe_hands -- "A♠ K♠ Q♠" "2♥ 2♦ 7♣"
//! ```
//!
//! Without arguments, prints one generated example hand per combination.

use std::cmp::Ordering;
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use bragrs::{
    Combination, GameMode, HandGenerator, classify, compare_hands, evaluate, hand_as_symbols,
    hand_from_symbol_string,
};

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let mode = GameMode::default();
    let hands: Vec<_> = env::args().skip(1).map(|arg| hand_from_symbol_string(&arg)).collect();

    if hands.is_empty() {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let mut generator = HandGenerator::new(seed);
        println!("Example hands (seed {seed}):");
        for combination in Combination::ALL {
            match generator.example_hand(combination, &mode, None) {
                Ok(hand) => println!("  {combination:<18} {}", hand_as_symbols(hand.cards())),
                Err(err) => println!("  {combination:<18} unavailable: {err}"),
            }
        }
        return;
    }

    for hand in &hands {
        let strength = evaluate(hand.cards(), None, &mode);
        println!(
            "{:<16} {} {:?}",
            hand_as_symbols(hand.cards()),
            classify(hand.cards(), None, &mode),
            strength.values
        );
    }

    if let [a, b] = hands.as_slice() {
        let verdict = match compare_hands(a.cards(), b.cards(), None, &mode) {
            Ordering::Greater => "first hand wins",
            Ordering::Less => "second hand wins",
            Ordering::Equal => "hands tie",
        };
        println!("{verdict}");
    }
}
