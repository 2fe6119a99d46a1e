//! Classification and ranking tests.

use std::cmp::Ordering;

use bragrs::analysis::{is_flush, is_pair, is_royal_sequence, is_sequence, pair_ranks};
use bragrs::{
    Card, Combination, GameMode, Rank, Suit, classify, compare_hands, convert_from_symbols,
    evaluate, hand_from_symbol_string,
};

fn classify_str(symbols: &str, mode: &GameMode) -> Combination {
    classify(hand_from_symbol_string(symbols).cards(), None, mode)
}

#[test]
fn royal_hand_end_to_end() {
    let hand = convert_from_symbols(&["A♠", "K♠", "Q♠"]);
    assert!(is_flush(hand.cards()));
    assert!(is_sequence(hand.cards()));
    assert!(is_royal_sequence(hand.cards()));
    assert_eq!(
        classify(hand.cards(), None, &GameMode::default()),
        Combination::RoyalSequence
    );
}

#[test]
fn pair_hand_end_to_end() {
    let hand = convert_from_symbols(&["2♥", "2♦", "7♣"]);
    assert_eq!(pair_ranks(hand.cards(), None, false), Some(vec![Rank::Two]));

    let trump = Card::new(Suit::Clubs, Rank::Seven);
    assert!(!is_pair(hand.cards(), Some(trump), true));

    let mode = GameMode::default();
    assert_eq!(classify(hand.cards(), None, &mode), Combination::Pair);
    // The held trump cannot make a pair, but it completes the twos instead.
    let trump_mode = mode.with_use_trump(true);
    assert_eq!(
        classify(hand.cards(), Some(trump), &trump_mode),
        Combination::ThreeOfAKind
    );
}

#[test]
fn three_card_classification() {
    let mode = GameMode::default();
    assert_eq!(classify_str("A♥ A♣ A♦", &mode), Combination::FullHouse);
    assert_eq!(classify_str("5♥ 5♣ 5♦", &mode), Combination::ThreeOfAKind);
    assert_eq!(classify_str("4♥ 5♥ 6♥", &mode), Combination::StraightFlush);
    assert_eq!(classify_str("A♥ 2♣ 3♦", &mode), Combination::Sequence);
    assert_eq!(classify_str("K♠ A♣ 2♦", &mode), Combination::Sequence);
    assert_eq!(classify_str("2♥ 9♥ J♥", &mode), Combination::Flush);
    assert_eq!(classify_str("9♥ 9♣ J♦", &mode), Combination::Pair);
    assert_eq!(classify_str("2♥ 9♣ J♦", &mode), Combination::HighCard);
}

#[test]
fn larger_hand_classification() {
    let four = GameMode::default().with_number_of_cards(4);
    assert_eq!(classify_str("7♥ 7♣ 7♦ 7♠", &four), Combination::FourOfAKind);
    assert_eq!(classify_str("A♥ A♣ A♦ A♠", &four), Combination::FullHouse);
    assert_eq!(classify_str("7♥ 7♣ 9♦ 9♠", &four), Combination::MultiplePairs);

    let six = GameMode::default().with_number_of_cards(6);
    assert_eq!(
        classify_str("4♥ 4♣ 4♦ 9♥ 9♣ 9♦", &six),
        Combination::MultipleTriplets
    );
    assert_eq!(
        classify_str("A♥ A♣ A♦ A♠ K♥ K♣", &six),
        Combination::FullHouse
    );
}

#[test]
fn trump_completes_three_of_a_kind() {
    let trump = Card::new(Suit::Spades, Rank::Two);
    let hand = hand_from_symbol_string("8♥ 8♣ 2♠");
    let mode = GameMode::default().with_use_trump(true);
    assert_eq!(
        classify(hand.cards(), Some(trump), &mode),
        Combination::ThreeOfAKind
    );
    assert_eq!(
        classify(hand.cards(), Some(trump), &GameMode::default()),
        Combination::Pair
    );
}

#[test]
fn magic_trump_completes_sequence() {
    let trump = Card::new(Suit::Spades, Rank::Two);
    let mode = GameMode::default().with_use_magic_cards(true);

    let hand = hand_from_symbol_string("5♥ 7♥ 2♠");
    assert_eq!(
        classify(hand.cards(), Some(trump), &mode),
        Combination::StraightFlush
    );

    let hand = hand_from_symbol_string("5♥ 7♣ 2♠");
    assert_eq!(
        classify(hand.cards(), Some(trump), &mode),
        Combination::Sequence
    );
    assert_eq!(
        classify(hand.cards(), Some(trump), &GameMode::default()),
        Combination::HighCard
    );
}

#[test]
fn combinations_are_ordered_weakest_first() {
    let mut sorted = Combination::ALL;
    sorted.sort();
    assert_eq!(sorted, Combination::ALL);
    assert!(Combination::RoyalSequence > Combination::FullHouse);
    assert!(Combination::ThreeOfAKind > Combination::StraightFlush);
    assert!(Combination::Pair > Combination::HighCard);
}

#[test]
fn compare_by_combination_then_values() {
    let mode = GameMode::default();
    let cmp = |a: &str, b: &str| {
        compare_hands(
            hand_from_symbol_string(a).cards(),
            hand_from_symbol_string(b).cards(),
            None,
            &mode,
        )
    };

    assert_eq!(cmp("5♥ 5♣ 5♦", "4♥ 5♥ 6♥"), Ordering::Greater);
    assert_eq!(cmp("9♥ 9♣ 2♦", "8♥ 8♣ A♦"), Ordering::Greater);
    assert_eq!(cmp("9♥ 9♣ 2♦", "9♦ 9♠ 3♣"), Ordering::Less);
    assert_eq!(cmp("2♥ 9♣ J♦", "2♣ 9♦ J♠"), Ordering::Equal);
    // A-2-3 outranks K-Q-J; Q-K-A outranks A-2-3.
    assert_eq!(cmp("A♥ 2♣ 3♦", "K♥ Q♣ J♦"), Ordering::Greater);
    assert_eq!(cmp("Q♥ K♣ A♦", "A♥ 2♣ 3♦"), Ordering::Greater);
}

#[test]
fn strength_values_group_by_count() {
    let hand = hand_from_symbol_string("3♥ K♣ 3♦");
    let strength = evaluate(hand.cards(), None, &GameMode::default());
    assert_eq!(strength.combination, Combination::Pair);
    assert_eq!(strength.values, [3, 3, 13]);
}

#[test]
fn combination_names() {
    assert_eq!(Combination::ThreeOfAKind.to_string(), "three of a kind");
    assert_eq!(format!("{:<6}|", Combination::Pair), "pair  |");
}

#[test]
fn wild_sequence_ranks_by_the_completed_run() {
    let trump = Card::new(Suit::Spades, Rank::Two);
    let mode = GameMode::default().with_use_magic_cards(true);

    // 5-6 plus the wild plays as 5-6-7.
    let wild = hand_from_symbol_string("5♥ 6♣ 2♠");
    let natural = hand_from_symbol_string("4♦ 5♣ 6♦");
    let strength = evaluate(wild.cards(), Some(trump), &mode);
    assert_eq!(strength.combination, Combination::Sequence);
    assert_eq!(strength.values, [7, 6, 5]);
    assert_eq!(
        compare_hands(wild.cards(), natural.cards(), Some(trump), &mode),
        Ordering::Greater
    );

    // Without magic cards the trump is just a two.
    let plain = evaluate(wild.cards(), Some(trump), &GameMode::default());
    assert_eq!(plain.combination, Combination::HighCard);
    assert_eq!(plain.values, [6, 5, 2]);
}
