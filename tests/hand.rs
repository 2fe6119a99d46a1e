//! Hand container tests.

use bragrs::{Card, CardSequence, Hand, HandError, Rank, Suit};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn sample_hand() -> Hand {
    Hand::from(vec![
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Spades, Rank::Two),
        card(Suit::Clubs, Rank::King),
        card(Suit::Diamonds, Rank::Two),
    ])
}

#[test]
fn add_contains_and_count() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());

    hand.add(card(Suit::Hearts, Rank::Ace));
    hand.add(card(Suit::Clubs, Rank::Four));
    assert_eq!(hand.count(), 2);
    assert_eq!(hand.len(), 2);
    assert!(hand.contains(&card(Suit::Hearts, Rank::Ace)));
    assert!(!hand.contains(&card(Suit::Spades, Rank::Ace)));
    assert!(hand.contains_all(&[card(Suit::Clubs, Rank::Four), card(Suit::Hearts, Rank::Ace)]));
    assert!(!hand.contains_all(&[card(Suit::Clubs, Rank::Five)]));
    assert_eq!(hand.count_where(|c| c.rank == Rank::Ace), 1);
}

#[test]
fn duplicates_are_representable() {
    let ace = card(Suit::Hearts, Rank::Ace);
    let hand = Hand::from([ace, ace]);
    assert_eq!(hand.len(), 2);
    assert_eq!(hand.distinct().cards(), [ace]);
}

#[test]
fn get_card_soft_fails_out_of_range() {
    let hand = sample_hand();
    assert_eq!(hand.get_card(2), Some(card(Suit::Clubs, Rank::King)));
    assert_eq!(hand.get_card(4), None);
    assert_eq!(Hand::new().get_card(0), None);
}

#[test]
fn replace_card_validates_inputs() {
    let mut hand = sample_hand();
    let queen = card(Suit::Spades, Rank::Queen);

    assert_eq!(hand.replace_card(1, queen), Ok(()));
    assert_eq!(hand.get_card(1), Some(queen));

    assert_eq!(
        hand.replace_card(9, queen),
        Err(HandError::IndexOutOfRange { index: 9, len: 4 })
    );
    assert_eq!(
        hand.replace_card(0, card(Suit::None, Rank::Ten)),
        Err(HandError::InvalidCard)
    );
    assert_eq!(hand.get_card(0), Some(card(Suit::Hearts, Rank::Nine)));
}

#[test]
fn copy_operations_leave_receiver_untouched() {
    let hand = sample_hand();
    let original = hand.clone();

    let twos = hand.filter(|c| c.rank == Rank::Two);
    assert_eq!(twos.len(), 2);

    let sorted = hand.order_by(|c| c.rank);
    assert_eq!(
        sorted.select(|c| c.rank),
        [Rank::Two, Rank::Two, Rank::Nine, Rank::King]
    );
    // Stable: the spade two was first and stays first.
    assert_eq!(sorted.cards()[0].suit, Suit::Spades);

    let descending = hand.order_by_descending(|c| c.rank);
    assert_eq!(
        descending.select(|c| c.rank),
        [Rank::King, Rank::Nine, Rank::Two, Rank::Two]
    );

    assert_eq!(hand.take(2).cards(), &original.cards()[..2]);
    assert_eq!(hand.skip(3).cards(), &original.cards()[3..]);
    assert_eq!(hand.take(10), original);
    assert!(hand.skip(10).is_empty());

    let spades = hand.map_cards(|c| Card::new(Suit::Spades, c.rank));
    assert!(spades.iter().all(|c| c.suit == Suit::Spades));

    assert_eq!(hand, original);
}

#[test]
fn in_place_operations_mutate_and_chain() {
    let mut hand = sample_hand();
    hand.order_by_in_place(|c| c.rank).skip_in_place(1).take_in_place(2);
    assert_eq!(
        hand.cards(),
        [card(Suit::Diamonds, Rank::Two), card(Suit::Hearts, Rank::Nine)]
    );

    let mut hand = sample_hand();
    hand.filter_in_place(|c| c.rank != Rank::Two)
        .order_by_descending_in_place(|c| c.rank);
    assert_eq!(
        hand.cards(),
        [card(Suit::Clubs, Rank::King), card(Suit::Hearts, Rank::Nine)]
    );

    let mut hand = sample_hand();
    hand.select_in_place(|c| Card::new(Suit::Hearts, c.rank))
        .distinct_in_place();
    assert_eq!(hand.len(), 3);
}

#[test]
fn in_place_operations_work_on_plain_vectors() {
    let mut cards = vec![card(Suit::Hearts, Rank::Five), card(Suit::Hearts, Rank::Three)];
    cards.order_by_in_place(|c| c.rank);
    assert_eq!(cards[0].rank, Rank::Three);
    assert_eq!(cards.get_card(5), None);
}

#[test]
fn set_operations_use_card_equality() {
    let a = Hand::from([
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Clubs, Rank::Four),
    ]);
    let b = Hand::from([card(Suit::Hearts, Rank::Three), card(Suit::Spades, Rank::Four)]);

    assert_eq!(a.concat(&b).len(), 6);
    assert_eq!(
        a.except(&b).cards(),
        [card(Suit::Hearts, Rank::Two), card(Suit::Clubs, Rank::Four)]
    );
    assert_eq!(a.intersect(&b).cards(), [card(Suit::Hearts, Rank::Three)]);
}

#[test]
fn set_operations_write_into_result() {
    let a = Hand::from([card(Suit::Hearts, Rank::Two)]);
    let b = Hand::from([card(Suit::Clubs, Rank::Two)]);
    let mut result = Hand::from([card(Suit::Spades, Rank::Ace)]);

    a.concat_to(&b, &mut result);
    assert_eq!(result.cards(), [a.cards()[0], b.cards()[0]]);

    a.intersect_to(&b, &mut result);
    assert!(result.is_empty());

    let mut plain: Vec<Card> = Vec::new();
    a.except_to(&b, &mut plain);
    assert_eq!(plain, a.cards());
}
