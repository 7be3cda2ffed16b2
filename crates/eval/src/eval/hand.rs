// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hands evaluation.
use pokerdrill_cards::Card;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::HandCategory;

/// The evaluation of a five cards hand.
///
/// A [HandEval] keeps the category together with the five cards that make
/// it, sorted by decreasing rank, so that two hands of the same category
/// can be compared with [HandEval::is_better_than].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandEval {
    category: HandCategory,
    cards: [Card; 5],
}

/// The strength of a hand.
///
/// Strengths compare by category first and then by the category tie-break
/// ranks, two strengths are equal when the hands split the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandStrength {
    category: HandCategory,
    ranks: [u8; 5],
}

impl HandStrength {
    /// The strength category.
    pub fn category(&self) -> HandCategory {
        self.category
    }
}

impl HandEval {
    /// Classifies a five cards hand.
    pub fn classify(mut cards: [Card; 5]) -> Self {
        cards.sort_unstable_by(|a, b| b.cmp(a));

        let values = values(&cards);
        let groups = groups(&values);
        let first = groups[0].0;
        let second = groups.get(1).map_or(0, |g| g.0);

        let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let straight = straight_high(&values).is_some();

        let category = if flush && straight && values[4] == 10 {
            HandCategory::RoyalFlush
        } else if flush && straight {
            HandCategory::StraightFlush
        } else if first == 4 {
            HandCategory::FourOfAKind
        } else if first == 3 && second == 2 {
            HandCategory::FullHouse
        } else if flush {
            HandCategory::Flush
        } else if straight {
            HandCategory::Straight
        } else if first == 3 {
            HandCategory::ThreeOfAKind
        } else if first == 2 && second == 2 {
            HandCategory::TwoPair
        } else if first == 2 {
            HandCategory::OnePair
        } else {
            HandCategory::HighCard
        };

        Self { category, cards }
    }

    /// Evaluates the best five cards hand out of 5, 6 or 7 cards.
    ///
    /// All the five cards subsets are classified, among the subsets with
    /// the strongest category the one that wins the tie-break is kept.
    ///
    /// Panics if the number of cards is not 5 <= n <= 7.
    pub fn best(cards: &[Card]) -> Self {
        assert!(
            (5..=7).contains(&cards.len()),
            "a hand needs 5 to 7 cards, got {}",
            cards.len()
        );

        let mut best = Self::classify([cards[0], cards[1], cards[2], cards[3], cards[4]]);
        let mut best_strength = best.strength();

        for_each_five(cards, |hand| {
            let eval = Self::classify(hand);
            let strength = eval.strength();
            if strength > best_strength {
                best = eval;
                best_strength = strength;
            }
        });

        best
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The five cards that make this hand from the highest rank.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// Returns this hand strength.
    pub fn strength(&self) -> HandStrength {
        HandStrength {
            category: self.category,
            ranks: self.tiebreak_ranks(),
        }
    }

    /// Checks if this hand beats `other`, both hands must have the same
    /// category.
    pub fn is_better_than(&self, other: &HandEval) -> bool {
        debug_assert_eq!(self.category, other.category, "different categories");
        self.tiebreak_ranks() > other.tiebreak_ranks()
    }

    /// The ranks compared position by position to break a tie between two
    /// hands of this category.
    fn tiebreak_ranks(&self) -> [u8; 5] {
        let values = values(&self.cards);
        match self.category {
            HandCategory::RoyalFlush => [0; 5],
            HandCategory::StraightFlush | HandCategory::Straight => straight_ranks(&values),
            HandCategory::Flush | HandCategory::HighCard => values,
            HandCategory::FourOfAKind => kind_ranks(&values, &[4, 1]),
            HandCategory::FullHouse => kind_ranks(&values, &[3, 2]),
            HandCategory::ThreeOfAKind => kind_ranks(&values, &[3, 1, 1]),
            HandCategory::TwoPair => kind_ranks(&values, &[2, 2, 1]),
            HandCategory::OnePair => kind_ranks(&values, &[2, 1, 1, 1]),
        }
    }
}

impl fmt::Display for HandEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category)?;
        for (pos, card) in self.cards.iter().enumerate() {
            if pos > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str(")")
    }
}

/// Checks if `new` beats `current`, both hands must have the same category.
pub fn is_better(current: &HandEval, new: &HandEval) -> bool {
    new.is_better_than(current)
}

/// Returns the best hand category out of 5, 6 or 7 cards.
pub fn best_category(cards: &[Card]) -> HandCategory {
    HandEval::best(cards).category()
}

/// Calls `f` for each five cards subset of `cards`.
fn for_each_five<F>(cards: &[Card], mut f: F)
where
    F: FnMut([Card; 5]),
{
    let n = cards.len();
    for c1 in 0..n {
        for c2 in (c1 + 1)..n {
            for c3 in (c2 + 1)..n {
                for c4 in (c3 + 1)..n {
                    for c5 in (c4 + 1)..n {
                        f([cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]]);
                    }
                }
            }
        }
    }
}

/// The card values, for sorted cards these are in decreasing order.
fn values(cards: &[Card; 5]) -> [u8; 5] {
    cards.map(|c| c.value())
}

/// Groups decreasing values into (count, value) pairs sorted by count and
/// then by value.
fn groups(values: &[u8; 5]) -> Vec<(u8, u8)> {
    let mut groups = values
        .chunk_by(|a, b| a == b)
        .map(|g| (g.len() as u8, g[0]))
        .collect::<Vec<_>>();

    // Stable sort keeps higher values first within the same count.
    groups.sort_by(|a, b| b.0.cmp(&a.0));
    groups
}

/// The straight high card for decreasing values, the wheel A-2-3-4-5 is
/// a five high straight.
fn straight_high(values: &[u8; 5]) -> Option<u8> {
    let distinct = values.windows(2).all(|w| w[0] != w[1]);
    if !distinct {
        None
    } else if values[0] - values[4] == 4 {
        Some(values[0])
    } else if *values == [14, 5, 4, 3, 2] {
        Some(5)
    } else {
        None
    }
}

fn straight_ranks(values: &[u8; 5]) -> [u8; 5] {
    let high = straight_high(values);
    debug_assert!(high.is_some(), "not a straight {values:?}");
    [high.unwrap_or(values[0]), 0, 0, 0, 0]
}

/// The group values for a hand with the given count pattern, the kind
/// values come first and the kickers follow in decreasing order.
fn kind_ranks(values: &[u8; 5], pattern: &[u8]) -> [u8; 5] {
    let groups = groups(values);
    debug_assert!(
        groups.iter().map(|g| g.0).eq(pattern.iter().copied()),
        "expected count pattern {pattern:?} for {values:?}"
    );

    let mut ranks = [0; 5];
    for (rank, (_, value)) in ranks.iter_mut().zip(groups) {
        *rank = value;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use pokerdrill_cards::{Deck, parse_cards};
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    fn hand(s: &str) -> HandEval {
        let cards = parse_cards(s).unwrap();
        HandEval::classify(cards.try_into().unwrap())
    }

    fn best(s: &str) -> HandEval {
        HandEval::best(&parse_cards(s).unwrap())
    }

    fn category(s: &str) -> HandCategory {
        best_category(&parse_cards(s).unwrap())
    }

    #[test]
    fn classify_all_categories() {
        use HandCategory::*;

        let hands = [
            ("A♠ K♠ Q♠ J♠ T♠", RoyalFlush),
            ("9♥ K♥ Q♥ J♥ T♥", StraightFlush),
            ("A♦ 2♦ 3♦ 4♦ 5♦", StraightFlush),
            ("7♠ 7♥ 7♦ 7♣ 2♠", FourOfAKind),
            ("7♠ 7♥ 7♦ 2♣ 2♠", FullHouse),
            ("A♣ 9♣ 7♣ 4♣ 2♣", Flush),
            ("T♠ J♥ Q♦ K♣ A♠", Straight),
            ("A♠ 2♥ 3♦ 4♣ 5♠", Straight),
            ("7♠ 7♥ 7♦ K♣ 2♠", ThreeOfAKind),
            ("7♠ 7♥ K♦ K♣ 2♠", TwoPair),
            ("7♠ 7♥ A♦ K♣ 2♠", OnePair),
            ("7♠ 9♥ A♦ K♣ 2♠", HighCard),
        ];

        for (cards, category) in hands {
            assert_eq!(hand(cards).category(), category, "{cards}");
        }
    }

    #[test]
    fn no_wraparound_straight() {
        assert_eq!(hand("Q♠ K♥ A♦ 2♣ 3♠").category(), HandCategory::HighCard);
        assert_eq!(hand("J♠ Q♥ K♦ A♣ 2♠").category(), HandCategory::HighCard);
    }

    #[test]
    fn royal_is_not_straight_flush() {
        for suit in ["♠", "♥", "♦", "♣"] {
            let cards = format!("T{suit} J{suit} Q{suit} K{suit} A{suit}");
            assert_eq!(hand(&cards).category(), HandCategory::RoyalFlush);
        }
    }

    #[test]
    fn classify_sorts_cards() {
        let eval = hand("2♠ A♥ 9♦ 5♣ K♠");
        let values = eval.cards().map(|c| c.value());
        assert_eq!(values, [14, 13, 9, 5, 2]);
        assert_eq!(eval.to_string(), "High Card (A♥ K♠ 9♦ 5♣ 2♠)");
    }

    #[test]
    fn best_of_seven() {
        let eval = best("A♠ K♠ 2♠ 7♠ 9♣ 4♠ 4♥");
        assert_eq!(eval.category(), HandCategory::Flush);
        assert_eq!(eval.cards().map(|c| c.value()), [14, 13, 7, 4, 2]);

        let eval = best("4♠ 5♥ 6♦ 7♣ 8♠ 9♥ 2♦");
        assert_eq!(eval.category(), HandCategory::Straight);
        assert_eq!(eval.cards()[0].value(), 9);

        let eval = best("K♠ K♥ K♦ 2♣ 2♠ 3♥ 3♦");
        assert_eq!(eval.category(), HandCategory::FullHouse);
        assert_eq!(eval.cards().map(|c| c.value()), [13, 13, 13, 3, 3]);

        assert_eq!(category("2♠ 3♥ 4♦ 5♣ 7♠"), HandCategory::HighCard);
        assert_eq!(category("A♠ 3♥ 4♦ 5♣ 2♠ 2♥"), HandCategory::Straight);
    }

    #[test]
    fn best_picks_top_kickers() {
        let eval = best("A♠ A♥ 2♦ 3♣ 7♠ Q♥ J♦");
        assert_eq!(eval.category(), HandCategory::OnePair);
        assert_eq!(eval.cards().map(|c| c.value()), [14, 14, 12, 11, 7]);
    }

    #[test]
    #[should_panic]
    fn best_needs_five_cards() {
        best("A♠ A♥ 2♦ 3♣");
    }

    #[test]
    fn best_is_order_invariant() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let mut cards = (0..7).map(|_| deck.deal()).collect::<Vec<_>>();
            let strength = HandEval::best(&cards).strength();

            for _ in 0..5 {
                cards.shuffle(&mut rng);
                assert_eq!(HandEval::best(&cards).strength(), strength);
                assert_eq!(best_category(&cards), strength.category());
            }
        }
    }

    #[test]
    fn tiebreak_straights() {
        let wheel = hand("A♠ 2♥ 3♦ 4♣ 5♠");
        let six = hand("2♠ 3♥ 4♦ 5♣ 6♠");
        let broadway = hand("T♠ J♥ Q♦ K♣ A♠");

        assert!(is_better(&wheel, &six));
        assert!(!is_better(&six, &wheel));
        assert!(is_better(&six, &broadway));

        let steel = hand("A♦ 2♦ 3♦ 4♦ 5♦");
        let six_sf = hand("2♥ 3♥ 4♥ 5♥ 6♥");
        assert!(is_better(&steel, &six_sf));
    }

    #[test]
    fn tiebreak_royal_flushes_tie() {
        let a = hand("A♠ K♠ Q♠ J♠ T♠");
        let b = hand("A♥ K♥ Q♥ J♥ T♥");
        assert!(!is_better(&a, &b));
        assert!(!is_better(&b, &a));
    }

    #[test]
    fn tiebreak_flush_and_high_card() {
        let a = hand("A♣ 9♣ 7♣ 4♣ 2♣");
        let b = hand("A♥ 9♥ 7♥ 5♥ 2♥");
        assert!(is_better(&a, &b));
        assert!(!is_better(&b, &a));

        let a = hand("K♣ Q♥ 7♦ 4♣ 2♠");
        let b = hand("K♦ Q♠ 8♥ 3♣ 2♥");
        assert!(is_better(&a, &b));
    }

    #[test]
    fn tiebreak_four_of_a_kind() {
        let a = hand("7♠ 7♥ 7♦ 7♣ 2♠");
        let b = hand("7♠ 7♥ 7♦ 7♣ K♠");
        let c = hand("8♠ 8♥ 8♦ 8♣ 2♠");
        assert!(is_better(&a, &b));
        assert!(is_better(&b, &c));
        assert!(!is_better(&c, &b));
    }

    #[test]
    fn tiebreak_full_house() {
        let a = hand("7♠ 7♥ 7♦ A♣ A♠");
        let b = hand("8♠ 8♥ 8♦ 2♣ 2♠");
        let c = hand("8♠ 8♥ 8♦ 3♣ 3♠");
        assert!(is_better(&a, &b));
        assert!(is_better(&b, &c));
        assert!(!is_better(&c, &a));
    }

    #[test]
    fn tiebreak_three_of_a_kind() {
        let a = hand("7♠ 7♥ 7♦ K♣ 2♠");
        let b = hand("7♠ 7♥ 7♦ K♣ 3♠");
        let c = hand("8♠ 8♥ 8♦ 3♣ 2♠");
        assert!(is_better(&a, &b));
        assert!(is_better(&b, &c));
        assert!(!is_better(&b, &a));
    }

    #[test]
    fn tiebreak_two_pair() {
        let a = hand("K♠ K♥ 2♦ 2♣ A♠");
        let b = hand("K♠ K♥ 3♦ 3♣ 2♠");
        let c = hand("K♠ K♥ 3♦ 3♣ 4♠");
        let d = hand("A♠ A♥ 2♦ 2♣ 3♠");
        assert!(is_better(&a, &b));
        assert!(is_better(&b, &c));
        assert!(is_better(&c, &d));
        assert!(!is_better(&d, &a));
    }

    #[test]
    fn tiebreak_one_pair() {
        let a = hand("9♠ 9♥ A♦ 5♣ 3♠");
        let b = hand("9♠ 9♥ A♦ 5♣ 4♠");
        let c = hand("T♠ T♥ 4♦ 3♣ 2♠");
        assert!(is_better(&a, &b));
        assert!(is_better(&b, &c));
        assert!(!is_better(&c, &a));
    }

    #[test]
    fn tiebreak_is_irreflexive_and_consistent() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut hands = Vec::new();

        for _ in 0..2_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let cards: [Card; 5] = std::array::from_fn(|_| deck.deal());
            hands.push(HandEval::classify(cards));
        }

        for category in HandCategory::ALL {
            let same = hands
                .iter()
                .filter(|h| h.category() == category)
                .take(60)
                .collect::<Vec<_>>();

            for a in &same {
                assert!(!is_better(a, a), "{a}");
                for b in &same {
                    // At most one direction wins.
                    assert!(!(is_better(a, b) && is_better(b, a)), "{a} {b}");
                    for c in &same {
                        if is_better(a, b) && is_better(b, c) {
                            assert!(is_better(a, c), "{a} {b} {c}");
                        }
                    }
                }
            }
        }
    }

    // Classifies all the 2.6M five cards hands.
    #[test]
    #[ignore]
    fn category_counts() {
        let mut counts = [0usize; 10];
        Deck::default().for_each(5, |cards| {
            let cards = [cards[0], cards[1], cards[2], cards[3], cards[4]];
            counts[HandEval::classify(cards).category() as usize] += 1;
        });

        assert_eq!(
            counts,
            [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 36, 4]
        );
    }

    // Counts the distinct hand strengths over all five cards hands.
    #[test]
    #[ignore]
    fn distinct_strengths() {
        let mut strengths = HashSet::default();
        Deck::default().for_each(5, |cards| {
            let cards = [cards[0], cards[1], cards[2], cards[3], cards[4]];
            strengths.insert(HandEval::classify(cards).strength());
        });

        assert_eq!(strengths.len(), 7_462);
    }
}
