// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel nuts search.
use log::debug;
use std::{panic, thread};

use pokerdrill_cards::Card;

use super::{Nuts, opponent_deck};
use crate::{HandCategory, best_category};

/// Finds the nuts like [find_nuts](super::find_nuts) splitting the opponent
/// hands search across `num_tasks` tasks.
///
/// Task `t` takes the pairs whose first card is at a position `p` in the
/// unseen cards with `p % num_tasks == t`.
///
/// Panics if `num_tasks` is zero.
pub fn find_nuts_par(board: &[Card], hero: Option<&[Card]>, num_tasks: usize) -> Nuts {
    assert!(num_tasks > 0);

    if board.is_empty() {
        return Nuts::PocketAces;
    }

    let deck = opponent_deck(board, hero);
    let unseen = deck.cards();
    debug!(
        "Parallel nuts search with {num_tasks} tasks over {} cards",
        unseen.len()
    );

    let best = par_max(num_tasks, |task_id| {
        let mut cards = board.to_vec();
        let mut best = HandCategory::HighCard;

        for c1 in (task_id..unseen.len()).step_by(num_tasks) {
            for &c2 in &unseen[(c1 + 1)..] {
                cards.truncate(board.len());
                cards.extend_from_slice(&[unseen[c1], c2]);
                best = best.max(best_category(&cards));
            }
        }

        best
    });

    Nuts::Hand(best)
}

/// Runs `f` with each task id in `0..num_tasks` on scoped threads and
/// returns the strongest category.
///
/// A panic in any task is resumed on the calling thread.
fn par_max<F>(num_tasks: usize, f: F) -> HandCategory
where
    F: Fn(usize) -> HandCategory + Sync,
{
    thread::scope(|s| {
        let handles = (0..num_tasks)
            .map(|task_id| {
                let f = &f;
                s.spawn(move || f(task_id))
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .max()
            .unwrap_or(HandCategory::HighCard)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::find_nuts;
    use pokerdrill_cards::Deck;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn same_as_sequential() {
        let mut rng = StdRng::seed_from_u64(5);

        for board_len in [3, 4, 5] {
            for _ in 0..5 {
                let mut deck = Deck::new_and_shuffled(&mut rng);
                let hero = [deck.deal(), deck.deal()];
                let board = (0..board_len).map(|_| deck.deal()).collect::<Vec<_>>();

                for num_tasks in [1, 3, 8] {
                    assert_eq!(
                        find_nuts_par(&board, Some(&hero), num_tasks),
                        find_nuts(&board, Some(&hero))
                    );
                }
            }
        }
    }

    #[test]
    fn strongest_task_wins() {
        let best = par_max(4, |task_id| match task_id {
            2 => HandCategory::FullHouse,
            _ => HandCategory::OnePair,
        });
        assert_eq!(best, HandCategory::FullHouse);
    }

    #[test]
    #[should_panic(expected = "task 2 failed")]
    fn task_panic_reaches_caller() {
        par_max(4, |task_id| {
            if task_id == 2 {
                panic!("task {task_id} failed");
            }

            HandCategory::Flush
        });
    }

    #[test]
    fn empty_board() {
        assert_eq!(find_nuts_par(&[], None, 4), Nuts::PocketAces);
    }
}
