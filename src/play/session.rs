/// One game, start to finish.
///
/// Owns the RNG and the contestant for the whole game. Builds the pool,
/// takes the initial pick, then alternates strictly between asking the
/// contestant and updating the [`Board`] until someone takes a deal or the
/// rounds run out.
pub struct Session<C, R> {
    mode: Mode,
    rng: R,
    contestant: C,
}

impl<C, R> Session<C, R>
where
    C: Contestant,
    R: Rng,
{
    pub fn new(mode: Mode, rng: R, contestant: C) -> Self {
        Self {
            mode,
            rng,
            contestant,
        }
    }
    pub fn contestant(&self) -> &C {
        &self.contestant
    }

    pub fn run(&mut self) -> anyhow::Result<Outcome> {
        let pool = Pool::generate(self.mode, &mut self.rng);
        self.contestant.notify(&Event::Welcome(self.mode));
        let held = self.pick()?;
        let ref mut board = Board::new(pool, held)?;
        self.contestant.notify(&Event::Chosen(held));
        while !board.is_over() {
            let available = board.available();
            self.contestant.notify(&Event::Available {
                held: board.held(),
                open: available.clone(),
            });
            let id = self
                .contestant
                .eliminate(&available)
                .context("ask for a case to eliminate")?;
            let case = match board.open(id) {
                Ok(case) => case,
                Err(invalid) => {
                    log::debug!("rejected elimination of {}: {}", id, invalid);
                    self.contestant.notify(&Event::Invalid(invalid));
                    continue;
                }
            };
            self.contestant.notify(&Event::Opened(case));
            if board.is_offer_round() {
                let offer = board.offer();
                self.contestant.notify(&Event::Offer(offer));
                match self.contestant.deal(offer).context("ask deal or no deal")? {
                    false => self.contestant.notify(&Event::Declined(offer)),
                    true => {
                        self.contestant.notify(&Event::Accepted(offer));
                        let round = board.round();
                        return self.finish(board, Outcome::Deal { offer, round });
                    }
                }
            }
        }
        let switched = self.switch(board)?;
        let case = board.held();
        let value = board.final_result();
        self.contestant.notify(&Event::Revealed { case, value });
        self.finish(
            board,
            Outcome::Payout {
                case,
                value,
                switched,
            },
        )
    }

    /// Asks until the contestant names a case on stage.
    fn pick(&mut self) -> anyhow::Result<CaseId> {
        loop {
            let id = self.contestant.pick().context("ask for the initial case")?;
            match Pool::contains(id) {
                true => return Ok(id),
                false => self
                    .contestant
                    .notify(&Event::Invalid(Invalid::OutOfRange(i64::from(id)))),
            }
        }
    }

    /// Offers the end-game trade if the board allows it.
    fn switch(&mut self, board: &mut Board) -> anyhow::Result<bool> {
        if !board.can_switch() {
            return Ok(false);
        }
        let from = board.held();
        let other = board.counterpart();
        if !self
            .contestant
            .switch(from, other)
            .context("ask to switch cases")?
        {
            return Ok(false);
        }
        match board.switch() {
            Some(to) => {
                self.contestant.notify(&Event::Switched { from, to });
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn finish(&mut self, board: &Board, outcome: Outcome) -> anyhow::Result<Outcome> {
        let summary = Summary {
            mode: self.mode,
            round: board.round(),
            pool: board.pool().iter().map(Case::value).collect(),
            winnings: outcome.winnings(),
            outcome,
        };
        log::info!(
            "{}",
            serde_json::to_string(&summary).context("serialize session summary")?
        );
        self.contestant.notify(&Event::GameOver(outcome));
        Ok(outcome)
    }
}

/// One-line record of a finished game, written to the log.
#[derive(Debug, Serialize)]
struct Summary {
    mode: Mode,
    round: Round,
    pool: Vec<Money>,
    winnings: f64,
    outcome: Outcome,
}

use super::contestant::Contestant;
use super::event::Event;
use super::outcome::Outcome;
use crate::CaseId;
use crate::Money;
use crate::Round;
use crate::cases::Case;
use crate::cases::Mode;
use crate::cases::Pool;
use crate::game::Board;
use crate::game::Invalid;
use anyhow::Context;
use rand::Rng;
use serde::Serialize;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Offer;
    use crate::play::Scripted;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn session(script: Scripted) -> Session<Scripted, SmallRng> {
        Session::new(Mode::Debug, SmallRng::seed_from_u64(0), script)
    }

    fn offers(events: &[Event]) -> Vec<Offer> {
        events
            .iter()
            .filter_map(|e| match e {
                Event::Offer(offer) => Some(*offer),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn plays_to_the_end_and_switches() {
        let mut session = session(Scripted::new([1]).eliminating(2..=10).switching([true]));
        let outcome = session.run().expect("scripted game");
        assert_eq!(
            outcome,
            Outcome::Payout {
                case: 26,
                value: 2_600,
                switched: true,
            }
        );
        let events = session.contestant().events();
        assert!(events.contains(&Event::Switched { from: 1, to: 26 }));
        assert!(events.contains(&Event::Revealed {
            case: 26,
            value: 2_600
        }));
        assert_eq!(events.last(), Some(&Event::GameOver(outcome)));
    }

    #[test]
    fn plays_to_the_end_and_keeps() {
        let mut session = session(Scripted::new([1]).eliminating(2..=10));
        let outcome = session.run().expect("scripted game");
        assert_eq!(
            outcome,
            Outcome::Payout {
                case: 1,
                value: 100,
                switched: false,
            }
        );
    }

    #[test]
    fn offers_come_on_even_rounds() {
        let mut session = session(Scripted::new([1]).eliminating(2..=10));
        session.run().expect("scripted game");
        let offers = offers(session.contestant().events());
        assert_eq!(offers.len(), 4);
        assert_eq!(offers[1].dollars(), 594.78);
    }

    #[test]
    fn accepting_a_deal_ends_the_game() {
        let mut session = session(
            Scripted::new([1])
                .eliminating(2..=10)
                .dealing([false, true])
                .switching([true]),
        );
        let outcome = session.run().expect("scripted game");
        assert_eq!(
            outcome,
            Outcome::Deal {
                offer: Offer::from(594.78),
                round: 4,
            }
        );
        let events = session.contestant().events();
        assert!(events.contains(&Event::Accepted(Offer::from(594.78))));
        assert!(!events.iter().any(|e| matches!(e, Event::Switched { .. })));
        assert!(!events.iter().any(|e| matches!(e, Event::Revealed { .. })));
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, Event::Opened(_)))
                .count(),
            3
        );
    }

    #[test]
    fn invalid_eliminations_are_reported_and_retried() {
        let mut session = session(
            Scripted::new([1]).eliminating([0, 1, 2, 2, 27, 3, 4, 5, 6, 7, 8, 9, 10]),
        );
        let outcome = session.run().expect("scripted game");
        assert!(matches!(outcome, Outcome::Payout { .. }));
        let invalid = session
            .contestant()
            .events()
            .iter()
            .filter_map(|e| match e {
                Event::Invalid(invalid) => Some(*invalid),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(
            invalid,
            vec![
                Invalid::OutOfRange(0),
                Invalid::Unavailable(1),
                Invalid::Unavailable(2),
                Invalid::OutOfRange(27),
            ]
        );
    }

    #[test]
    fn out_of_range_pick_is_asked_again() {
        let mut session = session(Scripted::new([0, 40, 13]).eliminating(1..=9));
        let outcome = session.run().expect("scripted game");
        let events = session.contestant().events();
        assert!(events.contains(&Event::Invalid(Invalid::OutOfRange(0))));
        assert!(events.contains(&Event::Invalid(Invalid::OutOfRange(40))));
        assert!(events.contains(&Event::Chosen(13)));
        assert_eq!(
            outcome,
            Outcome::Payout {
                case: 13,
                value: 1_300,
                switched: false,
            }
        );
    }

    #[test]
    fn shortcut_ending_skips_round_ten() {
        let mut session = session(
            Scripted::new([1])
                .eliminating([2, 3, 4, 5, 6, 7, 8, 25])
                .switching([true]),
        );
        let outcome = session.run().expect("scripted game");
        assert_eq!(
            outcome,
            Outcome::Payout {
                case: 26,
                value: 0,
                switched: true,
            }
        );
    }

    #[test]
    fn available_cases_report_the_held_one() {
        let mut session = session(Scripted::new([13]).eliminating(1..=9));
        session.run().expect("scripted game");
        let first = session
            .contestant()
            .events()
            .iter()
            .find(|e| matches!(e, Event::Available { .. }))
            .cloned();
        assert_eq!(
            first,
            Some(Event::Available {
                held: 13,
                open: (1..=26).filter(|id| *id != 13).collect(),
            })
        );
        assert!(first.map(|e| e.to_string()).is_some_and(|s| s.contains(" 13 ")));
    }

    #[test]
    fn exhausted_script_is_an_error() {
        let mut session = session(Scripted::new([1]).eliminating(2..=5));
        assert!(session.run().is_err());
    }
}
