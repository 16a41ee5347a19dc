/// Round-by-round state of a single game.
///
/// States are `(round, eliminated)`. Every [`Board::open`] moves round `k` to
/// `k + 1`; the game stops at round 10, or at round 9 once case 25 is open.
/// The held case is never opened by an elimination, only retired by
/// [`Board::switch`].
#[derive(Debug, Clone)]
pub struct Board {
    pool: Pool,
    held: CaseId,
    round: Round,
    eliminated: u32,
}

impl Board {
    /// Starts a game in round 1 with the contestant holding `held`.
    pub fn new(pool: Pool, held: CaseId) -> Result<Self, Invalid> {
        match Pool::contains(held) {
            false => Err(Invalid::OutOfRange(i64::from(held))),
            true => Ok(Self {
                pool,
                held,
                round: FIRST_ROUND,
                eliminated: 0,
            }),
        }
    }

    fn mask(id: CaseId) -> u32 {
        1 << (id - 1)
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }
    pub fn held(&self) -> CaseId {
        self.held
    }
    pub fn round(&self) -> Round {
        self.round
    }
    /// Count of cases still closed, the held one included.
    pub fn remaining(&self) -> usize {
        N_CASES - self.eliminated.count_ones() as usize
    }
    pub fn is_eliminated(&self, id: CaseId) -> bool {
        Pool::contains(id) && self.eliminated & Self::mask(id) != 0
    }
    /// Cases the contestant may still eliminate, ascending.
    pub fn available(&self) -> Vec<CaseId> {
        (FIRST_CASE..=LAST_CASE)
            .filter(|id| self.is_valid_choice(*id))
            .collect()
    }

    /// In range, still closed, and not the held case.
    pub fn is_valid_choice(&self, id: CaseId) -> bool {
        Pool::contains(id) && !self.is_eliminated(id) && id != self.held
    }

    /// Eliminates a case and advances the round.
    /// Rejected choices leave the board untouched, and a finished game
    /// rejects everything.
    pub fn open(&mut self, id: CaseId) -> Result<Case, Invalid> {
        if self.is_over() {
            return Err(Invalid::GameOver);
        }
        if !Pool::contains(id) {
            return Err(Invalid::OutOfRange(i64::from(id)));
        }
        if !self.is_valid_choice(id) {
            return Err(Invalid::Unavailable(id));
        }
        let case = *self.pool.get(id).ok_or(Invalid::Unavailable(id))?;
        self.eliminated |= Self::mask(id);
        self.round += 1;
        log::debug!("round {:>2} opened {}", self.round, case);
        Ok(case)
    }

    pub fn is_over(&self) -> bool {
        self.round > SHORTCUT_ROUND
            || (self.round == SHORTCUT_ROUND && self.is_eliminated(SHORTCUT_CASE))
    }

    /// The bank speaks after every even round while play continues.
    pub fn is_offer_round(&self) -> bool {
        self.round % 2 == 0 && !self.is_over()
    }

    pub fn offer(&self) -> Offer {
        let remaining = self
            .pool
            .iter()
            .filter(|c| !self.is_eliminated(c.id()))
            .map(|c| u64::from(c.value()))
            .sum::<u64>();
        let offer = Offer::bank(remaining, self.remaining(), self.round);
        log::debug!("round {:>2} offer {}", self.round, offer);
        offer
    }

    /// Case the end-game switch trades to: zero-based index `26 - held`.
    ///
    /// This is a fixed mirror, not a search for the last closed case. It
    /// lines up with the real last case when the contestant holds case 1
    /// and case 26 is left standing.
    pub fn counterpart(&self) -> CaseId {
        LAST_CASE + 1 - self.held
    }

    /// The switch is offered once play is over and the counterpart is closed.
    pub fn can_switch(&self) -> bool {
        let other = self.counterpart();
        self.is_over() && other != self.held && !self.is_eliminated(other)
    }

    /// Retires the held case and takes the counterpart.
    /// Returns the newly held case, or `None` if no switch is on offer.
    pub fn switch(&mut self) -> Option<CaseId> {
        if !self.can_switch() {
            return None;
        }
        let from = self.held;
        let to = self.counterpart();
        self.eliminated |= Self::mask(from);
        self.held = to;
        log::debug!("switched case {} for case {}", from, to);
        Some(to)
    }

    /// Value of the held case once round 10 is reached, zero before.
    pub fn final_result(&self) -> Money {
        match self.round {
            FINAL_ROUND => self.pool.value(self.held).unwrap_or_default(),
            _ => 0,
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            (FIRST_CASE..=LAST_CASE)
                .filter(|id| !self.is_eliminated(*id))
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}

use super::invalid::Invalid;
use super::offer::Offer;
use crate::CaseId;
use crate::FINAL_ROUND;
use crate::FIRST_CASE;
use crate::FIRST_ROUND;
use crate::LAST_CASE;
use crate::Money;
use crate::N_CASES;
use crate::Round;
use crate::SHORTCUT_CASE;
use crate::SHORTCUT_ROUND;
use crate::cases::Case;
use crate::cases::Pool;
use std::fmt::Display;
use std::fmt::Formatter;
