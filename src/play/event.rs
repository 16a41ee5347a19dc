/// Facts the session reports to the contestant, in the order they happen.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Welcome(Mode),
    Chosen(CaseId),
    /// Cases still closed: the one held and the ones open for elimination.
    Available { held: CaseId, open: Vec<CaseId> },
    Invalid(Invalid),
    Opened(Case),
    Offer(Offer),
    Declined(Offer),
    Accepted(Offer),
    Switched { from: CaseId, to: CaseId },
    Revealed { case: CaseId, value: Money },
    GameOver(Outcome),
}

impl Event {
    /// Every closed case in ascending order, the held one included.
    pub fn closed(held: CaseId, open: &[CaseId]) -> Vec<CaseId> {
        let mut ids = open.to_vec();
        let at = ids.partition_point(|id| *id < held);
        ids.insert(at, held);
        ids
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Welcome(Mode::Debug) => write!(f, "Welcome to DEAL OR NO DEAL (Debug Mode)"),
            Event::Welcome(Mode::Normal) => write!(f, "Welcome to DEAL OR NO DEAL"),
            Event::Chosen(id) => write!(f, "You chose number {}.", id),
            Event::Available { held, open } => write!(
                f,
                "[{}]",
                Event::closed(*held, open)
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            ),
            Event::Invalid(invalid) => write!(f, "{}", invalid),
            Event::Opened(case) => write!(
                f,
                "Case {} was eliminated. It contains ${}.",
                case.id(),
                case.value()
            ),
            Event::Offer(offer) => write!(f, "The bank offers you {}.", offer),
            Event::Declined(_) => write!(f, "No deal!"),
            Event::Accepted(_) => write!(f, "You decided to end the game."),
            Event::Switched { from, to } => write!(f, "You traded case {} for case {}.", from, to),
            Event::Revealed { case, .. } => write!(f, "Opening suitcase number {}.", case),
            Event::GameOver(outcome) => write!(f, "{}", outcome),
        }
    }
}

use super::outcome::Outcome;
use crate::CaseId;
use crate::Money;
use crate::cases::Case;
use crate::cases::Mode;
use crate::game::Invalid;
use crate::game::Offer;
use std::fmt::Display;
use std::fmt::Formatter;
