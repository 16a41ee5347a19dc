/// How a game ended and what the contestant walks away with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// The contestant took the bank's offer in `round`.
    Deal { offer: Offer, round: Round },
    /// Play ran to the end and the held case was opened.
    Payout {
        case: CaseId,
        value: Money,
        switched: bool,
    },
}

impl Outcome {
    /// Dollars won, cents included.
    pub fn winnings(&self) -> f64 {
        match self {
            Outcome::Deal { offer, .. } => offer.dollars(),
            Outcome::Payout { value, .. } => f64::from(*value),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Deal { offer, .. } => write!(f, "Congratulations, you won {}.", offer),
            Outcome::Payout { value, .. } => write!(f, "Congratulations, you won ${}.", value),
        }
    }
}

use crate::CaseId;
use crate::Money;
use crate::Round;
use crate::game::Offer;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winnings() {
        let deal = Outcome::Deal {
            offer: Offer::from(594.78),
            round: 4,
        };
        let payout = Outcome::Payout {
            case: 26,
            value: 2_600,
            switched: true,
        };
        assert_eq!(deal.winnings(), 594.78);
        assert_eq!(payout.winnings(), 2_600.0);
    }

    #[test]
    fn display() {
        let deal = Outcome::Deal {
            offer: Offer::from(135.0),
            round: 2,
        };
        assert_eq!(deal.to_string(), "Congratulations, you won $135.00.");
        let payout = Outcome::Payout {
            case: 1,
            value: 100,
            switched: false,
        };
        assert_eq!(payout.to_string(), "Congratulations, you won $100.");
    }

    #[test]
    fn serializes_for_the_log() {
        let payout = Outcome::Payout {
            case: 1,
            value: 100,
            switched: false,
        };
        let json = serde_json::to_string(&payout).expect("serialize outcome");
        assert_eq!(json, r#"{"Payout":{"case":1,"value":100,"switched":false}}"#);
    }
}
