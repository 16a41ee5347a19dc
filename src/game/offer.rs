/// The bank's buyout, in dollars rounded to the cent.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Offer(f64);

impl Offer {
    /// Mean of the unopened cases scaled by `round / 10`.
    ///
    /// Starts at a tenth of the expected value and climbs toward it as the
    /// rounds go by. Zero when nothing is left to average.
    pub fn bank(remaining: u64, count: usize, round: Round) -> Self {
        match count {
            0 => Self::default(),
            k => Self::from((remaining as f64 / k as f64) * f64::from(round) / OFFER_SCALE),
        }
    }
    pub fn dollars(&self) -> f64 {
        self.0
    }
}

/// rounds to the nearest cent
impl From<f64> for Offer {
    fn from(dollars: f64) -> Self {
        Self((dollars * 100.0).round() / 100.0)
    }
}

impl Display for Offer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

use crate::OFFER_SCALE;
use crate::Round;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
