/// Automatic contestant.
///
/// Eliminates uniformly at random, takes any offer at or above its
/// threshold, and flips a coin on the final switch.
#[derive(Debug, Clone)]
pub struct Robot<R> {
    rng: R,
    threshold: f64,
}

impl<R> Robot<R>
where
    R: Rng,
{
    pub fn new(rng: R, threshold: f64) -> Self {
        Self { rng, threshold }
    }
}

impl<R> Contestant for Robot<R>
where
    R: Rng,
{
    fn pick(&mut self) -> anyhow::Result<CaseId> {
        Ok(self.rng.random_range(FIRST_CASE..=LAST_CASE))
    }
    fn eliminate(&mut self, available: &[CaseId]) -> anyhow::Result<CaseId> {
        match available.len() {
            0 => anyhow::bail!("no cases left to eliminate"),
            n => Ok(available[self.rng.random_range(0..n)]),
        }
    }
    fn deal(&mut self, offer: Offer) -> anyhow::Result<bool> {
        Ok(offer.dollars() >= self.threshold)
    }
    fn switch(&mut self, _: CaseId, _: CaseId) -> anyhow::Result<bool> {
        Ok(self.rng.random_bool(0.5))
    }
    fn notify(&mut self, event: &Event) {
        log::debug!("robot hears: {}", event);
    }
}

use super::contestant::Contestant;
use super::event::Event;
use crate::CaseId;
use crate::FIRST_CASE;
use crate::LAST_CASE;
use crate::game::Offer;
use rand::Rng;
