/// Replays a fixed list of answers and records every event it hears.
///
/// Picks and eliminations are required: running out of either is an error.
/// Deal and switch questions fall back to "no" once their lists are empty.
#[derive(Debug, Default, Clone)]
pub struct Scripted {
    picks: VecDeque<CaseId>,
    eliminations: VecDeque<CaseId>,
    deals: VecDeque<bool>,
    switches: VecDeque<bool>,
    events: Vec<Event>,
}

impl Scripted {
    pub fn new<I>(picks: I) -> Self
    where
        I: IntoIterator<Item = CaseId>,
    {
        Self {
            picks: picks.into_iter().collect(),
            ..Self::default()
        }
    }
    pub fn eliminating<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = CaseId>,
    {
        self.eliminations.extend(ids);
        self
    }
    pub fn dealing<I>(mut self, answers: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        self.deals.extend(answers);
        self
    }
    pub fn switching<I>(mut self, answers: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        self.switches.extend(answers);
        self
    }
    /// Everything notified so far, oldest first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

impl Contestant for Scripted {
    fn pick(&mut self) -> anyhow::Result<CaseId> {
        self.picks
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script ran out of picks"))
    }
    fn eliminate(&mut self, _: &[CaseId]) -> anyhow::Result<CaseId> {
        self.eliminations
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script ran out of eliminations"))
    }
    fn deal(&mut self, _: Offer) -> anyhow::Result<bool> {
        Ok(self.deals.pop_front().unwrap_or(false))
    }
    fn switch(&mut self, _: CaseId, _: CaseId) -> anyhow::Result<bool> {
        Ok(self.switches.pop_front().unwrap_or(false))
    }
    fn notify(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}

use super::contestant::Contestant;
use super::event::Event;
use crate::CaseId;
use crate::game::Offer;
use std::collections::VecDeque;
