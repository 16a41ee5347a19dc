/// Whoever sits across from the bank.
///
/// A contestant answers the four questions the show asks and hears about
/// everything that happens on stage. Implementations can be a person at a
/// terminal, an automatic player, or a script replayed in tests; the
/// [`Session`](super::Session) does not care which.
///
/// Answers may still be rejected by the session (an eliminated case, an
/// out-of-range pick). The contestant is then told via
/// [`Event::Invalid`] and asked again.
pub trait Contestant {
    /// Initial pick, the case the contestant keeps.
    fn pick(&mut self) -> anyhow::Result<CaseId>;
    /// Next case to eliminate, ideally one of `available`.
    fn eliminate(&mut self, available: &[CaseId]) -> anyhow::Result<CaseId>;
    /// Whether to take the bank's offer and stop playing.
    fn deal(&mut self, offer: Offer) -> anyhow::Result<bool>;
    /// Whether to trade the held case for `other` once play is over.
    fn switch(&mut self, held: CaseId, other: CaseId) -> anyhow::Result<bool>;
    /// Something happened on stage.
    fn notify(&mut self, event: &Event);
}

use super::event::Event;
use crate::CaseId;
use crate::game::Offer;
