/// The 26 cases on stage, ordered by identifier.
///
/// Generated once per game and read-only afterward. Identifiers are exactly
/// `1..=26`, each once, and `pool[id - 1]` is case `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool(Vec<Case>);

impl Pool {
    /// Assigns a value to every case.
    ///
    /// Debug mode assigns `100 * id` without touching the RNG. Normal mode
    /// draws without replacement from the catalog, refilling it with a fresh
    /// copy whenever it runs dry. With 25 denominations and 26 cases the
    /// refill happens exactly once, so one denomination always appears twice.
    pub fn generate<R>(mode: Mode, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let pool = match mode {
            Mode::Debug => Self::debug(),
            Mode::Normal => Self::random(rng),
        };
        log::debug!("generated {} pool: {}", mode, pool);
        pool
    }

    fn debug() -> Self {
        Self(
            (FIRST_CASE..=LAST_CASE)
                .map(|id| Case::from((id, Money::from(id) * DEBUG_STEP)))
                .collect(),
        )
    }

    fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let ref mut working = denominations();
        Self(
            (FIRST_CASE..=LAST_CASE)
                .map(|id| {
                    if working.is_empty() {
                        *working = denominations();
                    }
                    let i = rng.random_range(0..working.len());
                    Case::from((id, working.remove(i)))
                })
                .collect(),
        )
    }

    /// Case by identifier, if it exists.
    pub fn get(&self, id: CaseId) -> Option<&Case> {
        match Self::contains(id) {
            true => self.0.get(usize::from(id) - 1),
            false => None,
        }
    }
    /// Value inside case `id`, if it exists.
    pub fn value(&self, id: CaseId) -> Option<Money> {
        self.get(id).map(Case::value)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Case> {
        self.0.iter()
    }
    /// Whether `id` names a case on stage.
    pub fn contains(id: CaseId) -> bool {
        (FIRST_CASE..=LAST_CASE).contains(&id)
    }
}

impl<'a> IntoIterator for &'a Pool {
    type Item = &'a Case;
    type IntoIter = std::slice::Iter<'a, Case>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Pool {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.0
                .iter()
                .map(|c| c.value().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}

use super::case::Case;
use super::catalog::denominations;
use super::mode::Mode;
use crate::CaseId;
use crate::DEBUG_STEP;
use crate::FIRST_CASE;
use crate::LAST_CASE;
use crate::Money;
use rand::Rng;
use std::fmt::Display;
use std::fmt::Formatter;
