/// A numbered case and the amount hidden inside it.
///
/// Built once by [`Pool`](super::Pool) and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Case {
    id: CaseId,
    value: Money,
}

impl Case {
    pub fn id(&self) -> CaseId {
        self.id
    }
    pub fn value(&self) -> Money {
        self.value
    }
}

/// (id, value) isomorphism
impl From<(CaseId, Money)> for Case {
    fn from((id, value): (CaseId, Money)) -> Self {
        debug_assert!((FIRST_CASE..=LAST_CASE).contains(&id));
        Self { id, value }
    }
}
impl From<Case> for (CaseId, Money) {
    fn from(case: Case) -> Self {
        (case.id, case.value)
    }
}

impl Display for Case {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:<2} ${}", self.id, self.value)
    }
}

use crate::CaseId;
use crate::FIRST_CASE;
use crate::LAST_CASE;
use crate::Money;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
