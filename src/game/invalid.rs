/// A rejected answer at the interaction boundary.
///
/// None of these are fatal: the contestant is told and asked again, and the
/// board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalid {
    NotANumber,
    OutOfRange(i64),
    Unavailable(CaseId),
    NotYesOrNo,
    GameOver,
}

impl Invalid {
    /// Parse a case identifier typed at the terminal.
    pub fn case(input: &str) -> Result<CaseId, Self> {
        let n = input.trim().parse::<i64>().map_err(|_| Self::NotANumber)?;
        match CaseId::try_from(n) {
            Ok(id) if (FIRST_CASE..=LAST_CASE).contains(&id) => Ok(id),
            _ => Err(Self::OutOfRange(n)),
        }
    }
    /// Parse a single-character yes/no answer. Only the first character counts.
    pub fn yes(input: &str) -> Result<bool, Self> {
        match input.trim().chars().next() {
            Some('Y' | 'y') => Ok(true),
            Some('N' | 'n') => Ok(false),
            _ => Err(Self::NotYesOrNo),
        }
    }
}

impl Display for Invalid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber => write!(f, "Please type in a number!"),
            Self::OutOfRange(_) => write!(f, "This number is out of range, please try again."),
            Self::Unavailable(_) => write!(f, "Invalid choice. Please choose an available suitcase."),
            Self::NotYesOrNo => write!(f, "Please type in a valid character."),
            Self::GameOver => write!(f, "The game is over, no more suitcases can be opened."),
        }
    }
}

impl std::error::Error for Invalid {}

use crate::CaseId;
use crate::FIRST_CASE;
use crate::LAST_CASE;
use std::fmt::Display;
use std::fmt::Formatter;
