/// How case values are assigned at the start of a game.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Values drawn at random from the canonical catalog.
    #[default]
    Normal,
    /// Values `100, 200, .., 2600` in case order. Reproducible.
    Debug,
}

impl Mode {
    pub fn is_debug(&self) -> bool {
        matches!(self, Mode::Debug)
    }
}

/// true meaning debug
impl From<bool> for Mode {
    fn from(debug: bool) -> Self {
        match debug {
            true => Mode::Debug,
            false => Mode::Normal,
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Normal => write!(f, "normal"),
            Mode::Debug => write!(f, "debug"),
        }
    }
}

use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
