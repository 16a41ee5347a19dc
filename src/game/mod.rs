pub mod board;
pub mod invalid;
pub mod offer;

pub use board::*;
pub use invalid::*;
pub use offer::*;
