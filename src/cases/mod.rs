pub mod case;
pub mod catalog;
pub mod mode;
pub mod pool;

pub use case::*;
pub use catalog::*;
pub use mode::*;
pub use pool::*;
