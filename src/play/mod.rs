pub mod contestant;
pub mod event;
pub mod outcome;
pub mod robot;
pub mod scripted;
pub mod session;

#[cfg(feature = "cli")]
pub mod args;
#[cfg(feature = "cli")]
pub mod human;

pub use contestant::*;
pub use event::*;
pub use outcome::*;
pub use robot::*;
pub use scripted::*;
pub use session::*;

#[cfg(feature = "cli")]
pub use args::*;
#[cfg(feature = "cli")]
pub use human::*;
