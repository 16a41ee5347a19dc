//! Deal or No Deal, played in the terminal.
//!
//! The crate is split leaf-first: [`cases`] builds the 26 hidden values,
//! [`game`] owns the round-by-round state machine and the bank's offer,
//! and [`play`] drives a session against any [`play::Contestant`].
pub mod cases;
pub mod game;
pub mod play;

pub use cases::*;
pub use game::*;
pub use play::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Whole-dollar amount hidden inside a case.
pub type Money = u32;
/// Case identifier, 1-based.
pub type CaseId = u8;
/// Elimination round counter, starts at 1.
pub type Round = u8;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of cases on stage.
pub const N_CASES: usize = 26;
/// Lowest valid case identifier.
pub const FIRST_CASE: CaseId = 1;
/// Highest valid case identifier.
pub const LAST_CASE: CaseId = N_CASES as CaseId;
/// Round the game starts in.
pub const FIRST_ROUND: Round = 1;
/// Round reached after the last elimination. Final results pay out here.
pub const FINAL_ROUND: Round = 10;
/// Round in which opening [`SHORTCUT_CASE`] ends the game early.
pub const SHORTCUT_ROUND: Round = 9;
/// Case whose elimination in [`SHORTCUT_ROUND`] ends the game.
pub const SHORTCUT_CASE: CaseId = 25;
/// Offer factor denominator: the bank pays `round / OFFER_SCALE` of the mean.
pub const OFFER_SCALE: f64 = 10.0;
/// Step between debug-mode case values.
pub const DEBUG_STEP: Money = 100;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` and writes DEBUG level to file, `level` to the terminal.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
