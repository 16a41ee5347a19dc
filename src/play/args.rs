use clap::Parser;

/// Deal or No Deal in the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(
        short,
        long,
        conflicts_with = "normal",
        help = "Deterministic cases holding $100 to $2600 in order"
    )]
    pub debug: bool,
    #[arg(long, help = "Skip the debugging question and play a normal game")]
    pub normal: bool,
    #[arg(long, help = "Seed for reproducible case values")]
    pub seed: Option<u64>,
    #[arg(
        long,
        value_name = "DOLLARS",
        help = "Let the robot play, taking any offer at or above DOLLARS"
    )]
    pub robot: Option<f64>,
    #[arg(short, long, help = "Log debug output to the terminal")]
    pub verbose: bool,
}

impl Args {
    /// Mode decided by flags. `None` leaves the question to the player.
    pub fn mode(&self) -> Option<Mode> {
        match (self.debug, self.normal, self.robot) {
            (true, _, _) => Some(Mode::Debug),
            (_, true, _) => Some(Mode::Normal),
            (_, _, Some(_)) => Some(Mode::Normal),
            _ => None,
        }
    }
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Warn,
        }
    }
}

use crate::cases::Mode;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_decide_mode() {
        let args = Args::try_parse_from(["dealornodeal", "--debug"]).expect("valid args");
        assert_eq!(args.mode(), Some(Mode::Debug));
        let args = Args::try_parse_from(["dealornodeal", "--normal"]).expect("valid args");
        assert_eq!(args.mode(), Some(Mode::Normal));
        let args = Args::try_parse_from(["dealornodeal", "--robot", "25000"]).expect("valid args");
        assert_eq!(args.mode(), Some(Mode::Normal));
        assert_eq!(args.robot, Some(25_000.0));
        let args = Args::try_parse_from(["dealornodeal"]).expect("valid args");
        assert_eq!(args.mode(), None);
        assert_eq!(args.robot, None);
    }

    #[test]
    fn debug_and_normal_conflict() {
        assert!(Args::try_parse_from(["dealornodeal", "-d", "--normal"]).is_err());
    }

    #[test]
    fn seeded_rng_is_repeatable() {
        use rand::Rng;
        let args = Args::try_parse_from(["dealornodeal", "--seed", "9"]).expect("valid args");
        let a = args.rng().random::<u64>();
        let b = args.rng().random::<u64>();
        assert_eq!(a, b);
    }

    #[test]
    fn verbosity() {
        let args = Args::try_parse_from(["dealornodeal"]).expect("valid args");
        assert_eq!(args.level(), log::LevelFilter::Warn);
        let args = Args::try_parse_from(["dealornodeal", "-v"]).expect("valid args");
        assert_eq!(args.level(), log::LevelFilter::Debug);
    }
}
