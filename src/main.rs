//! Deal or No Deal
//!
//! Options: --debug | --normal, --seed <u64>, --robot <DOLLARS>, --verbose

use clap::Parser;
use dealornodeal::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.level())?;
    let mut rng = args.rng();
    match args.robot {
        Some(threshold) => {
            let mode = args.mode().unwrap_or_default();
            let robot = Robot::new(SmallRng::from_rng(&mut rng), threshold);
            let outcome = Session::new(mode, rng, robot).run()?;
            println!("{}", outcome);
        }
        None => {
            let mut human = Human::default();
            let mode = match args.mode() {
                Some(mode) => mode,
                None => human.debug_prompt()?,
            };
            Session::new(mode, rng, human).run()?;
        }
    }
    Ok(())
}
