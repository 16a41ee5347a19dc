/// A person at the terminal.
///
/// Every prompt carries its own acceptance predicate, so only well-formed
/// numbers and yes/no answers reach the session.
#[derive(Debug, Default)]
pub struct Human {
    mode: Mode,
    greeted: bool,
}

impl Human {
    /// Asks whether to play a debugging session. Any answer but D/d means no.
    pub fn debug_prompt(&mut self) -> anyhow::Result<Mode> {
        self.greet();
        let answer = Input::<String>::new()
            .with_prompt("Please press D/d for a debugging session or press any other key to start the game")
            .allow_empty(true)
            .report(false)
            .interact_text()
            .context("read debug choice")?;
        Ok(Mode::from(matches!(answer.trim().chars().next(), Some('D' | 'd'))))
    }

    fn greet(&mut self) {
        if !self.greeted {
            println!("{}", BANNER.yellow().bold());
            self.greeted = true;
        }
    }

    fn case(prompt: String) -> anyhow::Result<CaseId> {
        let input = Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|i: &String| -> Result<(), String> {
                Invalid::case(i).map(|_| ()).map_err(|e| e.to_string())
            })
            .report(false)
            .interact_text()
            .context("read case number")?;
        Ok(Invalid::case(&input)?)
    }

    fn yes(prompt: String) -> anyhow::Result<bool> {
        let input = Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|i: &String| -> Result<(), String> {
                Invalid::yes(i).map(|_| ()).map_err(|e| e.to_string())
            })
            .report(false)
            .interact_text()
            .context("read yes or no")?;
        Ok(Invalid::yes(&input)?)
    }
}

impl Contestant for Human {
    fn pick(&mut self) -> anyhow::Result<CaseId> {
        Self::case(match self.mode {
            Mode::Debug => format!(
                "Please choose your suitcase {}-{} with your price (Debug Mode)",
                FIRST_CASE, LAST_CASE
            ),
            Mode::Normal => format!(
                "Please choose your suitcase {}-{} with your price",
                FIRST_CASE, LAST_CASE
            ),
        })
    }
    fn eliminate(&mut self, _: &[CaseId]) -> anyhow::Result<CaseId> {
        Self::case(String::from("Pick a suitcase to eliminate from the game"))
    }
    fn deal(&mut self, _: Offer) -> anyhow::Result<bool> {
        Self::yes(String::from(
            "Do you accept the offer? Please press Y/y for YES and N/n for NO",
        ))
    }
    fn switch(&mut self, held: CaseId, other: CaseId) -> anyhow::Result<bool> {
        println!("The suitcase with your price was number {}.", held);
        println!("Suitcase number {} is still closed.", other);
        println!("Now we give you a chance to switch to this suitcase.");
        Self::yes(String::from(
            "Do you want to switch suitcases? Please press Y/y for YES and N/n for NO",
        ))
    }
    fn notify(&mut self, event: &Event) {
        match event {
            Event::Welcome(mode) => {
                self.greet();
                self.mode = *mode;
                if mode.is_debug() {
                    println!("{}", "debugging session: cases hold $100 to $2600 in order".dimmed());
                }
            }
            Event::Chosen(_) => println!("{}", event),
            Event::Available { held, open } => println!(
                "[{}]",
                Event::closed(*held, open)
                    .iter()
                    .map(|id| match id == held {
                        true => id.to_string().yellow().bold().to_string(),
                        false => id.to_string().cyan().to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            ),
            Event::Invalid(_) => println!("{}", event.to_string().red()),
            Event::Opened(case) => {
                println!("Case {} was eliminated.", case.id());
                println!("It contains {}.", format!("${}", case.value()).yellow());
                println!();
            }
            Event::Offer(offer) => println!(
                "The bank offers you {}.",
                offer.to_string().green().bold()
            ),
            Event::Declined(_) => println!("{}", event.to_string().magenta()),
            Event::Accepted(_) => println!("{}", event),
            Event::Switched { .. } => println!("{}", event),
            Event::Revealed { .. } => println!("{}", event),
            Event::GameOver(outcome) => {
                println!("{}", outcome.to_string().green().bold());
                println!("GAME OVER");
                println!("{}", FAREWELL.yellow().bold());
                println!("Please try again at another time, bye bye!");
            }
        }
    }
}

const BANNER: &str = "$$$$$$$$ Welcome to DEAL OR NO DEAL $$$$$$$$";
const FAREWELL: &str = "$$$$$$$$ Thank you for playing DEAL OR NO DEAL $$$$$$$$";

use super::contestant::Contestant;
use super::event::Event;
use crate::CaseId;
use crate::FIRST_CASE;
use crate::LAST_CASE;
use crate::cases::Mode;
use crate::game::Invalid;
use crate::game::Offer;
use anyhow::Context;
use colored::Colorize;
use dialoguer::Input;
