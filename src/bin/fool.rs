//! Fool Binary
//!
//! Solve one distribution, play it out against the solver, or sweep every
//! distribution of a deck size.

use clap::Parser;
use colored::*;
use dialoguer::Select;
use fool::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Command {
    #[command(about = "Solve one distribution and report its verdict")]
    Solve {
        /// Owner of each card, lowest first, e.g. 0110
        #[arg(long, required = true)]
        cards: String,
        #[arg(long, default_value = "0")]
        leader: String,
        /// Comma separated signed weights, one per card
        #[arg(long, allow_hyphen_values = true)]
        weights: Option<String>,
        #[arg(long, value_enum, default_value_t = Variant::Fool)]
        variant: Variant,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Play a distribution against the solver")]
    Play {
        #[arg(long, required = true)]
        cards: String,
        #[arg(long, default_value = "0")]
        leader: String,
        #[arg(long, allow_hyphen_values = true)]
        weights: Option<String>,
        #[arg(long, value_enum, default_value_t = Variant::Fool)]
        variant: Variant,
        /// The seat you take
        #[arg(long, default_value = "1")]
        human: String,
    },
    #[command(about = "Solve every distribution of a deck size")]
    Sweep {
        #[arg(long, required = true)]
        size: usize,
        #[arg(long, default_value = "0")]
        leader: String,
        #[arg(long, value_enum, default_value_t = Variant::Fool)]
        variant: Variant,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    log();
    match Command::parse() {
        Command::Solve {
            cards,
            leader,
            weights,
            variant,
            json,
        } => solve(Config::parse(&cards, &leader, weights.as_deref(), variant)?, json),
        Command::Play {
            cards,
            leader,
            weights,
            variant,
            human,
        } => play(
            Config::parse(&cards, &leader, weights.as_deref(), variant)?,
            Player::try_from(human.as_str())?,
        ),
        Command::Sweep {
            size,
            leader,
            variant,
            json,
        } => sweep(size, Player::try_from(leader.as_str())?, variant, json),
    }
}

fn solve(config: Config, json: bool) -> anyhow::Result<()> {
    let ref solver = Solver::new(config)?;
    match json {
        true => println!("{}", serde_json::to_string_pretty(&Summary::from(solver))?),
        false => println!("{}", solver),
    }
    Ok(())
}

fn sweep(size: usize, leader: Player, variant: Variant, json: bool) -> anyhow::Result<()> {
    let tally = Sweep::new(size, leader, variant)?.run()?;
    match json {
        true => println!("{}", serde_json::to_string_pretty(&tally)?),
        false => println!("{}", tally),
    }
    Ok(())
}

fn play(config: Config, human: Player) -> anyhow::Result<()> {
    let mut game = Playback::new(config)?;
    log::info!("you are {}", human);
    while !game.is_over() {
        println!("\n{}", game);
        let actor = game.turn();
        let ply = match actor == human {
            true => {
                let mv = choose(&game)?;
                game.submit_as(human, mv)?
            }
            false => game.auto()?,
        };
        println!("{} {}", actor, paint(ply));
    }
    println!("\n{}", game);
    if let Some((outcome, margin)) = game.outcome() {
        let verdict = match outcome {
            Outcome::Draw => format!("DRAW ({})", margin).yellow(),
            Outcome::Win(p) if p == human => format!("YOU WIN ({})", margin).green(),
            Outcome::Win(_) => format!("YOU LOSE ({})", margin).red(),
        };
        println!("{}", verdict);
    }
    Ok(())
}

fn choose(game: &Playback) -> anyhow::Result<Move> {
    let moves = game.legal();
    let items = moves
        .iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<String>>();
    let selection = Select::new()
        .with_prompt(format!("\nYOUR MOVE ({})", game.turn()))
        .report(false)
        .items(items.as_slice())
        .default(0)
        .interact()?;
    Ok(moves[selection])
}

fn paint(ply: Ply) -> ColoredString {
    match ply {
        Ply::Lead(_) => ply.to_string().cyan(),
        Ply::Take(_) => ply.to_string().red(),
        Ply::Beat(_) => ply.to_string().green(),
    }
}
