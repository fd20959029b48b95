//! Demo host for the mini-game session engine.
//!
//! Starts a session for each requested game, drives it with a scripted
//! player, and prints the input transcript and final score the way an
//! embedding platform would receive them. Lifecycle logging goes to stderr
//! so stdout stays a clean transcript.

mod autoplay;
mod logging;

use std::error::Error;
use std::fs;

use clap::Parser;
use colored::Colorize;
use log::info;

use minigames::samples;
use minigames::session::GameSession;
use minigames::shuffle::SessionRng;
use minigames::GameDefinition;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Sample variant to play; plays every sample when omitted
    #[clap(short, long)]
    variant: Option<String>,

    /// Path to a game definition JSON file, played instead of a sample
    #[clap(short, long)]
    definition: Option<String>,

    /// Shuffle seed; random when omitted
    #[clap(short, long)]
    seed: Option<u64>,

    /// Override the definition's time limit in seconds, 0 for untimed
    #[clap(short, long)]
    time_limit: Option<u32>,

    /// List the built-in samples and exit
    #[clap(long, action = clap::ArgAction::SetTrue)]
    list: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_logger()?;
    let args = Args::parse();

    if args.list {
        for definition in samples::all() {
            println!(
                "{:<12} {:>4} points  {}",
                definition.content.variant_name(),
                definition.points,
                definition.id
            );
        }
        return Ok(());
    }

    let mut rng = match args.seed {
        Some(seed) => SessionRng::seeded(seed),
        None => SessionRng::from_entropy(),
    };

    for mut definition in select_definitions(&args)? {
        if let Some(limit) = args.time_limit {
            definition.time_limit_seconds = limit;
        }
        play(&definition, &mut rng)?;
    }
    Ok(())
}

fn select_definitions(args: &Args) -> Result<Vec<GameDefinition>, Box<dyn Error>> {
    if let Some(path) = &args.definition {
        let text = fs::read_to_string(path)?;
        let definition: GameDefinition = serde_json::from_str(&text)?;
        return Ok(vec![definition]);
    }
    match &args.variant {
        Some(name) => samples::by_variant(name)
            .map(|definition| vec![definition])
            .ok_or_else(|| format!("unknown variant {name:?}, try --list").into()),
        None => Ok(samples::all()),
    }
}

fn play(definition: &GameDefinition, rng: &mut SessionRng) -> Result<(), Box<dyn Error>> {
    let variant = definition.content.variant_name();
    println!();
    println!("{} {}", "==".dimmed(), variant.to_uppercase().cyan().bold());

    let mut session = GameSession::start(
        definition,
        rng,
        Box::new(move |score| info!("platform callback: {variant} reported {score}")),
    )?;
    let mut player = autoplay::Autoplayer::new(definition);

    match autoplay::drive(&mut session, &mut player) {
        Some(score) => {
            let transcript = session.format_transcript();
            print!("{transcript}");
            if !transcript.ends_with('\n') {
                println!();
            }
            let summary = format!("{score}/{} points", session.points());
            let summary = if score == session.points() {
                summary.green().bold()
            } else {
                summary.yellow().bold()
            };
            println!(
                "{} after {}s, progress {}",
                summary,
                session.elapsed_seconds(),
                session.progress()
            );
        }
        None => println!("{}", "abandoned without a score".red()),
    }
    Ok(())
}
