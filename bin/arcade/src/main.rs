//! Arcade Binary
//!
//! Replays recorded hand-tracking frames through the game controller and
//! prints what the screen would show.
//!
//! Options: --replay, --seed, --countdown, --interval-ms, --overlay-ms, --json, --quiet

mod args;
mod terminal;

use anyhow::Context;
use args::Args;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rps_gameplay::*;
use rps_gameroom::*;
use std::io::BufRead;
use terminal::Terminal;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.logging() {
        rps_core::log();
    }
    match args.seed {
        Some(seed) => {
            log::info!("computer seeded with {}", seed);
            run(&args, SmallRng::seed_from_u64(seed))
        }
        None => run(&args, Entropy),
    }
}

fn run<C>(args: &Args, chance: C) -> anyhow::Result<()>
where
    C: Chance,
{
    let reader: Box<dyn BufRead> = match args.source() {
        Some(path) => Box::new(std::io::BufReader::new(
            std::fs::File::open(path)
                .with_context(|| format!("open replay {}", path.display()))?,
        )),
        None => Box::new(std::io::stdin().lock()),
    };
    let epoch = std::time::Instant::now();
    let mut game = Controller::new(args.config(), chance);
    let mut screen = Terminal::new(std::io::stdout().lock(), args.json);
    log::info!("entering arcade");
    for frame in Replay::from(reader) {
        let frame = frame?;
        let now = frame.clock()?.unwrap_or_else(|| epoch.elapsed());
        let render = game.apply(now, &frame);
        screen.show(&render)?;
        if frame.quit {
            log::info!("quit requested");
            break;
        }
    }
    log::info!("{}", game.tally());
    Ok(())
}
