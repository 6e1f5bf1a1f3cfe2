use std::fs::File;
use std::io;

use anyhow::Context;
use log::{info, LevelFilter};
use simplelog::WriteLogger;

use camel_sim::io::{LineIo, TextIo};
use camel_sim::{GameEngine, SimConfig};

const DEBUG_LOG_FILE: &str = "camel-debug.log";

const BANNER: [&str; 3] = [
    "Welcome to Camel!",
    "You stole a camel, and are now getting chased by natives through the mobi desert.",
    "Your goal is to travel across the desert without getting caught!",
];

fn main() -> anyhow::Result<()> {
    setup_logging()?;

    let stdin = io::stdin();
    let mut terminal = LineIo::new(stdin.lock(), io::stdout());
    for line in BANNER {
        terminal.write_line(line)?;
    }

    let config = SimConfig {
        seed: rand::random(),
        ..Default::default()
    };
    info!("starting game with seed {}", config.seed);

    let mut engine = GameEngine::new(config);
    let outcome = engine.run(&mut terminal)?;
    if outcome.is_victory() {
        info!("finished: won");
    } else {
        info!("finished: {outcome:?}");
    }

    terminal.write_line("")?;
    terminal.write_line("Thanks for playing! Bye!")?;
    Ok(())
}

// Logging goes to a file so it never interleaves with the game text.
fn setup_logging() -> anyhow::Result<()> {
    if !std::env::args().any(|arg| arg == "--debug") {
        return Ok(());
    }
    let file = File::create(DEBUG_LOG_FILE)
        .with_context(|| format!("creating {DEBUG_LOG_FILE}"))?;
    WriteLogger::init(
        LevelFilter::Trace,
        simplelog::ConfigBuilder::new()
            .set_target_level(LevelFilter::Error)
            .build(),
        file,
    )?;
    Ok(())
}
