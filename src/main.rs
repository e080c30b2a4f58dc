//! Interactive Set in the terminal.
//!
//! Shows the instructions and waits for a line before dealing. Then reads
//! one command per line from stdin until the game is over or input ends,
//! and prints the final summary.

use std::io::{self, BufRead, Write};

use clap::Parser;

use set_game::core::{GameRng, SetConfig, TerminationPolicy};
use set_game::game::{EventRecord, Session};
use set_game::render::{AsciiRenderer, CardRenderer, PlainRenderer, PRESS_TO_START, WELCOME};

#[derive(Parser, Debug)]
#[command(name = "set-game", about = "Play the card game Set in the terminal")]
struct Args {
    /// Seed for the shuffle; the same seed deals the same game
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable ANSI colours
    #[arg(long)]
    no_color: bool,

    /// Describe cards in words instead of text art
    #[arg(long)]
    plain: bool,

    /// End the game as soon as fewer than 12 cards are face up
    #[arg(long)]
    stop_below_default: bool,

    /// Echo every state change to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let termination = if args.stop_below_default {
        TerminationPolicy::PoolBelowDefault
    } else {
        TerminationPolicy::NoSetsLeft
    };
    let config = SetConfig::new().with_termination(termination);

    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let renderer: Box<dyn CardRenderer> = if args.plain {
        Box::new(PlainRenderer)
    } else if args.no_color {
        Box::new(AsciiRenderer::monochrome())
    } else {
        Box::new(AsciiRenderer::colored())
    };

    let session = match Session::new(config, &mut rng) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to start a game: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    if let Err(e) = play(session, renderer.as_ref(), args.verbose, stdin.lock(), &mut io::stdout()) {
        eprintln!("I/O error: {}", e);
        std::process::exit(1);
    }
}

fn play<R: BufRead, W: Write>(
    mut session: Session,
    renderer: &dyn CardRenderer,
    verbose: bool,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    let mut lines = input.lines();

    writeln!(out, "{}", WELCOME)?;
    write!(out, "{}", PRESS_TO_START)?;
    out.flush()?;
    if let Some(line) = lines.next() {
        line?;
    }
    writeln!(out)?;

    if verbose {
        if let Some(seed) = session.seed() {
            eprintln!("seed: {}", seed);
        }
    }
    let mut logged = echo_history(&session, 0, verbose);

    let summary = loop {
        writeln!(out, "{}", renderer.render_board(session.pool()))?;

        if let Some(summary) = session.is_terminal() {
            break summary;
        }

        write!(out, "Your input: ")?;
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                writeln!(out)?;
                break session.finish();
            }
        };

        let outcome = session.handle_input(&line);
        writeln!(out, "{}", outcome)?;
        if !outcome.cards().is_empty() {
            writeln!(out, "{}", renderer.render_cards(outcome.cards()))?;
        }
        logged = echo_history(&session, logged, verbose);
    };

    writeln!(out, "{}", summary.reason)?;
    writeln!(out, "{}", summary)?;
    Ok(())
}

/// Print history records from `from` on. Returns the new history length.
fn echo_history(session: &Session, from: usize, verbose: bool) -> usize {
    let history = session.history();
    if verbose {
        for EventRecord { sequence, event } in history.iter().skip(from) {
            eprintln!("[{}] {:?}", sequence, event);
        }
    }
    history.len()
}
