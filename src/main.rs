//! Headless autoplay runner (default binary).
//!
//! Plays one game with the placement search choosing every move, then prints
//! a summary and the final board. Settings come from `TETROMINO_*`
//! environment variables and command-line flags.

use anyhow::Result;

use tetromino::config::{parse_args, AutoplayConfig};
use tetromino::engine::{autoplay_step, PlaceError, Session};
use tetromino::journal::Journal;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args, AutoplayConfig::from_env())?;

    let mut journal = Journal::open(config.log_path.as_deref())?;
    let mut session = Session::new(config.seed);
    session.start();

    if !config.quiet {
        eprintln!(
            "[Autoplay] seed={} max_pieces={} journal={}",
            config.seed,
            config.max_pieces,
            config.log_path.as_deref().unwrap_or("off")
        );
    }

    let mut index = 0u32;
    while index < config.max_pieces {
        match autoplay_step(&mut session) {
            Ok(report) => {
                journal.placement(index, &report)?;
                if report.lines_cleared > 0 && !config.quiet {
                    eprintln!(
                        "[Autoplay] piece {} cleared {} line(s), total {}",
                        index,
                        report.lines_cleared,
                        session.lines()
                    );
                }
                index += 1;
            }
            Err(PlaceError::NoLegalMove) | Err(PlaceError::NotPlayable) => {
                if !config.quiet {
                    eprintln!("[Autoplay] game over after {} pieces", index);
                }
                break;
            }
            Err(e) => return Err(e.into()),
        }
        if session.game_over() {
            if !config.quiet {
                eprintln!("[Autoplay] spawn blocked after {} pieces", index);
            }
            break;
        }
    }

    journal.summary(&session)?;
    journal.flush()?;

    println!(
        "pieces={} lines={} level={} game_over={}",
        session.pieces_placed(),
        session.lines(),
        session.level(),
        session.game_over()
    );
    print!("{}", session.board());
    Ok(())
}
