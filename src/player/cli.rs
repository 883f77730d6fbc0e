#![cfg(feature = "std")]

use std::io::{BufRead, Write};

use anyhow::Context;
use rand::Rng;

use crate::engine::{
    ai::{Targeting, TurnState},
    common::{Coord, Side, Strike, StrikeOutcome},
    game::{Game, GameError, GameStatus},
};

fn describe(strike: &Strike) -> String {
    let what = match &strike.outcome {
        StrikeOutcome::Miss => "miss".to_string(),
        StrikeOutcome::Hit => "hit".to_string(),
        StrikeOutcome::Sunk(cells) => format!("hit and sunk ({} cells)", cells.len()),
    };
    if strike.repeated {
        format!("{}: {} (already struck)", strike.at, what)
    } else {
        format!("{}: {}", strike.at, what)
    }
}

fn print_grids<R: Rng, O: Write>(game: &Game<R>, out: &mut O) -> std::io::Result<()> {
    writeln!(out, "\nOpponent grid:\n{}", game.opponent_grid())?;
    writeln!(out, "\nYour grid:\n{}", game.player_grid())?;
    writeln!(
        out,
        "Ships afloat: you {:?}, opponent {:?}",
        game.player_grid().survivor_counts(),
        game.opponent_grid().survivor_counts()
    )
}

/// Play the player side from a line-oriented text stream.
///
/// Each line is a target such as `C4`. An empty line takes the suggested
/// target, `quit` stops early. The opponent moves whenever the player misses.
/// Returns the status the game ended in (still `InProgress` on quit or end
/// of input).
pub fn play<R: Rng, I: BufRead, O: Write>(
    game: &mut Game<R>,
    input: I,
    mut out: O,
) -> anyhow::Result<GameStatus> {
    let mut hints = Targeting::new();
    let mut memory = TurnState::new(Side::Player);
    print_grids(game, &mut out)?;
    let mut lines = input.lines();
    while game.status() == GameStatus::InProgress {
        let suggestion = game.suggest_player_target(&mut hints, &memory)?;
        write!(out, "\nTarget [suggested {}]: ", suggestion)?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading player input")?;
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") {
            break;
        }
        let target = if line.is_empty() {
            suggestion
        } else {
            match line.parse::<Coord>() {
                Ok(coord) => coord,
                Err(e) => {
                    writeln!(out, "invalid coordinate: {}", e)?;
                    continue;
                }
            }
        };
        let strike = match game.player_strike(target) {
            Ok(strike) => strike,
            Err(GameError::Grid(e)) => {
                writeln!(out, "{}", e)?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        memory.record(&strike);
        writeln!(out, "You fire at {}", describe(&strike))?;
        for strike in game.play_opponent_turn()? {
            writeln!(out, "Opponent fires at {}", describe(&strike))?;
        }
        if strike.ends_turn() {
            print_grids(game, &mut out)?;
        }
    }
    match game.status() {
        GameStatus::Won => writeln!(out, "\nVictory: every opponent ship is sunk.")?,
        GameStatus::Lost => writeln!(out, "\nDefeat: all your ships have been destroyed.")?,
        GameStatus::Aborted => writeln!(out, "\nThe opponent has no legal target left.")?,
        GameStatus::InProgress => {}
    }
    Ok(game.status())
}
