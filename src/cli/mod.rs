//! Hot-seat terminal game: both players share one keyboard.

use std::io::{self, BufRead, Write};

use chess_arbiter::board::{legal_moves, Color, GameStatus};
use chess_arbiter::room::{Game, GameError, PlayerId};

mod command;

use command::{parse_command, Command};

const WHITE: PlayerId = PlayerId(1);
const BLACK: PlayerId = PlayerId(2);

pub const USAGE: &str = "\
commands:
  e2e4, e7e8q       play a move (promotion piece optional)
  moves <square>    list legal destinations of a piece
  promote <q|r|b|n> finish a pending promotion
  draw              offer a draw, or accept the opponent's offer
  resign            concede the game
  new               start a new game
  board             show the board again
  quit              leave";

fn player(color: Color) -> PlayerId {
    match color {
        Color::White => WHITE,
        Color::Black => BLACK,
    }
}

fn new_table() -> Result<Game, GameError> {
    let mut game = Game::new();
    game.seat(WHITE, Color::White)?;
    game.seat(BLACK, Color::Black)?;
    Ok(game)
}

fn print_state<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    let position = game.position();
    writeln!(out, "{}", position.board())?;
    if let Some(outcome) = game.outcome() {
        writeln!(out, "Game over: {outcome}. Type 'new' to play again.")?;
        return Ok(());
    }
    if let Some(pending) = position.pending_promotion() {
        writeln!(
            out,
            "{} pawn on {} promotes: type 'promote <q|r|b|n>'",
            pending.color, pending.square
        )?;
        return Ok(());
    }
    if game.status() == GameStatus::Check {
        writeln!(out, "Check!")?;
    }
    if let Some(offered_by) = game.draw_offer() {
        writeln!(out, "{offered_by} offers a draw.")?;
    }
    writeln!(
        out,
        "{} to move (move {}).",
        position.side_to_move(),
        position.fullmove_number()
    )
}

/// Play one command against the game. Returns `false` to stop.
fn execute<W: Write>(out: &mut W, game: &mut Game, cmd: Command) -> io::Result<bool> {
    let mover = player(game.position().side_to_move());
    let result = match cmd {
        Command::Quit => return Ok(false),
        Command::Help => {
            writeln!(out, "{USAGE}")?;
            return Ok(true);
        }
        Command::Board => Ok(()),
        Command::Unknown(text) => {
            writeln!(out, "Unknown command '{text}', type 'help'")?;
            return Ok(true);
        }
        Command::Moves(square) => {
            let moves = legal_moves(game.position(), square);
            if moves.is_empty() {
                writeln!(out, "No legal moves from {square}")?;
            } else {
                let targets: Vec<String> = moves.iter().map(|m| m.to.to_string()).collect();
                writeln!(out, "{square}: {}", targets.join(" "))?;
            }
            return Ok(true);
        }
        Command::Play(mv) => game.submit_move(mover, mv).map(|_| ()),
        Command::Promote(piece) => game.submit_promotion(mover, piece).map(|_| ()),
        Command::Resign => game.resign(mover).map(|_| ()),
        Command::Draw => {
            let opponent_offered = game.draw_offer().is_some_and(|c| player(c) != mover);
            if opponent_offered {
                game.accept_draw(mover).map(|_| ())
            } else {
                game.offer_draw(mover)
            }
        }
        Command::New => {
            game.reset();
            Ok(())
        }
    };

    if let Err(err) = result {
        writeln!(out, "{err}")?;
        return Ok(true);
    }
    print_state(out, game)?;
    Ok(true)
}

pub fn run<R: BufRead, W: Write>(input: R, mut out: W) -> io::Result<()> {
    let mut game = new_table().map_err(io::Error::other)?;
    print_state(&mut out, &game)?;

    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };
        if !execute(&mut out, &mut game, cmd)? {
            break;
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str) -> String {
        let mut out = Vec::new();
        run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_fools_mate_session() {
        let out = session("f2f3\ne7e5\ng2g4\nd8h4\n");
        assert!(out.contains("Game over: Black wins by checkmate"));
    }

    #[test]
    fn test_moves_listing_and_errors() {
        let out = session("moves g1\ne2e5\nhello\nquit\ne2e4\n");
        let listing = out.lines().find(|l| l.starts_with("g1: ")).unwrap();
        assert!(listing.contains("f3") && listing.contains("h3"));
        assert!(out.contains("Illegal move: Illegal move 'e2e5'"));
        assert!(out.contains("Unknown command 'hello'"));
        assert!(!out.contains("Black to move"));
    }

    #[test]
    fn test_draw_by_agreement() {
        let out = session("draw\ne2e4\ndraw\n");
        assert!(out.contains("White offers a draw."));
        assert!(out.contains("Game over: draw by agreement"));
    }
}
