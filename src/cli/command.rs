use chess_arbiter::board::{Move, PieceType, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Moves(Square),
    Promote(PieceType),
    Resign,
    Draw,
    New,
    Board,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }

    let unknown = || Command::Unknown(trimmed.to_string());

    let cmd = match parts[0] {
        "moves" => parts
            .get(1)
            .and_then(|sq| sq.parse::<Square>().ok())
            .map_or_else(unknown, Command::Moves),
        "promote" => parts
            .get(1)
            .and_then(|p| p.chars().next())
            .and_then(PieceType::from_char)
            .filter(|p| p.is_promotion_choice())
            .map_or_else(unknown, Command::Promote),
        "resign" => Command::Resign,
        "draw" => Command::Draw,
        "new" => Command::New,
        "board" => Command::Board,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => other.parse::<Move>().map_or_else(|_| unknown(), Command::Play),
    };

    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves_and_keywords() {
        let e2e4: Move = "e2e4".parse().unwrap();
        assert_eq!(parse_command("  e2e4 "), Some(Command::Play(e2e4)));
        assert_eq!(
            parse_command("moves e2"),
            Some(Command::Moves("e2".parse().unwrap()))
        );
        assert_eq!(
            parse_command("promote n"),
            Some(Command::Promote(PieceType::Knight))
        );
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_command("promote k"),
            Some(Command::Unknown("promote k".to_string()))
        );
        assert_eq!(
            parse_command("moves z9"),
            Some(Command::Unknown("moves z9".to_string()))
        );
        assert_eq!(
            parse_command("e2e9"),
            Some(Command::Unknown("e2e9".to_string()))
        );
    }
}
