#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Hint,
    NewGame,
    ResetTallies,
    SetMode { versus_search: bool },
    Quit,
}

pub const HELP: &str =
    "Commands: 1-9 place a mark (1 = top-left), hint, new, reset, mode pvp|ai, quit";

/// Parses one line of player input. Cells are numbered 1-9 for people and
/// converted to board indices 0-8.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim().to_ascii_lowercase();
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err(HELP.to_string());
    };

    if let Ok(cell) = head.parse::<usize>() {
        if !(1..=9).contains(&cell) {
            return Err(format!("Cell must be between 1 and 9, got {}", cell));
        }
        return Ok(Command::Place(cell - 1));
    }

    match (head, parts.next()) {
        ("hint" | "h", None) => Ok(Command::Hint),
        ("new" | "n", None) => Ok(Command::NewGame),
        ("reset", None) => Ok(Command::ResetTallies),
        ("mode", Some("pvp")) => Ok(Command::SetMode { versus_search: false }),
        ("mode", Some("ai")) => Ok(Command::SetMode { versus_search: true }),
        ("quit" | "q" | "exit", None) => Ok(Command::Quit),
        _ => Err(format!("Unknown command '{}'. {}", line, HELP)),
    }
}
