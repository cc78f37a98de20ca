use super::board::Board;
use super::types::{Cell, Mark, Outcome, WIN_LINES, WinLine};

pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, _)) = find_completed_line(board) {
        return Outcome::Win(mark);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

pub fn winning_line(board: &Board) -> Option<WinLine> {
    find_completed_line(board).map(|(_, line)| line)
}

fn find_completed_line(board: &Board) -> Option<(Mark, WinLine)> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|&line| {
        let [a, b, c] = line.indices();
        match cells[a] {
            Cell::Marked(mark) if cells[b] == cells[a] && cells[c] == cells[a] => Some((mark, line)),
            _ => None,
        }
    })
}
