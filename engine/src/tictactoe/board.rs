use super::types::{Cell, Mark};

pub const BOARD_SIZE: usize = 9;

/// 3x3 grid addressed row-major, `index = row * 3 + col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cell(index) == Some(Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Cell::Marked(mark);
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }
}

#[cfg(test)]
pub(crate) fn board_from_str(layout: &str) -> Board {
    let mut cells = [Cell::Empty; BOARD_SIZE];
    let symbols: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(symbols.len(), BOARD_SIZE, "layout must describe 9 cells");
    for (index, symbol) in symbols.into_iter().enumerate() {
        cells[index] = match symbol {
            'X' => Cell::Marked(Mark::X),
            'O' => Cell::Marked(Mark::O),
            '.' => Cell::Empty,
            other => panic!("unexpected cell symbol {other}"),
        };
    }
    Board::from_cells(cells)
}
