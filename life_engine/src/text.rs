// text.rs - Character-matrix dump of a grid (`#` alive, `.` dead)

use std::fmt;

use crate::error::LifeError;
use crate::grid::GridState;

pub const ALIVE: char = '#';
pub const DEAD: char = '.';

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                f.write_str("\n")?;
            }
            for &alive in self.row(row).unwrap_or_default() {
                write!(f, "{}", if alive { ALIVE } else { DEAD })?;
            }
        }
        Ok(())
    }
}

impl GridState {
    /// Parses a row-major character matrix.
    ///
    /// `#`, `O` and `*` are alive, `.` is dead. Blank lines around the grid and
    /// trailing whitespace on each row are ignored; every row must have the
    /// same width.
    pub fn from_text(text: &str) -> Result<Self, LifeError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .skip_while(|line| line.is_empty())
            .collect();
        let end = lines
            .iter()
            .rposition(|line| !line.is_empty())
            .ok_or(LifeError::EmptyText)?;
        let lines = &lines[..=end];

        let columns = lines[0].chars().count();
        let mut live = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != columns {
                return Err(LifeError::RaggedRow { row, expected: columns, found });
            }
            for (column, ch) in line.chars().enumerate() {
                match ch {
                    ALIVE | 'O' | '*' => live.push((column, row)),
                    DEAD => {}
                    found => return Err(LifeError::UnexpectedChar { row, column, found }),
                }
            }
        }
        GridState::new(columns, lines.len(), live)
    }
}
