//! Character grid shown by the board.

use serde::{Deserialize, Serialize};

pub const ROWS: usize = 6;
pub const COLUMNS: usize = 22;

/// A grid of character codes, one `Vec` per row.
///
/// Serialized as a bare JSON array of arrays, which is the shape both the
/// compose and the read/write endpoints use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board(pub Vec<Vec<u8>>);

impl Board {
    pub fn blank() -> Self {
        Self(vec![vec![0; COLUMNS]; ROWS])
    }

    /// Rows and columns, the latter taken from the first row.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.0.len(), self.0.first().map_or(0, Vec::len))
    }

    pub fn is_rectangular(&self) -> bool {
        let (_, columns) = self.dimensions();
        self.0.iter().all(|row| row.len() == columns)
    }

    pub fn fits_flagship(&self) -> bool {
        self.is_rectangular() && self.dimensions() == (ROWS, COLUMNS)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.0.iter().map(Vec::as_slice)
    }
}

impl From<Vec<Vec<u8>>> for Board {
    fn from(rows: Vec<Vec<u8>>) -> Self {
        Self(rows)
    }
}
