use crate::Error;
use lazy_static::lazy_static;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Premium squares of the Words with Friends board:
/// `W` triple word, `L` triple letter, `w` double word, `l` double letter.
const WORDS_WITH_FRIENDS: [&str; 15] = [
    "   W  L L  W   ",
    "  l  w   w  l  ",
    " l  l     l  l ",
    "W  L   w   L  W",
    "  l   l l   l  ",
    " w   L   L   W ",
    "L   l     l   L",
    "   w       w   ",
    "L   l     l   L",
    " w   L   L   W ",
    "  l   l l   l  ",
    "W  L   w   L  W",
    " l  l     l  l ",
    "  l  w   w  l  ",
    "   W  L L  W   ",
];

lazy_static! {
    static ref DEFAULT_GRID: Grid = Grid::from_text(&WORDS_WITH_FRIENDS.join("\n"))
        .expect("Words with Friends layout is a valid grid");
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Premium {
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

use Premium::{DoubleLetter, DoubleWord, TripleLetter, TripleWord};

impl Default for Premium {
    fn default() -> Self {
        Premium::None
    }
}

impl Premium {
    /// The one character code of the square
    pub fn code(self) -> char {
        match self {
            Premium::None => ' ',
            DoubleLetter => 'l',
            TripleLetter => 'L',
            DoubleWord => 'w',
            TripleWord => 'W',
        }
    }

    fn from_code(ch: char) -> Result<Premium, Error> {
        match ch {
            ' ' | '_' => Ok(Premium::None),
            'l' => Ok(DoubleLetter),
            'L' => Ok(TripleLetter),
            'w' => Ok(DoubleWord),
            'W' => Ok(TripleWord),
            _ => Err(Error::GridParseError(ch.to_string())),
        }
    }
}

impl fmt::Display for Premium {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Premium {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Premium::from_code(ch),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

/// Layout of premium squares on a square board.
///
/// The layout is only data: it has the same coordinates as a [`Board`](crate::Board),
/// but nothing in this crate computes scores.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    /// row major: `squares[y][x]`
    squares: Vec<Vec<Premium>>,
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::from_text(s)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::words_with_friends()
    }
}

impl Grid {
    /// The 15x15 Words with Friends layout
    /// ## Example
    /// ```
    /// use wordgrid_validator::{Grid, Premium};
    /// let grid = Grid::words_with_friends();
    /// assert_eq!(grid.size(), 15);
    /// assert_eq!(grid.get(3, 0), Some(Premium::TripleWord));
    /// ```
    pub fn words_with_friends() -> Grid {
        DEFAULT_GRID.clone()
    }

    /// Parse a grid from lines of premium square codes. Rows must all be as long
    /// as the number of rows.
    /// ## Errors
    /// If `text` is not square, or contains an unknown code.
    pub fn from_text(text: &str) -> Result<Grid, Error> {
        let rows: Vec<&str> = text.lines().collect();
        let lengths: BTreeSet<usize> = rows.iter().map(|row| row.chars().count()).collect();
        if lengths.len() > 1 {
            return Err(Error::DifferentRowLengths(lengths));
        }
        let column_length = rows.len();
        let row_length = lengths.into_iter().next().unwrap_or(0);
        if row_length != column_length {
            return Err(Error::RowCountMismatch {
                row_length,
                column_length,
            });
        }
        if column_length == 0 {
            return Err(Error::EmptyBoard);
        }
        let squares = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(Premium::from_code)
                    .collect::<Result<Vec<_>, Error>>()
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Grid { squares })
    }

    /// Get grid rows as strings of square codes
    pub fn to_strings(&self) -> Vec<String> {
        self.squares
            .iter()
            .map(|row| row.iter().map(|p| p.code()).collect::<String>())
            .collect()
    }

    /// The number of rows (and columns)
    pub fn size(&self) -> usize {
        self.squares.len()
    }

    /// Premium at column x, row y, or None if outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Premium> {
        self.squares.get(y).and_then(|row| row.get(x)).copied()
    }
}
