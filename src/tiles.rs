//! Basic types for the squares of a letter grid.
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::num::NonZeroU8;

/// Character used for an empty square in rows and columns.
pub const BLANK: char = ' ';

/// Character used for an empty square in the text form of a board.
pub const TEXT_BLANK: char = '_';

/// Check if `ch` marks an empty square.
pub fn is_blank(ch: char) -> bool {
    ch == BLANK || ch == TEXT_BLANK
}

/// An uppercase letter `A` .. `Z` that can be placed on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "char", into = "char")
)]
pub struct Letter(NonZeroU8);

impl Letter {
    /// Return the letter as an uppercase `char`.
    pub fn as_char(self) -> char {
        char::from(self.0.get())
    }
}

impl TryFrom<char> for Letter {
    type Error = Error;

    /// Lowercase letters are converted to uppercase.
    /// ## Errors
    /// If `ch` is not an ascii letter.
    /// ## Examples
    /// ```
    /// # use std::convert::TryFrom;
    /// # use wordgrid_validator::{Letter, Error};
    /// let letter = Letter::try_from('q')?;
    /// assert_eq!(letter.as_char(), 'Q');
    /// assert!(Letter::try_from('?').is_err());
    /// # Ok::<(), Error>(())
    /// ```
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if !ch.is_ascii_alphabetic() {
            return Err(Error::InvalidLetter(ch));
        }
        let code = ch.to_ascii_uppercase() as u8;
        // ascii letters are never 0
        NonZeroU8::new(code)
            .map(Letter)
            .ok_or(Error::InvalidLetter(ch))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A square on the board that is either empty or contains a [`Letter`](crate::Letter)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell(Option<Letter>);

impl Cell {
    /// An empty square
    pub const BLANK: Self = Self(None);

    /// Create new `Cell` holding `letter`
    pub fn from_letter(letter: Letter) -> Cell {
        Cell(Some(letter))
    }

    /// Get the contained letter or None
    pub fn letter(self) -> Option<Letter> {
        self.0
    }

    /// Check if the cell is empty.
    pub fn is_blank(self) -> bool {
        self.0.is_none()
    }

    /// The cell as `char`, with [`BLANK`](crate::BLANK) for an empty square.
    pub fn as_char(self) -> char {
        self.0.map_or(BLANK, Letter::as_char)
    }
}

impl From<Letter> for Cell {
    fn from(letter: Letter) -> Self {
        Cell::from_letter(letter)
    }
}

impl TryFrom<char> for Cell {
    type Error = Error;

    /// Both `' '` and `'_'` give an empty cell.
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if is_blank(ch) {
            Ok(Cell::BLANK)
        } else {
            Letter::try_from(ch).map(Cell::from_letter)
        }
    }
}

impl From<Cell> for char {
    fn from(cell: Cell) -> char {
        cell.as_char()
    }
}

impl PartialEq<char> for Cell {
    fn eq(&self, other: &char) -> bool {
        self.as_char() == *other
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
