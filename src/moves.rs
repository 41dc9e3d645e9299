use crate::tiles::{Cell, Letter};
use crate::wordlist::WordSet;
use crate::{Board, Error};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::convert::TryFrom;
use std::fmt;
use tracing::debug;

/// One tile of a move: `letter` placed at column `x`, row `y`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// column: 0..size
    pub x: usize,
    /// row: 0..size
    pub y: usize,
    pub letter: char,
}

impl Placement {
    pub fn new(x: usize, y: usize, letter: char) -> Placement {
        Placement { x, y, letter }
    }
}

impl From<(usize, usize, char)> for Placement {
    fn from((x, y, letter): (usize, usize, char)) -> Self {
        Placement::new(x, y, letter)
    }
}

/// The rule a rejected move breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The move has no tiles
    NoTiles,
    /// A tile is placed on an occupied square, or two tiles on the same square
    NotEmpty,
    /// The tiles span more than one row and more than one column
    NotStraight,
    /// The tiles leave a gap, or a single tile has no neighbours
    NotContiguous,
    /// A word on the resulting board is not in the wordlist
    UnknownWord(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rejection::NoTiles => write!(f, "No tiles placed"),
            Rejection::NotEmpty => write!(f, "Tiles not occupying empty squares"),
            Rejection::NotStraight => write!(f, "Tiles not in a straight line"),
            Rejection::NotContiguous => write!(f, "Tiles not contiguous"),
            Rejection::UnknownWord(word) => write!(f, "{} not found in wordlist", word),
        }
    }
}

/// Outcome of a legal or illegal move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    /// Check if the move is legal
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// The broken rule, if any
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected(rejection) => Some(rejection),
        }
    }

    /// Human readable reason, or an empty string for an accepted move.
    pub fn reason(&self) -> String {
        self.rejection().map_or_else(String::new, Rejection::to_string)
    }
}

impl From<Rejection> for Verdict {
    fn from(rejection: Rejection) -> Self {
        Verdict::Rejected(rejection)
    }
}

impl From<Verdict> for (bool, String) {
    fn from(verdict: Verdict) -> Self {
        (verdict.is_accepted(), verdict.reason())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "accepted"),
            Verdict::Rejected(rejection) => write!(f, "rejected: {}", rejection),
        }
    }
}

/// A placement that is known to be on the board.
pub(crate) type Tile = (usize, usize, Letter);

/// Return the squares above, below, left and right of x, y that are on the board.
fn neighbors(x: usize, y: usize, size: usize) -> Vec<(usize, usize)> {
    let mut res = Vec::with_capacity(4);
    if x > 0 {
        res.push((x - 1, y));
    }
    if x + 1 < size {
        res.push((x + 1, y));
    }
    if y > 0 {
        res.push((x, y - 1));
    }
    if y + 1 < size {
        res.push((x, y + 1));
    }
    res
}

impl Board {
    /// Check that every placement is on the board and has a letter.
    fn tiles(&self, placements: &[Placement]) -> Result<Vec<Tile>, Error> {
        let size = self.size();
        placements
            .iter()
            .map(|p| {
                if p.x >= size {
                    return Err(Error::MoveOutOfBounds {
                        axis: 'X',
                        coordinate: p.x,
                        size,
                    });
                }
                if p.y >= size {
                    return Err(Error::MoveOutOfBounds {
                        axis: 'Y',
                        coordinate: p.y,
                        size,
                    });
                }
                Ok((p.x, p.y, Letter::try_from(p.letter)?))
            })
            .collect()
    }

    /// Apply the occupancy, straight line and contiguity rules.
    /// Returns the board with the tiles applied.
    fn place_tiles(&self, tiles: &[Tile]) -> Result<Board, Rejection> {
        if tiles.is_empty() {
            return Err(Rejection::NoTiles);
        }
        let mut scratch = self.clone();
        let mut rows = BTreeSet::new();
        let mut cols = BTreeSet::new();
        for &(x, y, letter) in tiles {
            // an earlier tile of this move also occupies the square
            if scratch.is_occupied(x, y) {
                return Err(Rejection::NotEmpty);
            }
            scratch.put(x, y, Cell::from(letter));
            rows.insert(y);
            cols.insert(x);
        }

        if rows.len() > 1 && cols.len() > 1 {
            return Err(Rejection::NotStraight);
        }

        let contiguous = if tiles.len() == 1 {
            let (x, y, _) = tiles[0];
            neighbors(x, y, self.size())
                .into_iter()
                .any(|(nx, ny)| self.is_occupied(nx, ny))
        } else if rows.len() > 1 {
            let x = cols.iter().next().copied().unwrap_or(0);
            let (first, last) = span_of(&rows);
            (first..=last).all(|y| scratch.is_occupied(x, y))
        } else {
            let y = rows.iter().next().copied().unwrap_or(0);
            let (first, last) = span_of(&cols);
            (first..=last).all(|x| scratch.is_occupied(x, y))
        };
        if !contiguous {
            return Err(Rejection::NotContiguous);
        }
        Ok(scratch)
    }

    pub(crate) fn judge<W: WordSet + ?Sized>(&self, tiles: &[Tile], wordset: &W) -> Verdict {
        let scratch = match self.place_tiles(tiles) {
            Ok(scratch) => scratch,
            Err(rejection) => return rejection.into(),
        };
        match scratch
            .spans()
            .into_iter()
            .find(|span| !wordset.contains(&span.word))
        {
            Some(span) => Rejection::UnknownWord(span.word).into(),
            None => Verdict::Accepted,
        }
    }

    /// Check if playing `placements` is a legal move, without changing the board.
    ///
    /// The rules are checked in this order, and the first broken rule is returned:
    /// 1. All tiles are placed on empty squares.
    /// 2. All tiles are in one row or one column.
    /// 3. The tiles leave no gaps in their row or column. A single tile needs a
    ///    neighbouring tile that is already on the board.
    /// 4. Every word on the resulting board is in `wordset`. Rows are checked before
    ///    columns, and the first unknown word is reported.
    ///
    /// A run of several new tiles without gaps is accepted even when it does not touch
    /// any tile already on the board. Two tiles on the same square break rule 1: the
    /// second tile finds the square taken by the first.
    /// ## Errors
    /// - If a placement is outside the board.
    /// - If a placement is not a letter.
    /// ## Examples
    /// ```
    /// use wordgrid_validator::{Board, Dictionary, Placement, Verdict};
    /// let board = Board::from_text("_M_\n_A_\n_N_")?;
    /// let dictionary = Dictionary::from_words(&["man", "zap"]);
    /// let zap = [Placement::new(0, 1, 'Z'), Placement::new(2, 1, 'P')];
    /// assert_eq!(board.validate_move(&zap, &dictionary)?, Verdict::Accepted);
    /// let zip = [Placement::new(1, 1, 'I')];
    /// let (ok, reason): (bool, String) = board.validate_move(&zip, &dictionary)?.into();
    /// assert!(!ok);
    /// assert_eq!(reason, "Tiles not occupying empty squares");
    /// # Ok::<(), wordgrid_validator::Error>(())
    /// ```
    pub fn validate_move<W: WordSet + ?Sized>(
        &self,
        placements: &[Placement],
        wordset: &W,
    ) -> Result<Verdict, Error> {
        let tiles = self.tiles(placements)?;
        let verdict = self.judge(&tiles, wordset);
        match &verdict {
            Verdict::Accepted => debug!(tiles = tiles.len(), "move accepted"),
            Verdict::Rejected(rejection) => {
                debug!(tiles = tiles.len(), reason = %rejection, "move rejected")
            }
        }
        Ok(verdict)
    }

    /// Return the words that contain at least one of the `placements`, in the order
    /// of [`words`](Board::words). The move is not checked against the rules.
    /// ## Errors
    /// - If a placement is outside the board.
    /// - If a placement is not a letter.
    /// ## Examples
    /// ```
    /// use wordgrid_validator::{Board, Placement};
    /// let board = Board::from_text("_M_\n_A_\n_N_")?;
    /// let words = board.formed_words(&[Placement::new(0, 1, 'Z'), Placement::new(2, 1, 'P')])?;
    /// assert_eq!(words, ["ZAP"]);
    /// # Ok::<(), wordgrid_validator::Error>(())
    /// ```
    pub fn formed_words(&self, placements: &[Placement]) -> Result<Vec<String>, Error> {
        let tiles = self.tiles(placements)?;
        let mut scratch = self.clone();
        let mut new = HashSet::new();
        for &(x, y, letter) in &tiles {
            scratch.put(x, y, Cell::from(letter));
            new.insert((x, y));
        }
        Ok(scratch
            .spans()
            .into_iter()
            .filter(|span| new.iter().any(|&(x, y)| span.covers(x, y)))
            .map(|span| span.word)
            .collect())
    }

    /// Validate `placements` with [`validate_move`](Board::validate_move), and put the
    /// tiles on the board if the move is accepted.
    /// A rejected move leaves the board unchanged.
    /// ## Errors
    /// See [`validate_move`](Board::validate_move).
    pub fn play_move<W: WordSet + ?Sized>(
        &mut self,
        placements: &[Placement],
        wordset: &W,
    ) -> Result<Verdict, Error> {
        let verdict = self.validate_move(placements, wordset)?;
        if verdict.is_accepted() {
            for p in placements {
                self.set(p.x, p.y, p.letter)?;
            }
        }
        Ok(verdict)
    }
}

/// Smallest and largest value in a non-empty set
fn span_of(set: &BTreeSet<usize>) -> (usize, usize) {
    let first = set.iter().next().copied().unwrap_or(0);
    let last = set.iter().next_back().copied().unwrap_or(first);
    (first, last)
}
