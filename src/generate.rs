use crate::moves::Tile;
use crate::wordlist::WordSet;
use crate::{Board, Error, Letter, Placement};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::convert::TryFrom;
use tracing::debug;

/// Depth first search over all orderings of rack letters placed from one start square.
struct Search<'a, W: ?Sized> {
    board: &'a Board,
    letters: &'a [Letter],
    wordset: &'a W,
    horizontal: bool,
    /// empty squares in line, from the start square
    squares: Vec<(usize, usize)>,
    used: Vec<bool>,
    tiles: Vec<Tile>,
    found: Vec<Vec<Placement>>,
}

impl<'a, W: WordSet + ?Sized> Search<'a, W> {
    fn extend(&mut self) {
        let depth = self.tiles.len();
        if depth == self.squares.len() {
            return;
        }
        let (x, y) = self.squares[depth];
        let mut tried = BTreeSet::new();
        for i in 0..self.letters.len() {
            let letter = self.letters[i];
            if self.used[i] || !tried.insert(letter) {
                continue;
            }
            self.used[i] = true;
            self.tiles.push((x, y, letter));
            // single tiles are found in the horizontal pass only
            if (self.horizontal || self.tiles.len() > 1)
                && self.board.judge(&self.tiles, self.wordset).is_accepted()
            {
                self.found.push(
                    self.tiles
                        .iter()
                        .map(|&(x, y, letter)| Placement::new(x, y, letter.as_char()))
                        .collect(),
                );
            }
            self.extend();
            self.tiles.pop();
            self.used[i] = false;
        }
    }
}

impl Board {
    /// Return up to `max` empty squares starting at x, y in direction `horizontal`,
    /// skipping occupied squares.
    fn empty_squares(
        &self,
        x: usize,
        y: usize,
        horizontal: bool,
        max: usize,
    ) -> Vec<(usize, usize)> {
        let (dx, dy) = if horizontal { (1, 0) } else { (0, 1) };
        let (mut x, mut y) = (x, y);
        let mut res = Vec::new();
        while x < self.size() && y < self.size() && res.len() < max {
            if !self.is_occupied(x, y) {
                res.push((x, y));
            }
            x += dx;
            y += dy;
        }
        res
    }

    fn moves_from<W: WordSet + ?Sized>(
        &self,
        x: usize,
        y: usize,
        letters: &[Letter],
        wordset: &W,
    ) -> Vec<Vec<Placement>> {
        let mut found = Vec::new();
        for &horizontal in &[true, false] {
            let mut search = Search {
                board: self,
                letters,
                wordset,
                horizontal,
                squares: self.empty_squares(x, y, horizontal, letters.len()),
                used: vec![false; letters.len()],
                tiles: Vec::with_capacity(letters.len()),
                found: Vec::new(),
            };
            search.extend();
            found.append(&mut search.found);
        }
        found
    }

    /// Find all legal moves that can be played with the letters in `rack`.
    ///
    /// A move places some of the rack letters, each at most once, on consecutive empty
    /// squares of one row or column, starting at an empty square and skipping squares that
    /// are already occupied. Every candidate is checked with
    /// [`validate_move`](Board::validate_move). The moves are returned sorted.
    ///
    /// The number of candidates grows with the number of orderings of the rack, so this is
    /// meant for small racks. With the `rayon` feature the start squares are searched in
    /// parallel.
    /// ## Errors
    /// If a rack letter is not a letter.
    /// ## Examples
    /// ```
    /// use wordgrid_validator::{Board, Dictionary, Placement};
    /// let board = Board::from_text("_M_\n_A_\n_N_")?;
    /// let dictionary = Dictionary::from_words(&["man", "zap"]);
    /// let moves = board.valid_moves(&['P', 'Z'], &dictionary)?;
    /// assert_eq!(moves, vec![vec![Placement::new(0, 1, 'Z'), Placement::new(2, 1, 'P')]]);
    /// # Ok::<(), wordgrid_validator::Error>(())
    /// ```
    pub fn valid_moves<W: WordSet + Sync + ?Sized>(
        &self,
        rack: &[char],
        wordset: &W,
    ) -> Result<Vec<Vec<Placement>>, Error> {
        let letters = rack
            .iter()
            .map(|&ch| Letter::try_from(ch))
            .collect::<Result<Vec<_>, Error>>()?;
        let starts: Vec<(usize, usize)> = (0..self.size())
            .flat_map(|x| (0..self.size()).map(move |y| (x, y)))
            .filter(|&(x, y)| !self.is_occupied(x, y))
            .collect();

        #[cfg(feature = "rayon")]
        let mut moves: Vec<Vec<Placement>> = starts
            .par_iter()
            .map(|&(x, y)| self.moves_from(x, y, &letters, wordset))
            .flatten()
            .collect();
        #[cfg(not(feature = "rayon"))]
        let mut moves: Vec<Vec<Placement>> = starts
            .iter()
            .flat_map(|&(x, y)| self.moves_from(x, y, &letters, wordset))
            .collect();

        moves.sort();
        debug!(rack = rack.len(), moves = moves.len(), "generated moves");
        Ok(moves)
    }
}
