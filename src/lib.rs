//! A move validator for Scrabble and Words with Friends style letter grids.
//! <br>
//! This crate checks if a set of tiles placed on a square board is a legal move, and
//! finds the words the move forms.
//! A move is legal when all tiles go on empty squares, in one row or column, without gaps,
//! and every word on the resulting board is in the dictionary.
//! It can use the `rayon` crate to search all legal moves for a rack in parallel.
//!
//! # How to use `wordgrid_validator`
//! Start by creating a board, either empty with [`Board::new`] or from its text form with
//! [`Board::from_text`]. Then build a [`Dictionary`] from a wordfile or a list of words.
//! The wordfile must be in utf-8 and contain one word per line; case does not matter.
//! Any type that implements [`WordSet`] can be used instead of a `Dictionary`.
//!
//! Validation never changes the board. Illegal moves give a [`Verdict::Rejected`] with the
//! broken rule, while misuse, like a tile outside the board, gives an [`Error`].
//!
//! # Basic usage
//!  ```
//! use wordgrid_validator::{Board, Dictionary, Placement};
//!
//! let mut board = Board::from_text("_M_\n_A_\n_N_")?;
//! let dictionary = Dictionary::from_words(&["man", "zap"]);
//! let zap = [Placement::new(0, 1, 'Z'), Placement::new(2, 1, 'P')];
//! let verdict = board.validate_move(&zap, &dictionary)?;
//! assert!(verdict.is_accepted());
//!
//! let zip = [Placement::new(0, 1, 'Z'), Placement::new(2, 1, 'I')];
//! let (ok, reason): (bool, String) = board.validate_move(&zip, &dictionary)?.into();
//! assert_eq!((ok, reason.as_str()), (false, "ZAI not found in wordlist"));
//!
//! board.play_move(&zap, &dictionary)?;
//! println!("{}", board);
//! # Ok::<(), anyhow::Error>(())
//! ```
mod board;
mod error;
mod generate;
mod grid;
mod moves;
mod tiles;
mod wordlist;

pub use crate::board::Board;
pub use crate::error::Error;
pub use crate::grid::{Grid, Premium};
pub use crate::moves::{Placement, Rejection, Verdict};
pub use crate::tiles::{Cell, Letter, BLANK, TEXT_BLANK};
pub use crate::wordlist::{Dictionary, WordSet};
