use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be deserialized")]
    WordfileDeserializeError(String),

    /// Error writing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be serialized")]
    WordfileSerializeError(String),

    /// A board or grid needs at least one square
    #[error("Can't handle board of size 0")]
    EmptyBoard,

    /// Columns of a column-major grid are not all the same length
    #[error("Can't handle board with different length columns, found these: {0:?}")]
    DifferentColumnLengths(BTreeSet<usize>),

    /// Column-major grid is not square
    #[error("Can't handle board with column length {length} != column count {count}")]
    ColumnCountMismatch { length: usize, count: usize },

    /// Rows of a text board are not all the same length
    #[error("Can't handle board with different length rows, found these: {0:?}")]
    DifferentRowLengths(BTreeSet<usize>),

    /// Text board is not square
    #[error("Can't handle board with row length {row_length} != column length {column_length}")]
    RowCountMismatch {
        row_length: usize,
        column_length: usize,
    },

    /// Character is neither a letter nor a blank square
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// Access to a square outside the board
    #[error("Error, coordinates ({x}, {y}) exceed board size {size}")]
    OutOfBounds { x: usize, y: usize, size: usize },

    /// A placement in a move lies outside the board
    #[error("Invalid move, {axis} coordinate ({coordinate}) >= size ({size})")]
    MoveOutOfBounds {
        axis: char,
        coordinate: usize,
        size: usize,
    },

    /// Error parsing a premium square
    #[error("Invalid grid premium square: \"{0}\"")]
    GridParseError(String),
}
