use crate::tiles::{Cell, Letter, TEXT_BLANK};
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// Display the board state as `size` lines of `size` squares.
/// Empty squares show as "_".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_text(s)
    }
}

/// A word on the board: a run of at least two letters in a row or column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Span {
    /// x of the first letter
    pub x: usize,
    /// y of the first letter
    pub y: usize,
    /// horizontal if true, else vertical
    pub horizontal: bool,
    pub word: String,
}

impl Span {
    /// Check if square x, y is part of the word.
    pub fn covers(&self, x: usize, y: usize) -> bool {
        let len = self.word.len();
        if self.horizontal {
            y == self.y && x >= self.x && x < self.x + len
        } else {
            x == self.x && y >= self.y && y < self.y + len
        }
    }
}

/// Split a line of cells into runs of letters, and return (start, word)
/// for each run of at least two letters.
fn runs<I: IntoIterator<Item = Cell>>(line: I) -> Vec<(usize, String)> {
    let mut res = Vec::new();
    let mut word = String::new();
    let mut start = 0;
    for (i, cell) in line.into_iter().enumerate() {
        match cell.letter() {
            Some(letter) => {
                if word.is_empty() {
                    start = i;
                }
                word.push(letter.as_char());
            }
            None => {
                if word.len() > 1 {
                    res.push((start, word.clone()));
                }
                word.clear();
            }
        }
    }
    if word.len() > 1 {
        res.push((start, word));
    }
    res
}

/// Represents the state of a square letter grid.
///
/// `x` is the column index and `y` the row index, both starting at 0 in the
/// top left corner. The size is fixed when the board is created.
///
/// With the `serde` feature a board is serialized as its [`columns`](Board::columns),
/// and deserialized with [`from_columns`](Board::from_columns).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Vec<char>>", into = "Vec<Vec<char>>")
)]
pub struct Board {
    size: usize,
    /// column major: square x, y is at `x * size + y`
    cells: Vec<Cell>,
}

impl TryFrom<Vec<Vec<char>>> for Board {
    type Error = Error;

    fn try_from(columns: Vec<Vec<char>>) -> Result<Self, Self::Error> {
        Board::from_columns(&columns)
    }
}

impl From<Board> for Vec<Vec<char>> {
    fn from(board: Board) -> Self {
        board.columns()
    }
}

impl Board {
    /// Create a new empty board with `size` x `size` squares.
    /// ## Errors
    /// If `size` is 0.
    /// ## Examples
    /// ```
    /// use wordgrid_validator::Board;
    /// let board = Board::new(15)?;
    /// assert_eq!(board.size(), 15);
    /// assert!(board.words().is_empty());
    /// # Ok::<(), wordgrid_validator::Error>(())
    /// ```
    pub fn new(size: usize) -> Result<Board, Error> {
        if size == 0 {
            return Err(Error::EmptyBoard);
        }
        Ok(Board {
            size,
            cells: vec![Cell::BLANK; size * size],
        })
    }

    /// Create a board from a list of columns. Each column lists the squares
    /// from top to bottom. A `' '` or `'_'` is an empty square, letters are
    /// converted to uppercase.
    /// ## Errors
    /// - If the columns have different lengths, or the column length is not equal to
    ///   the number of columns.
    /// - If a square is not a letter or empty.
    /// ## Examples
    /// ```
    /// use wordgrid_validator::Board;
    /// let board = Board::from_columns(&[['M', 'A'], ['D', 'E']])?;
    /// assert_eq!(board.to_text(), "MD\nAE");
    /// assert!(Board::from_columns(&[vec![' ', ' '], vec![' ']]).is_err());
    /// # Ok::<(), wordgrid_validator::Error>(())
    /// ```
    pub fn from_columns<C: AsRef<[char]>>(columns: &[C]) -> Result<Board, Error> {
        let lengths: BTreeSet<usize> = columns.iter().map(|c| c.as_ref().len()).collect();
        if lengths.len() > 1 {
            return Err(Error::DifferentColumnLengths(lengths));
        }
        let count = columns.len();
        let length = lengths.into_iter().next().unwrap_or(0);
        if length != count {
            return Err(Error::ColumnCountMismatch { length, count });
        }
        if count == 0 {
            return Err(Error::EmptyBoard);
        }
        let cells = columns
            .iter()
            .flat_map(|column| column.as_ref().iter())
            .map(|&ch| Cell::try_from(ch))
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Board { size: count, cells })
    }

    /// Parse a board from its text form: one line per row, all rows as long as
    /// the number of rows. A `' '` or `'_'` is an empty square.
    /// Lines end with `"\n"` or `"\r\n"`, and a single newline after the last row
    /// is ignored, so `"M__\nA__\nN__\n"` is a 3x3 board.
    /// ## Errors
    /// - If the rows have different lengths, or the row length is not equal to the
    ///   number of rows.
    /// - If a square is not a letter or empty.
    /// ## Examples
    /// ```
    /// use wordgrid_validator::Board;
    /// let board = Board::from_text("_M_\n_A_\n_N_")?;
    /// assert_eq!(board.get(1, 2)?, 'N');
    /// assert!(Board::from_text("__\n__\n__").is_err());
    /// # Ok::<(), wordgrid_validator::Error>(())
    /// ```
    pub fn from_text(text: &str) -> Result<Board, Error> {
        let rows: Vec<Vec<char>> = text.lines().map(|row| row.chars().collect()).collect();
        let lengths: BTreeSet<usize> = rows.iter().map(Vec::len).collect();
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
        let mut board = Board::new(column_length)?;
        for (y, row) in rows.iter().enumerate() {
            for (x, &ch) in row.iter().enumerate() {
                board.put(x, y, Cell::try_from(ch)?);
            }
        }
        Ok(board)
    }

    /// Return the text form of the board, with `'_'` for empty squares.
    /// [`from_text`](Board::from_text) parses it back to an equal board.
    pub fn to_text(&self) -> String {
        self.to_text_with(TEXT_BLANK)
    }

    /// Return the text form of the board, with `blank` for empty squares.
    pub fn to_text_with(&self, blank: char) -> String {
        (0..self.size)
            .map(|y| {
                (0..self.size)
                    .map(|x| self.cell(x, y).letter().map_or(blank, Letter::as_char))
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// The number of rows (and columns) of the board
    pub fn size(&self) -> usize {
        self.size
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), Error> {
        if x >= self.size || y >= self.size {
            return Err(Error::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Square at x, y. Caller checks bounds.
    pub(crate) fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[x * self.size + y]
    }

    /// Replace square at x, y. Caller checks bounds.
    pub(crate) fn put(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[x * self.size + y] = cell;
    }

    /// Return the square at x, y.
    /// ## Errors
    /// If x or y is outside the board.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, Error> {
        self.check_bounds(x, y)?;
        Ok(self.cell(x, y))
    }

    /// Put `letter` at x, y, converted to uppercase.
    /// Setting a `' '` or `'_'` empties the square.
    /// ## Errors
    /// - If x or y is outside the board.
    /// - If `letter` is not a letter or empty.
    /// ## Examples
    /// ```
    /// use wordgrid_validator::Board;
    /// let mut board = Board::new(2)?;
    /// board.set(0, 1, 'a')?;
    /// assert_eq!(board.get(0, 1)?, 'A');
    /// assert!(board.set(2, 2, 'F').is_err());
    /// # Ok::<(), wordgrid_validator::Error>(())
    /// ```
    pub fn set(&mut self, x: usize, y: usize, letter: char) -> Result<(), Error> {
        self.check_bounds(x, y)?;
        let cell = Cell::try_from(letter)?;
        self.put(x, y, cell);
        Ok(())
    }

    /// Check if square at x, y is occupied. Squares outside the board are never occupied.
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && !self.cell(x, y).is_blank()
    }

    /// Return the rows of the board, top to bottom. Empty squares are `' '`.
    pub fn rows(&self) -> Vec<Vec<char>> {
        (0..self.size)
            .map(|y| (0..self.size).map(|x| self.cell(x, y).as_char()).collect())
            .collect()
    }

    /// Return the columns of the board, left to right. Empty squares are `' '`.
    pub fn columns(&self) -> Vec<Vec<char>> {
        self.cells
            .chunks(self.size)
            .map(|column| column.iter().map(|cell| cell.as_char()).collect())
            .collect()
    }

    /// All words on the board, with their position.
    /// Rows are scanned first (top to bottom), then columns (left to right).
    pub(crate) fn spans(&self) -> Vec<Span> {
        let mut res = Vec::new();
        for y in 0..self.size {
            let row = (0..self.size).map(|x| self.cell(x, y));
            res.extend(runs(row).into_iter().map(|(x, word)| Span {
                x,
                y,
                horizontal: true,
                word,
            }));
        }
        for (x, column) in self.cells.chunks(self.size).enumerate() {
            res.extend(runs(column.iter().copied()).into_iter().map(|(y, word)| Span {
                x,
                y,
                horizontal: false,
                word,
            }));
        }
        res
    }

    /// Return all words on the board: every run of two or more letters in a row or
    /// column. Rows are scanned first (top to bottom), then columns (left to right).
    /// ## Examples
    /// ```
    /// use wordgrid_validator::Board;
    /// let board = Board::from_text("MAN\nAN_\nD__")?;
    /// assert_eq!(board.words(), ["MAN", "AN", "MAD", "AN"]);
    /// # Ok::<(), wordgrid_validator::Error>(())
    /// ```
    pub fn words(&self) -> Vec<String> {
        self.spans().into_iter().map(|span| span.word).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    fn board_man() -> Result<Board> {
        let mut board = Board::new(3)?;
        board.set(0, 0, 'M')?;
        board.set(0, 1, 'A')?;
        board.set(0, 2, 'N')?;
        Ok(board)
    }

    #[test]
    fn test_board_constructors() -> Result<()> {
        let err = Board::from_columns(&[vec![' ', ' '], vec![' ']]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Can't handle board with different length columns, found these: {1, 2}"
        );
        let err = Board::from_columns(&[[' ', ' ', ' '], [' ', ' ', ' ']]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Can't handle board with column length 3 != column count 2"
        );
        assert_eq!(Board::from_columns(&[['A']])?.size(), 1);
        assert_eq!(Board::from_columns(&[['A', 'B'], ['A', 'B']])?.size(), 2);
        for size in 1..4 {
            assert_eq!(Board::new(size)?.size(), size);
        }
        assert!(matches!(Board::new(0), Err(Error::EmptyBoard)));
        let empty: &[Vec<char>] = &[];
        assert!(matches!(Board::from_columns(empty), Err(Error::EmptyBoard)));
        assert!(matches!(
            Board::from_columns(&[['A', '1'], ['B', 'C']]),
            Err(Error::InvalidLetter('1'))
        ));
        Ok(())
    }

    #[test]
    fn test_board_text_translators() -> Result<()> {
        let board = board_man()?;
        let text = board.to_text();
        assert_eq!(text, "M__\nA__\nN__");
        assert_eq!(board.to_text_with(' '), "M  \nA  \nN  ");
        assert_eq!(Board::from_text(&text)?, board);
        assert_eq!(Board::from_text("M  \nA  \nN  \n")?, board);
        assert_eq!("M__\r\nA__\r\nN__".parse::<Board>()?, board);
        assert_eq!(board.to_string(), text);

        let err = Board::from_text("__\n_").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Can't handle board with different length rows, found these: {1, 2}"
        );
        let err = Board::from_text("__\n__\n__").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Can't handle board with row length 2 != column length 3"
        );
        // shape is checked before the squares
        assert!(matches!(
            Board::from_text("1_\n_"),
            Err(Error::DifferentRowLengths(_))
        ));
        assert!(Board::from_text("").is_err());
        Ok(())
    }

    #[test]
    fn test_roundtrip() -> Result<()> {
        let texts = [
            "A",
            "_",
            "MAN\nAN_\nD__",
            "___\n_Q_\n___",
            "ZAP_\n____\nX__Y\nWORD",
        ];
        for text in &texts {
            let board = Board::from_text(text)?;
            assert_eq!(Board::from_text(&board.to_text())?, board);
            assert_eq!(&board.to_text(), text);
        }
        Ok(())
    }

    #[test]
    fn test_set_and_get() -> Result<()> {
        let mut board = Board::new(2)?;
        board.set(0, 0, 'M')?;
        board.set(0, 1, 'a')?;
        board.set(1, 0, 'D')?;
        board.set(1, 1, 'E')?;
        assert_eq!(board.get(0, 0)?, 'M');
        assert_eq!(board.get(0, 1)?, 'A');
        assert_eq!(board.get(1, 0)?, 'D');
        assert_eq!(board.get(1, 1)?, 'E');
        assert_eq!(
            board.set(2, 2, 'F').unwrap_err().to_string(),
            "Error, coordinates (2, 2) exceed board size 2"
        );
        assert!(matches!(
            board.get(2, 0),
            Err(Error::OutOfBounds { x: 2, y: 0, size: 2 })
        ));
        assert!(matches!(board.get(0, 2), Err(Error::OutOfBounds { .. })));
        assert!(matches!(board.set(0, 0, '#'), Err(Error::InvalidLetter('#'))));
        board.set(0, 0, ' ')?;
        assert!(board.get(0, 0)?.is_blank());
        assert!(!board.is_occupied(0, 0));
        assert!(board.is_occupied(1, 1));
        assert!(!board.is_occupied(5, 1));
        Ok(())
    }

    #[test]
    fn test_columns_and_rows() -> Result<()> {
        let mut board = Board::new(2)?;
        board.set(0, 0, 'M')?;
        board.set(0, 1, 'A')?;
        board.set(1, 0, 'D')?;
        board.set(1, 1, 'E')?;
        assert_eq!(board.rows(), vec![vec!['M', 'D'], vec!['A', 'E']]);
        assert_eq!(board.columns(), vec![vec!['M', 'A'], vec!['D', 'E']]);
        assert_eq!(Board::from_columns(&board.columns())?, board);
        Ok(())
    }

    #[test]
    fn test_words() -> Result<()> {
        let board = Board::from_text("MAN\nAN_\nD__")?;
        let mut words = board.words();
        words.sort();
        assert_eq!(words, vec!["AN", "AN", "MAD", "MAN"]);
        let board = Board::from_text("A_B\n___\nC_D")?;
        assert!(board.words().is_empty());
        Ok(())
    }

    #[test]
    fn test_spans() -> Result<()> {
        let board = Board::from_text("_ZAP\n_A__\n____\nMAD_")?;
        let spans = board.spans();
        assert_eq!(spans.len(), 3);
        assert_eq!((spans[0].x, spans[0].y, spans[0].horizontal), (1, 0, true));
        assert_eq!(spans[0].word, "ZAP");
        assert_eq!(spans[1].word, "MAD");
        assert_eq!((spans[2].x, spans[2].y, spans[2].horizontal), (1, 0, false));
        assert_eq!(spans[2].word, "ZA");
        assert!(spans[0].covers(3, 0));
        assert!(!spans[0].covers(0, 0));
        assert!(spans[2].covers(1, 1));
        assert!(!spans[2].covers(1, 2));
        Ok(())
    }

    #[cfg(feature = "bincode")]
    #[test]
    fn test_bincode_checks_shape() -> Result<()> {
        let board = board_man()?;
        let bytes = bincode::serialize(&board).unwrap();
        assert_eq!(bincode::deserialize::<Board>(&bytes).unwrap(), board);

        let ragged = bincode::serialize(&vec![vec![' ', ' ', ' '], vec![' ', ' ']]).unwrap();
        let err = bincode::deserialize::<Board>(&ragged).unwrap_err();
        assert!(err.to_string().contains("different length columns"));
        let short = bincode::serialize(&vec![vec![' '; 3]; 2]).unwrap();
        assert!(bincode::deserialize::<Board>(&short).is_err());
        let empty: Vec<Vec<char>> = Vec::new();
        let bytes = bincode::serialize(&empty).unwrap();
        assert!(bincode::deserialize::<Board>(&bytes).is_err());
        let bad_letter = bincode::serialize(&vec![vec!['\u{1}']]).unwrap();
        assert!(bincode::deserialize::<Board>(&bad_letter).is_err());
        Ok(())
    }

    #[test]
    fn test_equality() -> Result<()> {
        let board = board_man()?;
        let mut other = board.clone();
        assert_eq!(board, other);
        other.set(2, 2, 'X')?;
        assert_ne!(board, other);
        assert_ne!(Board::new(2)?, Board::new(3)?);
        Ok(())
    }
}
