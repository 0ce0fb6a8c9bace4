use std::fmt;

/// How many columns does the board have?
pub const BOARD_WIDTH: usize = 7;
/// How many rows does the board have?
pub const BOARD_HEIGHT: usize = 7;
/// How many squares are there?
pub const NUM_SQUARES: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Is `(x, y)` on the board?
///
/// This is the only range check in the crate.  Everything that needs to know whether a
/// coordinate is on the board ends up here, so the edge policy cannot drift between tables.
///
/// ```
/// use ataxx_tables::is_in_range;
///
/// assert!(is_in_range(0, 0));
/// assert!(is_in_range(6, 6));
/// assert!(!is_in_range(-1, 3));
/// assert!(!is_in_range(3, 7));
/// ```
#[inline]
pub fn is_in_range(x: i8, y: i8) -> bool {
    0 <= x && (x as usize) < BOARD_WIDTH && 0 <= y && (y as usize) < BOARD_HEIGHT
}

/// Convert an on-board coordinate to its row-major bit number.
///
/// Panics if the coordinate is off the board.  Only call this once the range is known to be
/// good; use `BitBoard::from_coord` to probe coordinates that may be off the board.
#[inline]
pub fn coord_to_square_index(x: i8, y: i8) -> usize {
    assert!(is_in_range(x, y), "({}, {}) is not on the board", x, y);
    (y as usize) * BOARD_WIDTH + (x as usize)
}

/// A coordinate on (or near) the board.  `x` is the column, `y` is the row, and (0, 0) is the
/// top-left corner.  Off-board coordinates are perfectly representable; they just don't have a
/// `Square`.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash, Default)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    /// Make a coordinate.
    pub const fn new(x: i8, y: i8) -> Coord {
        Coord { x, y }
    }

    /// Move this coordinate by `delta`, which may land off the board.
    #[inline]
    pub fn offset(&self, delta: Coord) -> Coord {
        Coord::new(self.x + delta.x, self.y + delta.y)
    }

    /// Is this coordinate on the board?
    #[inline]
    pub fn is_on_board(&self) -> bool {
        is_in_range(self.x, self.y)
    }

    /// Convert to a `Square`, or `None` if this coordinate is off the board.
    #[inline]
    pub fn to_square(&self) -> Option<Square> {
        if self.is_on_board() {
            Some(Square::new(coord_to_square_index(self.x, self.y) as u8))
        } else {
            None
        }
    }
}

/// Represent a square on the board, numbered row-major from the top-left corner.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
pub struct Square(u8);

impl Square {
    /// Create a new square, given an index.
    /// Note: It is invalid, but allowed in release builds, to pass in a number >= 49.
    #[inline]
    pub fn new(sq: u8) -> Square {
        debug_assert!((sq as usize) < NUM_SQUARES);
        Square(sq)
    }

    /// Make a square from an on-board coordinate.  Panics if the coordinate is off the board.
    #[inline]
    pub fn make_square(x: i8, y: i8) -> Square {
        Square(coord_to_square_index(x, y) as u8)
    }

    /// Return the column of this square.
    #[inline]
    pub fn x(&self) -> i8 {
        (self.0 as usize % BOARD_WIDTH) as i8
    }

    /// Return the row of this square.
    #[inline]
    pub fn y(&self) -> i8 {
        (self.0 as usize / BOARD_WIDTH) as i8
    }

    /// Return the coordinate of this square.
    #[inline]
    pub fn to_coord(&self) -> Coord {
        Coord::new(self.x(), self.y())
    }

    /// Convert this square to an integer.
    #[inline]
    pub fn to_int(&self) -> u8 {
        self.0
    }

    /// Convert this `Square` to a `usize` for table lookup purposes
    #[inline]
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

/// A list of every square on the board, in row-major order.
pub const ALL_SQUARES: [Square; NUM_SQUARES] = {
    let mut squares = [Square(0); NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        squares[i] = Square(i as u8);
        i += 1;
    }
    squares
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_and_squares_are_a_bijection() {
        for sq in ALL_SQUARES.iter() {
            let coord = sq.to_coord();
            assert!(coord.is_on_board());
            assert_eq!(coord.to_square(), Some(*sq));
            assert_eq!(Square::make_square(coord.x, coord.y), *sq);
        }

        let mut seen = [false; NUM_SQUARES];
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                let index = coord_to_square_index(x, y);
                assert!(!seen[index]);
                seen[index] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn row_major_numbering() {
        assert_eq!(coord_to_square_index(0, 0), 0);
        assert_eq!(coord_to_square_index(6, 0), 6);
        assert_eq!(coord_to_square_index(0, 1), 7);
        assert_eq!(coord_to_square_index(6, 6), 48);
        assert_eq!(Square::new(10).to_coord(), Coord::new(3, 1));
    }

    #[test]
    fn range_checks() {
        for y in -3..10 {
            for x in -3..10 {
                let expected = x >= 0 && x < 7 && y >= 0 && y < 7;
                assert_eq!(is_in_range(x, y), expected);
                assert_eq!(Coord::new(x, y).is_on_board(), expected);
                assert_eq!(Coord::new(x, y).to_square().is_some(), expected);
            }
        }
    }

    #[test]
    #[should_panic]
    fn square_index_rejects_off_board() {
        coord_to_square_index(7, 0);
    }

    #[test]
    #[should_panic]
    fn square_index_rejects_negative() {
        coord_to_square_index(0, -1);
    }

    #[test]
    fn offsets() {
        let center = Coord::new(3, 3);
        assert_eq!(center.offset(Coord::new(-2, 1)), Coord::new(1, 4));
        assert!(!Coord::new(0, 0).offset(Coord::new(-1, 0)).is_on_board());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Square::make_square(2, 5)), "(2, 5)");
    }
}
