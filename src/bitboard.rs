use crate::square::{coord_to_square_index, is_in_range, Coord, Square, BOARD_WIDTH, NUM_SQUARES};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// A set of squares packed into a u64.  Bit `n` is set when `Square` `n` is a member; bits 49
/// through 63 never correspond to a square and are never set by anything in this crate.
///
/// ```
/// use ataxx_tables::{BitBoard, Square};
///
/// let bb = BitBoard(7); // top-left 3 squares
///
/// let mut count = 0;
///
/// // Iterate over each square in the bitboard
/// for _ in bb {
///     count += 1;
/// }
///
/// assert_eq!(count, 3);
/// ```
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Clone, Copy, Debug, Default, Hash)]
pub struct BitBoard(pub u64);

/// An empty bitboard.
pub const EMPTY: BitBoard = BitBoard(0);

/// Every square on the board.
///
/// ```
///     use ataxx_tables::{BOARD_MASK, EMPTY};
///
///     assert_eq!(BOARD_MASK.popcnt(), 49);
///     assert_eq!(!EMPTY, BOARD_MASK);
/// ```
pub const BOARD_MASK: BitBoard = BitBoard((1u64 << NUM_SQUARES) - 1);

impl BitAnd for BitBoard {
    type Output = BitBoard;

    fn bitand(self, other: BitBoard) -> BitBoard {
        BitBoard(self.0 & other.0)
    }
}

impl BitOr for BitBoard {
    type Output = BitBoard;

    fn bitor(self, other: BitBoard) -> BitBoard {
        BitBoard(self.0 | other.0)
    }
}

impl BitXor for BitBoard {
    type Output = BitBoard;

    fn bitxor(self, other: BitBoard) -> BitBoard {
        BitBoard(self.0 ^ other.0)
    }
}

impl BitAndAssign for BitBoard {
    fn bitand_assign(&mut self, other: BitBoard) {
        self.0 &= other.0;
    }
}

impl BitOrAssign for BitBoard {
    fn bitor_assign(&mut self, other: BitBoard) {
        self.0 |= other.0;
    }
}

impl BitXorAssign for BitBoard {
    fn bitxor_assign(&mut self, other: BitBoard) {
        self.0 ^= other.0;
    }
}

// The complement stays on the board, so the unused high bits never get set.
impl Not for BitBoard {
    type Output = BitBoard;

    fn not(self) -> BitBoard {
        BitBoard(!self.0 & BOARD_MASK.0)
    }
}

impl fmt::Display for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s: String = "".to_owned();
        for x in 0..NUM_SQUARES {
            if self.0 & (1u64 << x) == (1u64 << x) {
                s.push_str("X ");
            } else {
                s.push_str(". ");
            }
            if x % BOARD_WIDTH == BOARD_WIDTH - 1 {
                s.push_str("\n");
            }
        }
        write!(f, "{}", s)
    }
}

impl BitBoard {
    /// Construct a new bitboard from a u64
    pub fn new(b: u64) -> BitBoard {
        BitBoard(b)
    }

    /// Construct a new `BitBoard` with a particular `Square` set
    #[inline]
    pub fn from_square(sq: Square) -> BitBoard {
        BitBoard(1u64 << sq.to_int())
    }

    /// Construct a `BitBoard` with the square at `(x, y)` set, or `EMPTY` if `(x, y)` is off the
    /// board.  An empty result is how the table generators detect off-board destinations.
    #[inline]
    pub fn from_xy(x: i8, y: i8) -> BitBoard {
        if is_in_range(x, y) {
            BitBoard(1u64 << coord_to_square_index(x, y))
        } else {
            EMPTY
        }
    }

    /// Same as `from_xy`, for a `Coord`.
    #[inline]
    pub fn from_coord(coord: Coord) -> BitBoard {
        BitBoard::from_xy(coord.x, coord.y)
    }

    /// Convert a `BitBoard` to a `Square`.  This grabs the least-significant `Square`
    #[inline]
    pub fn to_square(&self) -> Square {
        Square::new(self.0.trailing_zeros() as u8)
    }

    /// Count the number of `Squares` set in this `BitBoard`
    #[inline]
    pub fn popcnt(&self) -> u32 {
        self.0.count_ones()
    }

    /// Is this square in the set?
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        *self & BitBoard::from_square(sq) != EMPTY
    }

    /// Does this `BitBoard` only use bits that belong to squares?
    #[inline]
    pub fn is_on_board(&self) -> bool {
        self.0 & !BOARD_MASK.0 == 0
    }
}

/// For the `BitBoard`, iterate over every `Square` set, lowest first.
impl Iterator for BitBoard {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let result = self.to_square();
            *self ^= BitBoard::from_square(result);
            Some(result)
        }
    }
}

/// Return the single-bit `BitBoard` for `(x, y)`, or `EMPTY` when `(x, y)` is off the board.
#[inline]
pub fn coord_to_bit(x: i8, y: i8) -> BitBoard {
    BitBoard::from_xy(x, y)
}
