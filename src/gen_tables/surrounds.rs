use std::io::Write;

use crate::bitboard::{coord_to_bit, BitBoard, EMPTY};
use crate::error::Error;
use crate::gen_tables::literal::{hex_literal, write_joined, ArraySizes};
use crate::square::{is_in_range, ALL_SQUARES, NUM_SQUARES};

/// Given a square, which squares touch it (including diagonally)?  These are the stones that
/// get converted when a move lands on that square.
pub type SurroundTable = [BitBoard; NUM_SQUARES];

/// Every on-board square at Chebyshev distance 1 from `(x, y)`, or `EMPTY` if `(x, y)` is itself
/// off the board.
pub fn surrounds_of(x: i8, y: i8) -> BitBoard {
    if !is_in_range(x, y) {
        return EMPTY;
    }
    let mut bitboard = EMPTY;
    for y2 in y - 1..=y + 1 {
        for x2 in x - 1..=x + 1 {
            if (x2, y2) != (x, y) {
                bitboard |= coord_to_bit(x2, y2);
            }
        }
    }
    bitboard
}

// Generate the surround mask of every square, row-major.
pub fn gen_surrounds() -> SurroundTable {
    let mut table = [EMPTY; NUM_SQUARES];
    for sq in ALL_SQUARES.iter() {
        table[sq.to_index()] = surrounds_of(sq.x(), sq.y());
    }
    table
}

// Write the BITBOARD_SURROUNDS array to the specified writer.
pub fn write_surrounds<W: Write>(
    f: &mut W,
    surrounds: &SurroundTable,
    sizes: &ArraySizes,
) -> Result<(), Error> {
    write!(f, "const Bitboard BITBOARD_SURROUNDS[{}] = {{\n    ", sizes.surrounds)?;
    write_joined(f, surrounds.iter(), 0, |f, bb| {
        f.write_all(hex_literal(bb.0).as_bytes())?;
        Ok(())
    })?;
    write!(f, "\n}};\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gen_tables::literal::NAMED_SIZES;
    use crate::square::Square;

    #[test]
    fn neighbour_counts() {
        assert_eq!(surrounds_of(0, 0).popcnt(), 3);
        assert_eq!(surrounds_of(6, 0).popcnt(), 3);
        assert_eq!(surrounds_of(0, 6).popcnt(), 3);
        assert_eq!(surrounds_of(6, 6).popcnt(), 3);
        assert_eq!(surrounds_of(3, 0).popcnt(), 5);
        assert_eq!(surrounds_of(0, 4).popcnt(), 5);
        assert_eq!(surrounds_of(3, 3).popcnt(), 8);
        assert_eq!(surrounds_of(1, 1).popcnt(), 8);
    }

    #[test]
    fn top_left_corner() {
        let expected = coord_to_bit(1, 0) | coord_to_bit(0, 1) | coord_to_bit(1, 1);
        assert_eq!(surrounds_of(0, 0), expected);
        assert_eq!(surrounds_of(0, 0), BitBoard((1 << 1) | (1 << 7) | (1 << 8)));
    }

    #[test]
    fn off_board_has_no_surrounds() {
        assert_eq!(surrounds_of(-1, 0), EMPTY);
        assert_eq!(surrounds_of(7, 7), EMPTY);
        assert_eq!(surrounds_of(3, -2), EMPTY);
    }

    #[test]
    fn surrounds_are_on_board_neighbours() {
        let table = gen_surrounds();
        for sq in ALL_SQUARES.iter() {
            let mask = table[sq.to_index()];
            assert!(!mask.contains(*sq));
            assert!(mask.is_on_board());
            for other in mask {
                assert!((other.x() - sq.x()).abs() <= 1);
                assert!((other.y() - sq.y()).abs() <= 1);
            }
        }
    }

    #[test]
    fn adjacency_is_symmetric() {
        let table = gen_surrounds();
        for a in ALL_SQUARES.iter() {
            for b in table[a.to_index()] {
                assert!(table[b.to_index()].contains(*a));
            }
        }
    }

    #[test]
    fn table_is_row_major() {
        let table = gen_surrounds();
        assert_eq!(table[Square::make_square(3, 0).to_index()], surrounds_of(3, 0));
        assert_eq!(table[24], surrounds_of(3, 3));
    }

    #[test]
    fn surrounds_text() {
        let mut out = Vec::new();
        write_surrounds(&mut out, &gen_surrounds(), &NAMED_SIZES).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(
            "const Bitboard BITBOARD_SURROUNDS[NUM_SQUARES] = {\n    0x0000000000000182LL,\n    "
        ));
        assert!(text.ends_with("LL\n};\n"));
        assert_eq!(text.lines().count(), NUM_SQUARES + 2);
    }
}
