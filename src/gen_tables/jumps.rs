use std::io::Write;

use arrayvec::ArrayVec;

use crate::bitboard::{BitBoard, EMPTY};
use crate::error::Error;
use crate::gen_tables::literal::{hex_literal, write_braced, write_joined, ArraySizes};
use crate::gen_tables::surrounds::surrounds_of;
use crate::square::{Coord, Square, ALL_SQUARES, NUM_SQUARES};

/// How many jump moves can a stone make?
pub const NUM_JUMPS: usize = 16;

/// Where a jump lands, and which squares it converts when it gets there.  Both are `EMPTY` when
/// the jump would leave the board.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default, Hash)]
pub struct JumpEntry {
    pub dest: BitBoard,
    pub surrounds: BitBoard,
}

impl JumpEntry {
    /// Can this jump be made at all?
    #[inline]
    pub fn is_on_board(&self) -> bool {
        self.dest != EMPTY
    }
}

/// Given a square and a jump slot, what does the jump do?
pub type JumpTable = [[JumpEntry; NUM_JUMPS]; NUM_SQUARES];

/// The jump offsets, by slot.  The engine indexes by slot number, so this order is part of the
/// generated interface and must never change.
///
/// Slots go clockwise around the distance-2 ring, starting at the top-left (A = 10, etc.):
///
/// ```text
///   01234
///   F...5
///   E.*.6
///   D...7
///   CBA98
/// ```
pub fn jump_offsets() -> [Coord; NUM_JUMPS] {
    let mut offsets = ArrayVec::<Coord, NUM_JUMPS>::new();

    // top edge, left to right
    for x in -2..=2 {
        offsets.push(Coord::new(x, -2));
    }
    // right edge, top to bottom, without the corner we already have
    for y in -1..=2 {
        offsets.push(Coord::new(2, y));
    }
    // bottom edge, right to left
    for x in (-2..=1).rev() {
        offsets.push(Coord::new(x, 2));
    }
    // left edge, bottom to top, stopping before the first corner
    for y in (-1..=1).rev() {
        offsets.push(Coord::new(-2, y));
    }

    match offsets.into_inner() {
        Ok(offsets) => offsets,
        Err(partial) => unreachable!("the jump ring has {} slots, not {}", partial.len(), NUM_JUMPS),
    }
}

/// What happens when a stone on `src` jumps along `offset`?
pub fn jump_entry(src: Square, offset: Coord) -> JumpEntry {
    let dest = src.to_coord().offset(offset);
    let bit = BitBoard::from_coord(dest);
    if bit == EMPTY {
        JumpEntry::default()
    } else {
        JumpEntry {
            dest: bit,
            surrounds: surrounds_of(dest.x, dest.y),
        }
    }
}

// Generate every jump from every square, in slot order.
pub fn gen_jumps(offsets: &[Coord; NUM_JUMPS]) -> JumpTable {
    let mut table = [[JumpEntry::default(); NUM_JUMPS]; NUM_SQUARES];
    for src in ALL_SQUARES.iter() {
        for (slot, offset) in offsets.iter().enumerate() {
            table[src.to_index()][slot] = jump_entry(*src, *offset);
        }
    }
    table
}

// Write the BITBOARD_JUMPS array to the specified writer.
pub fn write_jumps<W: Write>(f: &mut W, jumps: &JumpTable, sizes: &ArraySizes) -> Result<(), Error> {
    write!(
        f,
        "const BitboardJump BITBOARD_JUMPS[{}][{}] = {{\n    ",
        sizes.jump_squares, sizes.jumps
    )?;
    write_joined(f, jumps.iter(), 0, |f, row| {
        write_braced(f, row.iter(), 1, |f, entry| {
            write!(
                f,
                "{{{}, {}}}",
                hex_literal(entry.dest.0),
                hex_literal(entry.surrounds.0)
            )?;
            Ok(())
        })
    })?;
    write!(f, "\n}};\n")?;
    Ok(())
}

// Write the JUMP_COORDS array to the specified writer.
pub fn write_jump_offsets<W: Write>(
    f: &mut W,
    offsets: &[Coord; NUM_JUMPS],
    sizes: &ArraySizes,
) -> Result<(), Error> {
    write!(f, "const Coord JUMP_COORDS[{}] = {{\n    ", sizes.jumps)?;
    write_joined(f, offsets.iter(), 0, |f, offset| {
        write!(f, "Coord({}, {})", offset.x, offset.y)?;
        Ok(())
    })?;
    write!(f, "\n}};\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::coord_to_bit;
    use crate::gen_tables::literal::NAMED_SIZES;

    #[test]
    fn offsets_walk_the_ring_clockwise() {
        let expected = [
            (-2, -2), (-1, -2), (0, -2), (1, -2), (2, -2),
            (2, -1), (2, 0), (2, 1), (2, 2),
            (1, 2), (0, 2), (-1, 2), (-2, 2),
            (-2, 1), (-2, 0), (-2, -1),
        ];
        let offsets = jump_offsets();
        for (slot, (x, y)) in expected.iter().enumerate() {
            assert_eq!(offsets[slot], Coord::new(*x, *y));
        }
    }

    #[test]
    fn offsets_cover_the_ring_once() {
        let offsets = jump_offsets();
        for (i, a) in offsets.iter().enumerate() {
            assert_eq!(a.x.abs().max(a.y.abs()), 2);
            for b in offsets[i + 1..].iter() {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn interior_square_has_every_jump() {
        let table = gen_jumps(&jump_offsets());
        let center = Square::make_square(3, 3);
        assert!(table[center.to_index()].iter().all(|e| e.is_on_board()));
    }

    #[test]
    fn corner_square_loses_jumps() {
        let table = gen_jumps(&jump_offsets());
        let corner = Square::make_square(0, 0);
        let count = table[corner.to_index()].iter().filter(|e| e.is_on_board()).count();
        assert!(count < NUM_JUMPS);
        // only the 5 offsets with x, y >= 0 stay on the board
        assert_eq!(count, 5);
    }

    #[test]
    fn top_left_slot() {
        let offsets = jump_offsets();
        assert_eq!(offsets[0], Coord::new(-2, -2));

        let from_corner = jump_entry(Square::make_square(0, 0), offsets[0]);
        assert_eq!(from_corner, JumpEntry { dest: EMPTY, surrounds: EMPTY });

        let from_inside = jump_entry(Square::make_square(2, 2), offsets[0]);
        assert_eq!(from_inside.dest, BitBoard(1));
        assert_eq!(from_inside.surrounds, surrounds_of(0, 0));
    }

    #[test]
    fn entries_are_consistent() {
        let offsets = jump_offsets();
        let table = gen_jumps(&offsets);
        for src in ALL_SQUARES.iter() {
            for (slot, entry) in table[src.to_index()].iter().enumerate() {
                assert!(entry.dest.popcnt() <= 1);
                assert!(entry.dest.is_on_board());
                assert!(entry.surrounds.is_on_board());
                let dest = src.to_coord().offset(offsets[slot]);
                assert_eq!(entry.dest, coord_to_bit(dest.x, dest.y));
                if entry.is_on_board() {
                    assert_eq!(entry.surrounds, surrounds_of(dest.x, dest.y));
                    assert!(!entry.surrounds.contains(*src));
                } else {
                    assert_eq!(entry.surrounds, EMPTY);
                }
            }
        }
    }

    #[test]
    fn jump_counts_are_symmetric() {
        // a jump from a to b exists exactly when the jump from b to a does
        let offsets = jump_offsets();
        let table = gen_jumps(&offsets);
        for src in ALL_SQUARES.iter() {
            for entry in table[src.to_index()].iter().filter(|e| e.is_on_board()) {
                let dest = entry.dest.to_square();
                let back = table[dest.to_index()]
                    .iter()
                    .any(|e| e.dest == BitBoard::from_square(*src));
                assert!(back);
            }
        }
    }

    #[test]
    fn offsets_text() {
        let mut out = Vec::new();
        write_jump_offsets(&mut out, &jump_offsets(), &NAMED_SIZES).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(
            "const Coord JUMP_COORDS[NUM_JUMPS] = {\n    Coord(-2, -2),\n    Coord(-1, -2),\n"
        ));
        assert!(text.ends_with("    Coord(-2, -1)\n};\n"));
    }

    #[test]
    fn jumps_text() {
        let mut out = Vec::new();
        write_jumps(&mut out, &gen_jumps(&jump_offsets()), &NAMED_SIZES).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(
            "const BitboardJump BITBOARD_JUMPS[NUM_SQUARES][NUM_JUMPS] = {\n    {{0x0000000000000000LL, 0x0000000000000000LL},\n     {"
        ));
        assert_eq!(text.matches("},\n    {{").count(), NUM_SQUARES - 1);
        assert!(text.ends_with("}}\n};\n"));
    }
}
