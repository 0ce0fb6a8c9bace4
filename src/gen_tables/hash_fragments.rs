use std::io::Write;

use crate::bitboard::BitBoard;
use crate::error::Error;
use crate::gen_tables::literal::{write_braced, write_hex_array, write_joined};
use crate::player::{Player, ALL_PLAYERS, NUM_PLAYERS};
use crate::square::{Square, NUM_SQUARES};
use crate::zobrist::ZobristCodes;

/// How many squares are covered by one window of the board word?
pub const WINDOW_BITS: usize = 16;
/// How many windows does it take to cover the board?  49 = 3 * 16 + 1, so the last window only
/// has one real square in it.
pub const NUM_WINDOWS: usize = (NUM_SQUARES + WINDOW_BITS - 1) / WINDOW_BITS;
/// How many different patterns can one window hold?
pub const NUM_PATTERNS: usize = 1 << WINDOW_BITS;

const WINDOW_MASK: u64 = (NUM_PATTERNS - 1) as u64;

/// Given a player, a window and a 16-bit pattern, what does that pattern contribute to the hash?
///
/// An engine keeping a running hash of a board word can then fold in a whole window with one
/// lookup instead of walking its bits.
pub struct HashFragments {
    // player-major, then window, then pattern
    table: Box<[u64]>,
}

impl HashFragments {
    #[inline]
    fn offset(player: Player, window: usize) -> usize {
        (player.to_index() * NUM_WINDOWS + window) * NUM_PATTERNS
    }

    /// Look up the hash contribution of `pattern` in `window` for `player`.
    #[inline]
    pub fn get(&self, player: Player, window: usize, pattern: u16) -> u64 {
        self.table[HashFragments::offset(player, window) + pattern as usize]
    }

    /// All `NUM_PATTERNS` fragments of one window, indexed by pattern.
    pub fn window(&self, player: Player, window: usize) -> &[u64] {
        let start = HashFragments::offset(player, window);
        &self.table[start..start + NUM_PATTERNS]
    }

    /// Hash one player's stones the way the engine does: one lookup per window.
    pub fn hash_board(&self, player: Player, board: BitBoard) -> u64 {
        (0..NUM_WINDOWS).fold(0, |hash, window| {
            let pattern = (board.0 >> (window * WINDOW_BITS)) & WINDOW_MASK;
            hash ^ self.get(player, window, pattern as u16)
        })
    }
}

/// XOR together the codes of every square whose bit is set in `pattern`.  Bit `i` of the
/// pattern is square `WINDOW_BITS * window + i`; bits past the last square are ignored.
pub fn hash_fragment(codes: &ZobristCodes, player: Player, window: usize, pattern: u16) -> u64 {
    let first = WINDOW_BITS * window;
    let mut hash = 0;
    for bit in 0..WINDOW_BITS {
        let square = first + bit;
        if square >= NUM_SQUARES {
            break;
        }
        if pattern & (1 << bit) != 0 {
            hash ^= codes.code(player, Square::new(square as u8));
        }
    }
    hash
}

/// Generate the fragment table for every player, window and pattern.
pub fn gen_hash_fragments(codes: &ZobristCodes) -> HashFragments {
    let mut table = vec![0u64; NUM_PLAYERS * NUM_WINDOWS * NUM_PATTERNS];
    for player in ALL_PLAYERS.iter() {
        for window in 0..NUM_WINDOWS {
            let start = HashFragments::offset(*player, window);
            for (pattern, fragment) in table[start..start + NUM_PATTERNS].iter_mut().enumerate() {
                *fragment = hash_fragment(codes, *player, window, pattern as u16);
            }
        }
    }
    HashFragments {
        table: table.into_boxed_slice(),
    }
}

/// Write the per-square codes as `ZOBRIST_CODES[2][NUM_SQUARES]`.
pub fn write_zobrist_codes<W: Write>(f: &mut W, codes: &ZobristCodes) -> Result<(), Error> {
    write!(f, "const ZobristHash ZOBRIST_CODES[2][NUM_SQUARES] = {{\n    ")?;
    write_joined(f, ALL_PLAYERS.iter(), 0, |f, player| {
        write_hex_array(f, &codes.player_codes(*player)[..], 1)
    })?;
    write!(f, "\n}};\n")?;
    Ok(())
}

/// Write the fragment table as `ZOBRIST_CODES_BB[2][4][0x10000]`.
pub fn write_hash_fragments<W: Write>(f: &mut W, fragments: &HashFragments) -> Result<(), Error> {
    write!(f, "const ZobristHash ZOBRIST_CODES_BB[2][4][0x10000] = {{\n    ")?;
    write_joined(f, ALL_PLAYERS.iter(), 0, |f, player| {
        write_braced(f, 0..NUM_WINDOWS, 1, |f, window| {
            write_hex_array(f, fragments.window(*player, window), 2)
        })
    })?;
    write!(f, "\n}};\n")?;
    Ok(())
}
