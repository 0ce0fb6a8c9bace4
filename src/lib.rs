//! Lookup tables for a bitboard based 7x7 Ataxx engine.
//!
//! Squares are numbered row-major from the top-left corner, and a `BitBoard` keeps square `n` in
//! bit `n` of a u64, so only the low 49 bits are ever used.  From that geometry and one set of
//! Zobrist codes this crate builds:
//!
//! * the Zobrist code of every (player, square),
//! * the hash fragment of every 16-bit window pattern, so an engine can rehash a board word with
//!   four lookups,
//! * the surround mask of every square,
//! * the 16 jumps of every square, with the surround mask of each landing square,
//! * the offset of each of the 16 jump slots.
//!
//! ```
//! use ataxx_tables::{jump_offsets, surrounds_of, Coord};
//!
//! assert_eq!(surrounds_of(3, 3).popcnt(), 8);
//! assert_eq!(jump_offsets()[0], Coord::new(-2, -2));
//! ```

mod bitboard;
pub use crate::bitboard::*;

mod error;
pub use crate::error::*;

pub mod gen_tables;
pub use crate::gen_tables::{jump_offsets, surrounds_of, JumpEntry, LookupTables, NUM_JUMPS};

mod player;
pub use crate::player::*;

mod square;
pub use crate::square::*;

mod zobrist;
pub use crate::zobrist::*;
