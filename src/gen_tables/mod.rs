// These modules build the lookup tables the engine links against, and write them out as C++
// array literals.  Each table module has a `gen_*` function that computes the table and a
// `write_*` function that prints it; `generate_all_tables` strings them together into a file.

mod generate_all_tables;
mod hash_fragments;
mod jumps;
mod literal;
mod surrounds;

pub use self::generate_all_tables::{
    generate_all_tables, generate_bitboard_tables, write_bitboard_tables, write_lookup_tables,
    BitboardTables, LookupTables,
};
pub use self::hash_fragments::{
    gen_hash_fragments, hash_fragment, write_hash_fragments, write_zobrist_codes, HashFragments,
    NUM_PATTERNS, NUM_WINDOWS, WINDOW_BITS,
};
pub use self::jumps::{
    gen_jumps, jump_entry, jump_offsets, write_jump_offsets, write_jumps, JumpEntry, JumpTable,
    NUM_JUMPS,
};
pub use self::literal::{hex_literal, ArraySizes, LITERAL_SIZES, NAMED_SIZES};
pub use self::surrounds::{gen_surrounds, surrounds_of, write_surrounds, SurroundTable};
