use std::io::Write;

use log::debug;

use crate::error::Error;
use crate::gen_tables::hash_fragments::*;
use crate::gen_tables::jumps::*;
use crate::gen_tables::literal::{LITERAL_SIZES, NAMED_SIZES};
use crate::gen_tables::surrounds::*;
use crate::player::NUM_PLAYERS;
use crate::square::Coord;
use crate::zobrist::ZobristCodes;

/// Every table the engine needs, generated from one set of Zobrist codes.
pub struct LookupTables {
    pub codes: ZobristCodes,
    pub fragments: HashFragments,
    pub surrounds: SurroundTable,
    pub jump_offsets: [Coord; NUM_JUMPS],
    pub jumps: JumpTable,
}

impl LookupTables {
    /// Generate everything.  None of the tables depend on each other, only on `codes` and the
    /// board geometry.
    pub fn generate(codes: ZobristCodes) -> LookupTables {
        let fragments = gen_hash_fragments(&codes);
        debug!("generated {} hash fragment windows", NUM_PLAYERS * NUM_WINDOWS);
        let surrounds = gen_surrounds();
        debug!("generated {} surround masks", surrounds.len());
        let jump_offsets = jump_offsets();
        let jumps = gen_jumps(&jump_offsets);
        debug!("generated {} jump entries", jumps.len() * NUM_JUMPS);

        LookupTables {
            codes,
            fragments,
            surrounds,
            jump_offsets,
            jumps,
        }
    }
}

/// The bitboard tables on their own, without anything Zobrist related.
pub struct BitboardTables {
    pub surrounds: SurroundTable,
    pub jump_offsets: [Coord; NUM_JUMPS],
    pub jumps: JumpTable,
}

impl BitboardTables {
    pub fn generate() -> BitboardTables {
        let surrounds = gen_surrounds();
        let jump_offsets = jump_offsets();
        let jumps = gen_jumps(&jump_offsets);
        debug!(
            "generated {} surround masks and {} jump entries",
            surrounds.len(),
            jumps.len() * NUM_JUMPS
        );
        BitboardTables {
            surrounds,
            jump_offsets,
            jumps,
        }
    }
}

/// Write the full lookup table source file: Zobrist codes, hash fragments, surrounds and jumps.
pub fn write_lookup_tables<W: Write>(f: &mut W, tables: &LookupTables) -> Result<(), Error> {
    write!(
        f,
        "\n// Generated with gen-lookup-tables\n\
         // DO NOT MODIFY THIS FILE. Modify gen-lookup-tables and generate a new one.\n\
         #include \"bitboards.hpp\"\n\
         #include \"zobrist.hpp\"\n\n"
    )?;

    write_zobrist_codes(f, &tables.codes)?;
    write!(f, "\n")?;
    write_hash_fragments(f, &tables.fragments)?;
    write!(f, "\n")?;
    write_surrounds(f, &tables.surrounds, &NAMED_SIZES)?;
    write!(f, "\n")?;
    write_jumps(f, &tables.jumps, &NAMED_SIZES)?;
    write!(f, "\n")?;
    write_jump_offsets(f, &tables.jump_offsets, &NAMED_SIZES)?;
    write!(f, "\n")?;
    f.flush()?;
    Ok(())
}

/// Write the bitboard-only source file: surrounds and jumps.
pub fn write_bitboard_tables<W: Write>(f: &mut W, tables: &BitboardTables) -> Result<(), Error> {
    write!(
        f,
        "\n// Generated with gen-bitboards\n\
         // DO NOT MODIFY THIS FILE. Modify gen-bitboards and generate a new one.\n\
         #include \"bitboards.hpp\"\n\n"
    )?;

    write_surrounds(f, &tables.surrounds, &LITERAL_SIZES)?;
    write!(f, "\n")?;
    write_jumps(f, &tables.jumps, &LITERAL_SIZES)?;
    write!(f, "\n")?;
    write_jump_offsets(f, &tables.jump_offsets, &LITERAL_SIZES)?;
    write!(f, "\n")?;
    f.flush()?;
    Ok(())
}

/// Generate every table from `codes` and write them all to `f`.
pub fn generate_all_tables<W: Write>(f: &mut W, codes: ZobristCodes) -> Result<(), Error> {
    let tables = LookupTables::generate(codes);
    write_lookup_tables(f, &tables)
}

/// Generate the bitboard tables and write them to `f`.
pub fn generate_bitboard_tables<W: Write>(f: &mut W) -> Result<(), Error> {
    write_bitboard_tables(f, &BitboardTables::generate())
}
