// Helpers for writing C++ array literals.  Every element of an array goes on its own line, and
// each level of nesting indents its elements one space further than the level around it.
use std::io::Write;

use crate::error::Error;

// How far the outermost array's elements are indented.
const BASE_INDENT: usize = 4;

/// How the array sizes are spelled in a generated file's declarations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArraySizes {
    /// Length of `BITBOARD_SURROUNDS`.
    pub surrounds: &'static str,
    /// Outer length of `BITBOARD_JUMPS`.
    pub jump_squares: &'static str,
    /// Inner length of `BITBOARD_JUMPS` and length of `JUMP_COORDS`.
    pub jumps: &'static str,
}

/// Sizes spelled with the engine's named constants.
pub const NAMED_SIZES: ArraySizes = ArraySizes {
    surrounds: "NUM_SQUARES",
    jump_squares: "NUM_SQUARES",
    jumps: "NUM_JUMPS",
};

/// Sizes spelled as literals, for the bitboard-only file.
pub const LITERAL_SIZES: ArraySizes = ArraySizes {
    surrounds: "7*7",
    jump_squares: "49",
    jumps: "16",
};

/// Format a 64-bit value as a fixed-width lowercase hex literal with a `long long` suffix.
///
/// ```
/// use ataxx_tables::gen_tables::hex_literal;
///
/// assert_eq!(hex_literal(0x1f), "0x000000000000001fLL");
/// ```
pub fn hex_literal(value: u64) -> String {
    format!("0x{:016x}LL", value)
}

/// The separator between two elements of an array nested `depth` levels deep.
pub fn separator(depth: usize) -> String {
    format!(",\n{}", " ".repeat(BASE_INDENT + depth))
}

/// Write `items`, one after another, with `separator(depth)` between them.
pub fn write_joined<W, I, F>(f: &mut W, items: I, depth: usize, mut write_item: F) -> Result<(), Error>
where
    W: Write,
    I: IntoIterator,
    F: FnMut(&mut W, I::Item) -> Result<(), Error>,
{
    let sep = separator(depth);
    for (i, item) in items.into_iter().enumerate() {
        if i != 0 {
            f.write_all(sep.as_bytes())?;
        }
        write_item(f, item)?;
    }
    Ok(())
}

/// Same as `write_joined`, but wrapped in a pair of braces.
pub fn write_braced<W, I, F>(f: &mut W, items: I, depth: usize, write_item: F) -> Result<(), Error>
where
    W: Write,
    I: IntoIterator,
    F: FnMut(&mut W, I::Item) -> Result<(), Error>,
{
    write!(f, "{{")?;
    write_joined(f, items, depth, write_item)?;
    write!(f, "}}")?;
    Ok(())
}

/// Write a flat list of 64-bit values.
pub fn write_hex_values<W: Write>(f: &mut W, values: &[u64], depth: usize) -> Result<(), Error> {
    write_joined(f, values.iter(), depth, |f, v| {
        f.write_all(hex_literal(*v).as_bytes())?;
        Ok(())
    })
}

/// Write a list of 64-bit values wrapped in braces.
pub fn write_hex_array<W: Write>(f: &mut W, values: &[u64], depth: usize) -> Result<(), Error> {
    write!(f, "{{")?;
    write_hex_values(f, values, depth)?;
    write!(f, "}}")?;
    Ok(())
}
