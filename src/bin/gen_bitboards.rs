use std::io::{self, BufWriter};
use std::process;

use ataxx_tables::gen_tables::generate_bitboard_tables;
use log::{error, info};

// Print the surround and jump tables, without the Zobrist tables, to stdout.
fn main() {
    env_logger::init();

    info!("generating bitboard tables");
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(e) = generate_bitboard_tables(&mut out) {
        error!("{}", e);
        process::exit(1);
    }
}
