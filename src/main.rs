use std::io::{self, BufWriter};
use std::process;

use ataxx_tables::gen_tables::generate_all_tables;
use ataxx_tables::{ZobristCodes, HOTBITS_CODES};
use log::{error, info, warn};

// Print every lookup table the engine needs to stdout.
fn main() {
    env_logger::init();

    let codes = ZobristCodes::new(HOTBITS_CODES);
    if let Err(e) = codes.audit() {
        warn!("{}", e);
    }

    info!("generating lookup tables");
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match generate_all_tables(&mut out, codes) {
        Ok(()) => info!("done"),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
