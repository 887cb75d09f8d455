use std::io;

use tc_client_generator::{logging::init_logging, process};

fn main() {
    init_logging();

    // Streams are passed explicitly so tests can drive `process` with
    // in-memory writers.
    let exit_code = process(std::env::args_os(), &mut io::stdout(), &mut io::stderr());

    std::process::exit(exit_code);
}
