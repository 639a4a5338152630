use std::process::exit;

use addrbook::cli::run_app;
use addrbook::logging;

fn main() {
    // A broken logger is not worth refusing to run over
    let _logger = match logging::init() {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("{err}");
            None
        }
    };

    if let Err(err) = run_app() {
        eprintln!("{err}");
        exit(1);
    }
}
