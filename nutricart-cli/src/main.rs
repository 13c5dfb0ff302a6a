//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = nutricart_cli::run() {
        eprintln!("nutricart: {err}");
        std::process::exit(1);
    }
}
