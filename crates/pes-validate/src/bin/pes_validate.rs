//! Thin binary wrapper around the library CLI.

fn main() {
    if let Err(err) = pes_validate::cli::cli() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
