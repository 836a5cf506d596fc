fn main() {
    if let Err(e) = distribution::cli::run() {
        eprintln!("distribution: {e}");
        std::process::exit(1);
    }
}
