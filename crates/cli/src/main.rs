fn main() {
    if let Err(e) = snipscope_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
