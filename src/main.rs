mod cli;

use std::io;

fn main() -> io::Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--help" || arg == "-h") {
        println!("chess_arbiter: hot-seat chess on the terminal\n\n{}", cli::USAGE);
        return Ok(());
    }
    let stdin = io::stdin();
    cli::run(stdin.lock(), io::stdout())
}
