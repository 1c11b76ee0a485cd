use anyhow::Result;
use std::io;

use teller::{cli, Bank, VERSION};

fn main() -> Result<()> {
    println!("🏦 Teller v{} - in-memory banking demo", VERSION);
    println!("All accounts live for this session only.");

    let mut bank = Bank::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    cli::run(&mut bank, &mut stdin.lock(), &mut stdout.lock())
}
