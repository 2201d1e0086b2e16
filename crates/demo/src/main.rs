use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Pretty console output, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    println!("labstock: inventory data structures");
    println!("1) Run the full demonstration");
    println!("2) Exit");
    print!("Choose an option: ");
    io::stdout().flush()?;

    let mut choice = String::new();
    io::stdin().lock().read_line(&mut choice)?;

    if choice.trim() == "1" {
        labstock_demo::run_demo()?;
    } else {
        println!("Done.");
    }
    Ok(())
}
