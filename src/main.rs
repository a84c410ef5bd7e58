//! datos-extract CLI
//!
//! Pages through a datos.gov.co dataset and keeps every record in memory.
//! Exits with status 1 when the API cannot be reached.

use clap::Parser;
use datos_extract::cli::{Cli, Runner};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let runner = Runner::new(cli);

    let code = runner.run().await;
    std::process::exit(code);
}
