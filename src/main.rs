//! invscan main entrypoint.

use invscan::{logging, run};

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
