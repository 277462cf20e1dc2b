//! Version command implementation

use elgglp::error::Result;
use elgglp::pack::ENGINE_VERSION;

/// Run version command
pub fn run() -> Result<()> {
    println!("elgglp {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Language pack format: {ENGINE_VERSION}");
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
