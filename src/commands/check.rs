//! Check command implementation

use console::Style;

use crate::cli::CheckArgs;
use elgglp::error::Result;
use elgglp::operations;

/// Run check command
pub fn run(args: CheckArgs) -> Result<()> {
    let versions = operations::check(&args.root, !args.install)?;

    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Valid"),
        args.root.display()
    );
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Elgg release:"),
        versions.elgg_version
    );
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Pack format:"),
        versions.pack_version
    );
    Ok(())
}
