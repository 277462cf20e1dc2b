//! Shell completions command

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use elgglp::error::Result;

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = <Cli as CommandFactory>::command();
    clap_complete::generate(args.shell, &mut cmd, "elgglp", &mut std::io::stdout().lock());
    Ok(())
}
