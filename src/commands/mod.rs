pub mod say;

use std::io::Write;

use crate::cli::{Args, Command};
use crate::error::CommandResult;
use crate::greeter::Greeter;

/// Dispatches execution to the appropriate command handler.
pub fn execute<W: Write>(args: &Args, out: &mut W) -> CommandResult<()> {
    match &args.command {
        Command::Say { names } => say::run(&Greeter::new(), names, out),
    }
}
