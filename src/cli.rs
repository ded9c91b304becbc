use clap::{Parser, Subcommand};

/// Command-line arguments for the greeter CLI.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "greeter",
    version,
    about = "Print a greeting for each name given on the command line.",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Greet each NAME on its own line, in the order given.
    Say {
        /// Names to greet.
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },
}
