pub mod check;
pub mod info;
pub mod walk;

use clap::{Args, Parser, Subcommand};
use iprange_core::RangeSpec;

#[derive(Parser)]
#[command(name = "iprange")]
#[command(about = "Walks every address of a CIDR block or an address range.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Only print errors and results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print debug logs (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every address of a target
    #[command(alias = "w")]
    Walk(WalkArgs),
    /// Tell whether a target is well-formed, exits with 1 when it is not
    #[command(alias = "c")]
    Check { target: String },
    /// Show the bounds and size of a target
    #[command(alias = "i")]
    Info { target: RangeSpec },
}

#[derive(Args)]
pub struct WalkArgs {
    /// CIDR block, "start-end" range, single address, or "ipv4"/"ipv6" [default: ipv4]
    pub target: Option<RangeSpec>,

    /// Begin the walk at this address instead of the first one
    #[arg(short, long)]
    pub start: Option<String>,

    /// Print IPv6 addresses as eight zero-padded groups
    #[arg(long)]
    pub full: bool,

    /// Print the position and completion percentage next to each address
    #[arg(short, long)]
    pub progress: bool,

    /// Stop after this many addresses
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Draw a progress bar on stderr
    #[arg(long)]
    pub bar: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
