mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, info, walk};
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet, commands.verbose);

    match commands.command {
        Commands::Walk(args) => walk::walk(args).await,
        Commands::Check { target } => {
            if !check::check(&target) {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Info { target } => info::info(&target, commands.quiet),
    }
}
