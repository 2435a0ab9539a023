//! AVILIGHT CLI - Command line tool for the bundled Metro Manila datasets.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "avl-cli",
    version,
    about = "AVILIGHT bird survey and light pollution data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: avl_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    avl_cmd::run(cli.command)
}
