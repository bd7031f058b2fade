use anyhow::Result;
use clap::Parser;
use eocvsim_workspace::{cli::Cli, run};

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
