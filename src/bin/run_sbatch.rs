use std::process;

use clap::Parser;
use log::info;

use slurmspawner_wrappers::slurm::runner::SystemRunner;
use slurmspawner_wrappers::wrapper;

/// Submit the batch script read from stdin with `sbatch --parsable`
///
/// Exits with sbatch's exit code. The job id is printed by sbatch itself.
#[derive(Parser, Debug)]
#[command(name = "run_sbatch", version = slurmspawner_wrappers::VERSION)]
struct Args {}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let _args = Args::parse();
    info!("Submitting batch script from stdin");

    let code = wrapper::run_sbatch(&SystemRunner)?;
    process::exit(code)
}
