use std::process;

use clap::Parser;

use slurmspawner_wrappers::slurm::runner::SystemRunner;
use slurmspawner_wrappers::{wrapper, JobId};

/// Print `<STATE> <HOST>` for the job in SLURMSPAWNER_JOB_ID using squeue
///
/// Exits with squeue's exit code.
#[derive(Parser, Debug)]
#[command(name = "run_squeue", version = slurmspawner_wrappers::VERSION)]
struct Args {}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let _args = Args::parse();

    let job_id = JobId::from_env()?;
    let code = wrapper::run_squeue(&SystemRunner, &job_id)?;
    process::exit(code)
}
