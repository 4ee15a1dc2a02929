use std::process;

use clap::Parser;

use slurmspawner_wrappers::slurm::runner::SystemRunner;
use slurmspawner_wrappers::{wrapper, JobId};

/// Cancel the job in SLURMSPAWNER_JOB_ID using scancel
///
/// Exits with scancel's exit code, which may be non-zero for jobs that have already ended.
#[derive(Parser, Debug)]
#[command(name = "run_scancel", version = slurmspawner_wrappers::VERSION)]
struct Args {}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let _args = Args::parse();

    let job_id = JobId::from_env()?;
    let code = wrapper::run_scancel(&SystemRunner, &job_id)?;
    process::exit(code)
}
