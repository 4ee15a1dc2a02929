//! The three lifecycle operations called by batchspawner.SlurmSpawner
//!
//! Each returns the exit code of the Slurm command it ran. A non-zero code is a normal result to
//! forward, not an error: scancel for instance exits non-zero for jobs that already finished, and
//! it's up to the spawner to interpret that.

use log::debug;

use crate::error::WrapperError;
use crate::job_id::JobId;
use crate::slurm::command::SlurmCommand;
use crate::slurm::runner::CommandRunner;

/// Submit the batch script on stdin with `sbatch --parsable`
///
/// The script is opaque payload and goes to sbatch unread. The new job id shows up on stdout.
pub fn run_sbatch<R: CommandRunner + ?Sized>(runner: &R) -> Result<i32, WrapperError> {
    runner.run(&SlurmCommand::sbatch())
}

/// Query a job with `squeue -h -j {job_id} -o '%T %B'`
pub fn run_squeue<R: CommandRunner + ?Sized>(runner: &R, job_id: &JobId) -> Result<i32, WrapperError> {
    debug!("Querying job {job_id}");
    runner.run(&SlurmCommand::squeue(job_id))
}

/// Cancel a job with `scancel {job_id}`
pub fn run_scancel<R: CommandRunner + ?Sized>(runner: &R, job_id: &JobId) -> Result<i32, WrapperError> {
    debug!("Cancelling job {job_id}");
    runner.run(&SlurmCommand::scancel(job_id))
}
