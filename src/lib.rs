//! Wrappers that run Slurm commands on behalf of JupyterHub's batchspawner.SlurmSpawner
//!
//! Each wrapper is a console entry point that takes no arguments, runs exactly one Slurm command
//! and exits with that command's exit code. Output is never captured: the spawner reads it
//! straight from the inherited stdout.

/// Absolute paths to the Slurm commands and the job id environment variable
pub mod constants;
pub mod error;
pub mod job_id;
/// Build fixed Slurm command lines and run them
pub mod slurm;
pub mod wrapper;

pub use error::WrapperError;
pub use job_id::JobId;

/// Package version, reported by each binary's `--version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

