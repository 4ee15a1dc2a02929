use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a wrapper before it can forward a Slurm exit code
///
/// A Slurm command exiting non-zero is not one of these: that exit code belongs to the spawner.
#[derive(Debug, Error)]
pub enum WrapperError {
    #[error("environment variable {var} must be set")]
    MissingJobId { var: &'static str },

    #[error("can't run {}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}
