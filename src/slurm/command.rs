use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::{SBATCH_PATH, SCANCEL_PATH, SQUEUE_PATH};
use crate::job_id::JobId;

/// Where the child process reads its stdin from
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StdinMode {
    /// The wrapper's own stdin, e.g. a batch script piped in by the spawner
    Inherit,
    /// An empty stdin, the child sees end of input straight away
    Null,
}

/// A fully specified Slurm command line
///
/// These match the default command templates of batchspawner.SlurmSpawner:
///
/// | wrapper     | template                         |
/// | ----------- | -------------------------------- |
/// | run_sbatch  | `sbatch --parsable`              |
/// | run_squeue  | `squeue -h -j {job_id} -o '%T %B'` |
/// | run_scancel | `scancel {job_id}`               |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlurmCommand {
    program: PathBuf,
    args: Vec<OsString>,
    stdin: StdinMode,
}

impl SlurmCommand {
    pub fn new<I, S>(program: impl Into<PathBuf>, args: I, stdin: StdinMode) -> SlurmCommand
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        SlurmCommand {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            stdin,
        }
    }

    /// Submit the batch script arriving on stdin, printing `jobid[;cluster]`
    pub fn sbatch() -> SlurmCommand {
        SlurmCommand::new(SBATCH_PATH, ["--parsable"], StdinMode::Inherit)
    }

    /// Print `<STATE> <HOST>` for a job, without a header line
    pub fn squeue(job_id: &JobId) -> SlurmCommand {
        let args: [&OsStr; 5] = [
            "-h".as_ref(),
            "-j".as_ref(),
            job_id.as_os_str(),
            "-o".as_ref(),
            "%T %B".as_ref(),
        ];
        SlurmCommand::new(SQUEUE_PATH, args, StdinMode::Inherit)
    }

    pub fn scancel(job_id: &JobId) -> SlurmCommand {
        SlurmCommand::new(SCANCEL_PATH, [job_id.as_os_str()], StdinMode::Inherit)
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    pub fn stdin(&self) -> StdinMode {
        self.stdin
    }

    /// Program path followed by its arguments
    pub fn argv(&self) -> Vec<OsString> {
        std::iter::once(self.program.clone().into_os_string())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for SlurmCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {:?}", arg)?;
        }
        Ok(())
    }
}
