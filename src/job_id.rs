use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;

use crate::constants::JOB_ID_VAR;
use crate::error::WrapperError;

/// A Slurm job id as handed over by the spawner
///
/// The id is opaque: it's passed to squeue or scancel exactly as it was set, without checking
/// that it looks like a number (or even that it's valid UTF-8). An empty value still counts as set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobId(OsString);

impl JobId {
    /// Read the job id from `SLURMSPAWNER_JOB_ID`
    pub fn from_env() -> Result<JobId, WrapperError> {
        JobId::from_var(env::var_os(JOB_ID_VAR))
    }

    /// Build a job id from the (possibly missing) value of `SLURMSPAWNER_JOB_ID`
    pub fn from_var(value: Option<OsString>) -> Result<JobId, WrapperError> {
        value
            .map(JobId)
            .ok_or(WrapperError::MissingJobId { var: JOB_ID_VAR })
    }

    pub fn as_os_str(&self) -> &OsStr {
        &self.0
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        JobId(OsString::from(id))
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}
