//! Shared helpers for the wrapper binary tests
#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;

use slurmspawner_wrappers::constants::{JOB_ID_VAR, SBATCH_PATH, SCANCEL_PATH, SQUEUE_PATH};

/// Long-form squeue state codes, from https://slurm.schedmd.com/squeue.html#SECTION_JOB-STATE-CODES
pub const SQUEUE_STATES: [&str; 24] = [
    "BOOT_FAIL",
    "CANCELLED",
    "COMPLETED",
    "CONFIGURING",
    "COMPLETING",
    "DEADLINE",
    "FAILED",
    "NODE_FAIL",
    "OUT_OF_MEMORY",
    "PENDING",
    "PREEMPTED",
    "RUNNING",
    "RESV_DEL_HOLD",
    "REQUEUE_FED",
    "REQUEUE_HOLD",
    "REQUEUED",
    "RESIZING",
    "REVOKED",
    "SIGNALING",
    "SPECIAL_EXIT",
    "STAGE_OUT",
    "STOPPED",
    "SUSPENDED",
    "TIMEOUT",
];

/// Requests 1 task on 1 node for 2 minutes and sleeps long enough to be queried and cancelled.
/// Output goes to /dev/null so no file is written.
pub const SLEEP_BATCH_SCRIPT: &str = "#!/bin/bash
#SBATCH --job-name=\"cargo-test-slurmspawner_wrappers\"
#SBATCH --nodes=1
#SBATCH --ntasks-per-node=1
#SBATCH --time=2
#SBATCH --mem=100M
#SBATCH --output=/dev/null

sleep 60
";

pub fn slurm_installed() -> bool {
    [SBATCH_PATH, SQUEUE_PATH, SCANCEL_PATH]
        .iter()
        .all(|path| Path::new(path).exists())
}

pub fn sbatch_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_run_sbatch"))
}

pub fn squeue_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_run_squeue"))
}

pub fn scancel_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_run_scancel"))
}

/// A wrapper command with the job id variable set
pub fn with_job_id(mut cmd: Command, job_id: &str) -> Command {
    cmd.env(JOB_ID_VAR, job_id);
    cmd
}

/// Job id from `sbatch --parsable` output, which may append `;cluster`
pub fn parse_job_id(stdout: &str) -> &str {
    let line = stdout.trim_end();
    line.split(';').next().unwrap_or(line)
}

/// Split squeue's `%T %B` line into (state, batch host)
pub fn parse_state_line(stdout: &str) -> Option<(&str, &str)> {
    let (state, host) = stdout.trim_end().split_once(' ')?;
    let is_token = !state.is_empty() && state.chars().all(|c| c.is_ascii_uppercase() || c == '_');
    is_token.then_some((state, host))
}
