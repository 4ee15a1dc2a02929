use std::process::{Command, ExitStatus, Stdio};

use log::{info, warn};

use crate::error::WrapperError;
use crate::slurm::command::{SlurmCommand, StdinMode};

/// Runs a Slurm command to completion and reports its exit code
pub trait CommandRunner {
    fn run(&self, command: &SlurmCommand) -> Result<i32, WrapperError>;
}

/// Runs commands as real child processes
///
/// The child shares the wrapper's stdout and stderr, so whatever Slurm prints reaches the spawner
/// unbuffered and untouched. The wrapper blocks until the child exits; there's no timeout.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &SlurmCommand) -> Result<i32, WrapperError> {
        let stdin = match command.stdin() {
            StdinMode::Inherit => Stdio::inherit(),
            StdinMode::Null => Stdio::null(),
        };

        let mut cmd = Command::new(command.program());
        cmd.args(command.args())
            .stdin(stdin)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        info!("Running {}", command);
        let status = cmd.status().map_err(|source| WrapperError::Spawn {
            program: command.program().to_path_buf(),
            source,
        })?;

        let code = exit_code(status);
        info!("{} exited with {}", command.program().display(), code);
        Ok(code)
    }
}

/// Exit code of a finished child, using the shell's 128 + signal convention for killed processes
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            warn!("Child process killed by signal {signal}");
            return 128 + signal;
        }
    }

    warn!("Child process finished without an exit code");
    1
}
