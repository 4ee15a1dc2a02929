//! Slurm command lines and the process runner that executes them

/// The three fixed command templates (sbatch, squeue, scancel)
pub mod command;

/// Run a command with inherited output streams and collect its exit code
pub mod runner;
