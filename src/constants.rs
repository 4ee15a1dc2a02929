// Slurm commands are run from absolute paths rather than located through PATH, so the spawner
// can't be pointed at a different executable by its environment.

pub static SBATCH_PATH: &str = "/usr/bin/sbatch";
pub static SQUEUE_PATH: &str = "/usr/bin/squeue";
pub static SCANCEL_PATH: &str = "/usr/bin/scancel";

/// Set by the spawner before calling the query and cancel wrappers
pub static JOB_ID_VAR: &str = "SLURMSPAWNER_JOB_ID";
