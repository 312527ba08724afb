//! Batch driver: loads every graph instance matching a glob pattern and runs
//! one deadline-bounded search per instance, in load order.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use fxhash::FxHashSet;
use crate::approach::Approach;
use crate::cust_error::{ImportError, SolverError};
use crate::graph::UGraph;
use crate::harness::{run_with_deadline, RunOutcome};

/// One named graph instance; the name is the file name of its source.
#[derive(Debug, Clone)]
pub struct Instance {
    pub name: String,
    pub path: PathBuf,
    pub graph: Arc<UGraph>,
}

/// The per-instance outcome of a batch run. Worker failures are carried, not
/// swallowed; nothing is retried.
#[derive(Debug)]
pub struct JobReport {
    pub instance: String,
    pub outcome: Result<RunOutcome, SolverError>,
}

#[derive(Debug, Clone)]
pub struct Batch {
    instances: Vec<Instance>,
}

impl Batch {

    /// Globs `pattern` and loads every matching file as a graph instance.
    /// `*.sol` files are skipped. A malformed instance is reported and
    /// skipped; the rest of the batch still loads. A bad pattern is fatal.
    pub fn load(pattern: &str) -> Result<Self, ImportError> {
        let paths = glob::glob(pattern)
            .map_err(|_| ImportError::BadPatternError(pattern.to_owned()))?;
        let mut instances = Vec::new();
        for entry in paths {
            let path = match entry {
                Ok(path) => path,
                Err(e) => return Err(ImportError::IoError(e.into_error())),
            };
            if !path.is_file() || path.extension().is_some_and(|ext| ext == "sol") {
                continue;
            }
            let name = path
                .file_name()
                .expect("`path` points to a file")
                .to_string_lossy()
                .into_owned();
            let file = File::open(&path)?;
            match UGraph::read_gr(BufReader::new(file)) {
                Ok(graph) => instances.push(Instance {
                    name,
                    path,
                    graph: Arc::new(graph),
                }),
                Err(e) => {
                    tracing::error!(instance = %name, error = %e, "skipping malformed instance");
                }
            }
        }
        Ok(Batch { instances })
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// Deletes stale `*.sol` files next to the loaded instances. Runs before
    /// an approximation batch. Returns the number of deleted files.
    pub fn remove_stale_solutions(&self) -> io::Result<usize> {
        let mut dirs: Vec<&Path> = self
            .instances
            .iter()
            .filter_map(|instance| instance.path.parent())
            .collect();
        dirs.sort_unstable();
        dirs.dedup();
        let mut removed = 0;
        for dir in dirs {
            for entry in fs::read_dir(dir)? {
                let path = entry?.path();
                if path.is_file() && path.extension().is_some_and(|ext| ext == "sol") {
                    fs::remove_file(path)?;
                    removed += 1;
                }
            }
        }
        Ok(removed)
    }

    /// Runs `approach` once per instance under `limit` and reports each
    /// outcome. For an approximation, every found cover is persisted to
    /// `<instance>.sol` next to its source file.
    ///
    /// Timeouts, negative results and worker failures are recovered locally;
    /// the batch always continues with the next instance.
    pub fn run(&self, approach: Approach, budget: usize, limit: Duration) -> Vec<JobReport> {
        let mut reports = Vec::with_capacity(self.instances.len());
        for instance in &self.instances {
            let outcome =
                run_with_deadline(approach, Arc::clone(&instance.graph), budget, limit);
            match &outcome {
                Ok(RunOutcome::Found(cover)) => {
                    tracing::info!(
                        instance = %instance.name,
                        cover_size = cover.len(),
                        "computation finished"
                    );
                    if approach.is_approximation() {
                        if let Err(e) = persist_solution(&instance.path, cover) {
                            tracing::error!(
                                instance = %instance.name,
                                error = %e,
                                "could not persist solution"
                            );
                        }
                    }
                }
                Ok(RunOutcome::NotFound) => {
                    tracing::info!(
                        instance = %instance.name,
                        budget,
                        "computation finished, no cover within budget"
                    );
                }
                Ok(RunOutcome::TimedOut) => {
                    tracing::info!(instance = %instance.name, "time limit exceeded");
                }
                Err(e) => {
                    tracing::error!(instance = %instance.name, error = %e, "worker failed");
                }
            }
            reports.push(JobReport {
                instance: instance.name.clone(),
                outcome,
            });
        }
        reports
    }

}

/// Writes a solution to a `Write` type, one 1-based vertex id per line.
pub fn write_solution<W: Write>(solution: &FxHashSet<usize>, mut out: W) -> Result<(), io::Error> {
    for elem in solution {
        writeln!(out, "{}", elem + 1)?;
    }
    Ok(())
}

fn persist_solution(instance_path: &Path, cover: &FxHashSet<usize>) -> Result<(), io::Error> {
    let mut sol_path = instance_path.as_os_str().to_owned();
    sol_path.push(".sol");
    let file = File::create(PathBuf::from(sol_path))?;
    write_solution(cover, file)
}
