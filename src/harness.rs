//! Deadline-bounded execution of a single search job.
//!
//! A job runs in its own worker thread over a shared immutable graph; the
//! worker owns every piece of mutable search state, so abandoning it on a
//! missed deadline cannot corrupt the caller. The result crosses back
//! through a one-shot channel.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use fxhash::FxHashSet;
use crate::approach::Approach;
use crate::branching::SearchOutcome;
use crate::cust_error::SolverError;
use crate::graph::UGraph;

/// The outcome of one bounded run.
///
/// `TimedOut` means the search was still exploring when the deadline hit;
/// it is not an algorithmic `NotFound`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RunOutcome {
    Found(FxHashSet<usize>),
    NotFound,
    TimedOut,
}

/// Runs `approach` on `graph` in a worker thread and waits at most `limit`
/// for its result.
///
/// On a missed deadline the worker is detached and its eventual result
/// discarded. A worker that exits without sending a result before the
/// deadline (a panic, in practice) is a `SolverError::WorkerFailure`,
/// reported distinctly from a timeout.
pub fn run_with_deadline(
    approach: Approach,
    graph: Arc<UGraph>,
    budget: usize,
    limit: Duration,
) -> Result<RunOutcome, SolverError> {
    let (sender, receiver) = mpsc::channel();
    let worker = thread::Builder::new()
        .name(format!("search-{}", approach))
        .spawn(move || {
            let outcome = approach.run(&graph, budget);
            // the receiver may already have given up
            let _ = sender.send(outcome);
        })
        .map_err(|_| SolverError::WorkerFailure)?;
    match receiver.recv_timeout(limit) {
        Ok(SearchOutcome::Found(cover)) => {
            let _ = worker.join();
            Ok(RunOutcome::Found(cover))
        }
        Ok(SearchOutcome::NotFound) => {
            let _ = worker.join();
            Ok(RunOutcome::NotFound)
        }
        Err(RecvTimeoutError::Timeout) => Ok(RunOutcome::TimedOut),
        Err(RecvTimeoutError::Disconnected) => Err(SolverError::WorkerFailure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::is_vertex_cover;

    #[test]
    fn completes_within_deadline_test() {
        let graph = Arc::new(UGraph::new(3, &[(0, 1), (1, 2), (0, 2)]).unwrap());
        let outcome = run_with_deadline(
            Approach::Recursion2k,
            Arc::clone(&graph),
            2,
            Duration::from_secs(5),
        )
        .unwrap();
        match outcome {
            RunOutcome::Found(cover) => {
                assert!(is_vertex_cover(&graph.edge_list(), &cover));
                assert!(cover.len() <= 2);
            }
            other => panic!("expected a cover, got {:?}", other),
        }
    }

    #[test]
    fn not_found_within_deadline_test() {
        let graph = Arc::new(UGraph::new(3, &[(0, 1), (1, 2), (0, 2)]).unwrap());
        let outcome =
            run_with_deadline(Approach::BruteForce, graph, 1, Duration::from_secs(5)).unwrap();
        assert_eq!(outcome, RunOutcome::NotFound);
    }

    #[test]
    fn times_out_test() {
        // K_18 needs 17 cover vertices, so budget 16 forces the edge
        // branching through its full 2^16 tree, far beyond a millisecond
        let n = 18;
        let mut edges = Vec::new();
        for i in 0..n {
            for j in i + 1..n {
                edges.push((i, j));
            }
        }
        let graph = Arc::new(UGraph::new(n, &edges).unwrap());
        let outcome = run_with_deadline(
            Approach::Recursion2k,
            graph,
            16,
            Duration::from_millis(1),
        )
        .unwrap();
        assert_eq!(outcome, RunOutcome::TimedOut);
    }

    #[test]
    fn approximation_under_harness_test() {
        let graph = Arc::new(UGraph::new(2, &[(0, 1)]).unwrap());
        let outcome =
            run_with_deadline(Approach::Approx2, graph, 0, Duration::from_secs(5)).unwrap();
        assert_eq!(outcome, RunOutcome::Found([0, 1].into_iter().collect()));
    }

}
