//! The closed set of search approaches and their dispatch.

use std::fmt;
use std::str::FromStr;
use crate::approx::{greedy_max_degree, two_approx_matching};
use crate::branching::{
    branch_max_degree, branch_min_index, branch_on_edges, brute_force, SearchOutcome,
};
use crate::cust_error::SolverError;
use crate::graph::UGraph;

/// One of the fixed search approaches.
///
/// The exact approaches take a cover size budget; the approximations ignore
/// it and always produce a cover.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Approach {
    BruteForce,
    Recursion2k,
    Recursion1_618k,
    Recursion1_47k,
    Approx2,
    ApproxLog,
}

impl Approach {

    pub const ALL: [Approach; 6] = [
        Approach::BruteForce,
        Approach::Recursion2k,
        Approach::Recursion1_618k,
        Approach::Recursion1_47k,
        Approach::Approx2,
        Approach::ApproxLog,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Approach::BruteForce => "brute_force",
            Approach::Recursion2k => "recursion_2k",
            Approach::Recursion1_618k => "recursion_1_618k",
            Approach::Recursion1_47k => "recursion_1_47k",
            Approach::Approx2 => "approx_2",
            Approach::ApproxLog => "approx_log",
        }
    }

    pub fn is_approximation(&self) -> bool {
        matches!(self, Approach::Approx2 | Approach::ApproxLog)
    }

    /// Runs the approach on `graph`. `budget` caps the cover size for the
    /// exact approaches and is ignored by the approximations.
    pub fn run(&self, graph: &UGraph, budget: usize) -> SearchOutcome {
        match self {
            Approach::BruteForce => brute_force(graph, budget),
            Approach::Recursion2k => branch_on_edges(graph, budget),
            Approach::Recursion1_618k => branch_min_index(graph, budget),
            Approach::Recursion1_47k => branch_max_degree(graph, budget),
            Approach::Approx2 => SearchOutcome::Found(two_approx_matching(graph)),
            Approach::ApproxLog => SearchOutcome::Found(greedy_max_degree(graph)),
        }
    }

}

impl FromStr for Approach {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Approach::ALL
            .into_iter()
            .find(|approach| approach.name() == s)
            .ok_or_else(|| SolverError::UnknownApproach(s.to_owned()))
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
