//! Implementation of several parameterized branching searches for the Vertex
//! Cover decision problem: given a graph and a budget `k`, find a cover of
//! size at most `k` or report that the explored branches hold none.
//!
//! All searches are single threaded and purely functional over locally owned
//! state: every recursive branch receives fresh copies of the partial cover
//! and the covered-set, so sibling branches never observe each other's
//! mutations.

use fxhash::FxHashSet;
use crate::graph::{is_vertex_cover, UGraph};

/// The result of an exact search with budget `k`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SearchOutcome {
    /// A vertex cover of size at most `k`.
    Found(FxHashSet<usize>),
    /// No cover of size at most `k` exists along the explored branches.
    NotFound,
}

impl SearchOutcome {

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// Returns the cover, or `None` for `NotFound`.
    pub fn cover(&self) -> Option<&FxHashSet<usize>> {
        match self {
            SearchOutcome::Found(cover) => Some(cover),
            SearchOutcome::NotFound => None,
        }
    }

}

/// Tests vertex subsets of size 0 up to `k`, each size in lexicographic
/// order, and returns the first one that covers every edge. The returned
/// cover is therefore of minimum size.
///
/// Runs in O(C(V, k) * |E|) and is only meant as a correctness oracle for
/// small instances. A budget beyond `V` buys nothing, so it is clamped.
pub fn brute_force(graph: &UGraph, k: usize) -> SearchOutcome {
    let edges = graph.edge_list();
    let n = graph.num_nodes();
    for size in 0..=k.min(n) {
        let mut comb: Vec<usize> = (0..size).collect();
        loop {
            let candidate: FxHashSet<usize> = comb.iter().copied().collect();
            if is_vertex_cover(&edges, &candidate) {
                return SearchOutcome::Found(candidate);
            }
            if !next_combination(&mut comb, n) {
                break;
            }
        }
    }
    SearchOutcome::NotFound
}

/// Advances `comb` to the lexicographically next size-`comb.len()` subset of
/// `0..n`. Returns `false` once `comb` is the last one.
fn next_combination(comb: &mut [usize], n: usize) -> bool {
    let k = comb.len();
    for i in (0..k).rev() {
        if comb[i] < n - k + i {
            comb[i] += 1;
            for j in i + 1..k {
                comb[j] = comb[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// Branches on the endpoints of uncovered edges.
///
/// Every cover must contain `src` or `trg` for each edge, so branching on
/// both endpoints is exhaustive: branching factor 2, depth at most `k`,
/// O(2^k * |E|) in total.
pub fn branch_on_edges(graph: &UGraph, k: usize) -> SearchOutcome {
    let edges = graph.edge_list();
    branch_edges_rec(&edges, k, &FxHashSet::default())
}

fn branch_edges_rec(
    edges: &[(usize, usize)],
    k: usize,
    partial: &FxHashSet<usize>,
) -> SearchOutcome {
    // The coverage check runs before the budget check: an exhausted budget
    // with no open edge left is still a success.
    let open = edges
        .iter()
        .find(|(src, trg)| !partial.contains(src) && !partial.contains(trg));
    let Some(&(src, trg)) = open else {
        return SearchOutcome::Found(partial.clone());
    };
    if k == 0 {
        return SearchOutcome::NotFound;
    }
    let mut with_src = partial.clone();
    with_src.insert(src);
    let take_src = branch_edges_rec(edges, k - 1, &with_src);
    if take_src.is_found() {
        return take_src;
    }
    let mut with_trg = partial.clone();
    with_trg.insert(trg);
    branch_edges_rec(edges, k - 1, &with_trg)
}

/// Branches on the first vertex (by index) with an uncovered incident edge:
/// either the vertex joins the cover, or all of its neighbors do.
///
/// The budget deduction in the neighbor branch equals the number of newly
/// added cover vertices, which gives the classical 1+phi ~ 1.618 branching
/// factor on vertices of degree at least 2.
pub fn branch_min_index(graph: &UGraph, k: usize) -> SearchOutcome {
    let covered = initial_covered(graph);
    branch_vertices_rec(graph, k, &FxHashSet::default(), &covered, pick_min_index)
}

/// Same control structure as [`branch_min_index`], but branches on the
/// uncovered vertex of maximum degree (ties to the smaller index).
///
/// A high-degree vertex makes the neighbor branch consume a larger share of
/// the budget per step, tightening the bound to roughly 1.47^k.
pub fn branch_max_degree(graph: &UGraph, k: usize) -> SearchOutcome {
    let covered = initial_covered(graph);
    branch_vertices_rec(graph, k, &FxHashSet::default(), &covered, pick_max_degree)
}

/// Degree-0 vertices have no incident edges and are covered from the start.
fn initial_covered(graph: &UGraph) -> FxHashSet<usize> {
    graph.nodes().filter(|node| graph.degree(*node) == 0).collect()
}

fn pick_min_index(graph: &UGraph, covered: &FxHashSet<usize>) -> Option<usize> {
    graph.nodes().find(|node| !covered.contains(node))
}

fn pick_max_degree(graph: &UGraph, covered: &FxHashSet<usize>) -> Option<usize> {
    graph
        .nodes()
        .filter(|node| !covered.contains(node))
        .max_by_key(|node| (graph.degree(*node), std::cmp::Reverse(*node)))
}

fn branch_vertices_rec(
    graph: &UGraph,
    k: usize,
    partial: &FxHashSet<usize>,
    covered: &FxHashSet<usize>,
    pick: fn(&UGraph, &FxHashSet<usize>) -> Option<usize>,
) -> SearchOutcome {
    let Some(node) = pick(graph, covered) else {
        // every vertex is covered, so every edge is
        return SearchOutcome::Found(partial.clone());
    };
    if k == 0 {
        return SearchOutcome::NotFound;
    }
    // Branch A: `node` joins the cover.
    let mut partial_a = partial.clone();
    partial_a.insert(node);
    let mut covered_a = covered.clone();
    absorb_covered(graph, &mut covered_a, &partial_a, &[node]);
    let take_node = branch_vertices_rec(graph, k - 1, &partial_a, &covered_a, pick);
    if take_node.is_found() {
        return take_node;
    }
    // Branch B: every neighbor of `node` joins the cover. Only the newly
    // added vertices count against the budget.
    let added: Vec<usize> = graph
        .neighbors(node)
        .difference(partial)
        .copied()
        .collect();
    if added.len() > k {
        return SearchOutcome::NotFound;
    }
    let mut partial_b = partial.clone();
    partial_b.extend(added.iter().copied());
    let mut covered_b = covered.clone();
    covered_b.insert(node);
    absorb_covered(graph, &mut covered_b, &partial_b, &added);
    branch_vertices_rec(graph, k - added.len(), &partial_b, &covered_b, pick)
}

/// Extends `covered` after `added` entered the cover `partial`.
///
/// Keeps the covered-set exact: a vertex is covered iff it is in the cover
/// or all of its neighbors are. Only the added vertices and their neighbors
/// can change state, so nothing else needs rescanning.
fn absorb_covered(
    graph: &UGraph,
    covered: &mut FxHashSet<usize>,
    partial: &FxHashSet<usize>,
    added: &[usize],
) {
    for &node in added {
        covered.insert(node);
        for &neigh in graph.neighbors(node) {
            if !covered.contains(&neigh) && graph.neighbors(neigh).is_subset(partial) {
                covered.insert(neigh);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::is_vertex_cover;

    type Search = fn(&UGraph, usize) -> SearchOutcome;

    const ALL: [Search; 4] = [brute_force, branch_on_edges, branch_min_index, branch_max_degree];

    fn triangle() -> UGraph {
        UGraph::new(3, &[(0, 1), (1, 2), (0, 2)]).unwrap()
    }

    #[test]
    fn triangle_k2_test() {
        let graph = triangle();
        let edges = graph.edge_list();
        for search in ALL {
            let outcome = search(&graph, 2);
            let cover = outcome.cover().expect("triangle has a cover of size 2");
            assert_eq!(cover.len(), 2);
            assert!(is_vertex_cover(&edges, cover));
        }
    }

    #[test]
    fn triangle_k1_test() {
        let graph = triangle();
        for search in ALL {
            assert_eq!(search(&graph, 1), SearchOutcome::NotFound);
        }
    }

    #[test]
    fn single_edge_test() {
        let graph = UGraph::new(2, &[(0, 1)]).unwrap();
        for search in ALL {
            let outcome = search(&graph, 1);
            let cover = outcome.cover().expect("a single edge has a cover of size 1");
            assert_eq!(cover.len(), 1);
            assert!(cover.contains(&0) || cover.contains(&1));
        }
    }

    #[test]
    fn no_edges_test() {
        let graph = UGraph::new(5, &[]).unwrap();
        for search in ALL {
            for k in [0, 1, 5, 20] {
                let outcome = search(&graph, k);
                assert_eq!(outcome.cover().map(|c| c.len()), Some(0));
            }
        }
    }

    #[test]
    fn star_test() {
        // the center alone covers a star
        let graph = UGraph::new(6, &[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]).unwrap();
        let edges = graph.edge_list();
        for search in ALL {
            let outcome = search(&graph, 1);
            let cover = outcome.cover().expect("the center covers the star");
            assert!(is_vertex_cover(&edges, cover));
            assert!(cover.len() <= 1);
        }
    }

    #[test]
    fn feasibility_agreement_test() {
        // two triangles joined by a path; optimum is 4
        let graph = UGraph::new(
            7,
            &[(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (4, 5), (5, 6), (4, 6)],
        )
        .unwrap();
        let edges = graph.edge_list();
        for k in 0..=7 {
            let oracle = brute_force(&graph, k).is_found();
            for search in ALL {
                let outcome = search(&graph, k);
                assert_eq!(outcome.is_found(), oracle, "budget {}", k);
                if let Some(cover) = outcome.cover() {
                    assert!(cover.len() <= k);
                    assert!(is_vertex_cover(&edges, cover));
                }
            }
        }
    }

    #[test]
    fn rerun_same_verdict_test() {
        let graph = UGraph::new(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).unwrap();
        for search in ALL {
            let first = search(&graph, 3).is_found();
            let second = search(&graph, 3).is_found();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn budget_clamp_test() {
        // a budget beyond the vertex count still succeeds
        let graph = UGraph::new(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        let edges = graph.edge_list();
        for search in ALL {
            let outcome = search(&graph, 10);
            assert!(is_vertex_cover(&edges, outcome.cover().expect("feasible")));
        }
    }

}
