//! Implementation of two polynomial-time approximations for the Vertex Cover
//! Problem. Both always produce a cover; there is no budget parameter.

use fxhash::FxHashSet;
use rand::{thread_rng, Rng};
use crate::graph::UGraph;

/// Approximates a minimum vertex cover by repeatedly removing a random
/// remaining edge, adding both of its endpoints to the cover and discarding
/// every edge incident to either endpoint.
///
/// The removed edges form a matching, so the resulting cover is, in the
/// worst case, twice as large as the optimal solution.
pub fn two_approx_matching(graph: &UGraph) -> FxHashSet<usize> {
    let mut edges = graph.edge_list();
    let mut cover = FxHashSet::default();
    let mut rng = thread_rng();
    while !edges.is_empty() {
        let id = rng.gen_range(0..edges.len());
        let (src, trg) = edges.swap_remove(id);
        cover.insert(src);
        cover.insert(trg);
        edges.retain(|(u, v)| *u != src && *u != trg && *v != src && *v != trg);
    }
    cover
}

/// Approximates a minimum vertex cover by repeatedly adding the vertex with
/// the most remaining incident edges (ties to the smaller index) and
/// discarding the edges it covers.
///
/// Degrees are counted on both endpoints of each remaining edge, which keeps
/// the classical harmonic set-cover bound of O(log max-degree).
pub fn greedy_max_degree(graph: &UGraph) -> FxHashSet<usize> {
    let mut edges = graph.edge_list();
    let mut cover = FxHashSet::default();
    while !edges.is_empty() {
        let mut degrees = vec![0usize; graph.num_nodes()];
        for (src, trg) in &edges {
            degrees[*src] += 1;
            degrees[*trg] += 1;
        }
        let (node, _) = degrees
            .iter()
            .enumerate()
            .max_by_key(|(node, deg)| (**deg, std::cmp::Reverse(*node)))
            .expect("`edges` is not empty, so the graph has vertices");
        cover.insert(node);
        edges.retain(|(src, trg)| *src != node && *trg != node);
    }
    cover
}
