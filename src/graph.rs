//! Implementation of a simple, immutable undirected graph data structure with
//! edge derivation and cover validation.

use fxhash::FxHashSet;
use std::io::BufRead;
use crate::cust_error::ImportError;

/// A simple undirected graph over the vertices `0..num_nodes`.
///
/// The adjacency is symmetric and self-loop free by construction and never
/// changes afterwards; searches take their own local copies of whatever
/// mutable state they need.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct UGraph {
    adj_list: Vec<FxHashSet<usize>>,
}

impl UGraph {

    /// Builds a graph with `num_nodes` vertices and the given undirected edges.
    /// Fails with an `ImportError` if an edge references a vertex outside
    /// `[0, num_nodes)` or is a self-loop.
    pub fn new(num_nodes: usize, edges: &[(usize, usize)]) -> Result<Self, ImportError> {
        let mut adj_list = vec![FxHashSet::default(); num_nodes];
        for &(src, trg) in edges {
            if src >= num_nodes || trg >= num_nodes || src == trg {
                return Err(ImportError::BadEdgeError(src, trg));
            }
            adj_list[src].insert(trg);
            adj_list[trg].insert(src);
        }
        Ok(UGraph { adj_list })
    }

    /// Returns an `Iterator` over all vertices.
    pub fn nodes(&self) -> std::ops::Range<usize> {
        0..self.adj_list.len()
    }

    /// Returns the number of vertices of `self`.
    pub fn num_nodes(&self) -> usize {
        self.adj_list.len()
    }

    /// Returns the neighborhood of `node`.
    pub fn neighbors(&self, node: usize) -> &FxHashSet<usize> {
        &self.adj_list[node]
    }

    /// Returns the degree of `node`.
    pub fn degree(&self, node: usize) -> usize {
        self.adj_list[node].len()
    }

    /// Returns the number of edges of `self`.
    pub fn num_edges(&self) -> usize {
        self.adj_list.iter().map(|neighs| neighs.len()).sum::<usize>() / 2
    }

    /// Checks if `self` holds no edges.
    pub fn is_empty(&self) -> bool {
        self.adj_list.iter().all(|neighs| neighs.is_empty())
    }

    /// Returns every undirected edge exactly once as `(src, trg)` with
    /// `src < trg`, sorted ascending.
    ///
    /// The order is stable for a given graph, which the combination scan of
    /// the brute force and the scan order of the edge branching rely on.
    pub fn edge_list(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = self.adj_list
            .iter()
            .enumerate()
            .flat_map(|(i, adj)| {
                adj.iter()
                    .filter(|neigh| i < **neigh)
                    .map(|neigh| (i, *neigh))
                    .collect::<Vec<(usize, usize)>>()
            })
            .collect();
        edges.sort_unstable();
        edges
    }

}

impl UGraph {

    /// Reads a `.gr` input and creates a `UGraph`.
    ///
    /// Expected format: a `p td <n> <m>` header followed by `m` lines
    /// `<src> <trg>` with 1-based vertex ids. Lines starting with `c ` and
    /// empty lines are ignored.
    pub fn read_gr<R: BufRead>(gr: R) -> Result<Self, ImportError> {
        let (lines, _): (Vec<_>, Vec<_>) = gr.lines()
            .partition(|l| {
                if let Ok(line) = l {
                    // ignore empty lines and comment lines
                    !line.starts_with("c ") && !line.is_empty()
                } else {
                    true
                }
            });
        let mut lines = lines.into_iter();
        // p td <n> <m>
        let (n, m) = {
            let line = lines.next().ok_or(ImportError::InputMalformedError)??;
            let mut s = line.split(' ');
            if let Some("p") = s.next() {} else { return Err(ImportError::InputMalformedError); }
            if let Some("td") = s.next() {} else { return Err(ImportError::InputMalformedError); }
            let n: usize = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
            let m: usize = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
            if s.next().is_some() { return Err(ImportError::InputMalformedError); }
            (n, m)
        };
        let mut edges = Vec::with_capacity(m);
        for line in lines {
            // <src> <trg>
            let line = line?;
            let mut s = line.split(' ');
            let src: usize = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
            let trg: usize = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
            if s.next().is_some() { return Err(ImportError::InputMalformedError); }
            // ids are 1-based on disk
            let src = src.checked_sub(1).ok_or(ImportError::InputMalformedError)?;
            let trg = trg.checked_sub(1).ok_or(ImportError::InputMalformedError)?;
            edges.push((src, trg));
        }
        if edges.len() != m { return Err(ImportError::InputMalformedError); }
        UGraph::new(n, &edges)
    }

}

/// Checks if `cover` is a vertex cover of `edges`: every edge must have at
/// least one endpoint in `cover`. Runs in O(|edges|).
pub fn is_vertex_cover(edges: &[(usize, usize)], cover: &FxHashSet<usize>) -> bool {
    edges.iter().all(|(src, trg)| cover.contains(src) || cover.contains(trg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_gr_test() {
        let gr = Cursor::new("p td 7 9\n1 2\n1 3\n2 3\n4 5\n4 6\n4 7\n5 6\n5 7\n6 7\n");
        let graph = UGraph::read_gr(gr);
        assert!(graph.is_ok());
        let graph = graph.unwrap();
        assert_eq!(graph.num_nodes(), 7);
        assert_eq!(graph.num_edges(), 9);
    }

    #[test]
    fn read_gr_malformed_test() {
        // header announces 3 edges but only 2 follow
        let gr = Cursor::new("p td 3 3\n1 2\n2 3\n");
        assert!(UGraph::read_gr(gr).is_err());
        // vertex id 0 is out of range in the 1-based format
        let gr = Cursor::new("p td 3 1\n0 2\n");
        assert!(UGraph::read_gr(gr).is_err());
        // missing header
        let gr = Cursor::new("1 2\n2 3\n");
        assert!(UGraph::read_gr(gr).is_err());
    }

    #[test]
    fn new_rejects_bad_edges_test() {
        assert!(UGraph::new(3, &[(0, 3)]).is_err());
        assert!(UGraph::new(3, &[(1, 1)]).is_err());
        assert!(UGraph::new(3, &[(0, 1), (1, 2)]).is_ok());
    }

    #[test]
    fn edge_list_test() {
        let graph = UGraph::new(4, &[(2, 1), (0, 1), (3, 0), (1, 0)]).unwrap();
        // duplicates collapse, pairs are normalized and sorted
        assert_eq!(graph.edge_list(), vec![(0, 1), (0, 3), (1, 2)]);
        assert_eq!(graph.edge_list(), graph.edge_list());
        assert_eq!(graph.degree(1), 2);
        assert_eq!(graph.num_edges(), 3);
    }

    #[test]
    fn is_vertex_cover_test() {
        let graph = UGraph::new(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        let edges = graph.edge_list();
        let full: FxHashSet<usize> = [0, 1].into_iter().collect();
        let partial: FxHashSet<usize> = [1].into_iter().collect();
        assert!(is_vertex_cover(&edges, &full));
        assert!(!is_vertex_cover(&edges, &partial));
        assert!(is_vertex_cover(&[], &FxHashSet::default()));
    }

}
