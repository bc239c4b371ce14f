//! Static spatial adjacency for a population.
//!
//! Two oscillators are neighbors when their Euclidean distance is strictly
//! below the radius. The graph is built once from the initial positions and
//! never changes afterwards.

use crate::core::geometry::Position;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighborGraph {
    adjacency: Vec<Vec<usize>>,
}

impl NeighborGraph {
    /// Full pairwise scan. A non-positive (or NaN) radius leaves every set empty.
    /// Rows come out in ascending index order.
    pub fn build(positions: &[Position], radius: f64) -> Self {
        let n = positions.len();
        let mut adjacency = vec![Vec::new(); n];
        for i in 0..n {
            for j in (i + 1)..n {
                if positions[i].distance(&positions[j]) < radius {
                    adjacency[i].push(j);
                    adjacency[j].push(i);
                }
            }
        }
        Self { adjacency }
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn neighbors(&self, idx: usize) -> &[usize] {
        self.adjacency.get(idx).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, idx: usize) -> usize {
        self.neighbors(idx).len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn mean_degree(&self) -> f64 {
        if self.adjacency.is_empty() {
            return 0.0;
        }
        2.0 * self.edge_count() as f64 / self.adjacency.len() as f64
    }

    pub fn isolated_count(&self) -> usize {
        self.adjacency.iter().filter(|row| row.is_empty()).count()
    }

    /// More than one oscillator and not a single edge between them.
    pub fn is_fully_isolated(&self) -> bool {
        self.adjacency.len() > 1 && self.isolated_count() == self.adjacency.len()
    }

    /// Hands each row to its oscillator.
    pub fn into_rows(self) -> Vec<Vec<usize>> {
        self.adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(xs: &[f64]) -> Vec<Position> {
        xs.iter().map(|&x| Position::new(x, 0.0)).collect()
    }

    #[test]
    fn threshold_is_strict() {
        let graph = NeighborGraph::build(&line(&[0.0, 0.25, 0.75]), 0.5);
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.neighbors(1), &[0]);
        // 0.75 - 0.25 == 0.5 exactly, so not adjacent.
        assert!(graph.neighbors(2).is_empty());
        assert_eq!(graph.isolated_count(), 1);
    }

    #[test]
    fn self_is_never_a_neighbor() {
        let graph = NeighborGraph::build(&line(&[0.1, 0.1, 0.1]), 1.0);
        for i in 0..3 {
            assert!(!graph.neighbors(i).contains(&i));
            assert_eq!(graph.degree(i), 2);
        }
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.mean_degree(), 2.0);
    }

    #[test]
    fn non_positive_radius_isolates_everyone() {
        let positions = line(&[0.0, 0.0, 0.5]);
        for radius in [0.0, -0.3, f64::NAN] {
            let graph = NeighborGraph::build(&positions, radius);
            assert_eq!(graph.edge_count(), 0, "radius={radius}");
            assert_eq!(graph.isolated_count(), 3);
            assert!(graph.is_fully_isolated());
        }
    }

    #[test]
    fn fully_isolated_needs_more_than_one_oscillator() {
        assert!(!NeighborGraph::build(&line(&[0.3]), 0.0).is_fully_isolated());
        assert!(!NeighborGraph::build(&line(&[0.0, 0.25, 0.75]), 0.5).is_fully_isolated());
        assert!(NeighborGraph::build(&line(&[0.0, 0.25, 0.75]), 0.1).is_fully_isolated());
    }

    #[test]
    fn out_of_range_index_has_no_neighbors() {
        let graph = NeighborGraph::build(&line(&[0.0]), 1.0);
        assert!(graph.neighbors(5).is_empty());
    }
}
