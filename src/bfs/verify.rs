//! Checks for distance arrays produced by either engine.
//!
//! [`compare`] checks two arrays vertex by vertex. [`check_distances`]
//! validates one array against the graph alone: the start is at zero, every
//! edge leaving a reached vertex lands at most one level further, and every
//! other reached vertex has an in-neighbor exactly one level closer. Together
//! these pin the array to the true hop distances.

use rand::Rng;

use super::{Distance, UNREACHED};
use crate::graph::Graph;

/// A property violated by a distance array.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// The arrays have different lengths.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// The arrays disagree at `vertex`.
    #[error("mismatch at vertex {vertex}: expected {expected}, got {actual}")]
    DistanceMismatch {
        /// First differing vertex.
        vertex: usize,
        /// Expected distance.
        expected: Distance,
        /// Actual distance.
        actual: Distance,
    },

    /// The start vertex does not hold zero.
    #[error("start vertex {start} has distance {distance}")]
    StartNotZero {
        /// Start vertex.
        start: usize,
        /// Its recorded distance.
        distance: Distance,
    },

    /// A value is neither a hop count nor the sentinel, or a non-start vertex
    /// holds zero.
    #[error("vertex {vertex} holds invalid distance {distance}")]
    InvalidValue {
        /// Offending vertex.
        vertex: usize,
        /// Its recorded distance.
        distance: Distance,
    },

    /// An edge skips a level (or leads from a reached to an unreached vertex).
    #[error("edge {from}->{to} spans {from_distance} -> {to_distance}")]
    EdgeTooLong {
        /// Edge source.
        from: usize,
        /// Edge target.
        to: usize,
        /// Distance of the source.
        from_distance: Distance,
        /// Distance of the target.
        to_distance: Distance,
    },

    /// A reached vertex lists a neighbor that is not a vertex.
    #[error("edge {from}->{to} leaves the {vertex_count}-vertex graph")]
    NeighborOutOfRange {
        /// Edge source.
        from: usize,
        /// Out-of-range edge target.
        to: usize,
        /// Number of vertices.
        vertex_count: usize,
    },

    /// A reached vertex has no in-neighbor one level closer.
    #[error("vertex {vertex} at distance {distance} has no parent")]
    NoParent {
        /// Offending vertex.
        vertex: usize,
        /// Its recorded distance.
        distance: Distance,
    },
}

/// Compares two distance arrays vertex by vertex.
///
/// # Errors
/// Returns the first difference found.
pub fn compare(expected: &[Distance], actual: &[Distance]) -> Result<(), Violation> {
    if expected.len() != actual.len() {
        return Err(Violation::LengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    match expected.iter().zip(actual).position(|(e, a)| e != a) {
        Some(vertex) => Err(Violation::DistanceMismatch {
            vertex,
            expected: expected[vertex],
            actual: actual[vertex],
        }),
        None => Ok(()),
    }
}

/// Compares `samples` uniformly drawn vertices of two arrays.
///
/// Spot check for graphs too large to compare in full.
///
/// # Errors
/// Returns the first sampled difference.
pub fn sampled_compare<R: Rng>(
    expected: &[Distance],
    actual: &[Distance],
    samples: usize,
    rng: &mut R,
) -> Result<(), Violation> {
    if expected.len() != actual.len() {
        return Err(Violation::LengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    if expected.is_empty() {
        return Ok(());
    }
    for _ in 0..samples {
        let vertex = rng.gen_range(0..expected.len());
        if expected[vertex] != actual[vertex] {
            return Err(Violation::DistanceMismatch {
                vertex,
                expected: expected[vertex],
                actual: actual[vertex],
            });
        }
    }
    Ok(())
}

/// Validates `distances` as the hop distances of `graph` from `start`.
///
/// **Time complexity**: \(O(n + m)\)
///
/// # Errors
/// Returns the first violated property.
pub fn check_distances<G: Graph + ?Sized>(
    graph: &G,
    start: usize,
    distances: &[Distance],
) -> Result<(), Violation> {
    let n = graph.vertex_count();
    if distances.len() != n {
        return Err(Violation::LengthMismatch {
            expected: n,
            actual: distances.len(),
        });
    }
    match distances.get(start) {
        Some(0) => {}
        Some(&distance) => return Err(Violation::StartNotZero { start, distance }),
        None => {
            return Err(Violation::LengthMismatch {
                expected: start + 1,
                actual: n,
            })
        }
    }
    if let Some(vertex) = distances
        .iter()
        .enumerate()
        .position(|(v, &d)| d < UNREACHED || (d == 0 && v != start))
    {
        return Err(Violation::InvalidValue {
            vertex,
            distance: distances[vertex],
        });
    }

    let mut has_parent = vec![false; n];
    for from in 0..n {
        let from_distance = distances[from];
        if from_distance == UNREACHED {
            continue;
        }
        for &to in graph.neighbors(from) {
            let Some(&to_distance) = distances.get(to) else {
                return Err(Violation::NeighborOutOfRange {
                    from,
                    to,
                    vertex_count: n,
                });
            };
            if to_distance == UNREACHED || to_distance > from_distance + 1 {
                return Err(Violation::EdgeTooLong {
                    from,
                    to,
                    from_distance,
                    to_distance,
                });
            }
            if to_distance == from_distance + 1 {
                has_parent[to] = true;
            }
        }
    }

    for (vertex, &distance) in distances.iter().enumerate() {
        if distance > 0 && !has_parent[vertex] {
            return Err(Violation::NoParent { vertex, distance });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;
    use crate::graph::generators;

    #[test]
    fn compare_reports_first_difference() {
        assert_eq!(compare(&[0, 1, 2], &[0, 1, 2]), Ok(()));
        assert_eq!(
            compare(&[0, 1, 2], &[0, 1]),
            Err(Violation::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            compare(&[0, 1, 2, 3], &[0, 1, -1, 2]),
            Err(Violation::DistanceMismatch {
                vertex: 2,
                expected: 2,
                actual: -1
            })
        );
    }

    #[test]
    fn sampled_compare_catches_full_disagreement() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(sampled_compare(&[1; 50], &[1; 50], 100, &mut rng).is_ok());
        assert!(sampled_compare(&[1; 50], &[2; 50], 1, &mut rng).is_err());
        assert!(sampled_compare(&[], &[], 10, &mut rng).is_ok());
    }

    #[test]
    fn accepts_true_distances() {
        let g = generators::chain(4);
        assert_eq!(check_distances(&g, 0, &[0, 1, 2, 3]), Ok(()));
        let d = generators::disjoint_edges(2);
        assert_eq!(check_distances(&d, 3, &[-1, -1, 1, 0]), Ok(()));
    }

    #[test]
    fn rejects_each_kind_of_error() {
        let g = generators::chain(4);
        assert!(matches!(
            check_distances(&g, 0, &[1, 0, 1, 2]),
            Err(Violation::StartNotZero { .. })
        ));
        assert!(matches!(
            check_distances(&g, 0, &[0, 1, 3, 4]),
            Err(Violation::EdgeTooLong { from: 1, to: 2, .. })
        ));
        assert!(matches!(
            check_distances(&g, 0, &[0, 1, 2, -1]),
            Err(Violation::EdgeTooLong { from: 2, to: 3, .. })
        ));
        assert!(matches!(
            check_distances(&g, 0, &[0, -2, 2, 3]),
            Err(Violation::InvalidValue { vertex: 1, .. })
        ));
        assert_eq!(
            check_distances(&vec![vec![1], vec![5]], 0, &[0, 1]),
            Err(Violation::NeighborOutOfRange {
                from: 1,
                to: 5,
                vertex_count: 2
            })
        );
        // Vertex 2 sits at level 1 but its only neighbor is also at level 1.
        assert!(matches!(
            check_distances(&generators::chain(3), 0, &[0, 1, 1]),
            Err(Violation::NoParent { vertex: 2, .. })
        ));
    }
}
