//! Finite Dynkin mutation types.
//!
//! Each type comes with a standard quiver in which consecutive vertices of
//! the main path alternate between sources and sinks, starting with vertex
//! `0` as a source. Classification recognizes quivers whose exchangeable
//! part is an orientation of a Dynkin tree; every orientation of a tree is
//! mutation equivalent to every other, so the orientation is irrelevant.

use std::fmt;
use std::str::FromStr;

use crate::digraph::{EdgeLabel, QuiverDigraph};
use crate::error::QuiverError;
use crate::exchange_matrix::ExchangeMatrix;

/// A finite-type mutation class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MutationType {
    /// `A_n`, `n >= 1`.
    A(usize),
    /// `B_n`, `n >= 2`.
    B(usize),
    /// `C_n`, `n >= 3`.
    C(usize),
    /// `D_n`, `n >= 4`.
    D(usize),
    /// `E_6`, `E_7` or `E_8`.
    E(usize),
    /// `F_4`.
    F4,
    /// `G_2`.
    G2,
}

impl MutationType {
    /// Builds a type from its Dynkin letter and rank.
    ///
    /// `C_2` is returned as `B_2` and `D_3` as `A_3`.
    ///
    /// # Errors
    ///
    /// Returns [`QuiverError::InvalidMutationType`] for unknown letters or
    /// ranks outside the letter's range.
    pub fn new(letter: char, rank: usize) -> Result<Self, QuiverError> {
        let ty = match (letter.to_ascii_uppercase(), rank) {
            ('A', n) if n >= 1 => Self::A(n),
            ('B' | 'C', 2) => Self::B(2),
            ('B', n) if n >= 2 => Self::B(n),
            ('C', n) if n >= 3 => Self::C(n),
            ('D', 3) => Self::A(3),
            ('D', n) if n >= 4 => Self::D(n),
            ('E', n) if (6..=8).contains(&n) => Self::E(n),
            ('F', 4) => Self::F4,
            ('G', 2) => Self::G2,
            _ => {
                return Err(QuiverError::InvalidMutationType(format!(
                    "['{letter}', {rank}]"
                )))
            }
        };
        Ok(ty)
    }

    /// The Dynkin letter.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::A(_) => 'A',
            Self::B(_) => 'B',
            Self::C(_) => 'C',
            Self::D(_) => 'D',
            Self::E(_) => 'E',
            Self::F4 => 'F',
            Self::G2 => 'G',
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn rank(self) -> usize {
        match self {
            Self::A(n) | Self::B(n) | Self::C(n) | Self::D(n) | Self::E(n) => n,
            Self::F4 => 4,
            Self::G2 => 2,
        }
    }

    /// Returns true for types whose exchange matrices are skew-symmetric.
    #[must_use]
    pub fn is_simply_laced(self) -> bool {
        matches!(self, Self::A(_) | Self::D(_) | Self::E(_))
    }

    /// Edges of the standard quiver.
    #[must_use]
    pub fn standard_edges(self) -> Vec<(usize, usize, EdgeLabel)> {
        const SIMPLE: EdgeLabel = (1, -1);

        // Edge between i and i + 1 on the main path.
        let step = |i: usize, even: EdgeLabel, odd: EdgeLabel| {
            if i % 2 == 0 {
                (i, i + 1, even)
            } else {
                (i + 1, i, odd)
            }
        };
        let path = |len: usize| (0..len.saturating_sub(1)).map(move |i| step(i, SIMPLE, SIMPLE));

        match self {
            Self::A(n) => path(n).collect(),
            Self::B(n) => path(n - 1)
                .chain(std::iter::once(step(n - 2, (1, -2), (2, -1))))
                .collect(),
            Self::C(n) => path(n - 1)
                .chain(std::iter::once(step(n - 2, (2, -1), (1, -2))))
                .collect(),
            Self::D(n) => {
                let fork = if (n - 3) % 2 == 0 {
                    (n - 3, n - 1, SIMPLE)
                } else {
                    (n - 1, n - 3, SIMPLE)
                };
                path(n - 1).chain(std::iter::once(fork)).collect()
            }
            Self::E(n) => path(n - 1)
                .chain(std::iter::once((2, n - 1, SIMPLE)))
                .collect(),
            Self::F4 => vec![(0, 1, SIMPLE), (2, 1, (2, -1)), (2, 3, SIMPLE)],
            Self::G2 => vec![(0, 1, (1, -3))],
        }
    }

    /// The standard quiver as a digraph.
    #[must_use]
    pub fn standard_digraph(self) -> QuiverDigraph {
        QuiverDigraph::from_edges(self.rank(), self.standard_edges())
            .expect("standard edges form a valid quiver")
    }

    /// Recognizes the exchangeable part of `b` as a Dynkin tree.
    ///
    /// Returns `None` if the underlying graph is not a connected tree of
    /// finite type (in particular for every quiver with a cycle).
    #[must_use]
    pub fn classify(b: &ExchangeMatrix) -> Option<Self> {
        let n = b.n();
        if n == 0 {
            return None;
        }

        let mut adjacency = vec![Vec::new(); n];
        let mut weighted = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if b.get(i, j) != 0 {
                    adjacency[i].push(j);
                    adjacency[j].push(i);
                    weighted.push((i, j, (b.get(i, j) * b.get(j, i)).unsigned_abs()));
                }
            }
        }
        if weighted.len() != n - 1 || !is_connected(&adjacency) {
            return None;
        }

        let degree = |v: usize| adjacency[v].len();
        let max_degree = (0..n).map(degree).max().unwrap_or(0);
        let heavy: Vec<_> = weighted.iter().filter(|e| e.2 != 1).collect();

        match heavy.as_slice() {
            [] if max_degree <= 2 => Some(Self::A(n)),
            [] => classify_branched(&adjacency),
            [&(i, j, w)] if max_degree <= 2 => match w {
                3 if n == 2 => Some(Self::G2),
                2 if n == 2 => Some(Self::B(2)),
                2 if degree(i) == 1 || degree(j) == 1 => {
                    let (leaf, inner) = if degree(i) == 1 { (i, j) } else { (j, i) };
                    if b.get(leaf, inner).abs() == 2 {
                        Some(Self::B(n))
                    } else {
                        Some(Self::C(n))
                    }
                }
                2 if n == 4 => Some(Self::F4),
                _ => None,
            },
            _ => None,
        }
    }
}

fn is_connected(adjacency: &[Vec<usize>]) -> bool {
    let mut seen = vec![false; adjacency.len()];
    let mut stack = vec![0];
    seen[0] = true;
    while let Some(v) = stack.pop() {
        for &w in &adjacency[v] {
            if !seen[w] {
                seen[w] = true;
                stack.push(w);
            }
        }
    }
    seen.into_iter().all(|s| s)
}

/// Simply-laced tree with a branch point: D or E by arm lengths.
fn classify_branched(adjacency: &[Vec<usize>]) -> Option<MutationType> {
    let centers: Vec<usize> = (0..adjacency.len())
        .filter(|&v| adjacency[v].len() > 2)
        .collect();
    let [center] = centers.as_slice() else {
        return None;
    };
    if adjacency[*center].len() != 3 {
        return None;
    }

    let mut arms: Vec<usize> = adjacency[*center]
        .iter()
        .map(|&start| {
            let (mut prev, mut cur, mut len) = (*center, start, 1);
            while adjacency[cur].len() == 2 {
                let next = if adjacency[cur][0] == prev {
                    adjacency[cur][1]
                } else {
                    adjacency[cur][0]
                };
                prev = cur;
                cur = next;
                len += 1;
            }
            len
        })
        .collect();
    arms.sort_unstable();

    let n = adjacency.len();
    match arms.as_slice() {
        [1, 1, _] => Some(MutationType::D(n)),
        [1, 2, 2 | 3 | 4] => Some(MutationType::E(n)),
        _ => None,
    }
}

/// Displays as `['A', 4]`.
impl fmt::Display for MutationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "['{}', {}]", self.letter(), self.rank())
    }
}

/// Parses `A4`, `A 4` or `['A', 4]`.
impl FromStr for MutationType {
    type Err = QuiverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || QuiverError::InvalidMutationType(s.to_owned());
        let cleaned: String = s
            .chars()
            .filter(|c| !matches!(c, '[' | ']' | '\'' | '"' | ',') && !c.is_whitespace())
            .collect();
        let mut chars = cleaned.chars();
        let letter = chars.next().filter(char::is_ascii_alphabetic).ok_or_else(invalid)?;
        let rank = chars.as_str().parse().map_err(|_| invalid())?;
        Self::new(letter, rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClusterQuiver;

    fn matrix(ty: MutationType) -> ExchangeMatrix {
        ClusterQuiver::from_mutation_type(ty).b_matrix().clone()
    }

    #[test]
    fn test_canonical_forms() {
        assert_eq!(MutationType::new('C', 2), Ok(MutationType::B(2)));
        assert_eq!(MutationType::new('D', 3), Ok(MutationType::A(3)));
        assert!(MutationType::new('E', 9).is_err());
        assert!(MutationType::new('A', 0).is_err());
        assert!(MutationType::new('X', 3).is_err());
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(MutationType::A(4).to_string(), "['A', 4]");
        assert_eq!(MutationType::F4.to_string(), "['F', 4]");
        assert_eq!("['B', 3]".parse(), Ok(MutationType::B(3)));
        assert_eq!("E6".parse(), Ok(MutationType::E(6)));
        assert_eq!("c2".parse(), Ok(MutationType::B(2)));
        assert!("A".parse::<MutationType>().is_err());
        assert!("".parse::<MutationType>().is_err());
    }

    #[test]
    fn test_standard_matrices() {
        assert_eq!(
            matrix(MutationType::B(4)).as_matrix().to_rows(),
            vec![
                vec![0, 1, 0, 0],
                vec![-1, 0, -1, 0],
                vec![0, 1, 0, 1],
                vec![0, 0, -2, 0],
            ]
        );
        assert_eq!(
            matrix(MutationType::D(4)).as_matrix().to_rows(),
            vec![
                vec![0, 1, 0, 0],
                vec![-1, 0, -1, -1],
                vec![0, 1, 0, 0],
                vec![0, 1, 0, 0],
            ]
        );
        assert_eq!(
            matrix(MutationType::G2).as_matrix().to_rows(),
            vec![vec![0, 1], vec![-3, 0]]
        );
    }

    #[test]
    fn test_classify_standard_quivers() {
        let types = [
            MutationType::A(1),
            MutationType::A(5),
            MutationType::B(2),
            MutationType::B(3),
            MutationType::C(3),
            MutationType::C(5),
            MutationType::D(4),
            MutationType::D(6),
            MutationType::E(6),
            MutationType::E(7),
            MutationType::E(8),
            MutationType::F4,
            MutationType::G2,
        ];
        for ty in types {
            assert_eq!(MutationType::classify(&matrix(ty)), Some(ty), "{ty}");
        }
    }

    #[test]
    fn test_classify_ignores_orientation_and_frozen() {
        // Linear A3 with one frozen vertex.
        let b = ExchangeMatrix::from_rows(vec![
            vec![0, 1, 0],
            vec![-1, 0, 1],
            vec![0, -1, 0],
            vec![1, 0, -1],
        ])
        .unwrap();
        assert_eq!(MutationType::classify(&b), Some(MutationType::A(3)));

        // Mutating the middle vertex of a linear A3 gives an oriented
        // triangle, which is not a tree.
        let triangle = b.mutated(1).unwrap();
        assert_eq!(MutationType::classify(&triangle), None);
    }

    #[test]
    fn test_classify_rejects_non_dynkin() {
        // Affine D4: a star with four arms.
        let star = QuiverDigraph::from_pairs(&[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        let q = ClusterQuiver::from_digraph(&star, 0).unwrap();
        assert_eq!(MutationType::classify(q.b_matrix()), None);

        // Disconnected.
        let b = ExchangeMatrix::from_rows(vec![vec![0, 0], vec![0, 0]]).unwrap();
        assert_eq!(MutationType::classify(&b), None);
    }
}
