//! A naive reference model and a differential driver for [`DisjointSet`]

use crate::{DisjointSet, Handle};

/// Set membership tracked by relabelling every element on each union
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition(Vec<usize>);

impl Partition {
    #[must_use]
    pub fn new(len: usize) -> Self { Self((0..len).collect()) }

    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Returns true if two distinct sets were joined
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (keep, gone) = (self.0[a], self.0[b]);

        if keep == gone {
            return false;
        }

        for label in &mut self.0 {
            if *label == gone {
                *label = keep;
            }
        }

        true
    }

    #[must_use]
    pub fn same_set(&self, a: usize, b: usize) -> bool { self.0[a] == self.0[b] }

    #[must_use]
    pub fn set_count(&self) -> usize {
        self.0.iter().enumerate().filter(|&(i, &l)| i == l).count()
    }
}

/// A single operation on elements addressed by insertion ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Union(usize, usize),
    SameSet(usize, usize),
    Find(usize),
}

fn assert_flat(set: &DisjointSet<usize>, handle: Handle<usize>) {
    let depth = set.depth(handle).unwrap();
    assert!(depth <= 1, "{handle:?} left {depth} hops from its root");
}

/// Replay `ops` against both a [`DisjointSet`] and a [`Partition`] of `len`
/// elements, panicking on any disagreement or broken forest invariant
///
/// # Panics
/// Panics if the two disagree, or if any operation index is out of range.
pub fn run_differential(len: usize, ops: &[Op]) {
    let mut set: DisjointSet<usize> = (0..len).collect();
    let mut model = Partition::new(len);
    let h: Vec<_> = set.handles().collect();
    let mut ranks = vec![0; len];

    for &op in ops {
        match op {
            Op::Union(a, b) => {
                let u = set.union(h[a], h[b]).unwrap();
                assert_eq!(u.did_merge(), model.union(a, b), "{op:?}");

                assert!(set.is_root(u.root).unwrap());
                if let Some(merged) = u.unioned {
                    assert_eq!(set.parent(merged).unwrap(), Some(u.root));
                }

                assert_eq!(set.find(h[a]).unwrap(), u.root);
                assert_flat(&set, h[a]);
                assert_flat(&set, h[b]);
            },
            Op::SameSet(a, b) => {
                assert_eq!(
                    set.are_same_set(h[a], h[b]).unwrap(),
                    model.same_set(a, b),
                    "{op:?}"
                );
                assert_flat(&set, h[a]);
                assert_flat(&set, h[b]);
            },
            Op::Find(a) => {
                let root = set.find(h[a]).unwrap();
                assert_flat(&set, h[a]);
                assert_eq!(set.find(root).unwrap(), root);
                assert!(model.same_set(a, *set.get(root).unwrap()));
            },
        }

        for (rank, &handle) in ranks.iter_mut().zip(&h) {
            let next = set.rank(handle).unwrap();
            assert!(next >= *rank, "rank of {handle:?} decreased");
            *rank = next;
        }
    }

    for &a in &h {
        if let Some(parent) = set.parent(a).unwrap() {
            assert!(set.rank(a).unwrap() < set.rank(parent).unwrap());
        }
    }

    for (i, &a) in h.iter().enumerate() {
        for (j, &b) in h.iter().enumerate() {
            assert_eq!(set.are_same_set(a, b).unwrap(), model.same_set(i, j));
        }
    }

    assert_eq!(set.set_count(), model.set_count());
    assert_eq!(set.sets().len(), model.set_count());
}

/// Generate an element count in `len` and a list of operations over that
/// many elements
///
/// `len` must not produce zero.
#[cfg(any(test, feature = "proptest"))]
pub fn len_and_ops(
    len: impl proptest::strategy::Strategy<Value = usize>,
    ops_len: impl Clone + Into<proptest::sample::SizeRange>,
) -> impl proptest::strategy::Strategy<Value = (usize, Vec<Op>)> {
    use proptest::prelude::*;

    len.prop_flat_map(move |l| {
        let op = prop_oneof![
            (0..l, 0..l).prop_map(|(a, b)| Op::Union(a, b)),
            (0..l, 0..l).prop_map(|(a, b)| Op::SameSet(a, b)),
            (0..l).prop_map(Op::Find),
        ];

        prop::collection::vec(op, ops_len.clone()).prop_map(move |v| (l, v))
    })
}
