//! An arena-backed disjoint-set forest over owned payloads

use std::{cell::Cell, fmt, iter, marker::PhantomData, ops::Range, slice};

use indexmap::IndexMap;

use crate::{
    forest::{self, ForestFind, NoNode, RankedUnion, Unioned},
    handle::{Handle, Lineage},
};

/// Error indicating a handle passed to a [`DisjointSet`] operation does not
/// refer to one of its elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidHandle {
    #[error("Handle {index} was not created by this disjoint set")]
    Foreign { index: usize },
    #[error(transparent)]
    NoNode(#[from] NoNode<usize>),
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    parent: Cell<Option<usize>>,
    rank: usize,
}

#[derive(Clone)]
#[repr(transparent)]
struct Nodes<T>(Vec<Node<T>>);

impl<T> ForestFind<usize> for Nodes<T> {
    #[inline]
    fn load_parent(&self, key: usize) -> Option<Option<usize>> { Some(self.0.get(key)?.parent.get()) }

    #[inline]
    fn store_parent(&self, key: usize, parent: usize) -> Option<Option<usize>> {
        Some(self.0.get(key)?.parent.replace(Some(parent)))
    }
}

impl<T> RankedUnion<usize> for Nodes<T> {
    type Rank = usize;

    #[inline]
    fn rank(&self, root: usize) -> Option<usize> { Some(self.0.get(root)?.rank) }

    fn merge(&mut self, root: usize, merged: usize, tied: bool) {
        let prev = self
            .store_parent(merged, root)
            .unwrap_or_else(|| unreachable!());
        debug_assert!(prev.is_none(), "merged a non-root");

        if tied {
            let node = self.0.get_mut(root).unwrap_or_else(|| unreachable!());
            node.rank = node.rank.checked_add(1).unwrap_or_else(|| unreachable!());
        }
    }
}

/// A disjoint-set (union-find) forest
///
/// Every element is owned by the structure for its whole lifetime and is
/// referred to by a [`Handle`].  Parent links are arena indices, so copying a
/// handle or cloning the structure never duplicates an ancestor chain.
///
/// Queries such as [`find`](Self::find) and
/// [`are_same_set`](Self::are_same_set) take `&self` but still compress the
/// paths they walk.  The structure is therefore not [`Sync`]; wrap it in a
/// lock to share it between threads.
///
/// Cloning a `DisjointSet` snapshots the forest.  Handles issued before the
/// clone remain valid on both copies, while handles either copy issues
/// afterwards are rejected by the other.
pub struct DisjointSet<T> {
    lineage: Lineage,
    nodes: Nodes<T>,
}

impl<T: Clone> Clone for DisjointSet<T> {
    fn clone(&self) -> Self {
        Self {
            lineage: self.lineage.fork(self.len()),
            nodes: self.nodes.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DisjointSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { lineage: _, nodes } = self;
        let mut f = f.debug_map();

        for (i, node) in nodes.0.iter().enumerate() {
            let root = forest::forest_root(nodes, i).unwrap_or_else(|_| unreachable!());
            f.entry(&i, &(&node.value, (root != i).then_some(root)));
        }

        f.finish()
    }
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self { Self::with_capacity(0) }
}

impl<T> DisjointSet<T> {
    /// Construct a new, empty disjoint set
    #[must_use]
    #[inline]
    pub fn new() -> Self { Self::default() }

    /// Construct a new, empty disjoint set with room for `capacity` elements
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lineage: Lineage::fresh(),
            nodes: Nodes(Vec::with_capacity(capacity)),
        }
    }

    /// Gets the number of elements in the disjoint set
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize { self.nodes.0.len() }

    /// Returns true if the disjoint set has no elements
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool { self.nodes.0.is_empty() }

    #[inline]
    fn handle(&self, index: usize) -> Handle<T> { self.lineage.mint(index) }

    fn node(&self, handle: Handle<T>) -> Result<&Node<T>, InvalidHandle> {
        let index = handle.index();

        if !self.lineage.claims(handle) {
            return Err(InvalidHandle::Foreign { index });
        }

        self.nodes.0.get(index).ok_or(NoNode(index).into())
    }

    fn node_mut(&mut self, handle: Handle<T>) -> Result<&mut Node<T>, InvalidHandle> {
        let index = handle.index();

        if !self.lineage.claims(handle) {
            return Err(InvalidHandle::Foreign { index });
        }

        self.nodes.0.get_mut(index).ok_or(NoNode(index).into())
    }

    #[inline]
    fn resolve(&self, handle: Handle<T>) -> Result<usize, InvalidHandle> {
        self.node(handle).map(|_| handle.index())
    }

    /// Add a new singleton set containing `value`, returning its handle
    pub fn insert(&mut self, value: T) -> Handle<T> {
        let index = self.nodes.0.len();
        self.nodes.0.push(Node {
            value,
            parent: Cell::new(None),
            rank: 0,
        });
        self.handle(index)
    }

    /// Find the root of the set containing `handle`, and relink every element
    /// on the path walked directly beneath it
    ///
    /// # Errors
    /// Returns an error if `handle` does not belong to this disjoint set.
    pub fn find(&self, handle: Handle<T>) -> Result<Handle<T>, InvalidHandle> {
        let key = self.resolve(handle)?;
        let root = forest::forest_find(&self.nodes, key)?;
        Ok(self.handle(root))
    }

    /// Returns true if `a` and `b` belong to the same set
    ///
    /// Although this is a query, both paths walked are compressed as a side
    /// effect, exactly as with [`find`](Self::find).
    ///
    /// # Errors
    /// Returns an error if either handle does not belong to this disjoint set.
    pub fn are_same_set(&self, a: Handle<T>, b: Handle<T>) -> Result<bool, InvalidHandle> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Perform the in-place union of the sets containing `a` and `b`
    ///
    /// The root with the greater rank survives; on a tie the root of `a`
    /// survives and its rank increases by one.  Afterwards both `a` and `b`
    /// are linked directly beneath the surviving root.
    ///
    /// # Errors
    /// Returns an error if either handle does not belong to this disjoint set.
    pub fn union(
        &mut self,
        a: Handle<T>,
        b: Handle<T>,
    ) -> Result<Unioned<Handle<T>>, InvalidHandle> {
        let a = self.resolve(a)?;
        let b = self.resolve(b)?;

        let unioned = forest::ranked_union(&mut self.nodes, a, b)?;

        if let Some(merged) = unioned.unioned {
            tracing::trace!(root = unioned.root, merged, "Merged disjoint sets");
        }

        let lineage = &self.lineage;
        Ok(unioned.map(|i| lineage.mint(i)))
    }

    /// Borrow the payload of an element
    ///
    /// # Errors
    /// Returns an error if `handle` does not belong to this disjoint set.
    pub fn get(&self, handle: Handle<T>) -> Result<&T, InvalidHandle> {
        self.node(handle).map(|n| &n.value)
    }

    /// Mutably borrow the payload of an element
    ///
    /// # Errors
    /// Returns an error if `handle` does not belong to this disjoint set.
    pub fn get_mut(&mut self, handle: Handle<T>) -> Result<&mut T, InvalidHandle> {
        self.node_mut(handle).map(|n| &mut n.value)
    }

    /// Gets the rank of an element
    ///
    /// Ranks only change on roots, and only when a union ties.
    ///
    /// # Errors
    /// Returns an error if `handle` does not belong to this disjoint set.
    pub fn rank(&self, handle: Handle<T>) -> Result<usize, InvalidHandle> {
        self.node(handle).map(|n| n.rank)
    }

    /// Gets the immediate parent of an element, or `None` if it is a root
    ///
    /// # Errors
    /// Returns an error if `handle` does not belong to this disjoint set.
    pub fn parent(&self, handle: Handle<T>) -> Result<Option<Handle<T>>, InvalidHandle> {
        self.node(handle)
            .map(|n| n.parent.get().map(|p| self.handle(p)))
    }

    /// Returns true if the element is the root of its set
    ///
    /// # Errors
    /// Returns an error if `handle` does not belong to this disjoint set.
    pub fn is_root(&self, handle: Handle<T>) -> Result<bool, InvalidHandle> {
        self.node(handle).map(|n| n.parent.get().is_none())
    }

    /// Count the parent links between an element and its root, without
    /// compressing the path
    ///
    /// # Errors
    /// Returns an error if `handle` does not belong to this disjoint set.
    pub fn depth(&self, handle: Handle<T>) -> Result<usize, InvalidHandle> {
        let mut parent = self.node(handle)?.parent.get();
        let mut hops = 0;

        while let Some(p) = parent {
            hops += 1;
            parent = self.nodes.load_parent(p).unwrap_or_else(|| unreachable!());
        }

        Ok(hops)
    }

    /// Iterate over the handles of all elements, in insertion order
    pub fn handles(&self) -> Handles<'_, T> {
        Handles {
            lineage: &self.lineage,
            range: 0..self.len(),
            _p: PhantomData,
        }
    }

    /// Iterate over the roots of all sets, in insertion order
    #[inline]
    pub fn roots(&self) -> Roots<'_, T> {
        Roots {
            lineage: &self.lineage,
            it: self.nodes.0.iter().enumerate(),
        }
    }

    /// Gets the number of disjoint sets
    #[must_use]
    pub fn set_count(&self) -> usize { self.roots().count() }

    /// Group the handles of all elements by set
    ///
    /// Sets are ordered by their earliest-inserted element, and handles within
    /// each set are in insertion order.
    #[must_use]
    pub fn sets(&self) -> Vec<Vec<Handle<T>>> {
        let mut sets = IndexMap::<usize, Vec<Handle<T>>>::new();

        for i in 0..self.len() {
            let root = forest::forest_find(&self.nodes, i).unwrap_or_else(|_| unreachable!());
            sets.entry(root).or_default().push(self.handle(i));
        }

        sets.into_values().collect()
    }

    /// Iterate over all elements and their handles, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (Handle<T>, &T)> {
        let lineage = &self.lineage;
        self.nodes
            .0
            .iter()
            .enumerate()
            .map(move |(i, n)| (lineage.mint(i), &n.value))
    }

    /// Iterate over all payloads, in insertion order
    pub fn values(&self) -> impl Iterator<Item = &T> { self.nodes.0.iter().map(|n| &n.value) }
}

impl<T> Extend<T> for DisjointSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.nodes.0.reserve(iter.size_hint().0);

        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for DisjointSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[must_use]
pub struct Handles<'a, T> {
    lineage: &'a Lineage,
    range: Range<usize>,
    _p: PhantomData<fn(&T)>,
}

impl<T> fmt::Debug for Handles<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            lineage: _,
            range,
            _p,
        } = self;
        f.debug_tuple("Handles").field(range).finish()
    }
}

impl<T> Clone for Handles<'_, T> {
    fn clone(&self) -> Self {
        Self {
            lineage: self.lineage,
            range: self.range.clone(),
            _p: PhantomData,
        }
    }
}

impl<T> Iterator for Handles<'_, T> {
    type Item = Handle<T>;

    #[inline]
    fn next(&mut self) -> Option<Handle<T>> { self.range.next().map(|i| self.lineage.mint(i)) }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) { self.range.size_hint() }
}

impl<T> DoubleEndedIterator for Handles<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Handle<T>> {
        self.range.next_back().map(|i| self.lineage.mint(i))
    }
}

impl<T> ExactSizeIterator for Handles<'_, T> {}

#[must_use]
pub struct Roots<'a, T> {
    lineage: &'a Lineage,
    it: iter::Enumerate<slice::Iter<'a, Node<T>>>,
}

impl<T> fmt::Debug for Roots<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { lineage: _, it } = self;
        f.debug_tuple("Roots").field(&it.len()).finish()
    }
}

impl<T> Iterator for Roots<'_, T> {
    type Item = Handle<T>;

    fn next(&mut self) -> Option<Handle<T>> {
        loop {
            let (id, node) = self.it.next()?;

            if node.parent.get().is_none() {
                break Some(self.lineage.mint(id));
            }
        }
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::{DisjointSet, InvalidHandle};
    use crate::{
        Handle,
        test_tools::{Op, len_and_ops},
    };

    #[test]
    fn single_union() {
        let mut set = DisjointSet::new();
        let h = [1, 2, 3, 4].map(|i| set.insert(i));

        set.union(h[0], h[1]).unwrap();

        assert!(set.are_same_set(h[0], h[1]).unwrap());
        assert!(set.are_same_set(h[1], h[0]).unwrap());
        assert!(!set.are_same_set(h[0], h[2]).unwrap());
        assert!(!set.are_same_set(h[3], h[0]).unwrap());
        for &x in &h {
            assert!(set.are_same_set(x, x).unwrap());
        }

        assert_eq!(set.find(h[0]).unwrap(), set.find(h[1]).unwrap());
        assert_eq!(*set.get(set.find(h[1]).unwrap()).unwrap(), 1);
        assert_eq!(*set.get(set.find(h[2]).unwrap()).unwrap(), 3);
        assert_eq!(*set.get(set.find(h[3]).unwrap()).unwrap(), 4);
        assert_eq!(set.set_count(), 3);
    }

    #[test]
    fn joined_chains() {
        let mut set: DisjointSet<usize> = (0..10).collect();
        let h: Vec<_> = set.handles().collect();

        for pair in h[..6].windows(2) {
            set.union(pair[0], pair[1]).unwrap();
        }
        for pair in h[5..].windows(2) {
            set.union(pair[0], pair[1]).unwrap();
        }

        set.union(h[4], h[5]).unwrap();

        for &a in &h {
            for &b in &h {
                assert!(set.are_same_set(a, b).unwrap(), "{a:?} and {b:?} split");
            }
        }
        assert_eq!(set.set_count(), 1);
    }

    #[test]
    fn rank_tie_break() {
        let mut set = DisjointSet::new();
        let h = ["a", "b", "c", "d"].map(|s| set.insert(s));

        let u = set.union(h[0], h[1]).unwrap();
        assert_eq!(u.root, h[0]);
        assert_eq!(u.unioned, Some(h[1]));
        assert_eq!(set.rank(h[0]).unwrap(), 1);
        assert_eq!(set.rank(h[1]).unwrap(), 0);

        // Fresh singletons on either side are absorbed without disturbing
        // the existing root
        let u = set.union(h[2], h[0]).unwrap();
        assert_eq!(u.root, h[0]);
        let u = set.union(h[1], h[3]).unwrap();
        assert_eq!(u.root, h[0]);
        assert_eq!(set.rank(h[0]).unwrap(), 1);

        let u = set.union(h[3], h[2]).unwrap();
        assert!(!u.did_merge());
        assert_eq!(u.root, h[0]);
    }

    #[test]
    fn swapped_tie_moves_root() {
        let mut set = DisjointSet::new();
        let a = set.insert(());
        let b = set.insert(());

        assert_eq!(set.union(b, a).unwrap().root, b);
        assert_eq!(set.parent(a).unwrap(), Some(b));
        assert!(set.is_root(b).unwrap());
    }

    #[test]
    fn copied_handle_shares_set() {
        let mut set = DisjointSet::new();
        let h1 = set.insert(5);
        let h2 = set.insert(6);
        let h3 = set.insert(7);

        set.union(h1, h2).unwrap();
        set.union(h1, h3).unwrap();

        #[expect(clippy::clone_on_copy, reason = "exercising Clone explicitly")]
        let cloned = h2.clone();
        let copied = h2;

        assert_eq!(cloned, h2);
        assert_eq!(copied, h2);
        assert_eq!(set.find(cloned).unwrap(), set.find(h2).unwrap());
        assert_eq!(set.rank(cloned).unwrap(), set.rank(h2).unwrap());
        assert!(std::ptr::eq(set.get(cloned).unwrap(), set.get(h2).unwrap()));
        assert_eq!(set.parent(cloned).unwrap(), set.parent(h2).unwrap());
        assert_eq!(set.parent(h3).unwrap(), set.parent(copied).unwrap());
        assert_eq!(set.parent(h1).unwrap(), None);

        // A later union is observed through every copy
        let h4 = set.insert(8);
        set.union(h4, h3).unwrap();
        assert!(set.are_same_set(cloned, h4).unwrap());
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn query_compresses() {
        let mut set: DisjointSet<u8> = (0..4).collect();
        let h: Vec<_> = set.handles().collect();

        set.union(h[0], h[1]).unwrap();
        set.union(h[2], h[3]).unwrap();
        set.union(h[0], h[2]).unwrap();
        assert_eq!(set.depth(h[3]).unwrap(), 2);

        assert!(set.are_same_set(h[3], h[1]).unwrap());
        assert_eq!(set.depth(h[3]).unwrap(), 1);
        assert_eq!(set.depth(h[0]).unwrap(), 0);
    }

    #[test]
    fn foreign_handles() {
        let mut a = DisjointSet::new();
        let mut b = DisjointSet::new();
        let ha = a.insert('a');
        let hb = b.insert('b');

        assert_eq!(a.find(hb), Err(InvalidHandle::Foreign { index: 0 }));
        assert_eq!(b.get(ha), Err(InvalidHandle::Foreign { index: 0 }));
        assert!(a.union(ha, hb).is_err());
        assert!(a.are_same_set(hb, ha).is_err());
    }

    #[test]
    fn clone_snapshot() {
        let mut a = DisjointSet::new();
        let x = a.insert("x");
        let y = a.insert("y");

        let mut b = a.clone();
        let z = b.insert("z");
        b.union(x, y).unwrap();

        assert!(b.are_same_set(x, y).unwrap());
        assert!(!a.are_same_set(x, y).unwrap());
        assert_eq!(a.find(z), Err(InvalidHandle::Foreign { index: 2 }));
        assert_eq!(
            a.find(z).unwrap_err().to_string(),
            "Handle 2 was not created by this disjoint set"
        );
    }

    #[test]
    fn grown_clones_stay_apart() {
        let mut a = DisjointSet::new();
        let x = a.insert("x");
        let y = a.insert("y");

        let mut b = a.clone();
        let z = b.insert("z");
        let w = a.insert("w");

        assert_ne!(z, w);
        assert_eq!(a.get(z), Err(InvalidHandle::Foreign { index: 2 }));
        assert_eq!(b.get(w), Err(InvalidHandle::Foreign { index: 2 }));
        assert!(a.union(x, z).is_err());
        assert!(b.are_same_set(w, y).is_err());

        assert_eq!(a.get(w), Ok(&"w"));
        assert_eq!(b.get(z), Ok(&"z"));
        assert_eq!(b.find(x), Ok(x));
        assert_eq!(b.union(y, z).unwrap().root, y);
        assert_eq!(b.handles().collect::<Vec<_>>(), [x, y, z]);
        assert_eq!(a.roots().collect::<Vec<_>>(), [x, y, w]);

        // A clone of a clone answers to every generation before it
        let mut c = b.clone();
        let v = c.insert("v");
        assert_eq!(c.find(z), Ok(y));
        assert!(c.are_same_set(x, x).unwrap());
        assert_eq!(c.get(w), Err(InvalidHandle::Foreign { index: 2 }));
        assert_eq!(b.get(v), Err(InvalidHandle::Foreign { index: 3 }));
        assert_eq!(a.get(v), Err(InvalidHandle::Foreign { index: 3 }));
    }

    #[test]
    fn payload_access() {
        let mut set = DisjointSet::with_capacity(2);
        let a = set.insert(String::from("left"));
        let b = set.insert(String::from("right"));
        set.union(a, b).unwrap();

        set.get_mut(b).unwrap().push_str("most");
        assert_eq!(set.get(b).unwrap(), "rightmost");
        assert_eq!(set.values().cloned().collect::<Vec<_>>(), [
            "left",
            "rightmost"
        ]);
        assert_eq!(
            set.iter().map(|(h, s)| (h, s.len())).collect::<Vec<_>>(),
            [(a, 4), (b, 9)]
        );
    }

    #[test]
    fn grouping() {
        let mut set: DisjointSet<char> = "abcdef".chars().collect();
        let h: Vec<_> = set.handles().collect();

        set.union(h[4], h[1]).unwrap();
        set.union(h[5], h[3]).unwrap();
        set.union(h[1], h[3]).unwrap();

        assert_eq!(set.sets(), [vec![h[0]], vec![h[1], h[3], h[4], h[5]], vec![
            h[2]
        ]]);
        assert_eq!(set.roots().collect::<Vec<_>>(), [h[0], h[2], h[4]]);
        assert_eq!(set.set_count(), 3);
        assert_eq!(set.handles().len(), 6);
        assert_eq!(set.handles().next_back(), Some(h[5]));
    }

    #[test]
    fn debug_map() {
        let mut set = DisjointSet::new();
        let a = set.insert("a");
        let b = set.insert("b");
        set.insert("c");
        set.union(b, a).unwrap();

        assert_eq!(
            format!("{set:?}"),
            r#"{0: ("a", Some(1)), 1: ("b", None), 2: ("c", None)}"#
        );
    }

    #[test]
    fn empty() {
        let set = DisjointSet::<()>::default();
        assert!(set.is_empty());
        assert_eq!(set.set_count(), 0);
        assert!(set.sets().is_empty());
        assert_eq!(set.handles().next(), None);
    }

    fn build(len: usize, ops: &[Op]) -> (DisjointSet<usize>, Vec<Handle<usize>>) {
        let mut set: DisjointSet<usize> = (0..len).collect();
        let h: Vec<_> = set.handles().collect();

        for &op in ops {
            match op {
                Op::Union(a, b) => {
                    set.union(h[a], h[b]).unwrap();
                },
                Op::SameSet(a, b) => {
                    set.are_same_set(h[a], h[b]).unwrap();
                },
                Op::Find(a) => {
                    set.find(h[a]).unwrap();
                },
            }
        }

        (set, h)
    }

    proptest! {
        #[test]
        fn equivalence_relation((len, ops) in len_and_ops(1..=24_usize, 0..=64_usize)) {
            let (set, h) = build(len, &ops);

            for &a in &h {
                prop_assert!(set.are_same_set(a, a).unwrap());

                for &b in &h {
                    let ab = set.are_same_set(a, b).unwrap();
                    prop_assert_eq!(ab, set.are_same_set(b, a).unwrap());

                    if !ab {
                        continue;
                    }

                    for &c in &h {
                        if set.are_same_set(b, c).unwrap() {
                            prop_assert!(set.are_same_set(a, c).unwrap());
                        }
                    }
                }
            }
        }

        #[test]
        fn unions_persist((len, ops) in len_and_ops(1..=64_usize, 1..=128_usize)) {
            let mut set: DisjointSet<usize> = (0..len).collect();
            let h: Vec<_> = set.handles().collect();
            let mut joined = vec![];

            for op in ops {
                if let Op::Union(a, b) = op {
                    set.union(h[a], h[b]).unwrap();
                    joined.push((a, b));
                }

                for &(a, b) in &joined {
                    prop_assert!(set.are_same_set(h[a], h[b]).unwrap());
                }
            }
        }

        #[test]
        fn find_idempotent_and_flat((len, ops) in len_and_ops(1..=64_usize, 0..=128_usize)) {
            let (set, h) = build(len, &ops);

            for &a in &h {
                let root = set.find(a).unwrap();
                prop_assert!(set.depth(a).unwrap() <= 1);
                prop_assert_eq!(set.find(root).unwrap(), root);
                prop_assert!(set.is_root(root).unwrap());
            }
        }

        #[test]
        fn argument_order_preserves_membership(
            (len, ops) in len_and_ops(1..=48_usize, 0..=96_usize)
        ) {
            let swapped: Vec<_> = ops
                .iter()
                .map(|&op| match op {
                    Op::Union(a, b) => Op::Union(b, a),
                    op => op,
                })
                .collect();

            let (fwd, fh) = build(len, &ops);
            let (rev, rh) = build(len, &swapped);

            prop_assert_eq!(fwd.set_count(), rev.set_count());

            for (&fa, &ra) in fh.iter().zip(&rh) {
                for (&fb, &rb) in fh.iter().zip(&rh) {
                    prop_assert_eq!(
                        fwd.are_same_set(fa, fb).unwrap(),
                        rev.are_same_set(ra, rb).unwrap()
                    );
                }
            }
        }
    }
}
