//! Path compression and union by rank over any parent-linked forest

use std::cmp::Ordering;

/// Error indicating a key passed to a forest operation has no node
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("No disjoint-set node found with ID {0}")]
pub struct NoNode<K>(pub K);

/// The outcome of a [`ranked_union`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unioned<K> {
    /// The root of the merged set
    pub root: K,
    /// The former root that was attached beneath `root`, or `None` if both
    /// keys already shared a set
    pub unioned: Option<K>,
}

impl<K> Unioned<K> {
    pub fn map<J, F: Fn(K) -> J>(self, f: F) -> Unioned<J> {
        Unioned {
            root: f(self.root),
            unioned: self.unioned.map(f),
        }
    }

    #[inline]
    #[must_use]
    pub fn did_merge(&self) -> bool { self.unioned.is_some() }
}

/// Parent-link storage for a forest of keys
///
/// A parent of `None` marks a root.  Stores are performed through a shared
/// reference so that read-only queries may still compress paths.
pub trait ForestFind<K> {
    /// Returns `None` if no node exists for `key`, otherwise its parent link
    fn load_parent(&self, key: K) -> Option<Option<K>>;

    /// Relinks `key` beneath `parent`, returning the previous link, or `None`
    /// if no node exists for `key`
    fn store_parent(&self, key: K, parent: K) -> Option<Option<K>>;
}

/// Walk parent links from `key` to its root without modifying the forest
///
/// # Errors
/// Returns an error if `key` has no associated node.
pub fn forest_root<K: Copy, F: ForestFind<K> + ?Sized>(set: &F, key: K) -> Result<K, NoNode<K>> {
    let mut parent = set.load_parent(key).ok_or(NoNode(key))?;
    let mut root = key;

    while let Some(next) = parent {
        root = next;
        parent = set.load_parent(root).unwrap_or_else(|| unreachable!());
    }

    Ok(root)
}

/// Relink every node on the path from `key` to `root` directly beneath
/// `root`
///
/// `root` must be the root of the set containing `key`.
pub fn compress<K: Copy + Eq, F: ForestFind<K> + ?Sized>(set: &F, key: K, root: K) {
    let mut key = key;

    while key != root {
        let prev = set
            .store_parent(key, root)
            .unwrap_or_else(|| unreachable!());

        debug_assert!(prev.is_some(), "compressed past a foreign root");
        let Some(parent) = prev else { break };
        key = parent;
    }
}

/// Find the root of the set containing `key`, compressing the path walked
///
/// # Errors
/// Returns an error if `key` has no associated node.
pub fn forest_find<K: Copy + Eq, F: ForestFind<K> + ?Sized>(
    set: &F,
    key: K,
) -> Result<K, NoNode<K>> {
    let root = forest_root(set, key)?;
    compress(set, key, root);
    Ok(root)
}

pub trait RankedUnion<K>: ForestFind<K> {
    type Rank: Ord;

    /// Returns the rank of `root`, or `None` if no node exists for it
    fn rank(&self, root: K) -> Option<Self::Rank>;

    /// Attach the root `merged` beneath the root `root`, incrementing the
    /// rank of `root` if the two ranks were `tied`
    fn merge(&mut self, root: K, merged: K, tied: bool);
}

/// Perform the in-place union of the sets containing `a` and `b`
///
/// The higher-ranked root survives.  On a tie the root of `a` survives and
/// its rank grows by one.  Both `a` and `b` are left linked directly beneath
/// the surviving root.
///
/// # Errors
/// Returns an error if either key has no associated node.
pub fn ranked_union<K: Copy + Eq, S: RankedUnion<K> + ?Sized>(
    set: &mut S,
    a: K,
    b: K,
) -> Result<Unioned<K>, NoNode<K>> {
    let a_root = forest_find(&*set, a)?;
    let b_root = forest_find(&*set, b)?;

    if a_root == b_root {
        return Ok(Unioned {
            root: a_root,
            unioned: None,
        });
    }

    let a_rank = set.rank(a_root).unwrap_or_else(|| unreachable!());
    let b_rank = set.rank(b_root).unwrap_or_else(|| unreachable!());

    let cmp = a_rank.cmp(&b_rank);
    let (root, merged) = match cmp {
        Ordering::Less => (b_root, a_root),
        Ordering::Equal | Ordering::Greater => (a_root, b_root),
    };

    set.merge(root, merged, cmp.is_eq());

    compress(&*set, a, root);
    compress(&*set, b, root);

    Ok(Unioned {
        root,
        unioned: Some(merged),
    })
}
