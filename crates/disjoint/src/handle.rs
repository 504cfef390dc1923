use std::{
    cmp::Ordering,
    fmt, hash,
    marker::PhantomData,
    sync::atomic::{self, AtomicUsize},
};

static NEXT_OWNER: AtomicUsize = AtomicUsize::new(0);

/// Process-unique tag identifying the [`DisjointSet`](crate::DisjointSet) a
/// handle was minted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Owner(usize);

impl Owner {
    pub(crate) fn fresh() -> Self { Self(NEXT_OWNER.fetch_add(1, atomic::Ordering::Relaxed)) }
}

/// The owner tags a structure answers to
///
/// A clone gets a fresh tag of its own and inherits every tag of the
/// structure it was cloned from, each limited to the elements that existed at
/// the time of the clone.  An element is always handed out under the oldest
/// tag covering it, so a handle stays equal to itself across clones.
#[derive(Debug)]
pub(crate) struct Lineage {
    owner: Owner,
    /// Inherited tags paired with the element count at the time of cloning,
    /// oldest first
    ancestors: Vec<(Owner, usize)>,
}

impl Lineage {
    pub(crate) fn fresh() -> Self {
        Self {
            owner: Owner::fresh(),
            ancestors: vec![],
        }
    }

    /// Derive the lineage of a copy of a structure holding `len` elements
    pub(crate) fn fork(&self, len: usize) -> Self {
        let mut ancestors = Vec::with_capacity(self.ancestors.len() + 1);
        ancestors.extend_from_slice(&self.ancestors);
        ancestors.push((self.owner, len));

        Self {
            owner: Owner::fresh(),
            ancestors,
        }
    }

    fn owner_of(&self, index: usize) -> Owner {
        self.ancestors
            .iter()
            .find(|&&(_, len)| index < len)
            .map_or(self.owner, |&(owner, _)| owner)
    }

    #[inline]
    pub(crate) fn mint<T: ?Sized>(&self, index: usize) -> Handle<T> {
        Handle::new(self.owner_of(index), index)
    }

    /// Returns true if `handle` carries the tag this lineage would mint for
    /// its index
    ///
    /// This does not check that the index is in bounds.
    #[inline]
    pub(crate) fn claims<T: ?Sized>(&self, handle: Handle<T>) -> bool {
        self.owner_of(handle.index) == handle.owner
    }
}

/// An opaque reference to one element of a
/// [`DisjointSet`](crate::DisjointSet)
///
/// Handles compare by identity: two handles are equal only if they refer to
/// the same element of the same structure, regardless of payload.  Copying a
/// handle never copies the element or any of its ancestors.
pub struct Handle<T: ?Sized> {
    index: usize,
    owner: Owner,
    _p: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Handle<T> {
    pub(crate) const fn new(owner: Owner, index: usize) -> Self {
        Self {
            index,
            owner,
            _p: PhantomData,
        }
    }

    /// The insertion ordinal of the element within its structure
    #[must_use]
    #[inline]
    pub fn index(self) -> usize { self.index }
}

impl<T: ?Sized> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            index,
            owner: Owner(owner),
            _p: PhantomData,
        } = self;
        write!(f, "Handle({index}@{owner})")
    }
}

impl<T: ?Sized> Clone for Handle<T> {
    fn clone(&self) -> Self { *self }
}

impl<T: ?Sized> Copy for Handle<T> {}

impl<T: ?Sized> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool { self.index == other.index && self.owner == other.owner }
}

impl<T: ?Sized> Eq for Handle<T> {}

impl<T: ?Sized> Ord for Handle<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.owner
            .cmp(&other.owner)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl<T: ?Sized> PartialOrd for Handle<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl<T: ?Sized> hash::Hash for Handle<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.index.hash(state);
    }
}
