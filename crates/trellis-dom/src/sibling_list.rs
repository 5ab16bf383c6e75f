//! Intrusive doubly-linked list of sibling nodes.
//!
//! The list itself only stores `first`, `last` and `count`. The `prev`/`next`
//! links live in the arena slots of the member nodes, so appending and
//! removing a member are O(1) once its handle is known.

use crate::node::{ArenaIndex, Links};

/// Arena slots that carry sibling links for a [`SiblingList`].
pub(crate) trait Linked<I> {
    fn links(&self) -> &Links<I>;
    fn links_mut(&mut self) -> &mut Links<I>;
}

/// Ordered list of sibling nodes of one kind.
///
/// Insertion order is serialization order. A node belongs to at most one
/// list at a time; the owning [`Document`](crate::Document) guarantees this
/// before calling the linking operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiblingList<I> {
    first: Option<I>,
    last: Option<I>,
    count: usize,
}

impl<I> Default for SiblingList<I> {
    fn default() -> Self {
        Self {
            first: None,
            last: None,
            count: 0,
        }
    }
}

impl<I: Copy> SiblingList<I> {
    /// First member, if any.
    #[must_use]
    pub const fn first(&self) -> Option<I> {
        self.first
    }

    /// Last member, if any.
    #[must_use]
    pub const fn last(&self) -> Option<I> {
        self.last
    }

    /// Number of members.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns true if the list has no members.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}

// `ArenaIndex` is crate-private, so the bound sits on each linking
// operation rather than on the impl.
impl<I: Copy> SiblingList<I> {
    /// Append `id` after the current last member.
    pub(crate) fn add_last<N: Linked<I>>(&mut self, nodes: &mut [N], id: I)
    where
        I: ArenaIndex,
    {
        let prev = self.last;
        *nodes[id.index()].links_mut() = Links { prev, next: None };

        match prev {
            Some(prev) => nodes[prev.index()].links_mut().next = Some(id),
            None => self.first = Some(id),
        }
        self.last = Some(id);
        self.count += 1;
    }

    /// Link `id` directly in front of `reference`, which must be a member.
    pub(crate) fn insert_before<N: Linked<I>>(&mut self, nodes: &mut [N], reference: I, id: I)
    where
        I: ArenaIndex,
    {
        let prev = nodes[reference.index()].links().prev;
        *nodes[id.index()].links_mut() = Links {
            prev,
            next: Some(reference),
        };
        nodes[reference.index()].links_mut().prev = Some(id);

        match prev {
            Some(prev) => nodes[prev.index()].links_mut().next = Some(id),
            None => self.first = Some(id),
        }
        self.count += 1;
    }

    /// Unlink `id`, which must be a member, and reset its links.
    pub(crate) fn remove<N: Linked<I>>(&mut self, nodes: &mut [N], id: I)
    where
        I: ArenaIndex,
    {
        let Links { prev, next } = *nodes[id.index()].links();

        match prev {
            Some(prev) => nodes[prev.index()].links_mut().next = next,
            None => self.first = next,
        }
        match next {
            Some(next) => nodes[next.index()].links_mut().prev = prev,
            None => self.last = prev,
        }

        *nodes[id.index()].links_mut() = Links::default();
        self.count -= 1;
    }

    /// Unlink every member and return them in list order.
    ///
    /// Resetting the members' parent handles is left to the caller, which
    /// knows what kind of node it is holding.
    pub(crate) fn clear<N: Linked<I>>(&mut self, nodes: &mut [N]) -> Vec<I>
    where
        I: ArenaIndex,
    {
        let mut removed = Vec::with_capacity(self.count);
        let mut current = self.first;
        while let Some(id) = current {
            let links = nodes[id.index()].links_mut();
            current = links.next;
            *links = Links::default();
            removed.push(id);
        }
        *self = Self::default();
        removed
    }
}
