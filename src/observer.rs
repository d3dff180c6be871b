//! Module define the snapshot hook, called by [Tree](crate::Tree) after
//! every significant mutation.

use std::collections::VecDeque;

use crate::{
    arena::{Arena, NodeId},
    node::{Link, Node},
};

/// Mutation that triggered a snapshot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Event {
    /// First node created as root.
    Created(NodeId),
    /// New red node attached in place of a sentinel, before fixup.
    Attached(NodeId),
    /// Inserted key already present, carries the existing node.
    Duplicate(NodeId),
    /// Red uncle case, parent and uncle turned black and the
    /// grandparent, carried here, turned red.
    Recolored(NodeId),
    /// Left rotation, carries the node promoted to local root.
    RotatedLeft(NodeId),
    /// Right rotation, carries the node promoted to local root.
    RotatedRight(NodeId),
    /// Root forced black, after fixup.
    RootBlack(NodeId),
}

impl Event {
    pub fn to_node_id(&self) -> NodeId {
        use Event::*;

        match self {
            Created(id) | Attached(id) | Duplicate(id) => *id,
            Recolored(id) | RotatedLeft(id) | RotatedRight(id) | RootBlack(id) => *id,
        }
    }
}

/// Receive read-only snapshots of the tree. Observers must not fail the
/// insert, the default does nothing.
pub trait Observer<K> {
    fn on_snapshot(&mut self, _event: Event, _view: View<'_, K>) {}
}

/// Observer that ignores every snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl<K> Observer<K> for Silent {}

impl<K, O> Observer<K> for Option<O>
where
    O: Observer<K>,
{
    fn on_snapshot(&mut self, event: Event, view: View<'_, K>) {
        if let Some(observer) = self.as_mut() {
            observer.on_snapshot(event, view)
        }
    }
}

/// Read-only view of the tree structure, sufficient for rendering.
pub struct View<'a, K> {
    nodes: &'a Arena<Node<K>>,
    root: Option<NodeId>,
}

impl<'a, K> Clone for View<'a, K> {
    fn clone(&self) -> Self {
        View {
            nodes: self.nodes,
            root: self.root,
        }
    }
}

impl<'a, K> Copy for View<'a, K> {}

impl<'a, K> View<'a, K> {
    pub(crate) fn new(nodes: &'a Arena<Node<K>>, root: Option<NodeId>) -> View<'a, K> {
        View { nodes, root }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    #[inline]
    pub fn to_root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn as_root(&self) -> Option<&'a Node<K>> {
        self.root.map(|id| self.nodes.get(id))
    }

    /// Panics if `id` does not belong to this tree.
    #[inline]
    pub fn as_node(&self, id: NodeId) -> &'a Node<K> {
        self.nodes.get(id)
    }

    /// Node reached through `link`, None for sentinel.
    pub fn follow(&self, link: Link) -> Option<&'a Node<K>> {
        link.to_node_id().map(|id| self.nodes.get(id))
    }

    pub fn sibling(&self, id: NodeId) -> Option<Link> {
        self.nodes.sibling(id)
    }

    pub fn grandparent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.grandparent(id)
    }

    pub fn uncle(&self, id: NodeId) -> Option<Link> {
        self.nodes.uncle(id)
    }

    /// Breadth first walk from the root.
    pub fn by_level(&self) -> ByLevel<'a, K> {
        let mut worklist = VecDeque::new();
        worklist.extend(self.root);
        ByLevel {
            nodes: self.nodes,
            worklist,
        }
    }
}

/// Level order iterator over tree nodes, refer to [View::by_level].
pub struct ByLevel<'a, K> {
    nodes: &'a Arena<Node<K>>,
    worklist: VecDeque<NodeId>,
}

impl<'a, K> Iterator for ByLevel<'a, K> {
    type Item = (NodeId, &'a Node<K>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.worklist.pop_front()?;
        let node = self.nodes.get(id);
        self.worklist.extend(node.left.to_node_id());
        self.worklist.extend(node.right.to_node_id());
        Some((id, node))
    }
}
