use crate::arena::{Arena, NodeId};

/// Color of a node, sentinels are always black.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Color name as used by graphviz.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
        }
    }
}

/// Child slot of a node: either a real node or the data-less, black
/// sentinel leaf.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Link {
    Sentinel,
    Node(NodeId),
}

impl Link {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Link::Sentinel)
    }

    #[inline]
    pub fn to_node_id(&self) -> Option<NodeId> {
        match self {
            Link::Sentinel => None,
            Link::Node(id) => Some(*id),
        }
    }
}

/// Node corresponds to a single key in the tree.
#[derive(Clone)]
pub struct Node<K> {
    key: K,
    pub(crate) color: Color,
    pub(crate) parent: Option<NodeId>, // back-link, None for root
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl<K> Node<K> {
    // new nodes are red, with two sentinel children.
    pub(crate) fn new(key: K, parent: Option<NodeId>) -> Node<K> {
        Node {
            key,
            color: Color::Red,
            parent,
            left: Link::Sentinel,
            right: Link::Sentinel,
        }
    }

    #[inline]
    pub fn as_key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn to_color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    /// Real nodes are never leaves, refer to [Link::is_leaf].
    #[inline]
    pub fn is_leaf(&self) -> bool {
        false
    }

    #[inline]
    pub fn to_parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn to_left(&self) -> Link {
        self.left
    }

    #[inline]
    pub fn to_right(&self) -> Link {
        self.right
    }

    #[inline]
    pub(crate) fn set_red(&mut self) {
        self.color = Color::Red
    }

    #[inline]
    pub(crate) fn set_black(&mut self) {
        self.color = Color::Black
    }
}

// Relationship queries, computed from parent links.
impl<K> Arena<Node<K>> {
    #[inline]
    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).parent
    }

    pub(crate) fn grandparent(&self, id: NodeId) -> Option<NodeId> {
        self.parent(self.parent(id)?)
    }

    pub(crate) fn sibling(&self, id: NodeId) -> Option<Link> {
        let parent = self.get(self.parent(id)?);
        if parent.left == Link::Node(id) {
            Some(parent.right)
        } else {
            Some(parent.left)
        }
    }

    pub(crate) fn uncle(&self, id: NodeId) -> Option<Link> {
        self.sibling(self.parent(id)?)
    }

    #[inline]
    pub(crate) fn is_left_child(&self, id: NodeId) -> bool {
        match self.parent(id) {
            Some(parent) => self.get(parent).left == Link::Node(id),
            None => false,
        }
    }

    #[inline]
    pub(crate) fn color_of(&self, link: Link) -> Color {
        match link {
            Link::Sentinel => Color::Black,
            Link::Node(id) => self.get(id).color,
        }
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
