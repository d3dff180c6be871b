//! Rotation routines, re-parenting a three node neighbourhood while
//! preserving the in-order sequence.

use crate::{
    arena::{Arena, NodeId},
    node::{Link, Node},
};

//              (p)                       (p)
//               |                         |
//               x                         y
//              / \                       / \
//             /   \                     /   \
//            a     y                   x     c
//                 / \                 / \
//                b   c               a   b
//
pub(crate) fn rotate_left<K>(
    nodes: &mut Arena<Node<K>>,
    root: &mut Option<NodeId>,
    x: NodeId,
) -> NodeId {
    let y = match nodes.get(x).right {
        Link::Node(y) => y,
        Link::Sentinel => panic!("rotate_left(): right child is a sentinel ? Call the programmer"),
    };
    let parent = nodes.get(x).parent;

    let b = nodes.get(y).left;
    nodes.get_mut(x).right = b;
    if let Link::Node(b) = b {
        nodes.get_mut(b).parent = Some(x);
    }

    relink(nodes, root, parent, x, y);
    nodes.get_mut(y).left = Link::Node(x);
    nodes.get_mut(x).parent = Some(y);
    y
}

//              (p)                       (p)
//               |                         |
//               x                         y
//              / \                       / \
//             /   \                     /   \
//            y     c                   a     x
//           / \                             / \
//          a   b                           b   c
//
pub(crate) fn rotate_right<K>(
    nodes: &mut Arena<Node<K>>,
    root: &mut Option<NodeId>,
    x: NodeId,
) -> NodeId {
    let y = match nodes.get(x).left {
        Link::Node(y) => y,
        Link::Sentinel => panic!("rotate_right(): left child is a sentinel ? Call the programmer"),
    };
    let parent = nodes.get(x).parent;

    let b = nodes.get(y).right;
    nodes.get_mut(x).left = b;
    if let Link::Node(b) = b {
        nodes.get_mut(b).parent = Some(x);
    }

    relink(nodes, root, parent, x, y);
    nodes.get_mut(y).right = Link::Node(x);
    nodes.get_mut(x).parent = Some(y);
    y
}

// Hang `new` in the slot that held `old`, under `parent` or as root.
fn relink<K>(
    nodes: &mut Arena<Node<K>>,
    root: &mut Option<NodeId>,
    parent: Option<NodeId>,
    old: NodeId,
    new: NodeId,
) {
    nodes.get_mut(new).parent = parent;
    match parent {
        None => *root = Some(new),
        Some(parent) => {
            let pnode = nodes.get_mut(parent);
            if pnode.left == Link::Node(old) {
                pnode.left = Link::Node(new)
            } else if pnode.right == Link::Node(old) {
                pnode.right = Link::Node(new)
            } else {
                panic!("relink(): {} is not a child of {} ? Call the programmer", old, parent)
            }
        }
    }
}

#[cfg(test)]
#[path = "rotate_test.rs"]
mod rotate_test;
