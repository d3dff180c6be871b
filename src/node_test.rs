use super::*;

//        b
//       / \
//      a   d
//         / \
//        c   e
fn family() -> (Arena<Node<char>>, [NodeId; 5]) {
    let mut arena = Arena::new();
    let b = arena.alloc(Node::new('b', None));
    let a = arena.alloc(Node::new('a', Some(b)));
    let d = arena.alloc(Node::new('d', Some(b)));
    let c = arena.alloc(Node::new('c', Some(d)));
    let e = arena.alloc(Node::new('e', Some(d)));
    arena.get_mut(b).left = Link::Node(a);
    arena.get_mut(b).right = Link::Node(d);
    arena.get_mut(d).left = Link::Node(c);
    arena.get_mut(d).right = Link::Node(e);
    arena.get_mut(b).set_black();
    (arena, [a, b, c, d, e])
}

#[test]
fn test_new_node() {
    let node = Node::new(10, None);
    assert!(node.is_red());
    assert!(!node.is_black());
    assert!(!node.is_leaf());
    assert!(node.to_left().is_leaf());
    assert!(node.to_right().is_leaf());
    assert_eq!(node.to_parent(), None);
    assert_eq!(*node.as_key(), 10);
}

#[test]
fn test_relations() {
    let (arena, [a, b, c, d, e]) = family();

    assert_eq!(arena.parent(b), None);
    assert_eq!(arena.parent(c), Some(d));
    assert_eq!(arena.grandparent(c), Some(b));
    assert_eq!(arena.grandparent(d), None);

    assert_eq!(arena.sibling(a), Some(Link::Node(d)));
    assert_eq!(arena.sibling(e), Some(Link::Node(c)));
    assert_eq!(arena.sibling(b), None);

    assert_eq!(arena.uncle(c), Some(Link::Node(a)));
    assert_eq!(arena.uncle(a), None);

    assert!(arena.is_left_child(a));
    assert!(!arena.is_left_child(d));
    assert!(!arena.is_left_child(b));
}

#[test]
fn test_sentinel_is_black() {
    let (arena, [a, b, ..]) = family();
    assert_eq!(arena.color_of(Link::Sentinel), Color::Black);
    assert_eq!(arena.color_of(Link::Node(a)), Color::Red);
    assert_eq!(arena.color_of(Link::Node(b)), Color::Black);
    assert_eq!(Link::Node(a).to_node_id(), Some(a));
    assert_eq!(Link::Sentinel.to_node_id(), None);
}
