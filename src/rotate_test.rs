use super::*;

// Build the left-hand shape of the rotate_left diagram, hung under `p`.
//
//      p
//       \
//        x
//       / \
//      a   y
//         / \
//        b   c
fn left_shape() -> (Arena<Node<char>>, Option<NodeId>, [NodeId; 6]) {
    let mut nodes = Arena::new();
    let p = nodes.alloc(Node::new('p', None));
    let x = nodes.alloc(Node::new('x', Some(p)));
    let a = nodes.alloc(Node::new('a', Some(x)));
    let y = nodes.alloc(Node::new('y', Some(x)));
    let b = nodes.alloc(Node::new('b', Some(y)));
    let c = nodes.alloc(Node::new('c', Some(y)));
    nodes.get_mut(p).right = Link::Node(x);
    nodes.get_mut(x).left = Link::Node(a);
    nodes.get_mut(x).right = Link::Node(y);
    nodes.get_mut(y).left = Link::Node(b);
    nodes.get_mut(y).right = Link::Node(c);
    (nodes, Some(p), [p, x, a, y, b, c])
}

#[test]
fn test_rotate_left() {
    let (mut nodes, mut root, [p, x, a, y, b, c]) = left_shape();

    let top = rotate_left(&mut nodes, &mut root, x);
    assert_eq!(top, y);
    assert_eq!(root, Some(p));

    assert_eq!(nodes.get(p).right, Link::Node(y));
    assert_eq!(nodes.get(y).parent, Some(p));
    assert_eq!(nodes.get(y).left, Link::Node(x));
    assert_eq!(nodes.get(y).right, Link::Node(c));
    assert_eq!(nodes.get(x).parent, Some(y));
    assert_eq!(nodes.get(x).left, Link::Node(a));
    assert_eq!(nodes.get(x).right, Link::Node(b));
    assert_eq!(nodes.get(b).parent, Some(x));
    assert_eq!(nodes.get(c).parent, Some(y));
}

#[test]
fn test_rotate_right_undoes_left() {
    let (mut nodes, mut root, [p, x, a, y, b, c]) = left_shape();

    rotate_left(&mut nodes, &mut root, x);
    let top = rotate_right(&mut nodes, &mut root, y);
    assert_eq!(top, x);

    assert_eq!(nodes.get(p).right, Link::Node(x));
    assert_eq!(nodes.get(x).parent, Some(p));
    assert_eq!(nodes.get(x).left, Link::Node(a));
    assert_eq!(nodes.get(x).right, Link::Node(y));
    assert_eq!(nodes.get(y).parent, Some(x));
    assert_eq!(nodes.get(y).left, Link::Node(b));
    assert_eq!(nodes.get(b).parent, Some(y));
    assert_eq!(nodes.get(c).parent, Some(y));
}

#[test]
fn test_rotate_at_root() {
    let mut nodes = Arena::new();
    let x = nodes.alloc(Node::new(1, None));
    let y = nodes.alloc(Node::new(2, Some(x)));
    nodes.get_mut(x).right = Link::Node(y);
    let mut root = Some(x);

    assert_eq!(rotate_left(&mut nodes, &mut root, x), y);
    assert_eq!(root, Some(y));
    assert_eq!(nodes.get(y).parent, None);
    assert_eq!(nodes.get(y).left, Link::Node(x));
    assert_eq!(nodes.get(x).right, Link::Sentinel);
}

#[test]
#[should_panic(expected = "rotate_left(): right child is a sentinel")]
fn test_rotate_left_sentinel() {
    let mut nodes = Arena::new();
    let x = nodes.alloc(Node::new(1, None));
    let mut root = Some(x);
    rotate_left(&mut nodes, &mut root, x);
}

#[test]
#[should_panic(expected = "rotate_right(): left child is a sentinel")]
fn test_rotate_right_sentinel() {
    let mut nodes = Arena::new();
    let x = nodes.alloc(Node::new(1, None));
    let mut root = Some(x);
    rotate_right(&mut nodes, &mut root, x);
}
