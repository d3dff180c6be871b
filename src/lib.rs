//! Package implement a red-black tree that keeps parent links, for
//! watching how insertion rebalances the structure.
//!
//! Quoting from [Wikipedia][wiki-rbt]:
//!
//! > A red-black tree is a binary search tree where each node has a color
//! > (red or black) and satisfies additional properties that keep the tree
//! > approximately balanced.
//!
//! - Each node in a [Tree] holds a unique key.
//! - Insert and traversal only, there is no delete.
//! - Every significant mutation is reported to an [Observer], along with a
//!   read-only [View] of the tree. [DotFrames] turns those snapshots into
//!   numbered graphviz files.
//! - Rebalancing can be switched off at construction, degrading the tree
//!   into a plain binary search tree.
//! - Not thread safe.
//!
//! Nodes live in an arena and refer to each other by [NodeId], so parent
//! links need no reference counting.
//!
//! ```
//! use redblack::{Color, Tree};
//!
//! let mut tree: Tree<u32> = Tree::new();
//! for key in [10, 20, 30].iter() {
//!     tree.insert(*key);
//! }
//!
//! let keys: Vec<u32> = tree.iter().cloned().collect();
//! assert_eq!(keys, vec![10, 20, 30]);
//!
//! let view = tree.view();
//! let root = view.as_root().unwrap();
//! assert_eq!(*root.as_key(), 20);
//! assert_eq!(root.to_color(), Color::Black);
//! tree.validate().unwrap();
//! ```
//!
//! [wiki-rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree

use std::{error, fmt, result};

/// Short form to compose Error values.
///
/// Here are few possible ways:
///
/// ```ignore
/// use crate::Error;
/// err_at!(Fatal, msg: format!("bad argument"));
/// ```
///
/// ```ignore
/// use crate::Error;
/// err_at!(IOError, std::fs::read(file_path));
/// ```
///
/// ```ignore
/// use crate::Error;
/// err_at!(IOError, std::fs::read(file_path), format!("read failed"));
/// ```
#[macro_export]
macro_rules! err_at {
    ($v:ident, msg: $($arg:expr),+) => {{
        let prefix = format!("{}:{}", file!(), line!());
        Err(Error::$v(prefix, format!($($arg),+)))
    }};
    ($v:ident, $e:expr) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = format!("{}:{}", file!(), line!());
                Err(Error::$v(prefix, format!("{}", err)))
            }
        }
    }};
    ($v:ident, $e:expr, $($arg:expr),+) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = format!("{}:{}", file!(), line!());
                let msg = format!($($arg),+);
                Err(Error::$v(prefix, format!("{} {}", err, msg)))
            }
        }
    }};
}

mod arena;
mod dot;
mod node;
mod observer;
mod permute;
mod rotate;
mod tree;
mod words;

pub use arena::NodeId;
pub use dot::{render, DotFrames};
pub use node::{Color, Link, Node};
pub use observer::{ByLevel, Event, Observer, Silent, View};
pub use permute::permute_groups;
pub use tree::{Insert, Iter, Stats, Tree};
pub use words::words;

/// Error variants that are returned by this package's API.
///
/// Each variant carries a prefix, typically identifying the
/// error location.
pub enum Error {
    Fatal(String, String),
    IOError(String, String),
    InvalidInput(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        use Error::*;

        match self {
            Fatal(p, msg) => write!(f, "{} Fatal: {}", p, msg),
            IOError(p, msg) => write!(f, "{} IOError: {}", p, msg),
            InvalidInput(p, msg) => write!(f, "{} InvalidInput: {}", p, msg),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl error::Error for Error {}

/// Type alias for Result return type, used by this package.
pub type Result<T> = result::Result<T, Error>;
