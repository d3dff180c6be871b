//! Module implement [DotFrames], an observer writing each snapshot as a
//! numbered graphviz file.

use log::{debug, error};

use std::{
    fmt,
    fs,
    io::{self, Write},
};

use crate::{
    arena::NodeId,
    node::Link,
    observer::{Event, Observer, View},
    Error, Result,
};

/// Write the tree in graphviz dot language. Node `hilite`, if present,
/// is filled yellow.
///
/// ```
/// use redblack::{render, Tree};
///
/// let tree: Tree<u8> = vec![1].into_iter().collect();
/// let mut out = vec![];
/// render(&tree.view(), None, &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().starts_with("digraph {\n"));
/// ```
pub fn render<K, W>(view: &View<'_, K>, hilite: Option<NodeId>, out: &mut W) -> io::Result<()>
where
    K: fmt::Display,
    W: Write,
{
    writeln!(out, "digraph {{")?;
    for (id, node) in view.by_level() {
        let fill = match hilite {
            Some(hid) if hid == id => ", style=filled, fillcolor=yellow",
            _ => "",
        };
        let label = escape(&node.as_key().to_string());
        let color = node.to_color().as_str();
        writeln!(out, "   \"{}\" [label=\"{}\", color={}{}];", id, label, color, fill)?;
        for (side, link) in [("l", node.to_left()), ("r", node.to_right())].iter() {
            if link.is_leaf() {
                writeln!(
                    out,
                    "   \"{}{}\" [label=\"\", fixedsize=true, width=0.2, height=0.2, style=filled, fillcolor=black];",
                    id, side
                )?;
            }
        }
    }
    for (id, node) in view.by_level() {
        for (side, link) in [("l", node.to_left()), ("r", node.to_right())].iter() {
            match link {
                Link::Node(child) => writeln!(out, "   \"{}\" -> \"{}\";", id, child)?,
                Link::Sentinel => writeln!(out, "   \"{}\" -> \"{}{}\";", id, id, side)?,
            }
        }
    }
    for (id, node) in view.by_level() {
        if let Some(parent) = node.to_parent() {
            writeln!(out, "   \"{}\" -> \"{}\" [color=green];", id, parent)?;
        }
    }
    writeln!(out, "}}")
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Observer writing one dot file per snapshot, named
/// `<basename><count>.dot` with count starting from 1 and padded to
/// three digits.
///
/// Writing stops at the first failure, the error is held until
/// [DotFrames::take_error] is called.
pub struct DotFrames {
    basename: String,
    count: usize,
    hilite: Option<NodeId>,
    err: Option<Error>,
}

impl DotFrames {
    pub fn new<S: ToString>(basename: S) -> DotFrames {
        DotFrames {
            basename: basename.to_string(),
            count: 0,
            hilite: None,
            err: None,
        }
    }

    /// Number of frames written so far.
    pub fn to_count(&self) -> usize {
        self.count
    }

    pub fn take_error(&mut self) -> Option<Error> {
        self.err.take()
    }

    fn frame_path(&self, count: usize) -> String {
        format!("{}{:03}.dot", self.basename, count)
    }

    fn write_frame<K>(&self, path: &str, view: &View<'_, K>) -> Result<()>
    where
        K: fmt::Display,
    {
        let fd = err_at!(IOError, fs::File::create(path), "create {}", path)?;
        let mut out = io::BufWriter::new(fd);
        err_at!(IOError, render(view, self.hilite, &mut out), "write {}", path)?;
        err_at!(IOError, out.flush(), "flush {}", path)
    }
}

impl<K> Observer<K> for DotFrames
where
    K: fmt::Display,
{
    fn on_snapshot(&mut self, event: Event, view: View<'_, K>) {
        if self.err.is_some() {
            return;
        }
        match event {
            Event::Created(id) | Event::Attached(id) | Event::Duplicate(id) => {
                self.hilite = Some(id)
            }
            _ => (),
        }

        let path = self.frame_path(self.count + 1);
        match self.write_frame(&path, &view) {
            Ok(()) => {
                debug!("frame {} for {:?}", path, event);
                self.count += 1;
                self.hilite = None;
            }
            Err(err) => {
                error!("frame {} failed: {}", path, err);
                self.err = Some(err);
            }
        }
    }
}

#[cfg(test)]
#[path = "dot_test.rs"]
mod dot_test;
