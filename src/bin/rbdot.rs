use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use structopt::StructOpt;

use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process,
};

use redblack::{err_at, words, DotFrames, Error, Insert, Observer, Result, Tree};

/// Build a red-black tree from the words of each input and print them in
/// sorted order, writing a graphviz frame after every step.
#[derive(Clone, StructOpt)]
#[structopt(name = "rbdot")]
pub struct Opt {
    /// Build a plain, unbalanced, binary search tree.
    #[structopt(long = "norebalance")]
    no_rebalance: bool,

    /// Skip writing dot frames.
    #[structopt(long = "no-frames")]
    no_frames: bool,

    /// Print the occurrence count next to each word.
    #[structopt(long = "count")]
    count: bool,

    #[structopt(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,

    /// Input files, stdin when empty.
    #[structopt(parse(from_os_str))]
    files: Vec<PathBuf>,
}

fn main() {
    let opts = Opt::from_args();
    TermLogger::init(
        opts.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .ok();

    if let Err(err) = run(opts) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(opts: Opt) -> Result<()> {
    let rebalance = !opts.no_rebalance;

    if opts.files.is_empty() {
        let basename = if opts.no_frames {
            None
        } else {
            // a failure here surfaces when the first frame is created.
            fs::create_dir("out").ok();
            Some("out/frame-".to_string())
        };
        let stdin = io::stdin();
        return sort_words(&opts, rebalance, basename, stdin.lock());
    }

    for file in opts.files.iter() {
        let basename = match opts.no_frames {
            true => None,
            false if rebalance => Some(format!("{}-balanced-frame", file.display())),
            false => Some(format!("{}-unbalanced-frame", file.display())),
        };
        let fd = err_at!(IOError, fs::File::open(file), "open {:?}", file)?;
        sort_words(&opts, rebalance, basename, io::BufReader::new(fd))?;
    }
    Ok(())
}

fn sort_words<R>(opts: &Opt, rebalance: bool, basename: Option<String>, input: R) -> Result<()>
where
    R: BufRead,
{
    let frames = basename.map(DotFrames::new);
    let mut tree: Tree<String, Option<DotFrames>> = Tree::with_observer(rebalance, frames);
    let mut counts: Vec<usize> = vec![];

    for line in input.lines() {
        let line = err_at!(IOError, line)?;
        for word in words(&line) {
            add_word(&mut tree, &mut counts, word);
        }
    }
    info!("{} words, height {}", tree.len(), tree.height());

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for word in tree.iter() {
        let res = match opts.count {
            true => {
                let id = tree.find(word.as_str()).map(|id| id.to_index());
                let n = id.and_then(|i| counts.get(i).cloned()).unwrap_or(0);
                writeln!(out, "{} {}", word, n)
            }
            false => writeln!(out, "{}", word),
        };
        err_at!(IOError, res)?;
    }
    err_at!(IOError, out.flush())?;

    match tree.into_observer().and_then(|mut frames| frames.take_error()) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

// counts are kept by node identity, duplicates land on the stored key.
fn add_word<O>(tree: &mut Tree<String, O>, counts: &mut Vec<usize>, word: &str)
where
    O: Observer<String>,
{
    let index = match tree.insert(word.to_string()) {
        Insert::New(id) => {
            counts.resize(id.to_index() + 1, 0);
            id.to_index()
        }
        Insert::Duplicate(id) => id.to_index(),
    };
    counts[index] += 1;
}
