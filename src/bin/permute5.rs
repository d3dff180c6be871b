use rand::{prelude::random, rngs::SmallRng, SeedableRng};
use structopt::StructOpt;

use std::{
    io::{self, BufRead, Write},
    process,
};

use redblack::{err_at, permute_groups, Error, Result};

/// Randomly permute consecutive groups of lines read from stdin. Feeding
/// sorted words gives nearly-sorted data.
#[derive(Clone, StructOpt)]
#[structopt(name = "permute5")]
pub struct Opt {
    /// Seed for a reproducible permutation.
    seed: Option<u64>,

    #[structopt(long = "group", default_value = "5")]
    group: usize,
}

fn main() {
    let opts = Opt::from_args();
    if let Err(err) = run(opts) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(opts: Opt) -> Result<()> {
    if opts.group == 0 {
        return err_at!(InvalidInput, msg: "group size must be greater than zero");
    }
    let seed = opts.seed.unwrap_or_else(random);
    let mut rng = SmallRng::seed_from_u64(seed);

    let stdin = io::stdin();
    let mut lines = vec![];
    for line in stdin.lock().lines() {
        lines.push(err_at!(IOError, line)?);
    }

    permute_groups(&mut lines, opts.group, &mut rng);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for line in lines.iter() {
        err_at!(IOError, writeln!(out, "{}", line))?;
    }
    err_at!(IOError, out.flush())
}
