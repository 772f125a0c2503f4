//! Counts how many random pairs it takes to connect `n` sites.
//! Arguments:
//! - experiment: merges, fixed or draws
//! - start / end: `n` doubles from start while it stays within end
//! - seed: rng seed, random if absent
//! - no-path-compression: run the structure without path-halving
//! - json: one JSON object per row instead of the table

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use weighted_union::{DisjointSet, Error, UnionFind, UnionFindConfig};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Experiment {
    /// Draw until one component remains, counting pairs that merged
    Merges,
    /// Draw exactly n pairs, counting pairs that merged
    Fixed,
    /// Draw until one component remains, counting every pair drawn
    Draws,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_enum, default_value_t = Experiment::Merges)]
    experiment: Experiment,

    #[arg(long, default_value_t = 500)]
    start: usize,

    #[arg(long, default_value_t = 2048000)]
    end: usize,

    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(long)]
    no_path_compression: bool,

    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
struct Row {
    n: usize,
    pairs: usize,
    components: usize,
}

fn random_pair(rng: &mut impl Rng, n: usize) -> (usize, usize) {
    (rng.gen_range(0..n), rng.gen_range(0..n))
}

fn run<U: UnionFind>(uf: &mut U, experiment: Experiment, rng: &mut impl Rng) -> Result<Row, Error> {
    let n = uf.size();
    let mut pairs = 0;
    match experiment {
        Experiment::Merges => {
            while uf.components() > 1 {
                let (p, q) = random_pair(rng, n);
                if uf.connect(p, q)? {
                    pairs += 1;
                }
            }
        }
        Experiment::Fixed => {
            for _ in 0..n {
                let (p, q) = random_pair(rng, n);
                if uf.connect(p, q)? {
                    pairs += 1;
                }
            }
        }
        Experiment::Draws => {
            while uf.components() > 1 {
                let (p, q) = random_pair(rng, n);
                uf.connect(p, q)?;
                pairs += 1;
            }
        }
    }
    Ok(Row {
        n,
        pairs,
        components: uf.components(),
    })
}

fn sizes(start: usize, end: usize) -> Vec<usize> {
    let mut v = vec![];
    let mut n = start.max(1);
    while n <= end {
        v.push(n);
        n *= 2;
    }
    v
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("experiment {:?}, seed {}", args.experiment, seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let config = UnionFindConfig {
        path_compression: !args.no_path_compression,
    };

    if !args.json {
        println!("{:>10} {:>12} {:>11}", "n", "pairs", "components");
    }
    for n in sizes(args.start, args.end) {
        let mut uf = DisjointSet::with_config(n, config);
        let row = run(&mut uf, args.experiment, &mut rng)?;
        log::info!("n = {}: {} pairs, {} components", row.n, row.pairs, row.components);
        if args.json {
            println!("{}", serde_json::to_string(&row)?);
        } else {
            println!("{:>10} {:>12} {:>11}", row.n, row.pairs, row.components);
        }
    }
    Ok(())
}
