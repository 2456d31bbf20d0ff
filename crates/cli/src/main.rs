use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;
use wicks::prelude::*;

mod render;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Assignment and Wick contraction enumeration front end")]
struct Cmd {
    /// Per-point leg counts, comma separated (e.g. 5,5,2,4,4,2)
    #[arg(long, value_delimiter = ',', required = true)]
    legs: Vec<usize>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Count contractions per assignment and print the grand total
    Count,
    /// List all assignments; optionally write the LaTeX/graphviz sheet
    Assignments {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Decode one contraction of one assignment (JSON)
    Decode {
        #[arg(long)]
        assignment: usize,
        #[arg(long)]
        rank: i64,
    },
    /// Draw a reproducible random sample of contractions (JSON lines)
    Sample {
        #[arg(long)]
        assignment: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Partition an assignment's rank space into contiguous shards for
    /// external workers (JSON)
    Shard {
        #[arg(long)]
        assignment: usize,
        #[arg(long)]
        shards: i64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let points = PointLegs::new(cmd.legs).context("invalid point-leg spec")?;
    match cmd.action {
        Action::Count => count(&points),
        Action::Assignments { out } => assignments(&points, out),
        Action::Decode { assignment, rank } => decode(&points, assignment, rank),
        Action::Sample {
            assignment,
            seed,
            count,
        } => sample(&points, assignment, seed, count),
        Action::Shard { assignment, shards } => shard(&points, assignment, shards),
    }
}

fn count(points: &PointLegs) -> Result<()> {
    let all = AssignmentsFinder::new(points.clone()).find_all_assignments();
    let mut total: i64 = 0;
    for (i, ass) in all.iter().enumerate() {
        let n = WicksFinder::new(points.clone(), ass.clone()).count_all_wick_contractions();
        tracing::info!(assignment = i, entries = ?ass, contractions = n, "assignment");
        total += n;
    }
    tracing::info!(assignments = all.len(), total, "census");
    println!("{total}");
    Ok(())
}

fn assignments(points: &PointLegs, out: Option<PathBuf>) -> Result<()> {
    let all = AssignmentsFinder::new(points.clone()).find_all_assignments();
    for (i, ass) in all.iter().enumerate() {
        println!("{i}: {ass:?}");
    }
    if let Some(path) = out {
        render::write_assignment_sheet(&path, &all, points)?;
        tracing::info!(path = %path.display(), graphs = all.len(), "wrote diagram sheet");
    }
    Ok(())
}

fn decode(points: &PointLegs, assignment: usize, rank: i64) -> Result<()> {
    let finder = finder_for(points, assignment)?;
    let n = finder.count_all_wick_contractions();
    if !(0..n).contains(&rank) {
        bail!("rank {rank} out of range [0, {n})");
    }
    let doc = serde_json::json!({
        "assignment": assignment,
        "rank": rank,
        "pairs": pairs_of(&finder.get(rank)),
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn sample(points: &PointLegs, assignment: usize, seed: u64, count: usize) -> Result<()> {
    let finder = finder_for(points, assignment)?;
    let n = finder.count_all_wick_contractions();
    tracing::info!(assignment, seed, space = n, count, "sampling");
    let mut sampler = RankSampler::new(n, seed);
    for _ in 0..count {
        let rank = sampler.next_rank();
        let doc = serde_json::json!({
            "rank": rank,
            "pairs": pairs_of(&finder.get(rank)),
        });
        println!("{}", serde_json::to_string(&doc)?);
    }
    Ok(())
}

/// One contiguous slice of a rank space, end exclusive.
#[derive(Serialize)]
struct ShardRange {
    shard: i64,
    start: i64,
    end: i64,
}

fn shard(points: &PointLegs, assignment: usize, shards: i64) -> Result<()> {
    if shards <= 0 {
        bail!("need at least one shard");
    }
    let finder = finder_for(points, assignment)?;
    let n = finder.count_all_wick_contractions();
    let base = n / shards;
    let extra = n % shards;
    let mut ranges = Vec::with_capacity(shards as usize);
    let mut start = 0i64;
    for s in 0..shards {
        let len = base + i64::from(s < extra);
        ranges.push(ShardRange {
            shard: s,
            start,
            end: start + len,
        });
        start += len;
    }
    println!("{}", serde_json::to_string_pretty(&ranges)?);
    Ok(())
}

fn finder_for(points: &PointLegs, index: usize) -> Result<WicksFinder> {
    let mut all = AssignmentsFinder::new(points.clone()).find_all_assignments();
    if index >= all.len() {
        bail!(
            "assignment index {index} out of range ({} assignments exist)",
            all.len()
        );
    }
    Ok(WicksFinder::new(points.clone(), all.remove(index)))
}

fn pairs_of(wick: &Wick) -> Vec<[usize; 2]> {
    wick.iter().map(|p| [p.from, p.to]).collect()
}
