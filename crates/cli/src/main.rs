use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use planarity::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod report;

use provenance::Payload;
use report::GraphReport;

#[derive(Parser)]
#[command(name = "planarity-cli")]
#[command(about = "Planarity tests on named and random graphs")]
struct Cmd {
    /// Optional run label; propagated to provenance and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Test one named graph
    Check {
        #[arg(long, value_enum)]
        family: Family,
        /// Size parameter (vertices, rows, rim length, or first part)
        #[arg(long, default_value_t = 5)]
        n: usize,
        /// Second size parameter (grid columns, second part)
        #[arg(long, default_value_t = 5)]
        m: usize,
        /// Extract a Kuratowski certificate when non-planar
        #[arg(long)]
        certificate: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Test seeded G(n, m) samples
    Random {
        #[arg(long)]
        n: usize,
        #[arg(long)]
        m: usize,
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        count: u64,
        #[arg(long)]
        certificate: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Family {
    K5,
    K33,
    Petersen,
    Grid,
    Wheel,
    Cycle,
    Path,
    Complete,
    Bipartite,
}

impl Family {
    fn build(self, n: usize, m: usize) -> Graph {
        match self {
            Family::K5 => families::complete(5),
            Family::K33 => families::complete_bipartite(3, 3),
            Family::Petersen => families::petersen(),
            Family::Grid => families::grid(n, m),
            Family::Wheel => families::wheel(n),
            Family::Cycle => families::cycle(n),
            Family::Path => families::path(n),
            Family::Complete => families::complete(n),
            Family::Bipartite => families::complete_bipartite(n, m),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check {
            family,
            n,
            m,
            certificate,
            out,
        } => check(family, n, m, certificate, out, cmd.tag),
        Action::Random {
            n,
            m,
            seed,
            count,
            certificate,
            out,
        } => random(n, m, seed, count, certificate, out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn check(
    family: Family,
    n: usize,
    m: usize,
    certificate: bool,
    out: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(?family, n, m, certificate, tag = ?tag, "check");
    let g = family.build(n, m);
    let res = test_planarity(&g, certificate);
    let label = format!("{family:?}").to_lowercase();
    let rep = GraphReport::new(label.clone(), &g, &res)?;
    tracing::info!(planar = rep.planar, vertices = rep.vertices, edges = rep.edges, "done");
    let params = serde_json::json!({
        "command": "check",
        "family": label,
        "n": n,
        "m": m,
        "certificate": certificate
    });
    emit(&rep, out.as_deref(), Payload::new(params, tag))
}

fn random(
    n: usize,
    m: usize,
    seed: u64,
    count: u64,
    certificate: bool,
    out: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    if count == 0 {
        bail!("--count must be at least 1");
    }
    tracing::info!(n, m, seed, count, certificate, tag = ?tag, "random");
    let mut reports = Vec::new();
    let mut tok = ReplayToken::new(seed, 0);
    for _ in 0..count {
        let g = gnm(n, m, tok);
        let res = test_planarity(&g, certificate);
        reports.push(GraphReport::new(format!("gnm-{seed}-{}", tok.index), &g, &res)?);
        tok = tok.next();
    }
    let planar = reports.iter().filter(|r| r.planar).count();
    tracing::info!(planar, total = reports.len(), "done");
    let params = serde_json::json!({
        "command": "random",
        "n": n,
        "m": m,
        "seed": seed,
        "count": count,
        "certificate": certificate
    });
    emit(&reports, out.as_deref(), Payload::new(params, tag))
}

/// Print to stdout, or write the report plus its provenance sidecar.
fn emit<T: serde::Serialize>(value: &T, out: Option<&Path>, payload: Payload) -> Result<()> {
    match out {
        None => println!("{}", serde_json::to_string_pretty(value)?),
        Some(path) => {
            report::write_json(path, value)?;
            let sidecar = provenance::write_sidecar(path, &payload)?;
            tracing::info!(out = %path.display(), provenance = %sidecar.display(), "written");
        }
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::document(&Payload::new(serde_json::json!({}), tag), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
