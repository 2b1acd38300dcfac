use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;
use wicksym::prelude::*;

mod provenance;

#[derive(Parser)]
#[command(name = "wicksym")]
#[command(about = "Wick-pairing census and diagram symmetry factors")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Enumerate every pairing, consolidate diagrams, and print the report
    Count {
        /// External vertices (one field slot each)
        #[arg(long, default_value_t = 2)]
        external: usize,
        /// Internal three-point vertices
        #[arg(long, default_value_t = 2)]
        three_point: usize,
        /// Internal four-point vertices
        #[arg(long, default_value_t = 0)]
        four_point: usize,
        /// Progress log interval, in pairings
        #[arg(long, default_value_t = 1_000_000)]
        log_every: u64,
        /// Also write the report as JSON (with a provenance sidecar)
        #[arg(long)]
        out: Option<String>,
    },
    /// Print the derived constants without enumerating
    Expected {
        #[arg(long, default_value_t = 2)]
        external: usize,
        #[arg(long, default_value_t = 2)]
        three_point: usize,
        #[arg(long, default_value_t = 0)]
        four_point: usize,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Count {
            external,
            three_point,
            four_point,
            log_every,
            out,
        } => count(external, three_point, four_point, log_every, out),
        Action::Expected {
            external,
            three_point,
            four_point,
        } => expected(external, three_point, four_point),
    }
}

fn count(
    external: usize,
    three_point: usize,
    four_point: usize,
    log_every: u64,
    out: Option<String>,
) -> Result<()> {
    let topo = Topology::new(external, three_point, four_point)?;
    let labels = VertexLabels::new(&topo);
    print_header(&topo, &labels);

    tracing::info!(external, three_point, four_point, log_every, "count");
    let census = run_census(&topo, EnumerateCfg { log_every });
    census.verify(&topo)?;

    let normalization = topo.normalization_factor();
    println!("Number of found graphs: {}", census.consolidated.len());
    let mut total = 0u64;
    for (diagram, n) in &census.consolidated {
        let factor = symmetry_factor(normalization, *n)?;
        println!("Graph count: {n}");
        println!("Symmetry factor: {factor}");
        println!("{}", render_edges(diagram, &labels));
        println!();
        total += n;
    }
    println!("TOTAL count: {total}");
    println!("EXPECTED: {}", topo.expected_pairings());

    if let Some(out) = out {
        write_report(&out, &topo, &labels, &census)?;
    }
    Ok(())
}

fn expected(external: usize, three_point: usize, four_point: usize) -> Result<()> {
    let topo = Topology::new(external, three_point, four_point)?;
    println!("Number of fields: {}", topo.num_fields());
    println!("Normalization factor: {}", topo.normalization_factor());
    println!("Expected pairings: {}", topo.expected_pairings());
    Ok(())
}

fn print_header(topo: &Topology, labels: &VertexLabels) {
    let names: Vec<String> = labels.iter().map(String::from).collect();
    let (ext, int) = names.split_at(topo.num_external());
    println!("External vertices: {}", ext.join(" "));
    println!("Internal vertices: {}", int.join(" "));
    println!("Number of 3 point vertices: {}", topo.num_three_point());
    println!("Number of 4 point vertices: {}", topo.num_four_point());
    println!("Number of fields: {}", topo.num_fields());
    println!("Normalization factor: {}", topo.normalization_factor());
    println!("Number of expected pairings: {}", topo.expected_pairings());
    let fields: Vec<String> = topo
        .field_owners()
        .iter()
        .map(|v| labels.get(*v).to_string())
        .collect();
    println!("Fields: [{}]", fields.join(", "));
}

fn write_report(out: &str, topo: &Topology, labels: &VertexLabels, census: &Census) -> Result<()> {
    let normalization = topo.normalization_factor();
    let mut graphs = Vec::new();
    for (diagram, n) in &census.consolidated {
        graphs.push(serde_json::json!({
            "count": n,
            "symmetry_factor": symmetry_factor(normalization, *n)?,
            "edges": render_edges(diagram, labels),
        }));
    }
    let params = serde_json::json!({
        "external": topo.num_external(),
        "three_point": topo.num_three_point(),
        "four_point": topo.num_four_point(),
    });
    let doc = serde_json::json!({
        "params": params.clone(),
        "normalization_factor": normalization,
        "expected_pairings": topo.expected_pairings(),
        "total_pairings": census.total_pairings,
        "distinct_exact": census.distinct_exact,
        "graphs": graphs,
    });

    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out_path.display()))?;
    provenance::write_sidecar(out_path, provenance::Payload::new(params))?;
    Ok(())
}
