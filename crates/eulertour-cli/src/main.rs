use anyhow::Context;
use clap::{Parser, Subcommand};
use eulertour_lib::builder::parse::read_sequences;
use eulertour_lib::{
    assemble, classify, AssemblyConfiguration, ClassificationSummary, DeBruijnGraph, GraphBuilder,
    TourBuilder,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "eulertour")]
#[command(version = "0.1.0")]
#[command(about = "Eulerian genome assembly over de Bruijn multigraphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a genome from input reads
    Assemble {
        /// Input FASTA/FASTQ file
        #[arg(short, long)]
        input: PathBuf,

        /// K-mer length
        #[arg(short, long, default_value_t = eulertour_lib::constants::DEFAULT_K)]
        k: usize,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report graph statistics and Eulerian classification
    Stats {
        /// Input FASTA/FASTQ file
        #[arg(short, long)]
        input: PathBuf,

        /// K-mer length
        #[arg(short, long, default_value_t = eulertour_lib::constants::DEFAULT_K)]
        k: usize,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing: use RUST_LOG if set, otherwise default to info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Assemble { input, k, output } => assemble_command(input, k, output),
        Commands::Stats { input, k } => stats_command(input, k),
    }
}

fn build_graph(input: &Path, k: usize) -> anyhow::Result<DeBruijnGraph> {
    let config = AssemblyConfiguration::new(k)?;
    config.print();

    let sequences = read_sequences(input)?;
    info!("Read {} sequences from {}", sequences.len(), input.display());

    let graph = GraphBuilder::new(config)?
        .build_from_sequences(&sequences)
        .context("Failed to build de Bruijn graph")?;
    Ok(graph)
}

fn assemble_command(input: PathBuf, k: usize, output: Option<PathBuf>) -> anyhow::Result<()> {
    let graph = build_graph(&input, k)?;
    let summary = classify(&graph);
    log_summary(&summary);

    let tour = TourBuilder::new(&graph, &summary)
        .build()
        .context("Assembly aborted")?;
    let genome = assemble(&graph, &tour);
    info!("Assembled genome of {} bases", genome.len());

    match output {
        Some(path) => {
            fs::write(&path, format!(">assembly k={k}\n{genome}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote assembly to {}", path.display());
        }
        None => println!("{genome}"),
    }

    Ok(())
}

fn stats_command(input: PathBuf, k: usize) -> anyhow::Result<()> {
    let graph = build_graph(&input, k)?;
    let summary = classify(&graph);

    println!("nodes:         {}", graph.num_nodes());
    println!("edges:         {}", graph.num_edges());
    println!("balanced:      {}", summary.balanced_count);
    println!("semi-balanced: {}", summary.semi_balanced_count);
    println!("unbalanced:    {}", summary.neither_count);
    println!(
        "eulerian:      {}",
        if summary.has_eulerian_cycle() {
            "cycle"
        } else if summary.has_eulerian_path() {
            "path"
        } else {
            "no"
        }
    );
    if let Some(head) = summary.head {
        println!("head:          {}", graph.node(head));
    }
    if let Some(tail) = summary.tail {
        println!("tail:          {}", graph.node(tail));
    }

    // Full adjacency dump at debug level
    for id in graph.node_ids() {
        let successors: Vec<String> = graph
            .successors(id)
            .iter()
            .map(|&dst| graph.node(dst).to_string())
            .collect();
        if !successors.is_empty() {
            debug!("{} -> {}", graph.node(id), successors.join(", "));
        }
    }

    Ok(())
}

fn log_summary(summary: &ClassificationSummary) {
    info!(
        "Classification: {} balanced, {} semi-balanced, {} unbalanced",
        summary.balanced_count, summary.semi_balanced_count, summary.neither_count
    );
    if summary.has_eulerian_cycle() {
        info!("Graph has an Eulerian cycle");
    } else if summary.has_eulerian_path() {
        info!("Graph has an Eulerian path");
    }
}
