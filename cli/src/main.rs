use anyhow::Result;
use clap::Parser;
use engine::{load_documents, IndexBuilder};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "pubdex")]
#[command(about = "Rank publications against a free-text query", long_about = None)]
struct Args {
    /// JSON corpus file (array of publication records)
    #[arg(long, default_value = "publications.json")]
    input: String,
    /// Query string
    #[arg(long)]
    query: String,
    /// Maximum number of results
    #[arg(long, default_value_t = 20)]
    top_k: usize,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let docs = load_documents(&args.input)?;
    let start = std::time::Instant::now();
    let index = IndexBuilder::build(docs);
    tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "index ready");

    let hits = index.search(&args.query, args.top_k);
    if hits.is_empty() {
        println!("No results for '{}'.", args.query);
        return Ok(());
    }

    println!("Found {} results for '{}':\n", hits.len(), args.query);
    for (rank, hit) in hits.iter().enumerate() {
        let doc = hit.document;
        let title = if doc.title.is_empty() { "Untitled" } else { doc.title.as_str() };
        println!("{}. {} (relevance: {:.2})", rank + 1, title, hit.score);
        if !doc.authors.is_empty() {
            let names: Vec<&str> = doc.authors.iter().map(|a| a.name.as_str()).collect();
            println!("   Authors: {}", names.join(", "));
        }
        if !doc.published_date.is_empty() {
            println!("   Published: {}", doc.published_date);
        }
        if !doc.link.is_empty() {
            println!("   {}", doc.link);
        }
        println!();
    }
    Ok(())
}
