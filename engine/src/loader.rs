use crate::document::Document;
use anyhow::{ensure, Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a scraped corpus from a JSON file containing an array of documents.
///
/// A missing file, invalid JSON, or a top-level value that is not an array
/// is a contract violation by the upstream scraper and surfaces as an
/// error. Individual documents with missing fields still load through serde
/// defaults.
pub fn load_documents<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("cannot open corpus file {}", path.display()))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("corpus file {} is not valid JSON", path.display()))?;
    ensure!(
        json.is_array(),
        "corpus file {} must contain a JSON array of documents",
        path.display()
    );
    let docs: Vec<Document> = serde_json::from_value(json)
        .with_context(|| format!("corpus file {} has malformed document entries", path.display()))?;
    tracing::info!(path = %path.display(), num_docs = docs.len(), "corpus loaded");
    Ok(docs)
}
