use crate::document::Document;
use crate::tokenizer::normalize;
use std::collections::HashMap;

pub type DocId = u32;

/// One entry in a term's postings list: which document and how often the
/// term occurs in it. Lists grow in ingestion order and are never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: DocId,
    pub term_frequency: u32,
}

/// Accumulates documents into postings and frequency tables. This is the
/// only mutable phase of the index lifecycle; `finish` consumes the builder
/// and hands back a read-only [`SearchIndex`].
#[derive(Debug, Default)]
pub struct IndexBuilder {
    postings: HashMap<String, Vec<Posting>>,
    doc_frequencies: HashMap<String, u32>,
    docs: Vec<Document>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a full batch in one call.
    pub fn build(documents: Vec<Document>) -> SearchIndex {
        let mut builder = Self::new();
        for doc in documents {
            builder.add_document(doc);
        }
        builder.finish()
    }

    /// Ingest one document: assign it the next id, tokenize its title,
    /// abstract, and author names, and record term frequencies. A document
    /// with no indexable text is still stored and counted, it just
    /// contributes no postings. Returns the assigned id.
    pub fn add_document(&mut self, doc: Document) -> DocId {
        let doc_id = self.docs.len() as DocId;
        let terms = normalize(&doc.indexable_text());

        let mut tf_counts: HashMap<String, u32> = HashMap::new();
        for term in terms {
            *tf_counts.entry(term).or_insert(0) += 1;
        }

        // One posting and one df bump per distinct term, however often the
        // term repeats inside the document.
        for (term, tf) in tf_counts {
            self.postings
                .entry(term.clone())
                .or_default()
                .push(Posting { doc_id, term_frequency: tf });
            *self.doc_frequencies.entry(term).or_insert(0) += 1;
        }

        self.docs.push(doc);
        doc_id
    }

    /// Seal the index. No further documents can be added; queries go
    /// through the returned [`SearchIndex`].
    pub fn finish(self) -> SearchIndex {
        let total_docs = self.docs.len() as u32;
        tracing::info!(
            num_docs = total_docs,
            num_terms = self.postings.len(),
            "index build complete"
        );
        SearchIndex {
            postings: self.postings,
            doc_frequencies: self.doc_frequencies,
            docs: self.docs,
            total_docs,
        }
    }
}

/// A ranked search result borrowing its document from the index.
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    pub doc_id: DocId,
    pub score: f32,
    pub document: &'a Document,
}

/// The sealed inverted index: term -> postings, term -> document frequency,
/// the document store, and the corpus size. All methods take `&self`, so a
/// shared index can serve any number of concurrent queries.
#[derive(Debug)]
pub struct SearchIndex {
    postings: HashMap<String, Vec<Posting>>,
    doc_frequencies: HashMap<String, u32>,
    docs: Vec<Document>,
    total_docs: u32,
}

impl SearchIndex {
    /// Number of documents in the corpus.
    pub fn total_docs(&self) -> u32 {
        self.total_docs
    }

    /// Document frequency of a term, 0 if the term was never indexed.
    pub fn doc_frequency(&self, term: &str) -> u32 {
        self.doc_frequencies.get(term).copied().unwrap_or(0)
    }

    /// Postings list for a term, empty if the term was never indexed.
    pub fn postings(&self, term: &str) -> &[Posting] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over every indexed term, in arbitrary order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Look up a document by the id assigned at build time.
    pub fn document(&self, doc_id: DocId) -> Option<&Document> {
        self.docs.get(doc_id as usize)
    }

    /// TF-IDF ranked retrieval. The query runs through the same normalizer
    /// as the documents; each distinct query term contributes
    /// `tf * ln(N / df)` to every document it appears in. Terms absent from
    /// the index contribute nothing (the df == 0 case never divides), and a
    /// repeated query term is counted once. Documents that accumulate no
    /// positive score are excluded, so a term present in every document
    /// (idf = 0) cannot by itself make a document a hit.
    ///
    /// Results are sorted by descending score; equal scores break by
    /// ascending doc id, a determinism choice layered on top of the
    /// otherwise unspecified legacy tie order. At most `top_k` hits are
    /// returned; `top_k == 0` yields an empty result.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<SearchHit<'_>> {
        let mut query_terms = normalize(query);
        if query_terms.is_empty() {
            return Vec::new();
        }
        query_terms.sort_unstable();
        query_terms.dedup();

        let mut scores: HashMap<DocId, f32> = HashMap::new();
        for term in &query_terms {
            let Some(postings) = self.postings.get(term) else { continue };
            let df = self.doc_frequencies[term];
            let idf = ((self.total_docs as f32) / (df as f32)).ln();
            for posting in postings {
                *scores.entry(posting.doc_id).or_insert(0.0) +=
                    posting.term_frequency as f32 * idf;
            }
        }

        let mut ranked: Vec<(DocId, f32)> = scores
            .into_iter()
            .filter(|(_, score)| *score > 0.0)
            .collect();
        ranked.sort_unstable_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(top_k);

        tracing::debug!(query, hits = ranked.len(), "search complete");
        ranked
            .into_iter()
            .map(|(doc_id, score)| SearchHit {
                doc_id,
                score,
                document: &self.docs[doc_id as usize],
            })
            .collect()
    }
}
