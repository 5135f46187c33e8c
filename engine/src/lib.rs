pub mod document;
pub mod index;
pub mod loader;
pub mod tokenizer;

pub use document::{Author, Document};
pub use index::{DocId, IndexBuilder, Posting, SearchHit, SearchIndex};
pub use loader::load_documents;
