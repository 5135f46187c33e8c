use engine::load_documents;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_array_of_documents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("publications.json");
    fs::write(
        &path,
        r#"[
            {"title": "Trade policy", "abstract": "Tariffs.", "authors": [{"name": "A. Smith"}],
             "link": "https://example.org/1", "publishedDate": "2021-03-01"},
            {"title": "Labour markets"}
        ]"#,
    )
    .unwrap();

    let docs = load_documents(&path).unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].summary, "Tariffs.");
    assert_eq!(docs[0].authors[0].name, "A. Smith");
    assert_eq!(docs[0].published_date, "2021-03-01");
    // sparse second record filled in by defaults
    assert!(docs[1].summary.is_empty());
    assert!(docs[1].authors.is_empty());
}

#[test]
fn rejects_non_array_corpus() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("publications.json");
    fs::write(&path, r#"{"title": "a single object"}"#).unwrap();
    assert!(load_documents(&path).is_err());
}

#[test]
fn rejects_invalid_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("publications.json");
    fs::write(&path, "not json at all").unwrap();
    assert!(load_documents(&path).is_err());
}

#[test]
fn rejects_missing_file() {
    let dir = tempdir().unwrap();
    assert!(load_documents(dir.path().join("nope.json")).is_err());
}

#[test]
fn rejects_non_object_entries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("publications.json");
    fs::write(&path, r#"[{"title": "ok"}, "just a string"]"#).unwrap();
    assert!(load_documents(&path).is_err());
}
