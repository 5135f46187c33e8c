use serde::{Deserialize, Serialize};

/// One author entry as extracted upstream. The crawler already resolves the
/// hyperlinked-vs-plain-text name heuristic; here a missing name is just an
/// empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A publication record handed to the index builder. Every field defaults so
/// a sparse upstream record deserializes instead of failing; unknown fields
/// pass through `extra` untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "abstract", default)]
    pub summary: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub link: String,
    #[serde(rename = "publishedDate", default)]
    pub published_date: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Document {
    /// Concatenates the text-bearing fields (title, abstract, author names)
    /// into the string the index builder tokenizes. Fields are joined with
    /// spaces; missing fields contribute nothing.
    pub fn indexable_text(&self) -> String {
        let mut text = String::with_capacity(self.title.len() + self.summary.len() + 16);
        text.push_str(&self.title);
        text.push(' ');
        text.push_str(&self.summary);
        for author in &self.authors {
            text.push(' ');
            text.push_str(&author.name);
        }
        text
    }
}
