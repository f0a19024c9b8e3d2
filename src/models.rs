//! # Models
//!
//! Value shapes returned by the Bible API. They are decoded straight from
//! response bodies and never mutated; ordering is whatever the server sent.

use serde::{Deserialize, Serialize};

/// One verse matched by a keyword search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

/// A verse inside a [`FullBookChapter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterVerse {
    pub verse: u32,
    pub text: String,
}

/// A chapter of a book with all its verses, as returned by `/books/{book}/all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullBookChapter {
    pub chapter: u32,
    pub verses: Vec<ChapterVerse>,
}

/// `{ "text": ... }` wrapper around a single verse's text.
#[derive(Debug, Deserialize)]
pub(crate) struct TextEnvelope {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_result_should_ignore_extra_fields() {
        let raw = json!({
            "id": 42,
            "book": "John",
            "chapter": 3,
            "verse": 16,
            "text": "For God so loved the world",
            "score": 0.9
        });
        let result: SearchResult = serde_json::from_value(raw).unwrap();
        assert_eq!(
            result,
            SearchResult {
                book: "John".to_string(),
                chapter: 3,
                verse: 16,
                text: "For God so loved the world".to_string(),
            }
        );
    }

    #[test]
    fn search_result_should_reject_missing_field() {
        let raw = json!({ "book": "John", "chapter": 3, "text": "..." });
        assert!(serde_json::from_value::<SearchResult>(raw).is_err());
    }

    #[test]
    fn full_book_chapter_should_keep_server_order() {
        let raw = json!({
            "chapter": 2,
            "verses": [
                { "verse": 3, "text": "c" },
                { "verse": 1, "text": "a" }
            ]
        });
        let chapter: FullBookChapter = serde_json::from_value(raw).unwrap();
        let order: Vec<u32> = chapter.verses.iter().map(|v| v.verse).collect();
        assert_eq!(order, vec![3, 1]);
    }

    #[test]
    fn text_envelope_should_expose_only_text() {
        let envelope: TextEnvelope =
            serde_json::from_str(r#"{"text":"In the beginning was the Word"}"#).unwrap();
        assert_eq!(envelope.text, "In the beginning was the Word");
    }
}
